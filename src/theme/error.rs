//! Theme registry errors.

use super::node::ThemeId;

/// Errors from building or re-linking a [`ThemeSet`](super::ThemeSet).
///
/// Typed accessors never fail; these only come from registry mutation and
/// document loading.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("no theme with id {0:?}")]
    UnknownTheme(ThemeId),
    #[error("making {parent:?} the parent of {child:?} would create an inheritance cycle")]
    InheritanceCycle { child: String, parent: String },
    #[error("invalid theme document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("theme document root must be an object of theme names, found {0}")]
    NotAMapping(&'static str),
}
