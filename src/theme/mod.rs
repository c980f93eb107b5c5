//! Themes: raw configuration, parent links, typed resolution, caches.

pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod node;
pub mod resolve;
pub mod set;

pub use cache::{Cache, CacheKey};
pub use config::ThemeSetConfig;
pub use error::ThemeError;
pub use node::{CacheCounts, Theme, ThemeCaches, ThemeId};
pub use resolve::ThemeRef;
pub use set::ThemeSet;
