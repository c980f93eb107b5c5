//! Renderer adapter: widget traits and the operations that style them.
//!
//! The core never creates or owns widgets. A renderer implements [`Label`],
//! [`View`] and [`NavigationBar`] for its own widget types, and these
//! functions transfer specifier data onto them.

pub mod animation;

pub use animation::{animate_with_specifier_key, AnimationRunner, TokioAnimationRunner};

use crate::geometry::Rect;
use crate::specifier::{
    AttributeKey, NavigationBarSpecifier, TextAttributes, TextLabelSpecifier, ViewSpecifier,
};
use crate::style::{Color, Font, LineBreakMode, TextAlignment};
use crate::theme::ThemeRef;

// ---------------------------------------------------------------------------
// Widget traits
// ---------------------------------------------------------------------------

/// A text label widget.
pub trait Label {
    fn set_text(&mut self, text: String);
    fn set_font(&mut self, font: &Font);
    fn set_text_alignment(&mut self, alignment: TextAlignment);
    fn set_line_break_mode(&mut self, mode: LineBreakMode);
    /// 0 means unlimited.
    fn set_number_of_lines(&mut self, lines: usize);
    fn set_text_color(&mut self, color: Color);
    fn set_background_color(&mut self, color: Color);
    /// Resize the label around its current text.
    fn size_to_fit(&mut self);
}

/// A plain view widget.
pub trait View {
    fn set_background_color(&mut self, color: Color);
}

/// A navigation bar widget.
pub trait NavigationBar {
    fn set_bar_color(&mut self, color: Color);
    fn set_tint_color(&mut self, color: Color);
    fn set_translucent(&mut self, translucent: bool);
    fn set_title_text_attributes(&mut self, attributes: TextAttributes);
    /// Attributes for bar button titles. With `container`, they apply only
    /// to bars hosted inside that container.
    fn set_button_text_attributes(&mut self, attributes: TextAttributes, container: Option<&str>);
}

/// Loads images by name.
pub trait ImageLoader {
    type Image;

    /// `None` when no image has that name.
    fn load_image(&self, name: &str) -> Option<Self::Image>;
}

// ---------------------------------------------------------------------------
// Applying specifiers
// ---------------------------------------------------------------------------

/// Style `label` with `spec`, setting its text (transformed) when given.
pub fn apply_text_label<L: Label + ?Sized>(spec: &TextLabelSpecifier, label: &mut L, text: Option<&str>) {
    if let Some(text) = text {
        label.set_text(spec.transform_text(text));
    }
    label.set_font(spec.font());
    label.set_text_alignment(spec.alignment());
    label.set_line_break_mode(spec.line_break_mode());
    label.set_number_of_lines(spec.number_of_lines());
    if let Some(color) = spec.color() {
        label.set_text_color(color);
    }
    if let Some(color) = spec.background_color() {
        label.set_background_color(color);
    }
    if spec.size_to_fit() {
        label.size_to_fit();
    }
}

/// Style `view` with `spec`.
pub fn apply_view<V: View + ?Sized>(spec: &ViewSpecifier, view: &mut V) {
    if let Some(color) = spec.background_color {
        view.set_background_color(color);
    }
}

/// Style `bar` with `spec`. Button attributes are scoped to `container` when given.
pub fn apply_to_navigation_bar<B: NavigationBar + ?Sized>(
    spec: &NavigationBarSpecifier,
    bar: &mut B,
    container: Option<&str>,
) {
    const TITLE_KEYS: [AttributeKey; 2] = [AttributeKey::Font, AttributeKey::ForegroundColor];

    if let Some(color) = spec.bar_color {
        bar.set_bar_color(color);
    }
    if let Some(color) = spec.tint_color {
        bar.set_tint_color(color);
    }
    bar.set_translucent(spec.translucent);
    bar.set_title_text_attributes(spec.title_label_specifier.attributes_for_keys(&TITLE_KEYS));
    bar.set_button_text_attributes(
        spec.buttons_label_specifier.attributes_for_keys(&TITLE_KEYS),
        container,
    );
}

// ---------------------------------------------------------------------------
// Theme conveniences
// ---------------------------------------------------------------------------

/// Build a label for the text label specifier at `key`.
///
/// `make` receives the specifier's frame and returns a fresh widget, which is
/// then styled and given `text`.
pub fn label_with_text<L: Label>(
    theme: &ThemeRef<'_>,
    text: &str,
    key: &str,
    size_adjustment: f32,
    make: impl FnOnce(Rect) -> L,
) -> L {
    let spec = theme.text_label_specifier_for_key_adjusted(key, size_adjustment);
    let mut label = make(spec.frame());
    apply_text_label(&spec, &mut label, Some(text));
    label
}

/// Build a view for the view specifier at `key`.
pub fn view_with_specifier_key<V: View>(
    theme: &ThemeRef<'_>,
    key: &str,
    make: impl FnOnce(Rect) -> V,
) -> V {
    let spec = theme.view_specifier_for_key(key);
    let mut view = make(spec.frame());
    apply_view(&spec, &mut view);
    view
}
