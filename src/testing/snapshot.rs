//! Plain-text renderings of resolved styles for snapshot assertions.

use crate::specifier::{NavigationBarSpecifier, TextLabelSpecifier, ViewSpecifier};

fn color_or_none(color: Option<crate::style::Color>) -> String {
    color.map_or_else(|| "none".to_owned(), |c| c.to_string())
}

/// Describe a text label specifier, one field per line.
pub fn describe_text_label(spec: &TextLabelSpecifier) -> String {
    let frame = spec.frame();
    format!(
        "font: {}\nframe: {},{} {}x{}{}\nlines: {}\nlayout: {:?} {:?} {:?}\ncolor: {}\nbackground: {}",
        spec.font(),
        frame.origin.x,
        frame.origin.y,
        frame.size.width,
        frame.size.height,
        if spec.size_to_fit() { " (fit)" } else { "" },
        spec.number_of_lines(),
        spec.alignment(),
        spec.line_break_mode(),
        spec.text_transform(),
        color_or_none(spec.color()),
        color_or_none(spec.background_color()),
    )
}

/// Describe a view specifier, one field per line.
pub fn describe_view(spec: &ViewSpecifier) -> String {
    let frame = spec.frame();
    let padding = spec.padding;
    format!(
        "frame: {},{} {}x{}\nbackground: {}\nhighlighted: {}\npadding: {} {} {} {}",
        frame.origin.x,
        frame.origin.y,
        frame.size.width,
        frame.size.height,
        color_or_none(spec.background_color),
        color_or_none(spec.highlighted_background_color),
        padding.top,
        padding.left,
        padding.bottom,
        padding.right,
    )
}

/// Describe a navigation bar specifier: bar fields, then both labels' fonts.
pub fn describe_navigation_bar(spec: &NavigationBarSpecifier) -> String {
    format!(
        "translucent: {}\nbar: {}\ntint: {}\npopover: {}\ntitle: {}\nbuttons: {}",
        spec.translucent,
        color_or_none(spec.bar_color),
        color_or_none(spec.tint_color),
        color_or_none(spec.popover_background_color),
        spec.title_label_specifier.font(),
        spec.buttons_label_specifier.font(),
    )
}
