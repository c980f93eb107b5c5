//! Recording fakes of the adapter traits.
//!
//! Each fake records the calls made on it so tests can assert on exactly what
//! a specifier transferred.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::adapter::{AnimationRunner, ImageLoader, Label, NavigationBar, View};
use crate::geometry::{Rect, Size};
use crate::specifier::{AnimationSpecifier, TextAttributes};
use crate::style::{Color, Font, LineBreakMode, TextAlignment};

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// One call made on a [`RecordingLabel`].
#[derive(Debug, Clone, PartialEq)]
pub enum LabelCall {
    Text(String),
    Font(Font),
    Alignment(TextAlignment),
    LineBreakMode(LineBreakMode),
    NumberOfLines(usize),
    TextColor(Color),
    BackgroundColor(Color),
    SizeToFit,
}

/// A label that records every call and keeps the resulting state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingLabel {
    pub frame: Rect,
    pub text: Option<String>,
    pub font: Option<Font>,
    pub text_color: Option<Color>,
    pub background_color: Option<Color>,
    pub calls: Vec<LabelCall>,
}

impl RecordingLabel {
    pub fn new(frame: Rect) -> Self {
        Self { frame, ..Self::default() }
    }
}

impl Label for RecordingLabel {
    fn set_text(&mut self, text: String) {
        self.text = Some(text.clone());
        self.calls.push(LabelCall::Text(text));
    }

    fn set_font(&mut self, font: &Font) {
        self.font = Some(font.clone());
        self.calls.push(LabelCall::Font(font.clone()));
    }

    fn set_text_alignment(&mut self, alignment: TextAlignment) {
        self.calls.push(LabelCall::Alignment(alignment));
    }

    fn set_line_break_mode(&mut self, mode: LineBreakMode) {
        self.calls.push(LabelCall::LineBreakMode(mode));
    }

    fn set_number_of_lines(&mut self, lines: usize) {
        self.calls.push(LabelCall::NumberOfLines(lines));
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = Some(color);
        self.calls.push(LabelCall::TextColor(color));
    }

    fn set_background_color(&mut self, color: Color) {
        self.background_color = Some(color);
        self.calls.push(LabelCall::BackgroundColor(color));
    }

    /// Sizes the frame to one cell per character at the font's size.
    fn size_to_fit(&mut self) {
        let size = self.font.as_ref().map_or(0.0, |font| font.size);
        let chars = self.text.as_deref().map_or(0, |text| text.chars().count());
        self.frame.size = Size::new(chars as f32 * size * 0.5, size);
        self.calls.push(LabelCall::SizeToFit);
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// A view that keeps its frame and background.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingView {
    pub frame: Rect,
    pub background_color: Option<Color>,
}

impl RecordingView {
    pub fn new(frame: Rect) -> Self {
        Self { frame, background_color: None }
    }
}

impl View for RecordingView {
    fn set_background_color(&mut self, color: Color) {
        self.background_color = Some(color);
    }
}

// ---------------------------------------------------------------------------
// NavigationBar
// ---------------------------------------------------------------------------

/// One call made on a [`RecordingNavigationBar`].
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationBarCall {
    BarColor(Color),
    TintColor(Color),
    Translucent(bool),
    TitleAttributes(TextAttributes),
    ButtonAttributes(TextAttributes, Option<String>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingNavigationBar {
    pub calls: Vec<NavigationBarCall>,
}

impl NavigationBar for RecordingNavigationBar {
    fn set_bar_color(&mut self, color: Color) {
        self.calls.push(NavigationBarCall::BarColor(color));
    }

    fn set_tint_color(&mut self, color: Color) {
        self.calls.push(NavigationBarCall::TintColor(color));
    }

    fn set_translucent(&mut self, translucent: bool) {
        self.calls.push(NavigationBarCall::Translucent(translucent));
    }

    fn set_title_text_attributes(&mut self, attributes: TextAttributes) {
        self.calls.push(NavigationBarCall::TitleAttributes(attributes));
    }

    fn set_button_text_attributes(&mut self, attributes: TextAttributes, container: Option<&str>) {
        self.calls.push(NavigationBarCall::ButtonAttributes(attributes, container.map(str::to_owned)));
    }
}

// ---------------------------------------------------------------------------
// ImageLoader
// ---------------------------------------------------------------------------

/// An image loader that knows a fixed set of names and records every request.
///
/// Images are represented by their names.
#[derive(Debug, Default)]
pub struct RecordingImageLoader {
    available: HashSet<String>,
    requests: Mutex<Vec<String>>,
}

impl RecordingImageLoader {
    pub fn new(available: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { available: available.into_iter().map(Into::into).collect(), requests: Mutex::default() }
    }

    /// Names requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl ImageLoader for RecordingImageLoader {
    type Image = String;

    fn load_image(&self, name: &str) -> Option<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(name.to_owned());
        }
        self.available.contains(name).then(|| name.to_owned())
    }
}

// ---------------------------------------------------------------------------
// AnimationRunner
// ---------------------------------------------------------------------------

/// A runner that runs the body and completes immediately, recording each spec.
#[derive(Debug, Clone, Default)]
pub struct ImmediateAnimationRunner {
    specs: Arc<Mutex<Vec<AnimationSpecifier>>>,
}

impl ImmediateAnimationRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Specifiers run so far, in order.
    pub fn specs(&self) -> Vec<AnimationSpecifier> {
        self.specs.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl AnimationRunner for ImmediateAnimationRunner {
    fn run_animation<B, C>(&self, spec: AnimationSpecifier, body: B, on_complete: C)
    where
        B: FnOnce() + Send + 'static,
        C: FnOnce(bool) + Send + 'static,
    {
        if let Ok(mut specs) = self.specs.lock() {
            specs.push(spec);
        }
        body();
        on_complete(true);
    }
}
