//! Test support: recording fakes of the adapter traits and text renderings of
//! specifiers for snapshot assertions.
//!
//! Use the fakes to check what a specifier transferred onto a widget without a
//! real renderer.

pub mod recording;
pub mod snapshot;

pub use recording::{
    ImmediateAnimationRunner, LabelCall, NavigationBarCall, RecordingImageLoader, RecordingLabel,
    RecordingNavigationBar, RecordingView,
};
pub use snapshot::{describe_navigation_bar, describe_text_label, describe_view};
