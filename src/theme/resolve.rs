//! ThemeRef: typed key resolution with parent fallback.
//!
//! Every accessor follows the same contract: find the nearest theme in the
//! chain that holds the key, coerce its value, and fall back to the type
//! default when no theme holds it or the value is malformed. Accessors never
//! fail.
//!
//! Fonts, colors, and view, text label and navigation bar specifiers are
//! cached on the theme that owns the key. Everything else is recomputed on
//! each call.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use super::cache::CacheKey;
use super::config::ThemeSetConfig;
use super::node::{CacheCounts, Theme, ThemeId};
use super::set::ThemeSet;
use crate::adapter::ImageLoader;
use crate::coerce;
use crate::config::{Mapping, Value};
use crate::geometry::{EdgeInsets, Point, Size};
use crate::specifier::{
    AnimationSpecifier, DashedBorderSpecifier, Fields, NavigationBarSpecifier, TextLabelSpecifier,
    ViewSpecifier,
};
use crate::style::{
    AnimationCurve, Color, Font, KeyboardAppearance, Keyword, LineBreakMode, StatusBarStyle,
    TextAlignment, TextCaseTransform,
};

/// A resolving handle to one theme in a [`ThemeSet`]. Cheap to copy.
#[derive(Clone, Copy)]
pub struct ThemeRef<'a> {
    set: &'a ThemeSet,
    id: ThemeId,
    theme: &'a Theme,
}

/// Where a key was found.
struct Resolved<'a> {
    theme: &'a Theme,
    value: &'a Value,
}

impl<'a> Resolved<'a> {
    fn fields<'k>(&self, key: &'k str, config: &'k ThemeSetConfig) -> Option<Fields<'k>>
    where
        'a: 'k,
    {
        match self.value {
            Value::Map(map) => Some(Fields::new(map, key, config)),
            other => {
                log::debug!("theme key {key}: expected a mapping, found {}", other.kind());
                None
            }
        }
    }
}

impl fmt::Debug for ThemeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeRef").field("id", &self.id).field("name", &self.theme.name()).finish()
    }
}

impl<'a> ThemeRef<'a> {
    pub(crate) fn new(set: &'a ThemeSet, id: ThemeId) -> Option<Self> {
        let theme = set.theme(id)?;
        Some(Self { set, id, theme })
    }

    pub fn id(&self) -> ThemeId {
        self.id
    }

    pub fn name(&self) -> &'a str {
        self.theme.name()
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    pub fn set(&self) -> &'a ThemeSet {
        self.set
    }

    fn config(&self) -> &'a ThemeSetConfig {
        self.set.config()
    }

    /// The parent theme, if it is set and still in the set.
    pub fn parent(&self) -> Option<ThemeRef<'a>> {
        self.set.parent(self.id).and_then(|id| self.set.get(id))
    }

    // -- presence -----------------------------------------------------------

    /// Whether this theme holds `key` itself. Parents are not consulted.
    ///
    /// `key` may be a dotted path into nested mappings, as in every other
    /// lookup, so `"layout.gutter"` counts when `layout` holds `gutter`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.theme.mapping().lookup(key).is_some()
    }

    /// Whether this theme or any ancestor holds `key`.
    pub fn contains_or_inherits_key(&self, key: &str) -> bool {
        self.resolve(key).is_some()
    }

    fn resolve(&self, key: &str) -> Option<Resolved<'a>> {
        self.set.chain(self.id).find_map(|(_, theme)| {
            theme.mapping().lookup(key).map(|value| Resolved { theme, value })
        })
    }

    /// The raw value for `key`, from this theme or the nearest ancestor.
    pub fn value_for_key(&self, key: &str) -> Option<&'a Value> {
        self.resolve(key).map(|resolved| resolved.value)
    }

    /// The theme that supplies `key`: this one or the nearest ancestor holding it.
    pub fn theme_defining_key(&self, key: &str) -> Option<ThemeRef<'a>> {
        self.set
            .chain(self.id)
            .find(|(_, theme)| theme.mapping().lookup(key).is_some())
            .and_then(|(id, _)| self.set.get(id))
    }

    // -- scalars ------------------------------------------------------------

    pub fn bool_for_key(&self, key: &str) -> bool {
        coerce::bool_or_default(self.value_for_key(key), key)
    }

    pub fn string_for_key(&self, key: &str) -> String {
        coerce::string_or_default(self.value_for_key(key), key)
    }

    pub fn integer_for_key(&self, key: &str) -> i64 {
        coerce::integer_or_default(self.value_for_key(key), key)
    }

    pub fn float_for_key(&self, key: &str) -> f64 {
        coerce::f64_or_default(self.value_for_key(key), key)
    }

    /// A duration given in seconds.
    pub fn time_interval_for_key(&self, key: &str) -> Duration {
        coerce::duration_or_default(self.value_for_key(key), key)
    }

    // -- geometry -----------------------------------------------------------

    pub fn point_for_key(&self, key: &str) -> Point {
        coerce::point_or_default(self.value_for_key(key), key)
    }

    pub fn size_for_key(&self, key: &str) -> Size {
        coerce::size_or_default(self.value_for_key(key), key)
    }

    pub fn edge_insets_for_key(&self, key: &str) -> EdgeInsets {
        coerce::edge_insets_or_default(self.value_for_key(key), key)
    }

    // -- keywords -----------------------------------------------------------

    /// Any keyword enum; unrecognised or absent keywords give its default.
    pub fn keyword_for_key<K: Keyword>(&self, key: &str) -> K {
        coerce::keyword_or_default(self.value_for_key(key), key)
    }

    pub fn text_case_transform_for_key(&self, key: &str) -> TextCaseTransform {
        self.keyword_for_key(key)
    }

    pub fn text_alignment_for_key(&self, key: &str) -> TextAlignment {
        self.keyword_for_key(key)
    }

    pub fn line_break_mode_for_key(&self, key: &str) -> LineBreakMode {
        self.keyword_for_key(key)
    }

    pub fn status_bar_style_for_key(&self, key: &str) -> StatusBarStyle {
        self.keyword_for_key(key)
    }

    pub fn keyboard_appearance_for_key(&self, key: &str) -> KeyboardAppearance {
        self.keyword_for_key(key)
    }

    pub fn animation_curve_for_key(&self, key: &str) -> AnimationCurve {
        self.keyword_for_key(key)
    }

    // -- cached values ------------------------------------------------------

    /// Color for a `{hex, alpha}` mapping. Absent or malformed colors give
    /// the set's fallback color.
    pub fn color_for_key(&self, key: &str) -> Color {
        let fallback = self.config().fallback_color;
        match self.resolve(key) {
            None => fallback,
            Some(resolved) => resolved.theme.caches.colors.get_or_insert_with(CacheKey::plain(key), || {
                coerce::color_or(Some(resolved.value), key, fallback)
            }),
        }
    }

    pub fn font_for_key(&self, key: &str) -> Font {
        self.font_for_key_adjusted(key, 0.0)
    }

    /// Font for a `{name, size}` mapping with `size_adjustment` added to its size.
    ///
    /// Each adjustment is cached separately.
    pub fn font_for_key_adjusted(&self, key: &str, size_adjustment: f32) -> Font {
        let defaults = self.config().font_defaults();
        match self.resolve(key) {
            None => Font::system(defaults.effective_size(defaults.size, size_adjustment)),
            Some(resolved) => resolved.theme.caches.fonts.get_or_insert_with(
                CacheKey::adjusted(key, size_adjustment),
                || coerce::font_or_default(Some(resolved.value), size_adjustment, &defaults, key),
            ),
        }
    }

    // -- specifiers ---------------------------------------------------------

    pub fn view_specifier_for_key(&self, key: &str) -> Arc<ViewSpecifier> {
        let config = self.config();
        match self.resolve(key) {
            None => Arc::default(),
            Some(resolved) => resolved.theme.caches.view_specifiers.get_or_insert_with(
                CacheKey::plain(key),
                || {
                    let spec = resolved.fields(key, config).map(|f| ViewSpecifier::from_fields(&f));
                    Arc::new(spec.unwrap_or_default())
                },
            ),
        }
    }

    pub fn text_label_specifier_for_key(&self, key: &str) -> Arc<TextLabelSpecifier> {
        self.text_label_specifier_for_key_adjusted(key, 0.0)
    }

    /// Text label specifier whose font size has `size_adjustment` added.
    pub fn text_label_specifier_for_key_adjusted(
        &self,
        key: &str,
        size_adjustment: f32,
    ) -> Arc<TextLabelSpecifier> {
        let config = self.config();
        let fallback = || TextLabelSpecifier::from_mapping(&Mapping::new(), size_adjustment, config);
        match self.resolve(key) {
            None => Arc::new(fallback()),
            Some(resolved) => resolved.theme.caches.text_label_specifiers.get_or_insert_with(
                CacheKey::adjusted(key, size_adjustment),
                || {
                    let spec = resolved
                        .fields(key, config)
                        .map(|f| TextLabelSpecifier::from_fields(&f, size_adjustment));
                    Arc::new(spec.unwrap_or_else(fallback))
                },
            ),
        }
    }

    pub fn navigation_bar_specifier_for_key(&self, key: &str) -> Arc<NavigationBarSpecifier> {
        self.navigation_bar_specifier_for_key_adjusted(key, 0.0)
    }

    /// Navigation bar specifier whose label fonts have `size_adjustment` added.
    pub fn navigation_bar_specifier_for_key_adjusted(
        &self,
        key: &str,
        size_adjustment: f32,
    ) -> Arc<NavigationBarSpecifier> {
        let config = self.config();
        let fallback = || NavigationBarSpecifier::from_mapping(&Mapping::new(), size_adjustment, config);
        match self.resolve(key) {
            None => Arc::new(fallback()),
            Some(resolved) => resolved.theme.caches.navigation_bar_specifiers.get_or_insert_with(
                CacheKey::adjusted(key, size_adjustment),
                || {
                    let spec = resolved
                        .fields(key, config)
                        .map(|f| NavigationBarSpecifier::from_fields(&f, size_adjustment));
                    Arc::new(spec.unwrap_or_else(fallback))
                },
            ),
        }
    }

    pub fn animation_specifier_for_key(&self, key: &str) -> AnimationSpecifier {
        let config = self.config();
        self.resolve(key)
            .and_then(|resolved| resolved.fields(key, config))
            .map(|f| AnimationSpecifier::from_fields(&f))
            .unwrap_or_default()
    }

    pub fn dashed_border_specifier_for_key(&self, key: &str) -> DashedBorderSpecifier {
        let config = self.config();
        self.resolve(key)
            .and_then(|resolved| resolved.fields(key, config))
            .map(|f| DashedBorderSpecifier::from_fields(&f))
            .unwrap_or_default()
    }

    // -- images -------------------------------------------------------------

    /// Load the image named by the string at `key`. An empty name is no image.
    pub fn image_for_key<L: ImageLoader>(&self, key: &str, loader: &L) -> Option<L::Image> {
        let name = self.string_for_key(key);
        if name.is_empty() {
            return None;
        }
        let image = loader.load_image(&name);
        if image.is_none() {
            log::debug!("theme key {key}: image {name:?} could not be loaded");
        }
        image
    }

    // -- caches -------------------------------------------------------------

    /// Entry counts of this theme's own caches.
    pub fn cache_counts(&self) -> CacheCounts {
        self.theme.caches.counts()
    }

    /// Empty this theme's font cache. Parents and children are untouched.
    pub fn clear_font_cache(&self) {
        self.theme.caches.fonts.clear();
    }

    pub fn clear_color_cache(&self) {
        self.theme.caches.colors.clear();
    }

    pub fn clear_view_specifier_cache(&self) {
        self.theme.caches.view_specifiers.clear();
    }

    pub fn clear_text_label_specifier_cache(&self) {
        self.theme.caches.text_label_specifiers.clear();
    }

    pub fn clear_navigation_bar_specifier_cache(&self) {
        self.theme.caches.navigation_bar_specifiers.clear();
    }
}
