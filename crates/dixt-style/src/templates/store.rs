//! The template store: named size, shape, preset and spinner registries.

use std::collections::HashMap;

use serde::Deserialize;

use super::source::{TemplateSource, TemplateSources};
use super::symbols::SymbolSet;
use crate::error::TemplateLoadError;
use crate::style::StyleProperties;
use crate::types::{Color, FontValue};

static EMPTY_LAYER: StyleProperties = StyleProperties::EMPTY;

/// Registries parsed from a button document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonTemplates {
    /// Size templates (`SIZES`).
    pub sizes: HashMap<String, StyleProperties>,
    /// Shape templates (`FORMATS`).
    pub shapes: HashMap<String, StyleProperties>,
    /// Preset templates (`PRESETS`).
    pub presets: HashMap<String, StyleProperties>,
}

#[derive(Debug, Deserialize)]
struct ButtonDocument {
    #[serde(rename = "SIZES", default)]
    sizes: HashMap<String, StyleProperties>,
    #[serde(rename = "FORMATS", default)]
    formats: HashMap<String, StyleProperties>,
    #[serde(rename = "PRESETS", default)]
    presets: HashMap<String, StyleProperties>,
}

impl ButtonTemplates {
    /// Default text color given to size templates that do not set one.
    pub fn default_text_color() -> Color {
        Color::pair("white", "white")
    }

    /// Default disabled text color given to size templates that do not set one.
    pub fn default_text_color_disabled() -> Color {
        Color::pair("#A9A9A9", "#5A5A5A")
    }

    /// Parse a button document.
    ///
    /// Missing sections are empty. Every size template ends up with a
    /// deferred font (14/normal unless the template says otherwise) and with
    /// both text colors set.
    pub fn parse(name: &str, text: &str) -> Result<Self, TemplateLoadError> {
        let document: ButtonDocument =
            serde_json::from_str(text).map_err(|e| TemplateLoadError::parse(name, e))?;

        let mut sizes = document.sizes;
        for size in sizes.values_mut() {
            size.font
                .get_or_insert_with(|| FontValue::Deferred(Default::default()));
            size.text_color.get_or_insert_with(Self::default_text_color);
            size.text_color_disabled
                .get_or_insert_with(Self::default_text_color_disabled);
        }

        Ok(Self {
            sizes,
            shapes: document.formats,
            presets: document.presets,
        })
    }
}

/// Named spinner symbol sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpinnerTemplates {
    sets: HashMap<String, SymbolSet>,
}

impl SpinnerTemplates {
    /// Parse a spinner document. Empty symbol lists fail the parse.
    pub fn parse(name: &str, text: &str) -> Result<Self, TemplateLoadError> {
        let document: HashMap<String, Vec<String>> =
            serde_json::from_str(text).map_err(|e| TemplateLoadError::parse(name, e))?;

        let mut sets = HashMap::with_capacity(document.len());
        for (set_name, symbols) in document {
            let Some(set) = SymbolSet::new(symbols) else {
                return Err(TemplateLoadError::invalid(
                    name,
                    format!("symbol set '{set_name}' is empty"),
                ));
            };
            sets.insert(set_name, set);
        }

        Ok(Self { sets })
    }

    pub fn get(&self, name: &str) -> Option<&SymbolSet> {
        self.sets.get(name)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }
}

/// Owned registries of button and spinner templates.
///
/// A store starts empty (or from [`TemplateStore::builtin`]) and only changes
/// through [`load`](Self::load) and [`reload`](Self::reload). Lookups never
/// load anything and never fail: unknown names give an empty layer.
///
/// # Example
///
/// ```
/// use dixt_style::prelude::*;
///
/// let mut store = TemplateStore::new();
/// store.load(TemplateSources::new(
///     TemplateSource::inline("buttons", r#"{"SIZES": {"default": {"height": 32}}}"#),
///     TemplateSource::inline("spinners", r#"{"classic": ["|", "/", "-", "\\"]}"#),
/// ))?;
///
/// assert_eq!(store.lookup_size("default").height, Some(32));
/// assert!(store.lookup_size("huge").is_empty());
/// # Ok::<(), dixt_style::TemplateLoadError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    buttons: ButtonTemplates,
    spinners: SpinnerTemplates,
    /// Sources of the last successful load, used by `reload`.
    sources: Option<TemplateSources>,
}

impl TemplateStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from the templates embedded in this crate.
    pub fn builtin() -> Result<Self, TemplateLoadError> {
        Self::from_sources(TemplateSources::builtin())
    }

    /// Create a store and load it from `sources`.
    pub fn from_sources(sources: TemplateSources) -> Result<Self, TemplateLoadError> {
        let mut store = Self::new();
        store.load(sources)?;
        Ok(store)
    }

    /// Replace all registries with the contents of `sources`.
    ///
    /// Both documents are read and parsed before anything is replaced; on
    /// error the store keeps its previous registries and sources.
    pub fn load(&mut self, sources: TemplateSources) -> Result<(), TemplateLoadError> {
        let (buttons, spinners) = Self::parse_sources(&sources)?;

        tracing::info!(
            target: "dixt_style::templates",
            buttons = %sources.buttons.name(),
            spinners = %sources.spinners.name(),
            sizes = buttons.sizes.len(),
            shapes = buttons.shapes.len(),
            presets = buttons.presets.len(),
            spinner_sets = spinners.len(),
            "templates loaded"
        );

        self.buttons = buttons;
        self.spinners = spinners;
        self.sources = Some(sources);
        Ok(())
    }

    /// Load again from the sources of the last successful load.
    ///
    /// Does nothing if the store was never loaded.
    pub fn reload(&mut self) -> Result<(), TemplateLoadError> {
        let Some(sources) = self.sources.clone() else {
            tracing::debug!(target: "dixt_style::templates", "reload requested on a never-loaded store");
            return Ok(());
        };
        self.load(sources)
    }

    fn parse_sources(
        sources: &TemplateSources,
    ) -> Result<(ButtonTemplates, SpinnerTemplates), TemplateLoadError> {
        let buttons = Self::parse_with(&sources.buttons, ButtonTemplates::parse)?;
        let spinners = Self::parse_with(&sources.spinners, SpinnerTemplates::parse)?;
        Ok((buttons, spinners))
    }

    fn parse_with<T>(
        source: &TemplateSource,
        parse: fn(&str, &str) -> Result<T, TemplateLoadError>,
    ) -> Result<T, TemplateLoadError> {
        let result = source
            .read()
            .and_then(|text| parse(&source.name(), &text));
        if let Err(err) = &result {
            tracing::warn!(target: "dixt_style::templates", error = %err, "template source rejected");
        }
        result
    }

    /// Size template for `name`, or an empty layer.
    pub fn lookup_size(&self, name: &str) -> &StyleProperties {
        Self::lookup(&self.buttons.sizes, "size", name)
    }

    /// Shape template for `name`, or an empty layer.
    pub fn lookup_shape(&self, name: &str) -> &StyleProperties {
        Self::lookup(&self.buttons.shapes, "shape", name)
    }

    /// Preset template for `name`, or an empty layer.
    pub fn lookup_preset(&self, name: &str) -> &StyleProperties {
        Self::lookup(&self.buttons.presets, "preset", name)
    }

    fn lookup<'a>(
        registry: &'a HashMap<String, StyleProperties>,
        kind: &str,
        name: &str,
    ) -> &'a StyleProperties {
        registry.get(name).unwrap_or_else(|| {
            tracing::debug!(target: "dixt_style::templates", kind, name, "unknown template, using empty layer");
            &EMPTY_LAYER
        })
    }

    /// Symbol set for `name`.
    ///
    /// Unknown names give the built-in `| / - \` sequence, whatever the
    /// store's own `classic` set holds.
    pub fn spinner_symbols(&self, name: &str) -> SymbolSet {
        self.spinners.get(name).cloned().unwrap_or_else(|| {
            tracing::debug!(target: "dixt_style::templates", name, "unknown spinner set, using built-in symbols");
            SymbolSet::classic()
        })
    }

    pub fn buttons(&self) -> &ButtonTemplates {
        &self.buttons
    }

    pub fn spinners(&self) -> &SpinnerTemplates {
        &self.spinners
    }

    /// Sources of the last successful load.
    pub fn sources(&self) -> Option<&TemplateSources> {
        self.sources.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FontSpec, FontWeight};

    const BUTTONS: &str = r##"{
        "SIZES": {
            "default": {"height": 32, "font": {"size": 14, "weight": "normal"}},
            "tiny": {"height": 20}
        },
        "FORMATS": {"rounded": {"corner_radius": 8}},
        "PRESETS": {"danger": {"fill_color": "#FF0000"}}
    }"##;

    const SPINNERS: &str = r#"{"classic": ["|", "/", "-", "\\"], "dots": [".", "..", "..."]}"#;

    fn sources(buttons: &str, spinners: &str) -> TemplateSources {
        TemplateSources::new(
            TemplateSource::inline("buttons", buttons),
            TemplateSource::inline("spinners", spinners),
        )
    }

    fn loaded() -> TemplateStore {
        TemplateStore::from_sources(sources(BUTTONS, SPINNERS)).unwrap()
    }

    #[test]
    fn lookups_return_templates() {
        let store = loaded();
        assert_eq!(store.lookup_size("default").height, Some(32));
        assert_eq!(store.lookup_shape("rounded").corner_radius, Some(8));
        assert_eq!(
            store.lookup_preset("danger").fill_color,
            Some(Color::new("#FF0000"))
        );
    }

    #[test]
    fn unknown_names_give_empty_layers() {
        let store = loaded();
        assert!(store.lookup_size("huge").is_empty());
        assert!(store.lookup_shape("hexagon").is_empty());
        assert!(store.lookup_preset("").is_empty());
    }

    #[test]
    fn sizes_are_normalized() {
        let store = loaded();
        let tiny = store.lookup_size("tiny");
        assert_eq!(tiny.font, Some(FontValue::Deferred(FontSpec::default())));
        assert_eq!(tiny.text_color, Some(ButtonTemplates::default_text_color()));
        assert_eq!(
            tiny.text_color_disabled,
            Some(ButtonTemplates::default_text_color_disabled())
        );

        let default = store.lookup_size("default");
        assert_eq!(default.font, Some(FontValue::deferred(14, FontWeight::Normal)));
    }

    #[test]
    fn missing_sections_are_empty() {
        let store = TemplateStore::from_sources(sources("{}", "{}")).unwrap();
        assert!(store.buttons().sizes.is_empty());
        assert!(store.buttons().presets.is_empty());
        assert!(store.spinners().is_empty());
    }

    #[test]
    fn failed_load_keeps_previous_registries() {
        let mut store = loaded();
        let before = store.buttons().clone();

        let err = store
            .load(sources(r#"{"SIZES": {"default": {"height": 64}}}"#, "not json"))
            .unwrap_err();
        assert_eq!(err.source_name(), "spinners");
        assert_eq!(store.buttons(), &before);
        assert_eq!(store.lookup_size("default").height, Some(32));
        assert_eq!(store.sources().unwrap().spinners, TemplateSource::inline("spinners", SPINNERS));
    }

    #[test]
    fn malformed_button_document_names_source() {
        let err = TemplateStore::from_sources(sources(r#"{"SIZES": []}"#, SPINNERS)).unwrap_err();
        assert!(matches!(err, TemplateLoadError::Parse { .. }));
        assert_eq!(err.source_name(), "buttons");
    }

    #[test]
    fn fill_color_key_and_alias_fail_load() {
        let buttons = r##"{"PRESETS": {"danger": {"fg_color": "#FF0000", "fill_color": "#00FF00"}}}"##;
        let mut store = loaded();
        let err = store.load(sources(buttons, SPINNERS)).unwrap_err();

        assert!(matches!(err, TemplateLoadError::Parse { .. }));
        assert_eq!(err.source_name(), "buttons");
        assert!(err.to_string().contains("duplicate field"), "{err}");
        assert_eq!(store.lookup_preset("danger").fill_color, Some(Color::new("#FF0000")));
    }

    #[test]
    fn empty_symbol_set_fails_load() {
        let err = TemplateStore::from_sources(sources(BUTTONS, r#"{"none": []}"#)).unwrap_err();
        assert!(matches!(err, TemplateLoadError::Invalid { .. }));
        assert_eq!(err.source_name(), "spinners");
    }

    #[test]
    fn spinner_fallbacks() {
        let store = loaded();
        assert_eq!(store.spinner_symbols("dots").len(), 3);
        assert_eq!(store.spinner_symbols("missing"), SymbolSet::classic());

        let bare = TemplateStore::from_sources(sources(BUTTONS, r#"{"dots": ["."]}"#)).unwrap();
        assert_eq!(bare.spinner_symbols("missing"), SymbolSet::classic());
    }

    #[test]
    fn unknown_spinner_ignores_custom_classic() {
        let store =
            TemplateStore::from_sources(sources(BUTTONS, r#"{"classic": ["A", "B"]}"#)).unwrap();
        assert_eq!(store.spinner_symbols("classic").first(), "A");

        let fallback = store.spinner_symbols("nope");
        assert_eq!(fallback.iter().collect::<Vec<_>>(), vec!["|", "/", "-", "\\"]);
    }

    #[test]
    fn unreadable_source_fails_load() {
        let mut store = loaded();
        let err = store
            .load(TemplateSources::new(
                TemplateSource::file("/nonexistent/dixt/default.json"),
                TemplateSource::inline("spinners", SPINNERS),
            ))
            .unwrap_err();
        assert!(matches!(err, TemplateLoadError::Io { .. }));
        assert_eq!(store.lookup_size("default").height, Some(32));
    }

    #[test]
    fn reload_without_sources_is_noop() {
        let mut store = TemplateStore::new();
        assert!(store.reload().is_ok());
        assert!(store.lookup_size("default").is_empty());
    }

    #[test]
    fn builtin_templates_parse() {
        let store = TemplateStore::builtin().unwrap();
        assert_eq!(store.lookup_size("default").height, Some(32));
        assert_eq!(store.lookup_shape("rounded").corner_radius, Some(8));
        assert!(store.lookup_preset("danger").fill_color.is_some());
        assert_eq!(store.spinner_symbols("classic"), SymbolSet::classic());
    }
}
