//! Activity parameter rendering.
//!
//! A renderer turns the raw parameters of one activity into display strings:
//! file paths become links into the files app, user ids get an avatar, and
//! everything else is optionally emphasized. Every branch that emits markup
//! escapes the stored value first.

use crate::classify::{Classification, ExtensionRegistry, ParameterType};
use crate::config::EngineConfig;
use crate::l10n::Catalog;
use crate::path::DirectoryLookup;
use anyhow::Result;
use serde::Serialize;

mod list;
mod param;
mod subject;

pub use list::{LIST_LIMIT, LIST_VISIBLE_WHEN_TRUNCATED};
pub use subject::NotificationType;

/// Per-call rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderFlags {
    /// Show file parameters as their basename, with the folder as tooltip.
    pub strip_path: bool,
    /// Emit rich markup instead of plain text.
    pub highlight: bool,
}

impl RenderFlags {
    pub const PLAIN: RenderFlags = RenderFlags {
        strip_path: false,
        highlight: false,
    };

    pub fn new(strip_path: bool, highlight: bool) -> Self {
        Self {
            strip_path,
            highlight,
        }
    }
}

/// Formats parameters against one deployment and one locale.
pub struct ParameterRenderer {
    config: EngineConfig,
    lookup: Box<dyn DirectoryLookup + Send + Sync>,
    catalog: Catalog,
}

impl ParameterRenderer {
    /// Renderer whose directory lookup follows `config.files_root`.
    pub fn new(config: EngineConfig, catalog: Catalog) -> Self {
        let lookup = config.directory_lookup();
        Self {
            config,
            lookup,
            catalog,
        }
    }

    /// Load the configured catalog as well.
    pub fn from_config(config: EngineConfig) -> Result<Self> {
        let catalog = config.catalog()?;
        Ok(Self::new(config, catalog))
    }

    pub fn with_lookup(mut self, lookup: impl DirectoryLookup + Send + Sync + 'static) -> Self {
        self.lookup = Box::new(lookup);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Swap the locale used by subsequent calls.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    /// Render every parameter; output positions match input positions.
    pub fn format<S: AsRef<str>>(
        &self,
        params: &[S],
        classification: Option<&Classification>,
        flags: RenderFlags,
    ) -> Vec<String> {
        params
            .iter()
            .enumerate()
            .map(|(position, value)| {
                let kind = classification
                    .map(|map| map.get(position))
                    .unwrap_or_default();
                self.format_one(value.as_ref(), kind, flags)
            })
            .collect()
    }

    /// Classify with `registry` and render.
    pub fn format_classified<S: AsRef<str>>(
        &self,
        registry: &ExtensionRegistry,
        module: &str,
        subject: &str,
        params: &[S],
        flags: RenderFlags,
    ) -> Vec<String> {
        let classification = registry.classify(module, subject);
        self.format(params, classification.as_ref(), flags)
    }

    pub fn format_one(&self, value: &str, kind: ParameterType, flags: RenderFlags) -> String {
        match kind {
            ParameterType::Unclassified => self.plain_param(value, flags),
            ParameterType::File => self.file_param(value, flags),
            ParameterType::Username => self.user_param(value, flags),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn renderer() -> ParameterRenderer {
        ParameterRenderer::new(EngineConfig::default(), Catalog::source("en"))
    }

    #[test]
    fn empty_params_render_empty() {
        let out = renderer().format::<&str>(&[], None, RenderFlags::new(true, true));
        assert!(out.is_empty());
    }

    #[test]
    fn unclassified_is_verbatim_or_emphasized() {
        let renderer = renderer();
        let params = ["/foo/bar.file", "a<b"];
        assert_eq!(
            renderer.format(&params, None, RenderFlags::new(true, false)),
            vec!["/foo/bar.file", "a<b"]
        );
        assert_eq!(
            renderer.format(&params, None, RenderFlags::new(false, true)),
            vec!["<strong>/foo/bar.file</strong>", "<strong>a&lt;b</strong>"]
        );
    }

    #[test]
    fn classification_past_the_end_is_inert() {
        let map = Classification::new().with(3, ParameterType::File);
        assert_eq!(
            renderer().format(
                &["/foo/bar.file"],
                Some(&map),
                RenderFlags::new(true, false)
            ),
            vec!["/foo/bar.file"]
        );
    }

    #[test]
    fn format_classified_uses_registry() {
        let registry = ExtensionRegistry::builtin();
        let out = renderer().format_classified(
            &registry,
            "files",
            "shared_with_by",
            &["/docs/a.txt", "bob"],
            RenderFlags::new(true, false),
        );
        assert_eq!(out, vec!["a.txt", "bob"]);

        let unknown = renderer().format_classified(
            &registry,
            "calendar",
            "shared_with_by",
            &["/docs/a.txt"],
            RenderFlags::new(true, false),
        );
        assert_eq!(unknown, vec!["/docs/a.txt"]);
    }

    #[test]
    fn from_config_loads_the_configured_language() {
        let config = EngineConfig {
            language: "de".to_string(),
            ..EngineConfig::default()
        };
        let renderer = ParameterRenderer::from_config(config).unwrap();
        assert_eq!(renderer.catalog().language, "de");
    }

    #[test]
    fn catalog_can_be_swapped() {
        let mut renderer = renderer();
        let map = Classification::new().with(0, ParameterType::Username);
        assert_eq!(
            renderer.format(&[""], Some(&map), RenderFlags::PLAIN),
            vec!["\"remote user\""]
        );
        renderer.set_catalog(Catalog::builtin("de").unwrap().unwrap());
        assert_eq!(renderer.catalog().language, "de");
        assert_eq!(
            renderer.format(&[""], Some(&map), RenderFlags::PLAIN),
            vec!["\"Entfernter Benutzer\""]
        );
    }
}
