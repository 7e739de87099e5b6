use super::{ParameterRenderer, RenderFlags};
use crate::classify::ExtensionRegistry;
use anyhow::{bail, Result};
use serde::Serialize;

/// One notification type as offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationType {
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    /// Localized description; may carry emphasis markup from the catalog.
    pub description: String,
}

impl ParameterRenderer {
    /// Render the full activity sentence for `(module, subject)`.
    ///
    /// Returns `None` when no extension provides a template for the subject.
    pub fn render_subject<S: AsRef<str>>(
        &self,
        registry: &ExtensionRegistry,
        module: &str,
        subject: &str,
        params: &[S],
        flags: RenderFlags,
    ) -> Option<String> {
        let template = registry.subject_template(module, subject)?;
        let rendered = self.format_classified(registry, module, subject, params, flags);
        let args: Vec<&str> = rendered.iter().map(String::as_str).collect();
        Some(self.catalog.t(template, &args))
    }

    /// Every registered notification type with its icon and localized
    /// description, optionally narrowed by an activity filter.
    ///
    /// A filter no extension accepts is an error. A valid filter that no
    /// extension narrows keeps every type.
    pub fn notification_types(
        &self,
        registry: &ExtensionRegistry,
        filter: Option<&str>,
    ) -> Result<Vec<NotificationType>> {
        let declared = registry.notification_types();
        let kept = match filter {
            None => None,
            Some(filter) if !registry.is_filter_valid(filter) => {
                bail!("unknown activity filter {filter:?}")
            }
            Some(filter) => {
                let kinds: Vec<&str> = declared.iter().map(|(kind, _)| *kind).collect();
                registry.filter_types(&kinds, filter)
            }
        };
        Ok(declared
            .into_iter()
            .filter(|(kind, _)| match &kept {
                Some(kept) => kept.iter().any(|k| k == kind),
                None => true,
            })
            .map(|(kind, description)| NotificationType {
                kind: kind.to_string(),
                icon: registry.type_icon(kind),
                description: self.catalog.t(description, &[]),
            })
            .collect())
    }
}
