use super::{ParameterRenderer, RenderFlags};
use crate::classify::ParameterType;
use crate::markup::{anchor, avatar, escape_html, strong, LinkTarget, Markup};
use crate::path;

const CLASS_FILENAME: &str = "filename";
const CLASS_FILENAME_TOOLTIP: &str = "filename tooltip";

impl ParameterRenderer {
    pub(super) fn plain_param(&self, value: &str, flags: RenderFlags) -> String {
        if flags.highlight {
            strong(&Markup::text(value)).into_string()
        } else {
            value.to_string()
        }
    }

    pub(super) fn file_param(&self, value: &str, flags: RenderFlags) -> String {
        let desc = path::resolve(value, self.lookup.as_ref());
        // Top-level entries have no folder to show in a tooltip.
        let tooltip = flags.strip_path && !desc.containing_dir.is_empty();
        let display = if flags.strip_path {
            desc.basename.as_str()
        } else {
            desc.normalized.as_str()
        };

        if !flags.highlight {
            return escape_html(display);
        }

        let base = self.config.files_link_base();
        let target = if desc.is_directory {
            let dir = format!("/{}", desc.normalized);
            LinkTarget::new(&base, &[("dir", dir.as_str())])
        } else {
            let dir = format!("/{}", desc.containing_dir);
            LinkTarget::new(
                &base,
                &[("dir", dir.as_str()), ("scrollto", desc.basename.as_str())],
            )
        };

        let body = Markup::text(display);
        if tooltip {
            let title = Markup::text(&self.catalog.t("in %s", &[desc.containing_dir.as_str()]));
            anchor(&target, CLASS_FILENAME_TOOLTIP, Some(&title), &body).into_string()
        } else {
            anchor(&target, CLASS_FILENAME, None, &body).into_string()
        }
    }

    pub(super) fn user_param(&self, value: &str, flags: RenderFlags) -> String {
        if value.is_empty() {
            let placeholder = Markup::trusted(format!(
                "\"{}\"",
                escape_html(&self.catalog.t("remote user", &[]))
            ));
            return if flags.highlight {
                strong(&placeholder).into_string()
            } else {
                placeholder.into_string()
            };
        }

        let display = Markup::text(self.config.display_name(value));
        if !flags.highlight {
            return display.into_string();
        }
        let mut out = if self.config.enable_avatars {
            avatar(value)
        } else {
            Markup::default()
        };
        out.push(&strong(&display));
        out.into_string()
    }

    /// Unescaped text of a parameter, for tooltips listing hidden items.
    pub(super) fn plain_text(&self, value: &str, kind: ParameterType) -> String {
        match kind {
            ParameterType::File => path::normalize(value).to_string(),
            ParameterType::Username if value.is_empty() => {
                format!("\"{}\"", self.catalog.t("remote user", &[]))
            }
            ParameterType::Username => self.config.display_name(value).to_string(),
            ParameterType::Unclassified => value.to_string(),
        }
    }
}
