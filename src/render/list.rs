use super::{ParameterRenderer, RenderFlags};
use crate::classify::ParameterType;
use crate::markup::escape_html;

/// Lists up to this length are spelled out in full.
pub const LIST_LIMIT: usize = 5;
/// Items shown before "and N more" once a list is truncated.
pub const LIST_VISIBLE_WHEN_TRUNCATED: usize = 3;

impl ParameterRenderer {
    /// Join several values of one type into a localized phrase.
    ///
    /// One item is returned as is, up to [`LIST_LIMIT`] items read
    /// "A, B and C", and longer lists show the first
    /// [`LIST_VISIBLE_WHEN_TRUNCATED`] followed by "and N more". With
    /// highlighting the hidden items become a tooltip on the count.
    pub fn join_list<S: AsRef<str>>(
        &self,
        items: &[S],
        kind: ParameterType,
        flags: RenderFlags,
    ) -> String {
        let rendered: Vec<String> = items
            .iter()
            .map(|item| self.format_one(item.as_ref(), kind, flags))
            .collect();
        let Some((last, head)) = rendered.split_last() else {
            return String::new();
        };
        if head.is_empty() {
            return last.clone();
        }

        let separator = self.catalog.t(", ", &[]);
        if rendered.len() <= LIST_LIMIT {
            let list = head.join(&separator);
            return self.catalog.t("%s and %s", &[list.as_str(), last.as_str()]);
        }

        let shown = rendered[..LIST_VISIBLE_WHEN_TRUNCATED].join(&separator);
        let hidden = items.len() - LIST_VISIBLE_WHEN_TRUNCATED;
        let count = u64::try_from(hidden).unwrap_or(u64::MAX);
        if !flags.highlight {
            return self
                .catalog
                .n("%s and %n more", "%s and %n more", count, &[shown.as_str()]);
        }

        let hidden_text = items[LIST_VISIBLE_WHEN_TRUNCATED..]
            .iter()
            .map(|item| self.plain_text(item.as_ref(), kind))
            .collect::<Vec<_>>()
            .join(&separator);
        let attrs = format!(
            "class=\"tooltip\" title=\"{}\"",
            escape_html(&hidden_text)
        );
        self.catalog.n(
            "%s and <strong %s>%n more</strong>",
            "%s and <strong %s>%n more</strong>",
            count,
            &[shown.as_str(), attrs.as_str()],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::l10n::Catalog;

    fn renderer() -> ParameterRenderer {
        ParameterRenderer::new(EngineConfig::default(), Catalog::source("en"))
    }

    #[test]
    fn single_item_is_unchanged() {
        assert_eq!(
            renderer().join_list(
                &["A/B.txt"],
                ParameterType::File,
                RenderFlags::new(true, false),
            ),
            "B.txt"
        );
    }

    #[test]
    fn up_to_five_items_are_spelled_out() {
        let items = ["a", "b", "c", "d", "e"];
        assert_eq!(
            renderer().join_list(&items, ParameterType::Unclassified, RenderFlags::PLAIN),
            "a, b, c, d and e"
        );
    }

    #[test]
    fn long_lists_are_truncated() {
        let items = ["a", "b", "c", "d", "e", "f"];
        assert_eq!(
            renderer().join_list(&items, ParameterType::Unclassified, RenderFlags::PLAIN),
            "a, b, c and 3 more"
        );
    }

    #[test]
    fn truncated_highlight_lists_hidden_items_in_tooltip() {
        let items = ["/a/1", "/a/2", "/a/3", "/a/<4>", "/a/5", "/a/6", "/a/7"];
        let out = renderer().join_list(&items, ParameterType::File, RenderFlags::new(true, true));
        assert!(out.ends_with(
            " and <strong class=\"tooltip\" title=\"a/&lt;4&gt;, a/5, a/6, a/7\">4 more</strong>"
        ));
        assert_eq!(out.matches("<a class=\"filename tooltip\"").count(), 3);
    }

    #[test]
    fn german_truncation() {
        let mut renderer = renderer();
        renderer.set_catalog(Catalog::builtin("de").unwrap().unwrap());
        let items = ["a", "b", "c", "d", "e", "f", "g"];
        assert_eq!(
            renderer.join_list(&items, ParameterType::Unclassified, RenderFlags::PLAIN),
            "a, b, c und 4 weitere"
        );
    }
}
