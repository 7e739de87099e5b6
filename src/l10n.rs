//! Translation catalogs and positional substitution.
//!
//! Keys are the English source strings, so a missing translation degrades to
//! readable English rather than to a key name.
use anyhow::{Context, Result};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

const EN_JSON: &str = include_str!("../l10n/en.json");
const DE_JSON: &str = include_str!("../l10n/de.json");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralRule {
    /// Form 0 for exactly one, form 1 otherwise.
    #[default]
    OneOther,
    /// Languages without grammatical number.
    Invariant,
}

impl PluralRule {
    fn form(self, count: u64) -> usize {
        match self {
            PluralRule::OneOther if count == 1 => 0,
            PluralRule::OneOther => 1,
            PluralRule::Invariant => 0,
        }
    }
}

/// One language's translations.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub language: String,
    #[serde(default)]
    pub plural_rule: PluralRule,
    #[serde(default)]
    translations: BTreeMap<String, String>,
    #[serde(default)]
    plurals: BTreeMap<String, Vec<String>>,
}

impl Catalog {
    /// Catalog with no translations: every lookup yields the source string.
    pub fn source(language: &str) -> Self {
        Self {
            language: language.to_string(),
            plural_rule: PluralRule::OneOther,
            translations: BTreeMap::new(),
            plurals: BTreeMap::new(),
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parse translation catalog")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read catalog {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("load catalog {}", path.display()))
    }

    /// Catalog shipped with the binary, if there is one for `language`.
    pub fn builtin(language: &str) -> Result<Option<Self>> {
        let text = match language {
            "en" => EN_JSON,
            "de" => DE_JSON,
            _ => return Ok(None),
        };
        Self::from_json(text).map(Some)
    }

    /// Resolve `language` from the built-in catalog (or untranslated source
    /// strings), with entries from `<l10n_dir>/<language>.json` layered on top.
    ///
    /// The override file only needs the keys it changes. Its plural rule is
    /// used only when there is no built-in catalog for the language.
    pub fn for_language(language: &str, l10n_dir: Option<&Path>) -> Result<Self> {
        let builtin = Self::builtin(language)?;
        let overlay = match l10n_dir.map(|dir| dir.join(format!("{language}.json"))) {
            Some(path) if path.is_file() => Some(Self::load(&path)?),
            _ => None,
        };
        Ok(match (builtin, overlay) {
            (Some(base), Some(overlay)) => base.overlaid_with(overlay),
            (None, Some(overlay)) => overlay,
            (Some(base), None) => base,
            (None, None) => Self::source(language),
        })
    }

    fn overlaid_with(mut self, overlay: Catalog) -> Self {
        self.translations.extend(overlay.translations);
        self.plurals.extend(overlay.plurals);
        self
    }

    /// Translate `key` and substitute `args`.
    pub fn t(&self, key: &str, args: &[&str]) -> String {
        let template = match self.translations.get(key) {
            Some(found) => found.as_str(),
            None => {
                tracing::trace!(language = %self.language, key, "untranslated");
                key
            }
        };
        substitute(template, args, None)
    }

    /// Plural-aware translation; `%n` is replaced by `count`.
    pub fn n(&self, singular: &str, plural: &str, count: u64, args: &[&str]) -> String {
        let form = self.plural_rule.form(count);
        let translated = self
            .plurals
            .get(singular)
            .and_then(|forms| forms.get(form).or_else(|| forms.last()));
        let template = match translated {
            Some(found) => found.as_str(),
            None if count == 1 => singular,
            None => plural,
        };
        substitute(template, args, Some(count))
    }
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"%(?:(\d+)\$)?([sdn%])").expect("regex for placeholders")
    })
}

/// printf-style substitution: `%s`, `%d`, `%N$s`, `%%`, and `%n` when a
/// count is given. Missing arguments become empty strings.
pub fn substitute(template: &str, args: &[&str], count: Option<u64>) -> String {
    let mut next = 0usize;
    placeholder_regex()
        .replace_all(template, |caps: &Captures<'_>| {
            let kind = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
            match kind {
                "%" => "%".to_string(),
                "n" => match count {
                    Some(count) => count.to_string(),
                    None => caps[0].to_string(),
                },
                _ => {
                    let position = caps.get(1).and_then(|m| m.as_str().parse::<usize>().ok());
                    let index = match position {
                        Some(position) => position.saturating_sub(1),
                        None => {
                            let current = next;
                            next += 1;
                            current
                        }
                    };
                    args.get(index).map(|arg| arg.to_string()).unwrap_or_default()
                }
            }
        })
        .into_owned()
}
