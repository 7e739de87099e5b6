//! Per-position parameter classification.
//!
//! Extensions describe which parameters of a subject are file paths or user
//! ids. The registry asks them in registration order and the first one that
//! declares a map wins.
use crate::extension::Extension;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterType {
    #[default]
    Unclassified,
    File,
    Username,
}

impl ParameterType {
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterType::Unclassified => "",
            ParameterType::File => "file",
            ParameterType::Username => "username",
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterType {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "" | "text" | "unclassified" => Ok(ParameterType::Unclassified),
            "file" => Ok(ParameterType::File),
            "username" => Ok(ParameterType::Username),
            other => Err(anyhow!("unknown parameter type {other:?}")),
        }
    }
}

/// Position to type map for one subject. Absent positions are unclassified
/// and positions past the end of the parameter list are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Classification(BTreeMap<usize, ParameterType>);

impl Classification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, position: usize, kind: ParameterType) -> Self {
        self.0.insert(position, kind);
        self
    }

    pub fn get(&self, position: usize) -> ParameterType {
        self.0.get(&position).copied().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, ParameterType)> + '_ {
        self.0.iter().map(|(position, kind)| (*position, *kind))
    }

    /// Parse `POS=TYPE` pairs as given on the command line.
    pub fn parse_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Self> {
        let mut out = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (position, kind) = pair
                .split_once('=')
                .ok_or_else(|| anyhow!("expected POS=TYPE, got {pair:?}"))?;
            let position = position
                .trim()
                .parse::<usize>()
                .map_err(|err| anyhow!("invalid position in {pair:?}: {err}"))?;
            out.0.insert(position, kind.trim().parse()?);
        }
        Ok(out)
    }
}

impl FromIterator<(usize, ParameterType)> for Classification {
    fn from_iter<I: IntoIterator<Item = (usize, ParameterType)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Ordered set of registered extensions.
#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
    extensions: Vec<Extension>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the extensions shipped in this crate.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(crate::extension::files_sharing::extension());
        registry
    }

    pub fn register(&mut self, extension: Extension) {
        self.extensions.push(extension);
    }

    /// First declared classification for `(module, subject)`.
    pub fn classify(&self, module: &str, subject: &str) -> Option<Classification> {
        let found = self
            .extensions
            .iter()
            .find_map(|extension| (extension.special_parameters)(module, subject));
        if found.is_none() {
            tracing::trace!(module, subject, "no extension classifies subject");
        }
        found
    }

    /// First declared sentence template for `(module, subject)`.
    pub fn subject_template(&self, module: &str, subject: &str) -> Option<&'static str> {
        self.extensions
            .iter()
            .find_map(|extension| (extension.subject_template)(module, subject))
    }

    pub fn type_icon(&self, kind: &str) -> Option<&'static str> {
        self.extensions
            .iter()
            .find_map(|extension| (extension.type_icon)(kind))
    }

    /// Notification types contributed by every extension, in order.
    pub fn notification_types(&self) -> Vec<(&'static str, &'static str)> {
        self.extensions
            .iter()
            .flat_map(|extension| (extension.notification_types)().iter().copied())
            .collect()
    }

    pub fn is_filter_valid(&self, filter: &str) -> bool {
        self.extensions
            .iter()
            .any(|extension| (extension.is_filter_valid)(filter))
    }

    /// Narrow `types` by `filter` with the first extension that knows it.
    pub fn filter_types(&self, types: &[&str], filter: &str) -> Option<Vec<String>> {
        self.extensions
            .iter()
            .find_map(|extension| (extension.filter_types)(types, filter))
    }
}
