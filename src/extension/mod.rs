//! Extension descriptors.
//!
//! An extension is a table of plain functions. Each hook either answers or
//! declines with `None`, and the registry in `classify` asks extensions in
//! registration order.
use crate::classify::Classification;
use std::fmt;

pub mod files_sharing;

pub type SpecialParametersFn = fn(module: &str, subject: &str) -> Option<Classification>;
pub type SubjectTemplateFn = fn(module: &str, subject: &str) -> Option<&'static str>;
pub type NotificationTypesFn = fn() -> &'static [(&'static str, &'static str)];
pub type TypeIconFn = fn(kind: &str) -> Option<&'static str>;
pub type FilterTypesFn = fn(types: &[&str], filter: &str) -> Option<Vec<String>>;
pub type FilterValidFn = fn(filter: &str) -> bool;

#[derive(Clone, Copy)]
pub struct Extension {
    pub id: &'static str,
    pub special_parameters: SpecialParametersFn,
    /// Untranslated sentence template; parameters are substituted positionally.
    pub subject_template: SubjectTemplateFn,
    /// `(type, untranslated description)` pairs.
    pub notification_types: NotificationTypesFn,
    pub type_icon: TypeIconFn,
    pub filter_types: FilterTypesFn,
    pub is_filter_valid: FilterValidFn,
}

impl Extension {
    /// Extension that declines every hook.
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            special_parameters: |_, _| None,
            subject_template: |_, _| None,
            notification_types: || &[],
            type_icon: |_| None,
            filter_types: |_, _| None,
            is_filter_valid: |_| false,
        }
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extension").field("id", &self.id).finish()
    }
}
