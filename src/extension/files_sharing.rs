//! Sharing activities of the files module.
use super::Extension;
use crate::classify::{Classification, ParameterType};

pub const MODULE: &str = "files";
pub const TYPE_SHARED: &str = "shared";
pub const FILTER_SHARES: &str = "shares";

const NOTIFICATION_TYPES: &[(&str, &str)] = &[(
    TYPE_SHARED,
    "A file or folder has been <strong>shared</strong>",
)];

pub fn extension() -> Extension {
    Extension {
        id: "files_sharing",
        special_parameters,
        subject_template,
        notification_types: || NOTIFICATION_TYPES,
        type_icon,
        filter_types,
        is_filter_valid: |filter| filter == FILTER_SHARES,
    }
}

fn special_parameters(module: &str, subject: &str) -> Option<Classification> {
    if module != MODULE {
        return None;
    }
    let file = Classification::new().with(0, ParameterType::File);
    match subject {
        "shared_group_self" => Some(file),
        "shared_user_self" | "shared_with_by" | "shared_link_self" => {
            Some(file.with(1, ParameterType::Username))
        }
        _ => None,
    }
}

fn subject_template(module: &str, subject: &str) -> Option<&'static str> {
    if module != MODULE {
        return None;
    }
    match subject {
        "shared_user_self" => Some("You shared %1$s with %2$s"),
        "shared_group_self" => Some("You shared %1$s with group %2$s"),
        "shared_with_by" => Some("%2$s shared %1$s with you"),
        "shared_link_self" => Some("You shared %1$s via link"),
        _ => None,
    }
}

fn type_icon(kind: &str) -> Option<&'static str> {
    (kind == TYPE_SHARED).then_some("icon-share")
}

fn filter_types(types: &[&str], filter: &str) -> Option<Vec<String>> {
    if filter != FILTER_SHARES {
        return None;
    }
    Some(
        types
            .iter()
            .filter(|kind| **kind == TYPE_SHARED)
            .map(|kind| kind.to_string())
            .collect(),
    )
}
