//! Stored path normalization and directory resolution.
//!
//! Activity records keep the path as it was at the time of the event. Older
//! records lack the leading slash and shares of folders may carry a trailing
//! one, so everything downstream works on the normalized form while the
//! directory check still sees the path exactly as recorded.
use std::path::{Component, Path, PathBuf};

/// Answers whether a stored path currently denotes a directory under the
/// caller's visible root.
///
/// `None` means the lookup was inconclusive; callers treat it as "not a
/// directory".
pub trait DirectoryLookup {
    fn is_dir(&self, stored_path: &str) -> Option<bool>;
}

/// Lookup used when no files root is configured: every answer is inconclusive.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLookup;

impl DirectoryLookup for NoLookup {
    fn is_dir(&self, _stored_path: &str) -> Option<bool> {
        None
    }
}

impl<F> DirectoryLookup for F
where
    F: Fn(&str) -> Option<bool>,
{
    fn is_dir(&self, stored_path: &str) -> Option<bool> {
        self(stored_path)
    }
}

/// Disk-backed lookup rooted at a user's files directory.
#[derive(Debug, Clone)]
pub struct DiskLookup {
    root: PathBuf,
}

impl DiskLookup {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn candidate(&self, stored_path: &str) -> Option<PathBuf> {
        let relative = Path::new(stored_path.trim_start_matches('/'));
        let mut joined = self.root.clone();
        for component in relative.components() {
            match component {
                Component::Normal(part) => joined.push(part),
                Component::CurDir => {}
                // Anything else could leave the visible root.
                _ => return None,
            }
        }
        Some(joined)
    }
}

impl DirectoryLookup for DiskLookup {
    fn is_dir(&self, stored_path: &str) -> Option<bool> {
        let Some(candidate) = self.candidate(stored_path) else {
            tracing::debug!(path = stored_path, "stored path escapes files root");
            return None;
        };
        let resolved = match (candidate.canonicalize(), self.root.canonicalize()) {
            (Ok(resolved), Ok(root)) if resolved.starts_with(&root) => resolved,
            (Ok(resolved), Ok(_)) => {
                tracing::debug!(
                    path = %resolved.display(),
                    "stored path resolves outside files root"
                );
                return None;
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::debug!(
                    path = %candidate.display(),
                    error = %err,
                    "directory lookup inconclusive"
                );
                return None;
            }
        };
        std::fs::metadata(&resolved).ok().map(|meta| meta.is_dir())
    }
}

/// Derived view of a stored path. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathDescriptor {
    /// Path without the leading and trailing separator.
    pub normalized: String,
    pub basename: String,
    /// Everything before the last separator; empty for top-level entries.
    pub containing_dir: String,
    pub is_directory: bool,
}

/// Strip exactly one leading and one trailing `/`.
pub fn normalize(raw: &str) -> &str {
    let trimmed = raw.strip_prefix('/').unwrap_or(raw);
    trimmed.strip_suffix('/').unwrap_or(trimmed)
}

/// Split a normalized path into `(containing_dir, basename)`.
pub fn split_normalized(normalized: &str) -> (&str, &str) {
    match normalized.rfind('/') {
        Some(idx) => (&normalized[..idx], &normalized[idx + 1..]),
        None => ("", normalized),
    }
}

/// Resolve a stored path against `lookup`. The lookup receives `raw`
/// untouched.
pub fn resolve(raw: &str, lookup: &dyn DirectoryLookup) -> PathDescriptor {
    let normalized = normalize(raw);
    let (containing_dir, basename) = split_normalized(normalized);
    PathDescriptor {
        normalized: normalized.to_string(),
        basename: basename.to_string(),
        containing_dir: containing_dir.to_string(),
        is_directory: lookup.is_dir(raw).unwrap_or(false),
    }
}
