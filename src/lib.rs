//! Rendering of activity parameters into display markup.
//!
//! An activity stores its sentence parameters as plain strings. Extensions
//! classify positions as file paths or user ids, and the renderer turns each
//! parameter into escaped, localized text or markup: links into the files
//! app, avatars, emphasis, and joined lists.

pub mod classify;
pub mod config;
pub mod extension;
pub mod l10n;
pub mod markup;
pub mod path;
pub mod render;

pub use classify::{Classification, ExtensionRegistry, ParameterType};
pub use config::EngineConfig;
pub use extension::Extension;
pub use l10n::Catalog;
pub use path::{DirectoryLookup, DiskLookup, NoLookup, PathDescriptor};
pub use render::{NotificationType, ParameterRenderer, RenderFlags};
