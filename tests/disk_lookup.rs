//! Directory detection against a real files root.

use activity_render::{
    path, Catalog, Classification, DirectoryLookup, DiskLookup, EngineConfig, ParameterRenderer,
    ParameterType, RenderFlags,
};
use std::fs;
use tempfile::TempDir;

fn files_root() -> TempDir {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("Photos/2024")).unwrap();
    fs::write(root.path().join("Photos/2024/beach.jpg"), b"jpg").unwrap();
    fs::write(root.path().join("notes.txt"), b"notes").unwrap();
    root
}

#[test]
fn stored_forms_resolve_against_the_same_root() {
    let root = files_root();
    let lookup = DiskLookup::new(root.path());
    for stored in ["/Photos/2024", "Photos/2024", "/Photos/2024/", "Photos/2024/"] {
        assert_eq!(lookup.is_dir(stored), Some(true), "{stored}");
    }
    assert_eq!(lookup.is_dir("/Photos/2024/beach.jpg"), Some(false));
    assert_eq!(lookup.is_dir("/notes.txt"), Some(false));
}

#[test]
fn missing_and_escaping_paths_are_inconclusive() {
    let root = files_root();
    let lookup = DiskLookup::new(root.path().join("Photos"));
    assert_eq!(lookup.is_dir("/gone"), None);
    assert_eq!(lookup.is_dir("/../notes.txt"), None);
    assert!(!path::resolve("/../Photos", &lookup).is_directory);
}

#[cfg(unix)]
#[test]
fn symlink_out_of_the_root_is_inconclusive() {
    let root = files_root();
    let outside = tempfile::tempdir().unwrap();
    fs::create_dir_all(outside.path().join("secret")).unwrap();
    std::os::unix::fs::symlink(outside.path(), root.path().join("escape")).unwrap();
    std::os::unix::fs::symlink(root.path().join("Photos"), root.path().join("Album")).unwrap();

    let lookup = DiskLookup::new(root.path());
    assert_eq!(lookup.is_dir("/escape/secret"), None);
    assert_eq!(lookup.is_dir("/escape"), None);
    assert_eq!(lookup.is_dir("/Album/2024"), Some(true));
}

#[test]
fn configured_files_root_drives_link_shape() {
    let root = files_root();
    let config = EngineConfig {
        files_root: Some(root.path().to_path_buf()),
        ..EngineConfig::default()
    };
    let renderer = ParameterRenderer::new(config, Catalog::source("en"));
    let map: Classification = [(0, ParameterType::File), (1, ParameterType::File)]
        .into_iter()
        .collect();

    let rendered = renderer.format(
        &["/Photos/2024/", "/Photos/2024/beach.jpg"],
        Some(&map),
        RenderFlags::new(true, true),
    );
    assert_eq!(
        rendered,
        vec![
            "<a class=\"filename tooltip\" href=\"/index.php/apps/files?dir=%2FPhotos%2F2024\" title=\"in Photos\">2024</a>",
            "<a class=\"filename tooltip\" href=\"/index.php/apps/files?dir=%2FPhotos%2F2024&scrollto=beach.jpg\" title=\"in Photos/2024\">beach.jpg</a>",
        ]
    );
}

#[test]
fn deleted_folder_degrades_to_file_link() {
    let root = files_root();
    let config = EngineConfig {
        files_root: Some(root.path().to_path_buf()),
        ..EngineConfig::default()
    };
    let renderer = ParameterRenderer::new(config, Catalog::source("en"));
    let map = Classification::new().with(0, ParameterType::File);
    let rendered = renderer.format(
        &["/Archive/old"],
        Some(&map),
        RenderFlags::new(false, true),
    );
    assert_eq!(
        rendered,
        vec![
            "<a class=\"filename\" href=\"/index.php/apps/files?dir=%2FArchive&scrollto=old\">Archive/old</a>"
        ]
    );
}
