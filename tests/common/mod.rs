//! Shared test infrastructure for integration tests.

use activity_render::{Catalog, EngineConfig, ParameterRenderer};
use std::path::Path;
use std::process::{Command, Output};

/// Renderer with the stock config and the built-in catalog for `language`.
#[allow(dead_code)]
pub fn renderer(language: &str) -> ParameterRenderer {
    let catalog = Catalog::builtin(language)
        .expect("built-in catalog parses")
        .expect("built-in catalog exists");
    ParameterRenderer::new(EngineConfig::default(), catalog)
}

/// Run the `arender` binary with `args`, with an isolated config directory so
/// a developer's own config file does not leak into assertions.
#[allow(dead_code)]
pub fn run_arender(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_arender"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("ARENDER_LOG")
        .output()
        .expect("spawn arender")
}

/// Stdout of a successful run, split into lines.
#[allow(dead_code)]
pub fn stdout_lines(output: &Output) -> Vec<String> {
    assert!(
        output.status.success(),
        "arender failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
