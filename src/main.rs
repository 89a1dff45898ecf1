//! Replay a scripted editing session and print the resulting labels.
//!
//! Usage: `labelkit-replay <script.json> [config.json]`

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};
#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
use labelkit::{EditorConfig, ReplayScript};

#[cfg(not(target_arch = "wasm32"))]
fn load_config(path: Option<&Path>) -> Result<EditorConfig, labelkit::ConfigError> {
    match path {
        Some(path) => EditorConfig::load(path),
        None => Ok(EditorConfig::load_from_default_path().unwrap_or_default()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run(script_path: &Path, config: EditorConfig) -> Result<String, Box<dyn std::error::Error>> {
    let script = ReplayScript::load(script_path)?;
    let labels = script.run(config)?;
    Ok(serde_json::to_string_pretty(&labels)?)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    let mut args = std::env::args_os().skip(1);
    let Some(script_path) = args.next().map(PathBuf::from) else {
        eprintln!("Usage: labelkit-replay <script.json> [config.json]");
        return ExitCode::from(2);
    };
    let config_path = args.next().map(PathBuf::from);

    let config = load_config(config_path.as_deref());

    // RUST_LOG wins over the configured level.
    let level = config
        .as_ref()
        .map(|c| c.log_level.to_level_filter())
        .unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&script_path, config) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Replay of {:?} failed: {}", script_path, e);
            ExitCode::FAILURE
        }
    }
}

// The replay tool is native only.
#[cfg(target_arch = "wasm32")]
fn main() {}
