use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::capture::capture_model::CaptureOptions;
use crate::error::HierarchyError;
use crate::tree::classifier::ClassifierConfig;
use crate::tree::optimizer::DEFAULT_MAX_DEPTH;
use crate::tree::tree_model::ScreenRect;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "ui-hierarchy",
    version,
    about = "Optimize device UI hierarchy dumps and extract selectable elements"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: ui-hierarchy.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append a JSON trace line per processed capture to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the elements found in a hierarchy dump
    Extract {
        /// Hierarchy dump (.xml, or .json for a serialized tree)
        #[arg(long)]
        input: String,

        /// Device screen size as WIDTHxHEIGHT (default: inferred from the dump)
        #[arg(long)]
        screen: Option<String>,

        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print the optimized tree as an indented outline
    Tree {
        #[arg(long)]
        input: String,

        #[arg(long)]
        screen: Option<String>,

        /// Print the unoptimized tree instead
        #[arg(long, default_value_t = false)]
        raw: bool,
    },

    /// Find the element matching a text, content-desc or hint
    Find {
        #[arg(long)]
        input: String,

        #[arg(long)]
        text: String,

        #[arg(long)]
        screen: Option<String>,
    },

    /// Save one element of a dump as a named locator
    Save {
        #[arg(long)]
        input: String,

        /// Element index as printed by `extract`
        #[arg(long)]
        index: usize,

        /// Locator name
        #[arg(long)]
        name: String,

        /// Locator store file
        #[arg(long, default_value = "locator/element.json")]
        store: String,

        #[arg(long)]
        screen: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `ui-hierarchy.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Screen size used when the CLI gets no --screen
    #[serde(default)]
    pub screen: Option<ScreenRect>,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub optimizer: OptimizerConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

fn default_max_depth() -> usize { DEFAULT_MAX_DEPTH }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("ui-hierarchy.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => match serde_yaml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring malformed config '{}': {}", config_path, e);
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

pub fn build_capture_options(config: &AppConfig) -> CaptureOptions {
    CaptureOptions {
        classifier: config.classifier.clone(),
        max_depth: config.optimizer.max_depth,
    }
}

/// CLI flag wins over the config file; `None` lets the pipeline infer the size.
pub fn resolve_screen_arg(
    arg: Option<&str>,
    config: &AppConfig,
) -> Result<Option<ScreenRect>, HierarchyError> {
    match arg {
        Some(raw) => parse_screen_size(raw).map(Some),
        None => Ok(config.screen),
    }
}

/// Parse `1080x1920` (also accepts `X` and `*` as separator).
pub fn parse_screen_size(raw: &str) -> Result<ScreenRect, HierarchyError> {
    let invalid = || HierarchyError::InvalidScreenSize(raw.to_string());

    let (w, h) = raw
        .trim()
        .split_once(['x', 'X', '*'])
        .ok_or_else(invalid)?;
    let width: i32 = w.trim().parse().map_err(|_| invalid())?;
    let height: i32 = h.trim().parse().map_err(|_| invalid())?;

    if width <= 0 || height <= 0 {
        return Err(invalid());
    }
    Ok(ScreenRect::new(width, height))
}

/// -v count to log level; warnings are always shown.
pub fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
