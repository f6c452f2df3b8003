use clap::Args;
use serde::Deserialize;

use record_api::Record;

use super::error::ShowError;

// ═══════════════════════════════════════════════════════════════
//  Config file (TOML)
// ═══════════════════════════════════════════════════════════════

/// ```toml
/// [[records]]
/// number = -42
/// text = "hello"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub records: Vec<Record>,
}

pub fn parse_config(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// `Ok(None)` when nothing exists at `path`.
pub fn load_config(path: &str) -> Result<Option<Config>, ShowError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ShowError::Config(format!("read {path}: {e}"))),
    };
    parse_config(&content)
        .map(Some)
        .map_err(|e| ShowError::Config(format!("parse {path}: {e}")))
}

// ═══════════════════════════════════════════════════════════════
//  CLI args
// ═══════════════════════════════════════════════════════════════

#[derive(Args, Clone, Debug)]
pub struct ShowArgs {
    /// Path to a TOML file with [[records]]
    #[arg(long, default_value = "record-show.toml", env = "RECORD_SHOW_CONFIG")]
    pub config: String,

    /// Integer value of the record
    #[arg(long, allow_negative_numbers = true)]
    pub number: Option<i64>,

    /// Text value of the record
    #[arg(long)]
    pub text: Option<String>,
}

// ═══════════════════════════════════════════════════════════════
//  Effective — merged config
// ═══════════════════════════════════════════════════════════════

/// Records to display, in order: config file first, then the CLI record.
pub struct Effective {
    pub records: Vec<Record>,
}

impl Effective {
    pub fn new(args: &ShowArgs) -> Result<Self, ShowError> {
        let cfg = match load_config(&args.config)? {
            Some(c) => {
                tracing::info!(config = %args.config, records = c.records.len(), "loaded config");
                c
            }
            None => {
                tracing::debug!(config = %args.config, "no config file, using CLI only");
                Config::default()
            }
        };

        Ok(Self::merge(cfg, args))
    }

    fn merge(cfg: Config, args: &ShowArgs) -> Self {
        let mut records = cfg.records;

        if args.number.is_some() || args.text.is_some() {
            records.push(Record::new(
                args.number.unwrap_or(0),
                args.text.clone().unwrap_or_default(),
            ));
        }

        if records.is_empty() {
            records.push(Record::new(0, ""));
        }

        Self { records }
    }
}
