use clap::ValueEnum;
use tracing::{debug, warn};
use wordstat_config as cli;
use wordstat_settings::{AnalyzeSettings, DEFAULT_PRECISION, DEFAULT_PUNCTUATION, MAX_PRECISION};
use wordstat_types::OutputFormat;

pub(crate) fn load_config() -> Option<cli::UserConfig> {
    let config_dir = dirs::config_dir()?.join("wordstat");
    let config_path = config_dir.join("config.json");

    if config_path.exists() {
        let content = match std::fs::read_to_string(&config_path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %config_path.display(), "ignoring unreadable user config: {e}");
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => {
                debug!(path = %config_path.display(), "loaded user config");
                Some(cfg)
            }
            Err(e) => {
                warn!(path = %config_path.display(), "ignoring malformed user config: {e}");
                None
            }
        }
    } else {
        None
    }
}

pub fn resolve_profile<'a>(
    config: &'a Option<cli::UserConfig>,
    name: Option<&String>,
) -> Option<&'a cli::Profile> {
    config.as_ref().and_then(|c| {
        let key = name.map(|s| s.as_str()).unwrap_or("default");
        c.profiles.get(key)
    })
}

/// CLI flag > profile value > built-in default.
pub fn resolve_settings(cli_args: &cli::Cli, profile: Option<&cli::Profile>) -> AnalyzeSettings {
    let precision = cli_args
        .precision
        .or_else(|| profile.and_then(|p| p.precision))
        .unwrap_or(DEFAULT_PRECISION);
    if precision > MAX_PRECISION {
        warn!(precision, max = MAX_PRECISION, "precision clamped");
    }

    AnalyzeSettings {
        source: cli_args.source.clone(),
        punctuation: cli_args
            .punctuation
            .clone()
            .or_else(|| profile.and_then(|p| p.punctuation.clone()))
            .unwrap_or_else(|| DEFAULT_PUNCTUATION.to_string()),
        precision: precision.min(MAX_PRECISION),
        stream: cli_args.stream || profile.and_then(|p| p.stream).unwrap_or(false),
        format: cli_args
            .format
            .or_else(|| {
                profile
                    .and_then(|p| p.format.as_deref())
                    .and_then(|s| OutputFormat::from_str(s, true).ok())
            })
            .unwrap_or(OutputFormat::Text),
    }
}
