//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use textstats_core::config::{Config, ConfigSources};
use textstats_core::report_schema;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    /// Print the JSON Schema of the `score --json` report and exit
    #[arg(long)]
    pub schema: bool,
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    repository: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            repository: env!("CARGO_PKG_REPOSITORY"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    count_proper_nouns: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_grade: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_reading_ease: Option<f64>,
    /// Effective input ceiling; absent when the limit is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    max_input_bytes: Option<usize>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            count_proper_nouns: config.count_proper_nouns(),
            max_grade: config.max_grade,
            min_reading_ease: config.min_reading_ease,
            max_input_bytes: config.input_limit(),
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information and the effective configuration.
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, schema = args.schema, "executing info command");

    if args.schema {
        println!("{}", serde_json::to_string_pretty(&report_schema())?);
        return Ok(());
    }

    let info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{} {}", info.package.name.bold(), info.package.version.green());
    if !info.package.description.is_empty() {
        println!("{}", info.package.description);
    }
    if !info.package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), info.package.license);
    }
    if !info.package.repository.is_empty() {
        println!("{}: {}", "Repository".dimmed(), info.package.repository.cyan());
    }

    println!();
    println!("{}", "Configuration".bold().underline());
    match info.config.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), info.config.log_level);
    if let Some(ref dir) = info.config.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    println!(
        "{}: {}",
        "Count proper nouns".dimmed(),
        info.config.count_proper_nouns
    );
    match info.config.max_input_bytes {
        Some(bytes) => println!("{}: {bytes} bytes", "Input limit".dimmed()),
        None => println!("{}: {}", "Input limit".dimmed(), "disabled".yellow()),
    }

    println!();
    println!("{}", "Quality Gates".bold().underline());
    print_opt_f64("Max grade", info.config.max_grade);
    print_opt_f64("Min reading ease", info.config.min_reading_ease);

    Ok(())
}

/// Print an optional f64 value or "(not set)".
fn print_opt_f64(label: &str, value: Option<f64>) {
    match value {
        Some(v) => println!("{}: {:.1}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_output_succeeds() {
        let config = Config::default();
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), false, &config, &sources).is_ok());
    }

    #[test]
    fn json_output_succeeds() {
        let config = Config::default();
        let sources = ConfigSources::default();
        assert!(cmd_info(InfoArgs::default(), true, &config, &sources).is_ok());
    }

    #[test]
    fn schema_output_succeeds() {
        let args = InfoArgs { schema: true };
        assert!(cmd_info(args, false, &Config::default(), &ConfigSources::default()).is_ok());
    }

    #[test]
    fn defaults_without_config_file() {
        let info = ConfigInfo::from_config(&Config::default(), &ConfigSources::default());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert!(info.count_proper_nouns);
        assert_eq!(
            info.max_input_bytes,
            Some(textstats_core::DEFAULT_MAX_INPUT_BYTES)
        );
    }

    #[test]
    fn disabled_limit_is_omitted() {
        let config = Config {
            disable_input_limit: true,
            count_proper_nouns: Some(false),
            ..Config::default()
        };
        let info = ConfigInfo::from_config(&config, &ConfigSources::default());
        assert!(info.max_input_bytes.is_none());
        assert!(!info.count_proper_nouns);
    }
}
