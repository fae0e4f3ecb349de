//! APK optimizer CLI
//!
//! Entry point for the `apk-optimizer` command-line tool.

use apk_optimizer::{
    default_optimizations_for_version, EffectiveOptimizations, OptimizationDimension, OverrideSet,
    Version, DEFAULT_TOOL_VERSION,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g., "debug")
const LOG_ENV: &str = "APK_OPTIMIZER_LOG";

#[derive(Parser)]
#[command(name = "apk-optimizer")]
#[command(about = "Resolve split APK optimizations for an app bundle", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the effective optimizations for a bundle config
    Resolve {
        /// Path to bundle config file (TOML). Defaults only when omitted
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Split dimensions replacing the computed ones (comma-separated, e.g., "abi,language")
        #[arg(long = "override")]
        override_dimensions: Option<String>,

        /// Bundletool version to assume when the config does not declare one
        #[arg(long)]
        tool_version: Option<String>,

        /// Output in human-readable format instead of JSON
        #[arg(long)]
        human: bool,

        /// Also write the JSON record to this file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Show the default optimizations for a bundletool version
    Defaults {
        /// Bundletool version (e.g., "0.6.0")
        version: String,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// List known split dimensions
    Dimensions,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            config,
            override_dimensions,
            tool_version,
            human,
            output,
        } => {
            run_resolve(config, override_dimensions, tool_version, human, output);
        }
        Commands::Defaults { version, json } => {
            run_defaults(&version, json);
        }
        Commands::Dimensions => {
            for dimension in OptimizationDimension::ALL {
                println!("{}", dimension);
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn run_resolve(
    config_path: Option<PathBuf>,
    override_dimensions: Option<String>,
    tool_version: Option<String>,
    human: bool,
    output: Option<PathBuf>,
) {
    let fallback_version = match tool_version {
        Some(raw) => parse_version_or_exit(&raw),
        None => DEFAULT_TOOL_VERSION,
    };

    let override_set = match override_dimensions.as_deref().map(parse_override_set) {
        Some(Ok(set)) => set,
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        None => None,
    };

    let config_path = config_path.as_deref();
    let built = EffectiveOptimizations::build(config_path, &fallback_version, override_set);
    let effective = match built {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Some(ref path) = output {
        if let Err(e) = effective.write_to_file(path) {
            eprintln!("Error writing {}: {}", path.display(), e);
            process::exit(1);
        }
        eprintln!("Wrote: {}", path.display());
    }

    if human {
        println!("{}", effective.to_human());
    } else {
        match effective.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    }
}

fn run_defaults(raw_version: &str, json_output: bool) {
    let version = parse_version_or_exit(raw_version);

    let defaults = match default_optimizations_for_version(&version) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if json_output {
        match defaults.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing output: {}", e);
                process::exit(1);
            }
        }
    } else {
        let names: Vec<&str> =
            defaults.split_dimensions().iter().map(|d| d.as_str()).collect();
        println!("Bundletool version: {}", version);
        println!("  Split dimensions: {}", names.join(", "));
        println!(
            "  Uncompress native libraries: {}",
            defaults.uncompress_native_libraries()
        );
    }
}

fn parse_version_or_exit(raw: &str) -> Version {
    match Version::parse(raw.trim()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: invalid bundletool version '{}': {}", raw, e);
            process::exit(1);
        }
    }
}

/// Parse a comma-separated dimension list. An empty list means no override.
fn parse_override_set(raw: &str) -> Result<Option<OverrideSet>, String> {
    let set = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<OptimizationDimension>().map_err(|e| e.to_string()))
        .collect::<Result<OverrideSet, String>>()?;
    Ok(Some(set).filter(|set| !set.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_override_set() {
        let set = parse_override_set("abi, SCREEN_DENSITY").unwrap().unwrap();
        assert_eq!(
            set,
            [OptimizationDimension::Abi, OptimizationDimension::ScreenDensity]
                .into_iter()
                .collect::<OverrideSet>()
        );
    }

    #[test]
    fn test_parse_empty_override_set_is_no_override() {
        assert_eq!(parse_override_set(""), Ok(None));
        assert_eq!(parse_override_set(" , "), Ok(None));
    }

    #[test]
    fn test_parse_override_set_unknown() {
        let err = parse_override_set("abi,bogus").unwrap_err();
        assert!(err.contains("bogus"));
    }

    #[test]
    fn test_cli_parses_resolve() {
        let cli = Cli::try_parse_from([
            "apk-optimizer",
            "resolve",
            "-c",
            "BundleConfig.toml",
            "--override",
            "abi",
            "--human",
        ])
        .unwrap();

        match cli.command {
            Commands::Resolve {
                config,
                override_dimensions,
                human,
                ..
            } => {
                assert_eq!(config, Some(PathBuf::from("BundleConfig.toml")));
                assert_eq!(override_dimensions.as_deref(), Some("abi"));
                assert!(human);
            }
            _ => panic!("Expected Resolve command"),
        }
    }
}
