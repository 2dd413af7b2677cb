//! Command line configuration
//!
//! Flags may be spelled Go-style with a single dash (`-formats dotenv`) or
//! with two dashes. Flag parsing stops at the first positional argument, so
//! everything after it is treated as a target.

use std::path::{Path, PathBuf};

use clap::builder::BoolishValueParser;
use clap::{ArgAction, CommandFactory, Parser};

use crate::error::Result;
use crate::format::Formats;

const DEFAULT_PROGRAM: &str = "envrcconfig";

/// Long flags that consume the following argument as their value.
const VALUE_FLAGS: [&str; 3] = ["formats", "logging", "output"];

#[derive(Debug, Parser)]
#[command(
    name = "envrcconfig",
    about = "Generate sample configuration files from annotated structs",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Comma-separated output formats: direnv, dotenv, kubernetes, terraform
    #[arg(long, value_name = "FORMATS", allow_hyphen_values = true)]
    formats: Vec<String>,

    /// Print this help and exit
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    help: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        long,
        default_value = "INFO",
        value_name = "LEVEL",
        allow_hyphen_values = true
    )]
    logging: String,

    /// Write one file per target and format into this directory instead of stdout
    #[arg(long, value_name = "DIR", allow_hyphen_values = true)]
    output: Option<PathBuf>,

    /// Print the version and exit
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    version: bool,

    /// Target types in <package>,<typename> form
    #[arg(value_name = "TARGET")]
    targets: Vec<String>,
}

/// Parsed command line. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    formats: Formats,
    help: bool,
    log_level: String,
    output: Option<PathBuf>,
    targets: Vec<String>,
    version: bool,
}

impl Config {
    /// Parse command line arguments. The first element is the program name.
    ///
    /// Targets and the log level are not validated here.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        let parsed = Args::try_parse_from(normalize(&args))?;

        let mut formats = Formats::new();
        for value in &parsed.formats {
            formats.add(value)?;
        }

        Ok(Self {
            formats,
            help: parsed.help,
            log_level: parsed.logging,
            output: parsed.output,
            targets: parsed.targets,
            version: parsed.version,
        })
    }

    pub fn formats(&self) -> &Formats {
        &self.formats
    }

    pub fn help(&self) -> bool {
        self.help
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Target type identifiers in `<package>,<typename>` form.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    pub fn version(&self) -> bool {
        self.version
    }

    /// Help text describing the accepted flags.
    pub fn usage() -> String {
        Args::command().render_help().to_string()
    }
}

/// Rewrite single-dash long flags to double-dash form and end flag parsing
/// at the first positional argument.
fn normalize(args: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(args.len() + 1);
    let mut iter = args.iter();

    out.push(
        iter.next()
            .cloned()
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string()),
    );

    let mut expect_value = false;
    while let Some(arg) = iter.next() {
        if expect_value {
            out.push(arg.clone());
            expect_value = false;
            continue;
        }

        if arg == "--" {
            out.push(arg.clone());
            out.extend(iter.by_ref().cloned());
            break;
        }

        if let Some(flag) = arg.strip_prefix('-').filter(|f| !f.is_empty()) {
            let long = flag.strip_prefix('-').unwrap_or(flag);
            let (name, inline) = match long.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (long, None),
            };
            expect_value = inline.is_none() && VALUE_FLAGS.contains(&name);
            out.push(format!("--{}", long));
            continue;
        }

        out.push("--".to_string());
        out.push(arg.clone());
        out.extend(iter.by_ref().cloned());
        break;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::format::Format;

    #[test]
    fn test_version_flag() {
        let config = Config::from_args(["program", "-version"]).unwrap();
        assert!(config.formats().is_empty());
        assert!(!config.help());
        assert_eq!(config.log_level(), "INFO");
        assert!(config.targets().is_empty());
        assert!(config.version());
        assert!(config.output().is_none());
    }

    #[test]
    fn test_formats_and_targets() {
        let config = Config::from_args([
            "program",
            "-formats",
            "direnv,Terraform",
            "--formats=dotenv",
            "-logging",
            "debug",
            "app,Config",
            "db,Settings",
        ])
        .unwrap();

        assert_eq!(config.formats().to_string(), "direnv, dotenv, terraform");
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.targets(), ["app,Config", "db,Settings"]);
    }

    #[test]
    fn test_flags_after_target_are_targets() {
        let config = Config::from_args(["program", "app,Config", "-help"]).unwrap();
        assert!(!config.help());
        assert_eq!(config.targets(), ["app,Config", "-help"]);
    }

    #[test]
    fn test_output_directory() {
        let config = Config::from_args(["program", "-output", "out", "app,Config"]).unwrap();
        assert_eq!(config.output(), Some(Path::new("out")));
    }

    #[test]
    fn test_unknown_flag_is_error() {
        let err = Config::from_args(["program", "-bogus"]).unwrap_err();
        assert!(matches!(err, Error::Flags(_)));
    }

    #[test]
    fn test_missing_flag_value_is_error() {
        let err = Config::from_args(["program", "-formats"]).unwrap_err();
        assert!(matches!(err, Error::Flags(_)));
    }

    #[test]
    fn test_unsupported_format() {
        let err = Config::from_args(["program", "-formats", "direnv,bogus"]).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_help_flag() {
        let config = Config::from_args(["program", "-help"]).unwrap();
        assert!(config.help());
        assert!(config.formats().is_empty());
        assert!(!config.formats().contains(Format::DirEnv));
    }

    #[test]
    fn test_usage_lists_flags() {
        let usage = Config::usage();
        assert!(usage.contains("--formats"));
        assert!(usage.contains("--logging"));
    }

    #[test]
    fn test_boolean_flags_accept_explicit_values() {
        let config = Config::from_args(["program", "-version=true", "-help=false"]).unwrap();
        assert!(config.version());
        assert!(!config.help());

        let config = Config::from_args(["program", "--help=1"]).unwrap();
        assert!(config.help());
    }

    #[test]
    fn test_boolean_flag_does_not_consume_next_argument() {
        let config = Config::from_args(["program", "-version", "true"]).unwrap();
        assert!(config.version());
        assert_eq!(config.targets(), ["true"]);
    }

    #[test]
    fn test_value_flags_take_hyphenated_values() {
        let config = Config::from_args(["program", "-logging", "-debug"]).unwrap();
        assert_eq!(config.log_level(), "-debug");

        let config = Config::from_args(["program", "-output", "-out", "app,Config"]).unwrap();
        assert_eq!(config.output(), Some(Path::new("-out")));
        assert_eq!(config.targets(), ["app,Config"]);
    }

    #[test]
    fn test_normalize() {
        let args: Vec<String> = ["p", "-formats", "-x", "-version", "t", "-help"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            normalize(&args),
            ["p", "--formats", "-x", "--version", "--", "t", "-help"]
        );
    }
}
