//! Configuration management for the focus-lint command line.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (project, then user config directory)
//! - Rule selection and report format

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::rules::RuleId;
use crate::validation::FocusChecker;

/// Config file looked up in the current directory
pub const PROJECT_CONFIG_FILE: &str = ".focus-lint.toml";

/// Command-line arguments for focus-lint
#[derive(Debug, Parser)]
#[command(name = "focus-lint")]
#[command(about = "Check rendered markup against keyboard-focus accessibility conventions")]
#[command(version)]
pub struct Args {
    /// Markup files to check
    #[arg(help = "Markup files to check ('-' or none reads standard input)")]
    pub files: Vec<PathBuf>,

    /// Rules to skip
    #[arg(long = "disable", value_name = "RULE", help = "Disable a rule (repeatable)")]
    pub disable: Vec<String>,

    /// Rules to run exclusively
    #[arg(long = "only", value_name = "RULE", help = "Run only this rule (repeatable)")]
    pub only: Vec<String>,

    /// Report format
    #[arg(long, value_enum, help = "Report format [default: text]")]
    pub format: Option<OutputFormat>,

    /// Explicit config file
    #[arg(long, help = "Config file (default: .focus-lint.toml, then user config)")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// How the command line renders reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings read from a TOML config file
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Rule names to disable
    pub disabled: Vec<String>,
    pub format: Option<OutputFormat>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Project config in the working directory, else the user config
    pub fn discover() -> Option<PathBuf> {
        Self::discover_in(Path::new("."), dirs::config_dir().as_deref())
    }

    /// `project_dir/.focus-lint.toml`, else `user_dir/focus-lint/config.toml`
    pub fn discover_in(project_dir: &Path, user_dir: Option<&Path>) -> Option<PathBuf> {
        let project = project_dir.join(PROJECT_CONFIG_FILE);
        if project.is_file() {
            return Some(project);
        }

        user_dir
            .map(|dir| dir.join("focus-lint").join("config.toml"))
            .filter(|path| path.is_file())
    }
}

/// Where a document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Name used in reports
    pub fn name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole input; invalid UTF-8 is replaced, not rejected
    pub fn read(&self) -> Result<String> {
        let bytes = match self {
            Input::Stdin => {
                let mut bytes = Vec::new();
                io::stdin()
                    .read_to_end(&mut bytes)
                    .context("failed to read standard input")?;
                bytes
            }
            Input::File(path) => {
                fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
            }
        };
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub inputs: Vec<Input>,
    /// Enabled rules, in evaluation order
    pub rules: Vec<RuleId>,
    pub format: OutputFormat,
    pub log_level: String,
}

impl Config {
    /// Create configuration from explicit arguments, loading the config file
    pub fn from_args(args: Args) -> Result<Self> {
        let config_path = args.config.clone().or_else(FileConfig::discover);
        let file_config = match config_path {
            Some(path) => {
                log::debug!("using config file {}", path.display());
                FileConfig::load(&path)?
            }
            None => FileConfig::default(),
        };

        Self::merge(args, file_config)
    }

    /// Merge arguments over file settings; `--only` replaces the file's
    /// `disabled` list, `--disable` always applies
    pub fn merge(args: Args, file_config: FileConfig) -> Result<Self> {
        let only = parse_rule_names(&args.only).context("invalid --only")?;
        let disabled = parse_rule_names(&args.disable).context("invalid --disable")?;

        let mut rules = if only.is_empty() {
            let file_disabled =
                parse_rule_names(&file_config.disabled).context("invalid 'disabled' in config")?;
            RuleId::ALL
                .into_iter()
                .filter(|id| !file_disabled.contains(id))
                .collect()
        } else {
            only
        };
        rules.retain(|id| !disabled.contains(id));
        rules.sort();
        rules.dedup();

        if rules.is_empty() {
            log::warn!("all rules are disabled; every input will pass");
        }

        let inputs = if args.files.is_empty() {
            vec![Input::Stdin]
        } else {
            args.files
                .into_iter()
                .map(|path| {
                    if path.as_os_str() == "-" {
                        Input::Stdin
                    } else {
                        Input::File(path)
                    }
                })
                .collect()
        };

        Ok(Config {
            inputs,
            rules,
            format: args.format.or(file_config.format).unwrap_or_default(),
            log_level: args.log_level,
        })
    }

    /// Checker over the enabled rules
    pub fn checker(&self) -> FocusChecker {
        FocusChecker::with_rules(self.rules.iter().copied())
    }
}

fn parse_rule_names(names: &[String]) -> Result<Vec<RuleId>> {
    names.iter().map(|name| name.parse()).collect()
}
