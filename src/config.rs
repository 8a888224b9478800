use crate::consts::TOP_PLASTICS_LIMIT;
use crate::error::{BagResult, DiscBagError};
use crate::stats::StatsOptions;
use clap::{parser::ValueSource, ArgMatches, Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Length of the plastics ranking
    #[arg(long, default_value_t = TOP_PLASTICS_LIMIT)]
    pub top_plastics: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Include the per-category stability table
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub by_category: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_plastics: TOP_PLASTICS_LIMIT,
            format: OutputFormat::Table,
            by_category: true,
        }
    }
}

impl ReportConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> BagResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            DiscBagError::Config(format!("Failed to read config '{}': {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BagResult<()> {
        if self.top_plastics == 0 {
            return Err(DiscBagError::Validation(
                "top_plastics must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Overlay values the user typed on the command line onto `self`,
    /// leaving file-provided values alone where the CLI only had defaults.
    pub fn merge_from_cli(&mut self, cli: &ReportConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(top_plastics, "top_plastics");
        update_if_present!(format, "format");
        update_if_present!(by_category, "by_category");
    }

    pub fn stats_options(&self) -> StatsOptions {
        StatsOptions {
            top_plastics: self.top_plastics,
        }
    }
}
