pub mod profile;

use crate::adapters::render::OutputFormat;
use crate::domain::model::RawInput;
use crate::domain::ports::InputSource;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use profile::ProfileConfig;

#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "growth-check"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Estimate adult height from parental heights (mid-parental / Tanner method)")
)]
pub struct CliConfig {
    /// Age in whole years (8-20)
    #[cfg_attr(feature = "cli", arg(long))]
    pub age: Option<String>,

    /// Biological sex: male or female
    #[cfg_attr(feature = "cli", arg(long))]
    pub sex: Option<String>,

    /// Current height in cm (100-220)
    #[cfg_attr(feature = "cli", arg(long))]
    pub current_height: Option<String>,

    /// Father's height in cm (140-220)
    #[cfg_attr(feature = "cli", arg(long))]
    pub father_height: Option<String>,

    /// Mother's height in cm (140-200)
    #[cfg_attr(feature = "cli", arg(long))]
    pub mother_height: Option<String>,

    /// TOML profile; flags override its values
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Output format: text, json or html
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub format: Option<String>,

    /// Write the result to this file instead of stdout
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub output: Option<String>,

    /// Pretty-print JSON output
    #[cfg_attr(feature = "cli", arg(long))]
    pub pretty: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON"))]
    pub log_json: bool,
}

/// Flags and profile merged into what a single run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub input: RawInput,
    pub format: OutputFormat,
    pub pretty: bool,
    pub output: Option<String>,
}

impl InputSource for CliConfig {
    fn raw_input(&self) -> RawInput {
        RawInput {
            age: self.age.clone(),
            sex: self.sex.clone(),
            current_height: self.current_height.clone(),
            father_height: self.father_height.clone(),
            mother_height: self.mother_height.clone(),
        }
    }
}

impl CliConfig {
    /// 載入 profile（若有）並套用命令列覆蓋
    pub fn resolve(&self) -> Result<ResolvedRequest> {
        let profile = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading profile from: {}", path);
                let profile = ProfileConfig::from_file(path)?;
                profile.validate()?;
                Some(profile)
            }
            None => None,
        };

        let input = match &profile {
            Some(p) => p.raw_input().overlay(self.raw_input()),
            None => self.raw_input(),
        };

        let format = match &self.format {
            Some(f) => f.parse()?,
            None => match &profile {
                Some(p) => p.output_format()?.unwrap_or_default(),
                None => OutputFormat::default(),
            },
        };

        let pretty = self.pretty || profile.as_ref().map(ProfileConfig::pretty).unwrap_or(false);

        Ok(ResolvedRequest {
            input,
            format,
            pretty,
            output: self.output.clone(),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(f) = &self.format {
            f.parse::<OutputFormat>()?;
        }
        if let Some(path) = &self.output {
            crate::utils::validation::validate_path("output", path)?;
        }
        Ok(())
    }
}
