pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::render::{renderer_for, HtmlRenderer, JsonRenderer, OutputFormat, TextRenderer};
pub use config::{profile::ProfileConfig, CliConfig, ResolvedRequest};
pub use crate::core::engine::GrowthEngine;
pub use domain::model::{GrowthReport, HeightRange, MeasurementInput, RawInput, Sex};
pub use utils::error::{GrowthError, Result};
