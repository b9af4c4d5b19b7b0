use crate::adapters::render::OutputFormat;
use crate::domain::model::RawInput;
use crate::domain::ports::InputSource;
use crate::utils::error::{GrowthError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A saved measurement profile, e.g.
///
/// ```toml
/// [subject]
/// age = 12
/// sex = "male"
/// current_height = 150.5
///
/// [parents]
/// father_height = 180
/// mother_height = 165
///
/// [output]
/// format = "json"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub subject: SubjectConfig,
    #[serde(default)]
    pub parents: ParentsConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectConfig {
    pub age: Option<i64>,
    pub sex: Option<String>,
    pub current_height: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParentsConfig {
    pub father_height: Option<f64>,
    pub mother_height: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub pretty: Option<bool>,
}

impl ProfileConfig {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GrowthError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GrowthError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CHILD_HEIGHT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GrowthError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(str::parse::<OutputFormat>)
            .transpose()
    }

    pub fn pretty(&self) -> bool {
        self.output.as_ref().and_then(|o| o.pretty).unwrap_or(false)
    }
}

impl InputSource for ProfileConfig {
    fn raw_input(&self) -> RawInput {
        RawInput {
            age: self.subject.age.map(|v| v.to_string()),
            sex: self.subject.sex.clone(),
            current_height: self.subject.current_height.map(|v| v.to_string()),
            father_height: self.parents.father_height.map(|v| v.to_string()),
            mother_height: self.parents.mother_height.map(|v| v.to_string()),
        }
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        self.output_format().map(|_| ())
    }
}
