use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // 同時接受原網頁表單送出的值
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "boy" | "masculino" => Ok(Sex::Male),
            "female" | "f" | "girl" | "femenino" => Ok(Sex::Female),
            other => Err(format!("Unrecognised sex: {}", other)),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

/// Validated input record. All heights in centimetres.
///
/// The core trusts these values: age in 8..=20, current height in 100..=220,
/// father height in 140..=220, mother height in 140..=200. Use
/// [`crate::utils::validation::validate_input`] to build one from untrusted data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    pub age: u8,
    pub sex: Sex,
    pub current_height: f64,
    pub father_height: f64,
    pub mother_height: f64,
}

/// Unvalidated input as collected from flags, a profile file or a CSV row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub age: Option<String>,
    pub sex: Option<String>,
    pub current_height: Option<String>,
    pub father_height: Option<String>,
    pub mother_height: Option<String>,
}

impl RawInput {
    /// Fields present in `other` replace the ones in `self`.
    pub fn overlay(self, other: RawInput) -> RawInput {
        RawInput {
            age: other.age.or(self.age),
            sex: other.sex.or(self.sex),
            current_height: other.current_height.or(self.current_height),
            father_height: other.father_height.or(self.father_height),
            mother_height: other.mother_height.or(self.mother_height),
        }
    }
}

impl From<MeasurementInput> for RawInput {
    fn from(input: MeasurementInput) -> Self {
        RawInput {
            age: Some(input.age.to_string()),
            sex: Some(input.sex.to_string()),
            current_height: Some(input.current_height.to_string()),
            father_height: Some(input.father_height.to_string()),
            mother_height: Some(input.mother_height.to_string()),
        }
    }
}

/// Predicted adult height range in whole centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightRange {
    pub min: i32,
    pub max: i32,
    pub midpoint: i32,
}

impl HeightRange {
    pub fn contains(&self, height: f64) -> bool {
        height >= f64::from(self.min) && height <= f64::from(self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Segment {
    Plain(String),
    Strong(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Strong(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub segments: Vec<Segment>,
}

impl Paragraph {
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "position", rename_all = "snake_case")]
pub enum RangePosition {
    Below { min_gain: f64, max_gain: f64 },
    Within,
    Above,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub position: RangePosition,
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParentalInfluence {
    AboveAverage,
    Average,
    OneFactorAmongSeveral,
}

impl ParentalInfluence {
    pub fn message(&self) -> &'static str {
        match self {
            ParentalInfluence::AboveAverage => {
                "Your parents' average height is above average, which favours your growth potential."
            }
            ParentalInfluence::Average => "Your parents' heights are in an average range.",
            ParentalInfluence::OneFactorAmongSeveral => {
                "Your parents' height is one factor, but not the only one that influences yours."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    PreSpurt,
    PeakWindow,
    Ending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeNote {
    pub stage: GrowthStage,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneticNote {
    pub influence: ParentalInfluence,
    pub text: String,
}

/// Everything the rendering boundary needs for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthReport {
    pub input: MeasurementInput,
    pub range: HeightRange,
    pub progress: u8,
    pub explanation: Explanation,
    pub genetic_note: GeneticNote,
    pub age_note: AgeNote,
}
