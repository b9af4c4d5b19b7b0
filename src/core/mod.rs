pub mod engine;
pub mod narrator;
pub mod predictor;

pub use crate::domain::model::{GrowthReport, HeightRange, MeasurementInput, RawInput, Sex};
pub use crate::domain::ports::{InputSource, Renderer};
pub use crate::utils::error::Result;
