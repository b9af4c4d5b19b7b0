use crate::core::{narrator, predictor};
use crate::domain::model::{GrowthReport, MeasurementInput};
use crate::domain::ports::InputSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_input;

/// Runs validate → predict → narrate for one submission.
#[derive(Debug, Default, Clone, Copy)]
pub struct GrowthEngine;

impl GrowthEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate<S: InputSource + ?Sized>(&self, source: &S) -> Result<GrowthReport> {
        let raw = source.raw_input();
        tracing::debug!("Raw input: {:?}", raw);

        let input = validate_input(&raw).map_err(|e| {
            tracing::warn!("⚠️ Input rejected: {}", e);
            e
        })?;

        Ok(self.evaluate_validated(&input))
    }

    pub fn evaluate_validated(&self, input: &MeasurementInput) -> GrowthReport {
        tracing::debug!(
            "Predicting range for father={} mother={} sex={}",
            input.father_height,
            input.mother_height,
            input.sex
        );
        let range = predictor::predict_range(input.father_height, input.mother_height, input.sex);

        let report = narrator::narrate(input, range);
        tracing::info!(
            "📏 Predicted range {}-{} cm (midpoint {}), progress {}%",
            report.range.min,
            report.range.max,
            report.range.midpoint,
            report.progress
        );

        report
    }
}
