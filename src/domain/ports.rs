use crate::domain::model::{GrowthReport, RawInput};
use crate::utils::error::Result;

/// Anything that can supply the five form fields before validation.
pub trait InputSource {
    fn raw_input(&self) -> RawInput;
}

impl InputSource for RawInput {
    fn raw_input(&self) -> RawInput {
        self.clone()
    }
}

pub trait Renderer {
    fn render(&self, report: &GrowthReport) -> Result<String>;
}
