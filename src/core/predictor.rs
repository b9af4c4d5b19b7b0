//! Mid-parental height (Tanner) prediction.

use crate::domain::model::{HeightRange, Sex};

/// Sex offset added to (male) or subtracted from (female) the parents' sum.
pub const GENDER_ADJUSTMENT_CM: f64 = 13.0;
/// Half-width of the predicted range around the mid-parental height.
pub const MARGIN_OF_ERROR_CM: f64 = 8.5;

/// Unrounded mid-parental height.
pub fn mid_parental_height(father_height: f64, mother_height: f64, sex: Sex) -> f64 {
    match sex {
        Sex::Male => (father_height + mother_height + GENDER_ADJUSTMENT_CM) / 2.0,
        Sex::Female => (father_height + mother_height - GENDER_ADJUSTMENT_CM) / 2.0,
    }
}

/// Predicts the adult height range from the parents' heights.
///
/// No bounds checking happens here: out-of-domain heights give a
/// mathematically valid but meaningless range. Each bound is rounded
/// (half away from zero) from the unrounded midpoint, so `max - min == 17`.
pub fn predict_range(father_height: f64, mother_height: f64, sex: Sex) -> HeightRange {
    let midpoint = mid_parental_height(father_height, mother_height, sex);

    HeightRange {
        min: (midpoint - MARGIN_OF_ERROR_CM).round() as i32,
        max: (midpoint + MARGIN_OF_ERROR_CM).round() as i32,
        midpoint: midpoint.round() as i32,
    }
}
