use crate::domain::model::{MeasurementInput, RawInput, Sex};
use crate::utils::error::{GrowthError, Result};

pub const AGE_RANGE: (i64, i64) = (8, 20);
pub const CURRENT_HEIGHT_RANGE: (f64, f64) = (100.0, 220.0);
pub const FATHER_HEIGHT_RANGE: (f64, f64) = (140.0, 220.0);
pub const MOTHER_HEIGHT_RANGE: (f64, f64) = (140.0, 200.0);

const AGE_MESSAGE: &str = "Enter an age between 8 and 20 years.";
const SEX_MESSAGE: &str = "Select a biological sex.";
const CURRENT_HEIGHT_MESSAGE: &str = "Enter a valid height (between 100 and 220 cm).";
const FATHER_HEIGHT_MESSAGE: &str = "Enter the father's height (between 140 and 220 cm).";
const MOTHER_HEIGHT_MESSAGE: &str = "Enter the mother's height (between 140 and 200 cm).";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_required_field<'a, T>(
    field_name: &str,
    value: &'a Option<T>,
    reason: &str,
) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| GrowthError::MissingInputError {
        field: field_name.to_string(),
        reason: reason.to_string(),
    })
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
    reason: &str,
) -> Result<()> {
    if value < min || value > max {
        return Err(GrowthError::InvalidInputError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, raw: &str, reason: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid(field_name, raw, reason)),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(GrowthError::InvalidInputError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GrowthError::InvalidInputError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

fn invalid(field_name: &str, raw: &str, reason: &str) -> GrowthError {
    GrowthError::InvalidInputError {
        field: field_name.to_string(),
        value: raw.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_height(
    field_name: &str,
    raw: &Option<String>,
    (min, max): (f64, f64),
    reason: &str,
) -> Result<f64> {
    let raw = validate_required_field(field_name, raw, reason)?;
    let value = validate_finite(field_name, raw, reason)?;
    validate_range(field_name, value, min, max, reason)?;
    Ok(value)
}

/// 依表單順序檢查欄位，第一個錯誤即回傳
pub fn validate_input(raw: &RawInput) -> Result<MeasurementInput> {
    let age_raw = validate_required_field("age", &raw.age, AGE_MESSAGE)?;
    let age = age_raw
        .trim()
        .parse::<i64>()
        .map_err(|_| invalid("age", age_raw, AGE_MESSAGE))?;
    validate_range("age", age, AGE_RANGE.0, AGE_RANGE.1, AGE_MESSAGE)?;

    let sex_raw = validate_required_field("sex", &raw.sex, SEX_MESSAGE)?;
    let sex = sex_raw
        .parse::<Sex>()
        .map_err(|_| invalid("sex", sex_raw, SEX_MESSAGE))?;

    let current_height = validate_height(
        "current_height",
        &raw.current_height,
        CURRENT_HEIGHT_RANGE,
        CURRENT_HEIGHT_MESSAGE,
    )?;
    let father_height = validate_height(
        "father_height",
        &raw.father_height,
        FATHER_HEIGHT_RANGE,
        FATHER_HEIGHT_MESSAGE,
    )?;
    let mother_height = validate_height(
        "mother_height",
        &raw.mother_height,
        MOTHER_HEIGHT_RANGE,
        MOTHER_HEIGHT_MESSAGE,
    )?;

    Ok(MeasurementInput {
        // 範圍已檢查，轉換不會截斷
        age: age as u8,
        sex,
        current_height,
        father_height,
        mother_height,
    })
}

impl Validate for RawInput {
    fn validate(&self) -> Result<()> {
        validate_input(self).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(age: &str, sex: &str, current: &str, father: &str, mother: &str) -> RawInput {
        RawInput {
            age: Some(age.to_string()),
            sex: Some(sex.to_string()),
            current_height: Some(current.to_string()),
            father_height: Some(father.to_string()),
            mother_height: Some(mother.to_string()),
        }
    }

    fn reason_of(result: Result<MeasurementInput>) -> String {
        result.unwrap_err().user_friendly_message()
    }

    #[test]
    fn test_validate_input_accepts_valid_record() {
        let input = validate_input(&raw("12", "masculino", "150.5", "180", "165")).unwrap();
        assert_eq!(input.age, 12);
        assert_eq!(input.sex, Sex::Male);
        assert_eq!(input.current_height, 150.5);
        assert_eq!(input.father_height, 180.0);
        assert_eq!(input.mother_height, 165.0);
        assert!(raw("12", "masculino", "150.5", "180", "165").validate().is_ok());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(validate_input(&raw("8", "f", "100", "140", "140")).is_ok());
        assert!(validate_input(&raw("20", "m", "220", "220", "200")).is_ok());
    }

    #[test]
    fn test_age_rejections() {
        assert_eq!(reason_of(validate_input(&raw("7", "m", "150", "180", "165"))), AGE_MESSAGE);
        assert_eq!(reason_of(validate_input(&raw("21", "m", "150", "180", "165"))), AGE_MESSAGE);
        assert_eq!(reason_of(validate_input(&raw("abc", "m", "150", "180", "165"))), AGE_MESSAGE);
        assert_eq!(reason_of(validate_input(&raw("12.5", "m", "150", "180", "165"))), AGE_MESSAGE);
    }

    #[test]
    fn test_first_failure_wins() {
        // 年齡與身高都錯時，先回報年齡
        let result = validate_input(&raw("30", "x", "50", "100", "300"));
        assert_eq!(reason_of(result), AGE_MESSAGE);

        let result = validate_input(&raw("12", "x", "50", "100", "300"));
        assert_eq!(reason_of(result), SEX_MESSAGE);
    }

    #[test]
    fn test_height_rejections() {
        assert_eq!(
            reason_of(validate_input(&raw("12", "m", "99.9", "180", "165"))),
            CURRENT_HEIGHT_MESSAGE
        );
        assert_eq!(
            reason_of(validate_input(&raw("12", "m", "NaN", "180", "165"))),
            CURRENT_HEIGHT_MESSAGE
        );
        assert_eq!(
            reason_of(validate_input(&raw("12", "m", "150", "221", "165"))),
            FATHER_HEIGHT_MESSAGE
        );
        assert_eq!(
            reason_of(validate_input(&raw("12", "m", "150", "180", "201"))),
            MOTHER_HEIGHT_MESSAGE
        );
        assert_eq!(
            reason_of(validate_input(&raw("12", "m", "150", "180", "inf"))),
            MOTHER_HEIGHT_MESSAGE
        );
    }

    #[test]
    fn test_missing_field_is_reported() {
        let mut input = raw("12", "m", "150", "180", "165");
        input.sex = None;
        let err = validate_input(&input).unwrap_err();
        assert!(matches!(err, GrowthError::MissingInputError { ref field, .. } if field == "sex"));
        assert_eq!(err.user_friendly_message(), SEX_MESSAGE);
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output", "./report.html").is_ok());
        assert!(validate_path("output", "  ").is_err());
        assert!(validate_path("output", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("age", 5, 1, 10, "bad").is_ok());
        assert!(validate_range("age", 0, 1, 10, "bad").is_err());
        assert!(validate_range("height", 10.5, 1.0, 10.0, "bad").is_err());
    }
}
