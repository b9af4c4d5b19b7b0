//! Progress percentage and the explanatory text shown next to a prediction.
//!
//! Every function here is pure: identical inputs always give identical output.

use crate::domain::model::{
    AgeNote, Explanation, GeneticNote, GrowthReport, GrowthStage, HeightRange, MeasurementInput,
    Paragraph, ParentalInfluence, RangePosition, Segment, Sex,
};

pub const PROGRESS_FLOOR: u8 = 10;
pub const PROGRESS_CEILING: u8 = 100;
/// Heights this far below `range.min` or further are pinned to the floor.
pub const EARLY_STAGE_GAP_CM: f64 = 30.0;

pub const ABOVE_AVERAGE_PARENTS_CM: f64 = 175.0;
pub const AVERAGE_PARENTS_CM: f64 = 165.0;

/// Range-relative progress toward the predicted adult height, in `[10, 100]`.
/// Age and sex play no part in this policy, so neither is taken.
pub fn compute_progress(current_height: f64, range: &HeightRange) -> u8 {
    if current_height >= f64::from(range.max) {
        return PROGRESS_CEILING;
    }
    if current_height <= f64::from(range.min) - EARLY_STAGE_GAP_CM {
        return PROGRESS_FLOOR;
    }

    let centre = f64::from(range.min + range.max) / 2.0;
    let progress = current_height / centre * 100.0;

    progress
        .clamp(f64::from(PROGRESS_FLOOR), f64::from(PROGRESS_CEILING))
        .round() as u8
}

/// Rounds to the 0.1 cm precision used in prose.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats centimetres without a trailing `.0` and with at most one decimal.
pub fn format_cm(value: f64) -> String {
    let rounded = round_tenth(value);
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

pub fn explain(current_height: f64, range: &HeightRange) -> Explanation {
    let headline = Paragraph {
        segments: vec![
            Segment::Plain(
                "Based on your parents' heights, your adult height will probably be between "
                    .to_string(),
            ),
            Segment::Strong(format!("{} cm", range.min)),
            Segment::Plain(" and ".to_string()),
            Segment::Strong(format!("{} cm", range.max)),
            Segment::Plain(".".to_string()),
        ],
    };

    // 分支以顯示值（0.1 cm）為準
    let shown = round_tenth(current_height);
    let current = format_cm(shown);
    let (position, detail) = if shown < f64::from(range.min) {
        let min_gain = round_tenth(f64::from(range.min) - shown);
        let max_gain = round_tenth(f64::from(range.max) - shown);
        (
            RangePosition::Below { min_gain, max_gain },
            format!(
                "You are {} cm tall now. If you follow the expected pattern, you could grow between {} and {} cm more.",
                current,
                format_cm(min_gain),
                format_cm(max_gain)
            ),
        )
    } else if range.contains(shown) {
        (
            RangePosition::Within,
            format!(
                "Your current height of {} cm already falls within the predicted range. This is a good sign that your growth is on track.",
                current
            ),
        )
    } else {
        (
            RangePosition::Above,
            format!(
                "You are already {} cm tall, which is above the predicted range. Everyone is different, and this is completely normal.",
                current
            ),
        )
    };

    Explanation {
        position,
        paragraphs: vec![
            headline,
            Paragraph {
                segments: vec![Segment::Plain(detail)],
            },
        ],
    }
}

pub fn parental_influence(father_height: f64, mother_height: f64) -> ParentalInfluence {
    let average = (father_height + mother_height) / 2.0;

    if average >= ABOVE_AVERAGE_PARENTS_CM {
        ParentalInfluence::AboveAverage
    } else if average >= AVERAGE_PARENTS_CM {
        ParentalInfluence::Average
    } else {
        ParentalInfluence::OneFactorAmongSeveral
    }
}

pub fn genetic_note(father_height: f64, mother_height: f64) -> GeneticNote {
    let influence = parental_influence(father_height, mother_height);
    GeneticNote {
        influence,
        text: influence.message().to_string(),
    }
}

/// Ages (inclusive) of the peak growth window.
pub fn spurt_window(sex: Sex) -> (u8, u8) {
    match sex {
        Sex::Male => (12, 16),
        Sex::Female => (10, 14),
    }
}

pub fn growth_stage(age: u8, sex: Sex) -> GrowthStage {
    let (start, end) = spurt_window(sex);
    if age < start {
        GrowthStage::PreSpurt
    } else if age <= end {
        GrowthStage::PeakWindow
    } else {
        GrowthStage::Ending
    }
}

pub fn age_note(age: u8, sex: Sex) -> AgeNote {
    let stage = growth_stage(age, sex);
    let text = match stage {
        GrowthStage::PreSpurt => {
            let (start, end) = spurt_window(sex);
            format!(
                "At your age, the main growth spurt has not started yet. It usually happens between {} and {}.",
                start, end
            )
        }
        GrowthStage::PeakWindow => {
            "You are in the stage where growth is fastest. The growth spurt usually lasts 2-3 years."
                .to_string()
        }
        GrowthStage::Ending => format!(
            "At {} years old, growth is usually ending or has already ended.",
            age
        ),
    };

    AgeNote { stage, text }
}

/// Builds the full report for an already validated input and its range.
pub fn narrate(input: &MeasurementInput, range: HeightRange) -> GrowthReport {
    GrowthReport {
        input: *input,
        range,
        progress: compute_progress(input.current_height, &range),
        explanation: explain(input.current_height, &range),
        genetic_note: genetic_note(input.father_height, input.mother_height),
        age_note: age_note(input.age, input.sex),
    }
}
