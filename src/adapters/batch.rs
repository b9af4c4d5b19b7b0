use crate::core::engine::GrowthEngine;
use crate::domain::model::RawInput;
use crate::utils::error::Result;
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchSummary {
    pub total: usize,
    pub evaluated: usize,
    pub rejected: usize,
}

#[derive(Debug, Serialize)]
struct BatchRow {
    age: Option<String>,
    sex: Option<String>,
    current_height: Option<String>,
    father_height: Option<String>,
    mother_height: Option<String>,
    range_min: Option<i32>,
    range_max: Option<i32>,
    midpoint: Option<i32>,
    progress: Option<u8>,
    status: &'static str,
    error: Option<String>,
}

impl BatchRow {
    fn from_raw(raw: RawInput) -> Self {
        Self {
            age: raw.age,
            sex: raw.sex,
            current_height: raw.current_height,
            father_height: raw.father_height,
            mother_height: raw.mother_height,
            range_min: None,
            range_max: None,
            midpoint: None,
            progress: None,
            status: "rejected",
            error: None,
        }
    }
}

/// Evaluates every CSV record. Rows failing validation are written back with
/// `status=rejected` and the corrective message instead of aborting the run.
pub fn run_batch<R: Read, W: Write>(
    engine: &GrowthEngine,
    reader: R,
    writer: W,
) -> Result<BatchSummary> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut summary = BatchSummary::default();

    for (index, record) in csv_reader.deserialize::<RawInput>().enumerate() {
        let raw = record?;
        summary.total += 1;

        let outcome = engine.evaluate(&raw);
        let mut row = BatchRow::from_raw(raw);
        match outcome {
            Ok(report) => {
                row.range_min = Some(report.range.min);
                row.range_max = Some(report.range.max);
                row.midpoint = Some(report.range.midpoint);
                row.progress = Some(report.progress);
                row.status = "evaluated";
                summary.evaluated += 1;
            }
            Err(e) => {
                tracing::debug!("Row {} rejected: {}", index + 1, e);
                row.error = Some(e.user_friendly_message());
                summary.rejected += 1;
            }
        }

        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    tracing::info!(
        "📊 Batch finished: {} rows, {} evaluated, {} rejected",
        summary.total,
        summary.evaluated,
        summary.rejected
    );

    Ok(summary)
}

pub fn run_batch_files<P: AsRef<Path>, Q: AsRef<Path>>(
    engine: &GrowthEngine,
    input_path: P,
    output_path: Q,
) -> Result<BatchSummary> {
    let input = File::open(input_path.as_ref())?;

    if let Some(parent) = output_path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let output = File::create(output_path.as_ref())?;

    run_batch(engine, input, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_marks_invalid_rows_rejected() {
        let input = "age,sex,current_height,father_height,mother_height\n\
                     11,male,150,175,160\n\
                     25,female,150,175,160\n\
                     13, f ,155,175,160\n";
        let mut output = Vec::new();

        let summary = run_batch(&GrowthEngine::new(), input.as_bytes(), &mut output).unwrap();
        assert_eq!(
            summary,
            BatchSummary {
                total: 3,
                evaluated: 2,
                rejected: 1
            }
        );

        let written = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(
            lines[0],
            "age,sex,current_height,father_height,mother_height,range_min,range_max,midpoint,progress,status,error"
        );
        assert_eq!(lines[1], "11,male,150,175,160,166,183,174,86,evaluated,");
        assert_eq!(
            lines[2],
            "25,female,150,175,160,,,,,rejected,Enter an age between 8 and 20 years."
        );
        assert!(lines[3].starts_with("13,f,155,175,160,153,170,161,"));
    }

    #[test]
    fn test_batch_reports_missing_fields() {
        let input = "age,sex,current_height,father_height,mother_height\n12,,150,175,160\n";
        let mut output = Vec::new();

        let summary = run_batch(&GrowthEngine::new(), input.as_bytes(), &mut output).unwrap();
        assert_eq!(summary.rejected, 1);
        assert!(String::from_utf8(output)
            .unwrap()
            .contains("Select a biological sex."));
    }
}
