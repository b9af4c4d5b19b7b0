use crate::core::narrator::format_cm;
use crate::domain::model::{GrowthReport, Paragraph, Segment};
use crate::domain::ports::Renderer;
use crate::utils::error::{GrowthError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::str::FromStr;

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

impl FromStr for OutputFormat {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" => Ok(OutputFormat::Html),
            other => Err(GrowthError::ConfigError {
                message: format!("Unsupported output format: {}. Valid formats: text, json, html", other),
            }),
        }
    }
}

pub fn renderer_for(format: OutputFormat, pretty: bool) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer {
            pretty,
            include_timestamp: true,
        }),
        OutputFormat::Html => Box::new(HtmlRenderer),
    }
}

/// Plain terminal output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, report: &GrowthReport) -> Result<String> {
        let mut out = String::new();
        let filled = (usize::from(report.progress) * BAR_WIDTH + 50) / 100;

        writeln!(
            out,
            "Predicted adult height: {} - {} cm (midpoint {} cm)",
            report.range.min, report.range.max, report.range.midpoint
        )?;
        writeln!(out)?;
        writeln!(
            out,
            "Current: {} cm | Father: {} cm | Mother: {} cm",
            format_cm(report.input.current_height),
            format_cm(report.input.father_height),
            format_cm(report.input.mother_height)
        )?;
        writeln!(
            out,
            "Progress: [{}{}] {}%",
            "#".repeat(filled),
            "-".repeat(BAR_WIDTH - filled),
            report.progress
        )?;
        writeln!(out)?;
        for paragraph in &report.explanation.paragraphs {
            writeln!(out, "{}", paragraph.plain_text())?;
        }
        writeln!(out)?;
        writeln!(out, "Genetics: {}", report.genetic_note.text)?;
        writeln!(out, "Age: {}", report.age_note.text)?;

        Ok(out)
    }
}

#[derive(Serialize)]
struct TimestampedReport<'a> {
    generated_at: String,
    #[serde(flatten)]
    report: &'a GrowthReport,
}

#[derive(Debug, Clone, Copy)]
pub struct JsonRenderer {
    pub pretty: bool,
    pub include_timestamp: bool,
}

impl Renderer for JsonRenderer {
    fn render(&self, report: &GrowthReport) -> Result<String> {
        let value = if self.include_timestamp {
            serde_json::to_value(TimestampedReport {
                generated_at: chrono::Utc::now().to_rfc3339(),
                report,
            })?
        } else {
            serde_json::to_value(report)?
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(json)
    }
}

/// Result fragment for embedding in a page. All text is escaped.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn paragraph_html(paragraph: &Paragraph) -> String {
    let inner: String = paragraph
        .segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain(text) => escape_html(text),
            Segment::Strong(text) => format!("<strong>{}</strong>", escape_html(text)),
        })
        .collect();
    format!("<p>{}</p>", inner)
}

impl Renderer for HtmlRenderer {
    fn render(&self, report: &GrowthReport) -> Result<String> {
        let mut out = String::new();

        writeln!(out, r#"<div id="result-container">"#)?;
        writeln!(
            out,
            r#"  <p class="range"><span id="range-min">{}</span> - <span id="range-max">{}</span> cm</p>"#,
            report.range.min, report.range.max
        )?;
        writeln!(
            out,
            r#"  <ul class="summary"><li id="summary-current">{} cm</li><li id="summary-father">{} cm</li><li id="summary-mother">{} cm</li></ul>"#,
            format_cm(report.input.current_height),
            format_cm(report.input.father_height),
            format_cm(report.input.mother_height)
        )?;
        writeln!(
            out,
            r#"  <div class="progress"><div id="progress-bar" style="width: {}%"></div></div>"#,
            report.progress
        )?;
        writeln!(out, r#"  <div id="result-explanation">"#)?;
        for paragraph in &report.explanation.paragraphs {
            writeln!(out, "    {}", paragraph_html(paragraph))?;
        }
        writeln!(out, "  </div>")?;
        writeln!(
            out,
            r#"  <p id="genetic-text">{}</p>"#,
            escape_html(&report.genetic_note.text)
        )?;
        writeln!(
            out,
            r#"  <p id="age-text">{}</p>"#,
            escape_html(&report.age_note.text)
        )?;
        writeln!(out, "</div>")?;

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::GrowthEngine;
    use crate::domain::model::{MeasurementInput, Sex};

    fn sample_report() -> GrowthReport {
        GrowthEngine::new().evaluate_validated(&MeasurementInput {
            age: 11,
            sex: Sex::Male,
            current_height: 150.0,
            father_height: 175.0,
            mother_height: 160.0,
        })
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_renderer() {
        let text = TextRenderer.render(&sample_report()).unwrap();
        assert!(text.contains("Predicted adult height: 166 - 183 cm (midpoint 174 cm)"));
        assert!(text.contains("Progress: [#################---] 86%"));
        assert!(text.contains("between 12 and 16"));
    }

    #[test]
    fn test_json_renderer_without_timestamp() {
        let renderer = JsonRenderer {
            pretty: false,
            include_timestamp: false,
        };
        let json = renderer.render(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["range"]["min"], 166);
        assert_eq!(value["progress"], 86);
        assert_eq!(value["input"]["sex"], "male");
        assert_eq!(value["explanation"]["position"]["position"], "below");
        assert_eq!(value["age_note"]["stage"], "pre_spurt");
        assert!(value.get("generated_at").is_none());
    }

    #[test]
    fn test_json_gains_match_prose_precision() {
        let report = GrowthEngine::new().evaluate_validated(&MeasurementInput {
            age: 12,
            sex: Sex::Male,
            current_height: 165.94,
            father_height: 175.0,
            mother_height: 160.0,
        });
        let renderer = JsonRenderer {
            pretty: false,
            include_timestamp: false,
        };
        let value: serde_json::Value =
            serde_json::from_str(&renderer.render(&report).unwrap()).unwrap();

        assert_eq!(value["explanation"]["position"]["min_gain"], 0.1);
        assert_eq!(value["explanation"]["position"]["max_gain"], 17.1);
    }

    #[test]
    fn test_json_renderer_with_timestamp() {
        let renderer = JsonRenderer {
            pretty: true,
            include_timestamp: true,
        };
        let json = renderer.render(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["generated_at"].is_string());
        assert_eq!(value["range"]["max"], 183);
    }

    #[test]
    fn test_html_renderer_escapes_text() {
        let html = HtmlRenderer.render(&sample_report()).unwrap();
        assert!(html.contains("<strong>166 cm</strong>"));
        assert!(html.contains(r#"style="width: 86%""#));
        assert!(html.contains("parents&#39; heights"));
        assert!(!html.contains("parents' heights"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>"a" & 'b'</script>"#),
            "&lt;script&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/script&gt;"
        );
    }
}
