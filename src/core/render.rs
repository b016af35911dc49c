use crate::domain::model::{OutputFormat, StringReport};
use crate::utils::error::{Result, StrUtilError};
use serde::Serialize;

pub const CSV_HEADER: [&str; 5] = ["line", "input", "reversed", "is_palindrome", "vowel_count"];

#[derive(Serialize)]
struct JsonDocument<'a> {
    generated_at: &'a str,
    reports: &'a [StringReport],
}

pub fn render(format: OutputFormat, reports: &[StringReport], generated_at: &str) -> Result<String> {
    match format {
        OutputFormat::Json => render_json(reports, generated_at),
        OutputFormat::Csv => render_csv(reports),
        OutputFormat::Text => Ok(render_text(reports)),
    }
}

pub fn render_json(reports: &[StringReport], generated_at: &str) -> Result<String> {
    let document = JsonDocument {
        generated_at,
        reports,
    };
    let mut json = serde_json::to_string_pretty(&document)?;
    json.push('\n');
    Ok(json)
}

pub fn render_csv(reports: &[StringReport]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for report in reports {
        writer.write_record([
            report.line.to_string(),
            report.input.clone(),
            report.reversed.clone().unwrap_or_default(),
            report.is_palindrome.map(|b| b.to_string()).unwrap_or_default(),
            report.vowel_count.map(|n| n.to_string()).unwrap_or_default(),
        ])?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| StrUtilError::ProcessingError {
            message: format!("Failed to flush CSV output: {}", e),
        })?;
    String::from_utf8(data).map_err(|e| StrUtilError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

pub fn render_text(reports: &[StringReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let mut parts = vec![format!("{:?}", report.input)];
        if let Some(reversed) = &report.reversed {
            parts.push(format!("reversed={:?}", reversed));
        }
        if let Some(palindrome) = report.is_palindrome {
            parts.push(format!("palindrome={}", palindrome));
        }
        if let Some(count) = report.vowel_count {
            parts.push(format!("vowels={}", count));
        }
        out.push_str(&parts.join(" "));
        out.push('\n');
    }
    out
}
