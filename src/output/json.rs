use serde::Serialize;

use crate::checker::CheckResult;
use crate::error::Result;

use super::{OutputFormatter, Summary};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput {
    summary: JsonSummary,
    results: Vec<FileResult>,
}

#[derive(Serialize)]
struct JsonSummary {
    total_files: usize,
    passed: usize,
    skipped: usize,
    failed: usize,
}

#[derive(Serialize)]
struct FileResult {
    path: String,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[CheckResult]) -> Result<String> {
        let summary = Summary::from_results(results);

        let output = JsonOutput {
            summary: JsonSummary {
                total_files: summary.total,
                passed: summary.passed,
                skipped: summary.skipped,
                failed: summary.failed,
            },
            results: results.iter().map(convert_result).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result(result: &CheckResult) -> FileResult {
    let diagnostic = result.diagnostic();
    FileResult {
        path: result.path().display().to_string(),
        status: result.status().as_str(),
        line: diagnostic.as_ref().map(|d| d.line),
        message: diagnostic.as_ref().map(|d| d.message.clone()),
        code: diagnostic.map(|d| d.code),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
