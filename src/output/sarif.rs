use serde::Serialize;

use crate::checker::CheckResult;
use crate::error::Result;
use crate::header::ISSUE_INVALID_FORMAT;

use super::OutputFormatter;

/// SARIF 2.1.0 output formatter for GitHub Code Scanning and other CI/CD tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct SarifFormatter;

const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";
const SARIF_VERSION: &str = "2.1.0";
const TOOL_NAME: &str = "header-guard";
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

const RULE_INVALID_HEADER: &str = "header-guard/InvalidHeaderFormat";

#[derive(Serialize)]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<Run>,
}

#[derive(Serialize)]
struct Run {
    tool: Tool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct Tool {
    driver: ToolDriver,
}

#[derive(Serialize)]
struct ToolDriver {
    name: &'static str,
    version: &'static str,
    rules: Vec<ReportingDescriptor>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportingDescriptor {
    id: &'static str,
    name: &'static str,
    short_description: MultiformatMessageString,
    full_description: MultiformatMessageString,
    default_configuration: ReportingConfiguration,
}

#[derive(Serialize)]
struct ReportingConfiguration {
    level: &'static str,
}

#[derive(Serialize)]
struct MultiformatMessageString {
    text: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: &'static str,
    rule_index: usize,
    level: &'static str,
    message: Message,
    locations: Vec<Location>,
}

#[derive(Serialize)]
struct Message {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Location {
    physical_location: PhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhysicalLocation {
    artifact_location: ArtifactLocation,
    region: Region,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactLocation {
    uri: String,
    uri_base_id: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Region {
    start_line: usize,
}

impl SarifFormatter {
    fn build_rules() -> Vec<ReportingDescriptor> {
        vec![ReportingDescriptor {
            id: RULE_INVALID_HEADER,
            name: ISSUE_INVALID_FORMAT,
            short_description: MultiformatMessageString {
                text: "File header does not match the required template",
            },
            full_description: MultiformatMessageString {
                text: "The leading doc comment of this file differs from the configured copyright header.",
            },
            default_configuration: ReportingConfiguration { level: "error" },
        }]
    }

    fn convert_result(result: &CheckResult) -> Option<SarifResult> {
        let diagnostic = result.diagnostic()?;

        // Convert path to URI format (forward slashes)
        let uri = result.path().display().to_string().replace('\\', "/");

        Some(SarifResult {
            rule_id: RULE_INVALID_HEADER,
            rule_index: 0,
            level: "error",
            message: Message {
                text: diagnostic.message,
            },
            locations: vec![Location {
                physical_location: PhysicalLocation {
                    artifact_location: ArtifactLocation {
                        uri,
                        uri_base_id: "%SRCROOT%",
                    },
                    region: Region {
                        start_line: diagnostic.line,
                    },
                },
            }],
        })
    }
}

impl OutputFormatter for SarifFormatter {
    fn format(&self, results: &[CheckResult]) -> Result<String> {
        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![Run {
                tool: Tool {
                    driver: ToolDriver {
                        name: TOOL_NAME,
                        version: TOOL_VERSION,
                        rules: Self::build_rules(),
                    },
                },
                results: results.iter().filter_map(Self::convert_result).collect(),
            }],
        };

        Ok(serde_json::to_string_pretty(&log)?)
    }
}

#[cfg(test)]
#[path = "sarif_tests.rs"]
mod tests;
