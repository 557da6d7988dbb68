use std::io::Write as IoWrite;

use crate::checker::{CheckResult, CheckStatus};
use crate::error::Result;

use super::{OutputFormatter, Summary};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_icon(status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Passed => "✓",
            CheckStatus::Skipped => "-",
            CheckStatus::Failed => "✗",
        }
    }

    const fn status_color(status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Passed => ansi::GREEN,
            CheckStatus::Skipped => ansi::YELLOW,
            CheckStatus::Failed => ansi::RED,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_result(&self, result: &CheckResult, output: &mut Vec<u8>) {
        let status = result.status();
        let icon = Self::status_icon(status);
        let label = self.colorize(
            &status.as_str().to_uppercase(),
            Self::status_color(status),
        );

        match result.diagnostic() {
            Some(diagnostic) => {
                writeln!(
                    output,
                    "{icon} {label}: {}:{}",
                    result.path().display(),
                    diagnostic.line
                )
                .ok();
                writeln!(output, "   {}", escape_line_breaks(&diagnostic.message)).ok();
                writeln!(output, "   Code: {}", diagnostic.code).ok();
            }
            None => {
                writeln!(output, "{icon} {label}: {}", result.path().display()).ok();
            }
        }
    }

    fn format_summary(&self, summary: Summary) -> String {
        let passed = self.colorize(&summary.passed.to_string(), ansi::GREEN);
        let skipped = self.colorize(&summary.skipped.to_string(), ansi::YELLOW);
        let failed = self.colorize(&summary.failed.to_string(), ansi::RED);

        format!(
            "Summary: {} files checked, {passed} passed, {skipped} skipped, {failed} failed",
            summary.total
        )
    }
}

/// Keeps a message on one line of the report.
fn escape_line_breaks(message: &str) -> String {
    message.replace('\r', "\\r").replace('\n', "\\n")
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[CheckResult]) -> Result<String> {
        let mut output = Vec::new();

        for result in results.iter().filter(|r| r.is_failed()) {
            self.format_result(result, &mut output);
            writeln!(output).ok();
        }

        // Skipped and passed files only in verbose mode
        if self.verbose >= 1 {
            for result in results.iter().filter(|r| !r.is_failed()) {
                self.format_result(result, &mut output);
            }
        }

        let summary = self.format_summary(Summary::from_results(results));
        writeln!(output, "{summary}").ok();

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
