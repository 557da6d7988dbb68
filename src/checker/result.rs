use std::path::{Path, PathBuf};

use crate::header::{Diagnostic, MismatchDescriptor, Outcome};

/// Result of checking one file's header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub path: PathBuf,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Passed,
    Skipped,
    Failed,
}

impl CheckStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }
}

impl CheckResult {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, outcome: Outcome) -> Self {
        Self {
            path: path.into(),
            outcome,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn status(&self) -> CheckStatus {
        match self.outcome {
            Outcome::Match => CheckStatus::Passed,
            Outcome::Skip => CheckStatus::Skipped,
            Outcome::Mismatch(_) => CheckStatus::Failed,
        }
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.outcome, Outcome::Match)
    }

    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self.outcome, Outcome::Skip)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.outcome, Outcome::Mismatch(_))
    }

    #[must_use]
    pub const fn mismatch(&self) -> Option<&MismatchDescriptor> {
        self.outcome.mismatch()
    }

    #[must_use]
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        self.mismatch().map(MismatchDescriptor::to_diagnostic)
    }
}
