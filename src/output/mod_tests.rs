use std::path::PathBuf;

use super::*;
use crate::header::{MismatchDescriptor, MismatchKind, Outcome};
use crate::lexer::{Token, TokenType};

fn failed(path: &str) -> CheckResult {
    CheckResult::new(
        PathBuf::from(path),
        Outcome::Mismatch(MismatchDescriptor {
            kind: MismatchKind::ContentMismatch,
            actual: Token::new(TokenType::DocCommentString, "Foo", 3),
            expected: Token::new(TokenType::DocCommentString, "Bar", 3),
            line: 3,
        }),
    )
}

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("sarif".parse::<OutputFormat>().unwrap(), OutputFormat::Sarif);
}

#[test]
fn output_format_from_str_unknown() {
    let err = "html".parse::<OutputFormat>().unwrap_err();
    assert!(err.contains("html"));
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn summary_counts_each_status() {
    let results = vec![
        CheckResult::new("a.php", Outcome::Match),
        CheckResult::new("b.php", Outcome::Skip),
        failed("c.php"),
        failed("d.php"),
    ];

    let summary = Summary::from_results(&results);

    assert_eq!(
        summary,
        Summary {
            total: 4,
            passed: 1,
            skipped: 1,
            failed: 2,
        }
    );
}

#[test]
fn summary_of_nothing_is_zero() {
    assert_eq!(Summary::from_results(&[]), Summary::default());
}
