use std::fmt::Write;

use crate::checker::HeaderChecker;
use crate::cli::{Cli, ExplainArgs};
use crate::header::ExpectedHeader;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, resolve_template};

#[must_use]
pub fn run_explain(args: &ExplainArgs, cli: &Cli) -> i32 {
    match run_explain_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Renders the header files are compared against.
///
/// # Errors
/// Returns an error if the configuration or the template cannot be loaded.
pub(crate) fn run_explain_impl(args: &ExplainArgs, cli: &Cli) -> Result<String> {
    let mut loaded = load_config(args.config.as_deref(), cli.no_config)?;
    if let Some(owner) = &args.owner {
        loaded.config.header.code_owner.clone_from(owner);
    }
    if args.force_current_year {
        loaded.config.header.force_current_year = true;
    }

    let template = resolve_template(&loaded, args.template_file.as_deref())?;
    let checker = HeaderChecker::new(template, loaded.config.header.settings());
    let expected = checker.expected_header();

    let mut output = String::new();
    let year = if checker.settings().force_current_year {
        "current year only"
    } else {
        "any four-digit year"
    };
    let _ = writeln!(
        output,
        "Expected header (owner: {}, year: {year}):\n",
        checker.settings().code_owner
    );
    output.push_str(&expected.text);
    if !expected.text.ends_with('\n') {
        output.push('\n');
    }

    if args.tokens {
        output.push('\n');
        format_tokens(&expected, &mut output);
    }
    Ok(output)
}

/// One row per token; rows before the comparison entry are marked `-`.
fn format_tokens(expected: &ExpectedHeader, output: &mut String) {
    let _ = writeln!(output, "Tokens (compared from #{}):", expected.entry);
    for (index, token) in expected.tokens.iter().enumerate() {
        let marker = if index < expected.entry { '-' } else { ' ' };
        let _ = writeln!(
            output,
            "{marker}{index:>4}  line {:>3}  {:<24} {:?}",
            token.line,
            token.token_type.as_str(),
            token.content
        );
    }
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod tests;
