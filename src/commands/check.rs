use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::checker::{CheckResult, HeaderChecker};
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, validate_config};
use crate::output::{
    JsonFormatter, OutputFormat, OutputFormatter, SarifFormatter, ScanProgress, Summary,
    TextFormatter,
};
use crate::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use crate::{EXIT_CONFIG_ERROR, EXIT_HEADER_MISMATCH, EXIT_SUCCESS};

use super::context::{color_choice_to_mode, load_config, resolve_template, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli) -> crate::Result<i32> {
    // 1. Load configuration
    let mut loaded = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides and validate the merged result
    apply_cli_overrides(&mut loaded.config, args);
    validate_config(&loaded.config)?;

    // 3. Resolve the template once, before any file is read
    let template = resolve_template(&loaded, args.template_file.as_deref())?;
    let checker = HeaderChecker::new(template, loaded.config.header.settings());

    // 4. Discover files
    let files = scan_files(&loaded.config, &args.paths)?;
    debug!(count = files.len(), "files discovered");

    // 5. Check headers in parallel
    let results = check_files(&checker, &files, cli.quiet);

    // 6. Report
    let summary = Summary::from_results(&results);
    info!(
        total = summary.total,
        passed = summary.passed,
        skipped = summary.skipped,
        failed = summary.failed,
        "header check finished"
    );

    let output = format_results(args.format, cli, &results)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    Ok(exit_code(&summary, args.warn_only))
}

pub(crate) fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(owner) = &args.owner {
        config.header.code_owner.clone_from(owner);
    }
    if args.force_current_year {
        config.header.force_current_year = true;
    }
    if let Some(extensions) = &args.ext {
        config.scanner.extensions = extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
    }
    config.scanner.exclude.extend(args.exclude.iter().cloned());
    if args.no_gitignore {
        config.scanner.gitignore = false;
    }
}

fn scan_files(config: &Config, paths: &[PathBuf]) -> crate::Result<Vec<PathBuf>> {
    let filter = GlobFilter::new(config.scanner.extensions.clone(), &config.scanner.exclude)?;
    let scanner = DirectoryScanner::with_gitignore(filter, config.scanner.gitignore);
    scanner.scan_all(paths)
}

/// Unreadable files are logged and left out of the results.
pub(crate) fn check_files(
    checker: &HeaderChecker,
    files: &[PathBuf],
    quiet: bool,
) -> Vec<CheckResult> {
    let progress = ScanProgress::new(files.len() as u64, quiet);

    let results: Vec<CheckResult> = files
        .par_iter()
        .filter_map(|path| {
            let result = checker.check_file(path);
            progress.inc();
            match result {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("{e}");
                    None
                }
            }
        })
        .collect();

    progress.finish();
    results
}

fn format_results(
    format: OutputFormat,
    cli: &Cli,
    results: &[CheckResult],
) -> crate::Result<String> {
    match format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose)
                .format(results)
        }
        OutputFormat::Json => JsonFormatter.format(results),
        OutputFormat::Sarif => SarifFormatter.format(results),
    }
}

pub(crate) const fn exit_code(summary: &Summary, warn_only: bool) -> i32 {
    if summary.failed > 0 && !warn_only {
        EXIT_HEADER_MISMATCH
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
