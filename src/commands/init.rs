use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, HeaderGuardError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(HeaderGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# header-guard configuration file

[header]
# Copyright owner substituted for OWNER in the template
code_owner = "Blue Acorn iCi"

# Require the current year instead of accepting any four-digit year
force_current_year = false

# Inline header template (must contain OWNER and YYYY).
# Without `template` or `template_file` the built-in PHP header is used.
# template = """
# <?php
# /**
#  * @copyright YYYY OWNER. All Rights Reserved.
#  */
# """

# Or read the template from a file, relative to this configuration file
# template_file = "header.txt"

[scanner]
# File extensions whose headers are checked
extensions = ["php", "phtml"]

# Glob patterns to exclude
exclude = ["**/vendor/**", "**/.git/**"]

# Respect .gitignore rules
gitignore = true
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
