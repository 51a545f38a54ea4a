//! Terminal reporting for the CLI wrapper.
//!
//! All version math lives in the accumulator; this module only renders its
//! result. Color goes through the `console` crate and is switched off under
//! `--no-color`, when the config disables it, or when running inside a CI
//! environment.

use crate::accumulate::AccumulationResult;
use crate::version::Version;
use console::style;

/// Environment variables that indicate a CI environment.
const CI_ENV_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "JENKINS_URL",
];

/// Detect whether the process is running under a CI system.
pub fn is_ci() -> bool {
    CI_ENV_VARS
        .iter()
        .any(|var| match std::env::var(var) {
            Ok(value) => ci_value_is_set(&value),
            Err(_) => false,
        })
}

/// A CI variable counts as set unless it is explicitly disabled.
pub fn ci_value_is_set(value: &str) -> bool {
    !value.is_empty() && value != "0" && value != "false"
}

/// Apply the effective color decision process-wide.
pub fn configure_colors(no_color_flag: bool, config_color: bool) {
    let enabled = config_color && !no_color_flag && !is_ci();
    console::set_colors_enabled(enabled);
    console::set_colors_enabled_stderr(enabled);
}

/// Print an error message to stderr.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a status message.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Render the accumulation result: per-category counts and the final version.
pub fn display_result(start: Version, result: &AccumulationResult) {
    println!(
        "{} Replayed {} commit{}",
        style("→").yellow(),
        result.total,
        if result.total == 1 { "" } else { "s" }
    );
    println!(
        "  {} {}  {} {}  {} {}  {} {}",
        style("major:").red(),
        result.counts.major,
        style("minor:").yellow(),
        result.counts.minor,
        style("patch:").green(),
        result.counts.patch,
        style("other:").dim(),
        result.counts.none,
    );
    println!(
        "{} Version: {} -> {}",
        style("✓").green(),
        style(start).dim(),
        style(result.version).green().bold()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ci_value_is_set() {
        assert!(ci_value_is_set("true"));
        assert!(ci_value_is_set("1"));
        assert!(ci_value_is_set("yes"));
    }

    #[test]
    fn test_ci_value_disabled() {
        assert!(!ci_value_is_set(""));
        assert!(!ci_value_is_set("0"));
        assert!(!ci_value_is_set("false"));
    }
}
