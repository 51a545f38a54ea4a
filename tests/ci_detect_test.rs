// tests/ci_detect_test.rs
//
// Environment variables are process-global, so these tests are serialized.

use git_semver::ui::is_ci;
use serial_test::serial;

const ALL_CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "BUILDKITE",
    "CIRCLECI",
    "JENKINS_URL",
];

fn clear_ci_vars() {
    for var in ALL_CI_VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_not_ci_when_no_vars_set() {
    clear_ci_vars();
    assert!(!is_ci());
}

#[test]
#[serial]
fn test_ci_var_detected() {
    clear_ci_vars();
    std::env::set_var("CI", "true");
    assert!(is_ci());
    clear_ci_vars();
}

#[test]
#[serial]
fn test_ci_var_explicitly_disabled() {
    clear_ci_vars();
    std::env::set_var("CI", "false");
    assert!(!is_ci());
    std::env::set_var("CI", "0");
    assert!(!is_ci());
    clear_ci_vars();
}

#[test]
#[serial]
fn test_provider_specific_vars_detected() {
    for var in ["GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "CIRCLECI"] {
        clear_ci_vars();
        std::env::set_var(var, "true");
        assert!(is_ci(), "{} should mark the environment as CI", var);
    }
    clear_ci_vars();
    std::env::set_var("JENKINS_URL", "http://jenkins.example.com/");
    assert!(is_ci());
    clear_ci_vars();
}
