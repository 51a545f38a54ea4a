use regex::Regex;

/// The effect a single commit has on the running version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bump {
    Major,
    Minor,
    Patch,
    None,
}

/// Classify a commit by its subject line and body text.
///
/// The checks form an ordered decision list and the first match wins.
/// That ordering is a contract: a breaking `fix!:` must classify as Major,
/// never Patch, so the breaking-change check runs before the type prefixes.
///
/// 1. Major - `type(scope)!:` / `type!:` subject prefix, or a literal
///    `BREAKING CHANGE:` / `BREAKING-CHANGE:` token anywhere in the message
/// 2. Minor - `feat:` or `feat(scope):` subject prefix
/// 3. Patch - `fix:` or `fix(scope):` subject prefix
/// 4. None - everything else (docs, chore, refactor, malformed prefixes, ...)
pub fn classify(subject: &str, body: &str) -> Bump {
    if is_breaking_change(subject, body) {
        return Bump::Major;
    }

    if matches_type_prefix(subject, "feat") {
        return Bump::Minor;
    }

    if matches_type_prefix(subject, "fix") {
        return Bump::Patch;
    }

    Bump::None
}

/// Check for the breaking-change signal: a `!` immediately before the colon
/// that ends the type/scope prefix, or the literal marker token in the
/// message. The marker is case-sensitive; hyphen and space forms both count.
fn is_breaking_change(subject: &str, body: &str) -> bool {
    let bang_prefix = Regex::new(r"^[a-z]+(\(.+\))?!:")
        .map(|re| re.is_match(subject))
        .unwrap_or(false);
    if bang_prefix {
        return true;
    }

    let message = format!("{}\n{}", subject, body);
    message.contains("BREAKING CHANGE:") || message.contains("BREAKING-CHANGE:")
}

/// Match a `type:` or `type(scope):` subject prefix for a literal type.
/// The scope must be non-empty: `feat():` does not count as `feat`.
fn matches_type_prefix(subject: &str, commit_type: &str) -> bool {
    Regex::new(&format!(r"^{}(\(.+\))?:", commit_type))
        .map(|re| re.is_match(subject))
        .unwrap_or(false)
}
