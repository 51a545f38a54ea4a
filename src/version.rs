use crate::classify::Bump;
use crate::error::{GitSemverError, Result};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a starting version from a "major.minor.patch" string.
    ///
    /// Each segment must be a plain decimal non-negative integer. Anything
    /// else (missing segments, empty segments, signs, whitespace) is an
    /// explicit `InvalidVersionFormat` error rather than a silent zero.
    pub fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != 3 {
            return Err(GitSemverError::version(format!(
                "'{}' - expected exactly three segments (major.minor.patch)",
                input
            )));
        }

        let segment = |name: &str, s: &str| -> Result<u32> {
            // u32::from_str accepts a leading '+', so digits are checked first
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(GitSemverError::version(format!(
                    "invalid {} segment '{}' in '{}'",
                    name, s, input
                )));
            }
            s.parse::<u32>().map_err(|_| {
                GitSemverError::version(format!("{} segment '{}' out of range", name, s))
            })
        };

        Ok(Version {
            major: segment("major", parts[0])?,
            minor: segment("minor", parts[1])?,
            patch: segment("patch", parts[2])?,
        })
    }

    /// Apply a bump classification, returning the new version.
    ///
    /// A major bump zeroes minor and patch; a minor bump zeroes patch.
    pub fn apply(&self, bump: Bump) -> Self {
        match bump {
            Bump::Major => Version {
                major: self.major + 1,
                minor: 0,
                patch: 0,
            },
            Bump::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                patch: 0,
            },
            Bump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch + 1,
            },
            Bump::None => *self,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
