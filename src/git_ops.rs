use crate::accumulate::CommitRecord;
use crate::error::{GitSemverError, Result};
use git2::{Oid, Repository};
use std::path::Path;

/// Wrapper around git2 Repository for commit history retrieval.
///
/// This is the external collaborator feeding the accumulator: it yields
/// commit records for HEAD's history, oldest-first, optionally bounded to
/// everything after a named starting revision.
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Discover the git repository at or above the given path.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path.as_ref()).map_err(|e| {
            GitSemverError::revision(format!(
                "not a git repository: '{}' ({})",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(GitRepo { repo })
    }

    /// Resolve a revision string (tag name, branch, full or abbreviated hash)
    /// to the commit it points at.
    fn resolve_rev(&self, rev: &str) -> Result<Oid> {
        let object = self.repo.revparse_single(rev).map_err(|e| {
            GitSemverError::revision(format!("cannot resolve '{}': {}", rev, e))
        })?;
        let commit = object.peel_to_commit().map_err(|e| {
            GitSemverError::revision(format!("'{}' does not point at a commit: {}", rev, e))
        })?;
        Ok(commit.id())
    }

    /// Collect commit records reachable from HEAD, oldest-first.
    ///
    /// With `from` set, the walk stops at that revision (exclusive), so only
    /// commits made after it are returned. An unresolvable `from` is an
    /// error; the accumulator never sees partial history.
    pub fn commits_since(&self, from: Option<&str>) -> Result<Vec<CommitRecord>> {
        let from_oid = match from {
            Some(rev) => Some(self.resolve_rev(rev)?),
            None => None,
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;

        let mut records = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;

            if Some(oid) == from_oid {
                break;
            }

            let commit = self.repo.find_commit(oid)?;
            let (subject, body) = split_message(commit.message().unwrap_or(""));

            records.push(CommitRecord {
                hash: oid.to_string(),
                subject,
                body,
            });
        }

        // Walk order is newest-first; the accumulator replays oldest-first
        records.reverse();
        Ok(records)
    }
}

/// Split a raw commit message into subject (first line) and body (the rest,
/// with the separating blank line stripped). No body yields an empty string.
fn split_message(message: &str) -> (String, String) {
    let mut lines = message.splitn(2, '\n');
    let subject = lines.next().unwrap_or("").trim_end_matches('\r').to_string();
    let rest = lines.next().unwrap_or("");
    let body = rest.trim_start_matches(['\r', '\n']).trim_end().to_string();
    (subject, body)
}
