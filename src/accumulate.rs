use crate::classify::{classify, Bump};
use crate::version::Version;

/// One commit as supplied by the history collaborator.
///
/// Records are immutable and consumed exactly once, in supplied order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Commit hash (opaque; only carried through for reporting)
    pub hash: String,
    /// First line of the commit message
    pub subject: String,
    /// Message body after the first blank line, possibly empty
    pub body: String,
}

impl CommitRecord {
    pub fn new(
        hash: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        CommitRecord {
            hash: hash.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Occurrence counts per bump classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BumpCounts {
    pub major: usize,
    pub minor: usize,
    pub patch: usize,
    pub none: usize,
}

impl BumpCounts {
    fn record(&mut self, bump: Bump) {
        match bump {
            Bump::Major => self.major += 1,
            Bump::Minor => self.minor += 1,
            Bump::Patch => self.patch += 1,
            Bump::None => self.none += 1,
        }
    }

    pub fn get(&self, bump: Bump) -> usize {
        match bump {
            Bump::Major => self.major,
            Bump::Minor => self.minor,
            Bump::Patch => self.patch,
            Bump::None => self.none,
        }
    }
}

/// Final version plus per-classification counts for one accumulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccumulationResult {
    pub version: Version,
    pub counts: BumpCounts,
    /// Commits that were actually classified (skipped records excluded)
    pub total: usize,
}

/// Fold a sequence of commit records onto a starting version.
///
/// Records must arrive oldest-first: the result depends on replay order
/// (a `fix` after a `feat` lands on a zeroed patch counter, not before it).
/// A record whose subject is empty or all-whitespace is skipped entirely,
/// with no classification and no count.
pub fn accumulate<I>(start: Version, records: I) -> AccumulationResult
where
    I: IntoIterator<Item = CommitRecord>,
{
    let mut version = start;
    let mut counts = BumpCounts::default();
    let mut total = 0;

    for record in records {
        if record.subject.trim().is_empty() {
            continue;
        }

        let bump = classify(&record.subject, &record.body);
        version = version.apply(bump);
        counts.record(bump);
        total += 1;
    }

    AccumulationResult {
        version,
        counts,
        total,
    }
}
