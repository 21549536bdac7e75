use crate::identity::AuthorHash;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const SCHEMA_VERSION: u32 = 1;

const SECONDS_PER_DAY: i64 = 86_400;

/// One parsed log entry.
///
/// The timestamp is kept verbatim as git printed it (ISO-8601); it is
/// parsed only transiently when records are compared for recency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub author: AuthorHash,
    pub timestamp: String,
}

impl CommitRecord {
    pub fn new(author: AuthorHash, timestamp: String) -> Self {
        Self { author, timestamp }
    }

    fn commit_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.timestamp).ok()
    }
}

/// Aggregate over the commit records of one log fetch, held in log order
/// (newest first, as git emits it). All queries are computed, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitStats {
    records: Vec<CommitRecord>,
}

impl CommitStats {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(records: Vec<CommitRecord>) -> Self {
        Self { records }
    }

    /// Append one record while a log is being read. Append order is log
    /// order.
    pub fn add(&mut self, record: CommitRecord) {
        self.records.push(record);
    }

    pub fn commit_count(&self) -> usize {
        self.records.len()
    }

    pub fn unique_authors(&self) -> HashSet<&AuthorHash> {
        self.records.iter().map(|r| &r.author).collect()
    }

    pub fn unique_author_count(&self) -> usize {
        self.unique_authors().len()
    }

    /// Timestamp of `author`'s most recent commit, `None` for an author
    /// with no records.
    ///
    /// Recency is decided by comparing parsed timestamps, not by list
    /// position, so a log that violates newest-first ordering still yields
    /// the true maximum. Ties keep the earliest-seen record, which on a
    /// well-formed newest-first log reproduces a plain first-match scan
    /// exactly. A record whose timestamp fails to parse ranks below any
    /// record that parses.
    pub fn most_recent_commit_timestamp(&self, author: &AuthorHash) -> Option<&str> {
        let mut best: Option<&CommitRecord> = None;
        for record in self.records.iter().filter(|r| &r.author == author) {
            best = match best {
                Some(current) if record.commit_time() <= current.commit_time() => Some(current),
                _ => Some(record),
            };
        }
        best.map(|r| r.timestamp.as_str())
    }

    /// One entry per distinct author. Order is not significant; callers
    /// must treat the result as a set.
    pub fn contributors(&self) -> Vec<Contributor> {
        self.unique_authors()
            .into_iter()
            .filter_map(|author| {
                self.most_recent_commit_timestamp(author)
                    .map(|timestamp| Contributor {
                        user_id: author.clone(),
                        last_commit_date: timestamp.to_string(),
                    })
            })
            .collect()
    }
}

/// Externally visible result unit. `user_id` carries the hashed pseudonym;
/// the field name stays identity-agnostic on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub user_id: AuthorHash,
    pub last_commit_date: String,
}

/// Epoch-second bounds handed to `git log`.
///
/// Plain data: an inverted window is representable and nothing downstream
/// special-cases it; git then returns whatever it returns for an inverted
/// range, typically nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start_epoch_secs: i64,
    pub end_epoch_secs: i64,
}

impl TimeWindow {
    /// Window covering the `period_days` ending at `end_date`, in whole
    /// epoch seconds. Sub-second precision is floored away before the
    /// subtraction.
    pub fn trailing(end_date: DateTime<Utc>, period_days: u32) -> Self {
        let end_epoch_secs = end_date.timestamp();
        let start_epoch_secs = end_epoch_secs - i64::from(period_days) * SECONDS_PER_DAY;
        Self {
            start_epoch_secs,
            end_epoch_secs,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributorsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub end_date: DateTime<Utc>,
    pub period_days: u32,
    pub contributors: Vec<Contributor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub end_date: DateTime<Utc>,
    pub period_days: u32,
    pub commit_count: usize,
    pub unique_author_count: usize,
}
