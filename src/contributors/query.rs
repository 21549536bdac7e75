use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::contributors::fetch::fetch_log;
use crate::contributors::parse::parse_log;
use crate::contributors::DEFAULT_PERIOD_DAYS;
use crate::error::Result;
use crate::git::SystemShell;
use crate::model::{CommitStats, Contributor, TimeWindow};

/// Parameters of one contributor query. Everything is explicit; there is no
/// ambient configuration.
#[derive(Debug, Clone)]
pub struct ContributorQuery {
    pub end_date: DateTime<Utc>,
    pub period_days: u32,
    pub repo_path: PathBuf,
    pub include_merges: bool,
}

impl ContributorQuery {
    /// Defaults: a `DEFAULT_PERIOD_DAYS`-day window ending now, over the
    /// current working directory, merges included.
    pub fn new() -> Result<Self> {
        Ok(Self {
            end_date: Utc::now(),
            period_days: DEFAULT_PERIOD_DAYS,
            repo_path: std::env::current_dir()?,
            include_merges: true,
        })
    }

    pub fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = end_date;
        self
    }

    pub fn with_period_days(mut self, period_days: u32) -> Self {
        self.period_days = period_days;
        self
    }

    pub fn with_repo_path(mut self, repo_path: impl Into<PathBuf>) -> Self {
        self.repo_path = repo_path.into();
        self
    }

    pub fn with_include_merges(mut self, include_merges: bool) -> Self {
        self.include_merges = include_merges;
        self
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow::trailing(self.end_date, self.period_days)
    }
}

/// Fetch and parse the commit log for the query window.
///
/// An unreachable repository or missing git binary yields empty statistics;
/// a log that fails to parse is an error. See the error module for why the
/// two fail differently.
pub async fn collect_commit_stats(query: &ContributorQuery) -> Result<CommitStats> {
    let log = fetch_log(
        &query.window(),
        &query.repo_path,
        query.include_merges,
        &SystemShell,
    )
    .await;
    parse_log(&log)
}

/// Distinct contributors in the query window, each with the timestamp of
/// their most recent commit.
pub async fn get_contributors(query: &ContributorQuery) -> Result<Vec<Contributor>> {
    Ok(collect_commit_stats(query).await?.contributors())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_ninety_day_window_over_the_cwd() {
        let query = ContributorQuery::new().unwrap();
        assert_eq!(query.period_days, 90);
        assert!(query.include_merges);
        assert_eq!(query.repo_path, std::env::current_dir().unwrap());
    }

    #[test]
    fn builders_replace_each_field() {
        let end_date = DateTime::from_timestamp_millis(1_590_174_610_000).unwrap();
        let query = ContributorQuery::new()
            .unwrap()
            .with_end_date(end_date)
            .with_period_days(10)
            .with_repo_path("/some/repo")
            .with_include_merges(false);

        assert_eq!(query.end_date, end_date);
        assert_eq!(query.period_days, 10);
        assert_eq!(query.repo_path, PathBuf::from("/some/repo"));
        assert!(!query.include_merges);
    }

    #[test]
    fn window_derives_from_end_date_and_period() {
        let end_date = DateTime::from_timestamp_millis(1_590_174_610_000).unwrap();
        let window = ContributorQuery::new()
            .unwrap()
            .with_end_date(end_date)
            .with_period_days(10)
            .window();
        assert_eq!(window.end_epoch_secs, 1_590_174_610);
        assert_eq!(window.start_epoch_secs, 1_589_310_610);
    }
}
