use anyhow::Context;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::cli::CommonArgs;
use crate::error::{DevcountError, Result};
use crate::model::CommitStats;

use super::output::{
    output_contributors_json, output_contributors_ndjson, output_contributors_table,
    output_stats_json, output_stats_ndjson, output_stats_table,
};
use super::query::{collect_commit_stats, ContributorQuery};

pub async fn exec_contributors(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let query = build_query(&common).context("Failed to build contributor query")?;
    let stats = run_query(&query, json || ndjson).await?;
    let contributors = stats.contributors();

    if json {
        output_contributors_json(&contributors, &query)?;
    } else if ndjson {
        output_contributors_ndjson(&contributors)?;
    } else {
        output_contributors_table(&contributors, &query)?;
    }

    Ok(())
}

pub async fn exec_stats(common: CommonArgs, json: bool, ndjson: bool) -> anyhow::Result<()> {
    let query = build_query(&common).context("Failed to build contributor query")?;
    let stats = run_query(&query, json || ndjson).await?;

    if json {
        output_stats_json(&stats, &query)?;
    } else if ndjson {
        output_stats_ndjson(&stats, &query)?;
    } else {
        output_stats_table(&stats, &query)?;
    }

    Ok(())
}

// Progress indicators stay off in JSON/NDJSON mode to keep output clean
async fn run_query(query: &ContributorQuery, quiet: bool) -> anyhow::Result<CommitStats> {
    let pb = if quiet { None } else { Some(spinner()) };

    let stats = collect_commit_stats(query)
        .await
        .context("Failed to analyze commit history")?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    Ok(stats)
}

fn spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Scanning commit history...");
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn build_query(common: &CommonArgs) -> Result<ContributorQuery> {
    let mut query = ContributorQuery::new()?;
    if let Some(repo) = &common.repo {
        query = query.with_repo_path(repo);
    }
    if let Some(end_date) = &common.end_date {
        query = query.with_end_date(parse_end_date(end_date)?);
    }
    Ok(query
        .with_period_days(common.days)
        .with_include_merges(!common.no_merges))
}

/// Accepts RFC3339 or a plain `YYYY-MM-DD`. A plain date means the end of
/// that day in UTC, so the named day is inside the window.
fn parse_end_date(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(end_of_day) = date.and_hms_opt(23, 59, 59) {
            return Ok(Utc.from_utc_datetime(&end_of_day));
        }
    }
    Err(DevcountError::InvalidDate(format!(
        "expected RFC3339 or YYYY-MM-DD, got '{input}'"
    )))
}
