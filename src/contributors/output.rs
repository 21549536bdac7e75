use anyhow::Result;
use chrono::{DateTime, Utc};
use console::style;

use crate::model::{CommitStats, Contributor, ContributorsOutput, StatsOutput, SCHEMA_VERSION};

use super::query::ContributorQuery;

pub fn output_contributors_json(
    contributors: &[Contributor],
    query: &ContributorQuery,
) -> Result<()> {
    let output = ContributorsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: query.repo_path.to_string_lossy().to_string(),
        end_date: query.end_date,
        period_days: query.period_days,
        contributors: by_recency(contributors),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_contributors_ndjson(contributors: &[Contributor]) -> Result<()> {
    for contributor in by_recency(contributors) {
        println!("{}", serde_json::to_string(&contributor)?);
    }
    Ok(())
}

pub fn output_contributors_table(
    contributors: &[Contributor],
    query: &ContributorQuery,
) -> Result<()> {
    if contributors.is_empty() {
        println!("No contributors found in the last {} days", query.period_days);
        return Ok(());
    }

    println!("{}", style("Contributing Developers").bold());
    println!("{}", "─".repeat(68));

    for contributor in by_recency(contributors) {
        println!(
            "{}  last commit {}",
            style(contributor.user_id.as_str()).cyan(),
            style(&contributor.last_commit_date).dim()
        );
    }

    println!(
        "\n{} contributors in the last {} days",
        style(contributors.len()).bold(),
        query.period_days
    );

    Ok(())
}

pub fn output_stats_json(stats: &CommitStats, query: &ContributorQuery) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&stats_output(stats, query))?);
    Ok(())
}

pub fn output_stats_ndjson(stats: &CommitStats, query: &ContributorQuery) -> Result<()> {
    println!("{}", serde_json::to_string(&stats_output(stats, query))?);
    Ok(())
}

pub fn output_stats_table(stats: &CommitStats, query: &ContributorQuery) -> Result<()> {
    println!("{}", style("Commit Activity Summary").bold());
    println!("{}", "─".repeat(50));
    println!(
        "Window: last {} days ending {}",
        query.period_days,
        style(query.end_date.format("%Y-%m-%d")).dim()
    );
    println!("Commits: {}", style(stats.commit_count()).cyan());
    println!(
        "Contributing developers: {}",
        style(stats.unique_author_count()).yellow()
    );
    Ok(())
}

fn stats_output(stats: &CommitStats, query: &ContributorQuery) -> StatsOutput {
    StatsOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: query.repo_path.to_string_lossy().to_string(),
        end_date: query.end_date,
        period_days: query.period_days,
        commit_count: stats.commit_count(),
        unique_author_count: stats.unique_author_count(),
    }
}

/// Presentation order only: newest activity first, ties broken by id so
/// output is stable. The contributor list itself is a set by contract.
fn by_recency(contributors: &[Contributor]) -> Vec<Contributor> {
    let mut sorted = contributors.to_vec();
    sorted.sort_by(|a, b| {
        let a_time = DateTime::parse_from_rfc3339(&a.last_commit_date).ok();
        let b_time = DateTime::parse_from_rfc3339(&b.last_commit_date).ok();
        b_time
            .cmp(&a_time)
            .then_with(|| a.user_id.as_str().cmp(b.user_id.as_str()))
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::AuthorHash;

    fn contributor(email: &str, date: &str) -> Contributor {
        Contributor {
            user_id: AuthorHash::of_email(email),
            last_commit_date: date.to_string(),
        }
    }

    #[test]
    fn recency_sort_puts_newest_first() {
        let list = vec![
            contributor("a@example.com", "2020-02-02T23:23:41+02:00"),
            contributor("b@example.com", "2020-02-06T11:43:11+00:00"),
        ];
        let sorted = by_recency(&list);
        assert_eq!(sorted[0].last_commit_date, "2020-02-06T11:43:11+00:00");
    }

    #[test]
    fn recency_sort_compares_instants_not_strings() {
        // 23:31+02:00 is 21:31 UTC, so the 22:00 UTC stamp is the later
        // instant despite sorting earlier as a string
        let list = vec![
            contributor("a@example.com", "2020-02-02T23:31:13+02:00"),
            contributor("b@example.com", "2020-02-02T22:00:00+00:00"),
        ];
        let sorted = by_recency(&list);
        assert_eq!(sorted[0].last_commit_date, "2020-02-02T22:00:00+00:00");
    }

    #[test]
    fn unparseable_dates_sort_last() {
        let list = vec![
            contributor("a@example.com", "not a timestamp"),
            contributor("b@example.com", "2020-02-06T11:43:11+00:00"),
        ];
        let sorted = by_recency(&list);
        assert_eq!(sorted[1].last_commit_date, "not a timestamp");
    }
}
