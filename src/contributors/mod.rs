pub mod exec;
pub mod fetch;
pub mod output;
pub mod parse;
pub mod query;

pub use exec::{exec_contributors, exec_stats};
pub use fetch::fetch_log;
pub use output::{
    output_contributors_json, output_contributors_ndjson, output_contributors_table,
    output_stats_json, output_stats_ndjson, output_stats_table,
};
pub use parse::{parse_log, parse_log_line, separate_lines};
pub use query::{collect_commit_stats, get_contributors, ContributorQuery};

/// Field separator injected into the git pretty-format string. Chosen to be
/// exceedingly unlikely to occur in commit metadata; the parser splits on
/// exactly this token.
pub const LOG_FIELD_DELIMITER: &str = "_DEVCOUNT_SEPARATOR_";

/// Product definition of a contributing developer: someone who authored a
/// commit within this many trailing days.
pub const DEFAULT_PERIOD_DAYS: u32 = 90;

/// Cap on commits requested from the log, bounding memory and parse time on
/// very large histories.
pub const MAX_LOG_COMMITS: u32 = 500;
