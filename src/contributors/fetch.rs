use log::debug;
use std::path::Path;

use crate::contributors::{LOG_FIELD_DELIMITER, MAX_LOG_COMMITS};
use crate::git::Shellout;
use crate::model::TimeWindow;

/// Fetch the raw commit log for a window of history.
///
/// Best-effort by contract: any shell failure (no git binary, not a
/// repository, permission denied) degrades to an empty log so the caller's
/// workflow never breaks over unavailable analytics. The failure is still
/// logged for diagnosis.
pub async fn fetch_log(
    window: &TimeWindow,
    repo_path: &Path,
    include_merges: bool,
    shell: &dyn Shellout,
) -> String {
    let args = log_args(window, include_merges);
    match shell.run("git", &args, repo_path).await {
        Ok(log) => log,
        Err(err) => {
            debug!(
                "commit log unavailable in {}: {} (stderr: {})",
                repo_path.display(),
                err,
                err.stderr.trim()
            );
            String::new()
        }
    }
}

fn log_args(window: &TimeWindow, include_merges: bool) -> Vec<String> {
    let mut args = vec!["--no-pager".to_string(), "log".to_string()];
    if !include_merges {
        args.push("--no-merges".to_string());
    }
    args.push(format!(
        "--pretty=tformat:%H{d}%an{d}%ae{d}%aI",
        d = LOG_FIELD_DELIMITER
    ));
    args.push(format!("--after={}", window.start_epoch_secs));
    args.push(format!("--until={}", window.end_epoch_secs));
    args.push(format!("--max-count={}", MAX_LOG_COMMITS));
    args
}
