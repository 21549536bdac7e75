use crate::contributors::LOG_FIELD_DELIMITER;
use crate::error::{DevcountError, Result};
use crate::identity::AuthorHash;
use crate::model::{CommitRecord, CommitStats};

/// Split raw log output into lines, treating `\n` and `\r\n` alike.
/// Whitespace-only input yields no lines.
pub fn separate_lines(text: &str) -> Vec<&str> {
    text.trim().lines().collect()
}

/// Parse one log line of the form
/// `<commit hash><SEP><author name><SEP><author email><SEP><author date>`.
///
/// The email is hashed before a record exists, so nothing downstream of this
/// function can observe it. A wrong field count means the format string and
/// this parser have drifted apart; that fails loudly rather than producing
/// wrong counts. The error reports only the field count, never the line
/// content.
pub fn parse_log_line(line: &str) -> Result<CommitRecord> {
    let fields: Vec<&str> = line.split(LOG_FIELD_DELIMITER).collect();
    if fields.len() != 4 {
        return Err(DevcountError::Parse(format!(
            "expected 4 fields per log line, found {}",
            fields.len()
        )));
    }
    let author_email = fields[2];
    let author_date = fields[3];
    Ok(CommitRecord::new(
        AuthorHash::of_email(author_email),
        author_date.to_string(),
    ))
}

/// Parse a complete log into commit statistics. Trimmed-empty input is a
/// valid empty log; any non-empty line must parse.
pub fn parse_log(log: &str) -> Result<CommitStats> {
    if log.trim().is_empty() {
        return Ok(CommitStats::empty());
    }
    let mut stats = CommitStats::empty();
    for line in separate_lines(log) {
        stats.add(parse_log_line(line)?);
    }
    Ok(stats)
}
