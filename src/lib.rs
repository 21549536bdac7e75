//! Contributing-developer analysis for git repositories.
//!
//! A contributing developer is anyone who authored a commit in a trailing
//! analysis window (90 days by default). The crate shells out to the `git`
//! binary, parses a delimiter-separated log, and reduces it to one entry per
//! distinct author. Authors are keyed by a one-way SHA-1 pseudonym of their
//! email, so raw identities never leave the parsing layer.

pub mod cli;
pub mod contributors;
pub mod error;
pub mod git;
pub mod identity;
pub mod model;

pub use contributors::{collect_commit_stats, get_contributors, ContributorQuery};
pub use error::{DevcountError, Result};
pub use identity::AuthorHash;
pub use model::{CommitStats, Contributor};
