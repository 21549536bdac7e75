use async_trait::async_trait;
use log::debug;
use std::path::Path;
use thiserror::Error;
use tokio::process::Command;

/// Failure of an external command.
///
/// `exit_code` is `None` when the process could not be spawned at all;
/// `source` then carries the platform error. Captured output is kept on the
/// error so callers can log it for diagnosis.
#[derive(Error, Debug)]
#[error("command `{command}` failed{}", exit_code_suffix(.exit_code))]
pub struct ShellOutError {
    pub command: String,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    #[source]
    pub source: Option<std::io::Error>,
}

fn exit_code_suffix(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!(" with exit code {code}"),
        None => ": could not be spawned".to_string(),
    }
}

/// Seam for spawning external tools, injectable so failure paths are
/// testable without a live process.
#[async_trait]
pub trait Shellout: Send + Sync {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        working_dir: &Path,
    ) -> Result<String, ShellOutError>;
}

/// Runs commands through the platform process machinery, one short-lived
/// child per call. No retries and no internal timeout; a caller with a
/// deadline must impose it from outside.
pub struct SystemShell;

#[async_trait]
impl Shellout for SystemShell {
    async fn run(
        &self,
        program: &str,
        args: &[String],
        working_dir: &Path,
    ) -> Result<String, ShellOutError> {
        let rendered = render_command(program, args);
        debug!("running `{}` in {}", rendered, working_dir.display());

        let output = Command::new(program)
            .args(args)
            .current_dir(working_dir)
            .output()
            .await
            .map_err(|err| ShellOutError {
                command: rendered.clone(),
                exit_code: None,
                stdout: String::new(),
                stderr: String::new(),
                source: Some(err),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if output.status.success() {
            // some tools report through stderr even on success; fall back to
            // it when stdout is empty
            if stdout.is_empty() {
                Ok(stderr)
            } else {
                Ok(stdout)
            }
        } else {
            Err(ShellOutError {
                command: rendered,
                exit_code: output.status.code(),
                stdout,
                stderr,
                source: None,
            })
        }
    }
}

fn render_command(program: &str, args: &[String]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}
