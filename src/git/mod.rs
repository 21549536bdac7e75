pub mod shell;

pub use shell::{ShellOutError, Shellout, SystemShell};
