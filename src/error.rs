use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("File does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("xpas-algs returned error: {}", display_code(.code))]
    SubprocessFailure { code: Option<i32> },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// None means the child was terminated by a signal
fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => String::from("terminated by signal"),
    }
}
