use std::path::PathBuf;

/// Convenience result type used across htmlpress.
pub type HtmlpressResult<T> = Result<T, HtmlpressError>;

/// Top-level error taxonomy for conversion calls.
///
/// Every failure aborts the current call; there are no internal retries. The
/// execution-related variants carry the exact command string (and the process
/// streams where available) because the renderer is a black box and those are
/// the only diagnostics a caller gets.
#[derive(thiserror::Error, Debug)]
pub enum HtmlpressError {
    /// No renderer binary is configured on the generator.
    #[error("no renderer binary is configured")]
    NotConfigured,

    /// An option name outside the renderer's recognized set.
    #[error("the option '{name}' does not exist")]
    InvalidOption {
        /// The rejected option name.
        name: String,
    },

    /// The output path exists but is not a regular file.
    #[error("the output path '{}' already exists and is not a regular file", .path.display())]
    InvalidOutputTarget {
        /// The offending output path.
        path: PathBuf,
    },

    /// The output file already exists and overwriting was not requested.
    #[error("the output file '{}' already exists", .path.display())]
    OutputExists {
        /// The colliding output path.
        path: PathBuf,
    },

    /// A pre-existing output file could not be deleted before regeneration.
    #[error("could not delete the existing output file '{}'", .path.display())]
    CleanupFailed {
        /// The output path that resisted deletion.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The output file's parent directory could not be created.
    #[error("could not create the output directory '{}'", .path.display())]
    DirectoryCreateFailed {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The renderer process could not be started at all.
    #[error("failed to spawn the renderer (command: {command})")]
    SpawnFailed {
        /// The rendered command string.
        command: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// The renderer ran but did not exit successfully.
    #[error(
        "the renderer failed with {}:\nstderr: {stderr}\nstdout: {stdout}\ncommand: {command}",
        exit_label(.code, .timed_out)
    )]
    ProcessFailed {
        /// Exit status code, absent when the process was killed by a signal.
        code: Option<i32>,
        /// Captured standard output.
        stdout: String,
        /// Captured standard error.
        stderr: String,
        /// The rendered command string.
        command: String,
        /// Whether the wall-clock timeout expired and the process was killed.
        timed_out: bool,
    },

    /// The renderer claimed success but produced no file.
    #[error("the file '{}' was not created (command: {command})", .path.display())]
    OutputMissing {
        /// The expected output path.
        path: PathBuf,
        /// The rendered command string.
        command: String,
    },

    /// The renderer produced a zero-length file.
    #[error("the file '{}' was created but is empty (command: {command})", .path.display())]
    OutputEmpty {
        /// The empty output path.
        path: PathBuf,
        /// The rendered command string.
        command: String,
    },

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HtmlpressError {
    /// Build an [`HtmlpressError::InvalidOption`] value.
    pub fn invalid_option(name: impl Into<String>) -> Self {
        Self::InvalidOption { name: name.into() }
    }
}

fn exit_label(code: &Option<i32>, timed_out: &bool) -> String {
    if *timed_out {
        return "a timeout (process killed)".to_string();
    }
    match code {
        Some(code) => format!("status code {code}"),
        None => "no status code (killed by signal)".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
