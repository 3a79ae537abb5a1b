use crate::app_log;
use crate::error::{NexusError, NexusResult};
use crate::logger::LogLevel;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// A text file used as an archive
///
/// Each operation opens the file, uses it and closes it again before
/// returning, whether or not it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vault {
    path: PathBuf,
}

impl Vault {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole archive
    ///
    /// # Errors
    /// `FileNotFound` / `PermissionDenied` for those IO failures, `Io` for
    /// anything else.
    pub fn load(&self) -> NexusResult<String> {
        let mut file = File::open(&self.path).map_err(|e| NexusError::from_io(e, &self.path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| NexusError::from_io(e, &self.path))?;

        app_log!(
            target: "archive::vault",
            LogLevel::Debug,
            "Loaded {} bytes from {}",
            content.len(),
            self.path.display()
        );
        Ok(content)
    }

    /// Replace the archive with `lines`, written exactly as given
    ///
    /// No separators are added; lines carry their own newlines. Returns the
    /// number of lines written.
    pub fn save<S: AsRef<str>>(&self, lines: &[S]) -> NexusResult<usize> {
        let file = File::create(&self.path).map_err(|e| NexusError::from_io(e, &self.path))?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writer.write_all(line.as_ref().as_bytes())?;
        }
        writer.flush()?;

        app_log!(
            target: "archive::vault",
            LogLevel::Debug,
            "Sealed {} line(s) into {}",
            lines.len(),
            self.path.display()
        );
        Ok(lines.len())
    }

    /// Attempt a load and classify what happened
    pub fn respond(&self) -> CrisisOutcome {
        match self.load() {
            Ok(content) => CrisisOutcome::Recovered(content),
            Err(NexusError::FileNotFound(_)) => CrisisOutcome::NotFound,
            Err(NexusError::PermissionDenied(_)) => CrisisOutcome::Denied,
            Err(other) => {
                app_log!(
                    target: "archive::vault",
                    LogLevel::Error,
                    "Unexpected failure reading {}: {}",
                    self.path.display(),
                    other
                );
                CrisisOutcome::Failed(other.to_string())
            }
        }
    }
}

/// How a crisis access attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrisisOutcome {
    Recovered(String),
    NotFound,
    Denied,
    Failed(String),
}

impl fmt::Display for CrisisOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrisisOutcome::Recovered(content) => write!(
                f,
                "SUCCESS: Archive recovered - ''{}''\nSTATUS: Normal operations resumed",
                content
            ),
            CrisisOutcome::NotFound => write!(
                f,
                "RESPONSE: Archive not found in storage matrix\nSTATUS: Crisis handled, system stable"
            ),
            CrisisOutcome::Denied => write!(
                f,
                "RESPONSE: Security protocols deny access\nSTATUS: Crisis handled, security maintained"
            ),
            CrisisOutcome::Failed(reason) => write!(
                f,
                "RESPONSE: Unexpected failure ({})\nSTATUS: Crisis logged for review",
                reason
            ),
        }
    }
}
