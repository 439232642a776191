//! Log output targets
//!
//! A target is stdout, stderr, or an append-mode file. File targets create
//! missing parent directories on open.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// Where one log stream goes.
pub enum LogTarget {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

impl LogTarget {
    /// Resolve a target from an optional file path.
    pub fn from_path(path: Option<&str>, fallback_stderr: bool) -> io::Result<Self> {
        match path {
            Some(p) => Ok(Self::File(Mutex::new(open_log_file(p)?))),
            None if fallback_stderr => Ok(Self::Stderr),
            None => Ok(Self::Stdout),
        }
    }

    /// Write one line to this target. I/O failures on file targets are
    /// swallowed; a demo server has nowhere better to report them.
    pub fn write_line(&self, message: &str) {
        match self {
            Self::Stdout => println!("{message}"),
            Self::Stderr => eprintln!("{message}"),
            Self::File(file) => {
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{message}");
                }
            }
        }
    }
}

/// Open or create a log file for appending.
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_resolves_to_std_streams() {
        assert!(matches!(
            LogTarget::from_path(None, false).unwrap(),
            LogTarget::Stdout
        ));
        assert!(matches!(
            LogTarget::from_path(None, true).unwrap(),
            LogTarget::Stderr
        ));
    }

    #[test]
    fn test_file_target_appends() {
        let dir = std::env::temp_dir().join("medportal-logger-test");
        let path = dir.join("access.log");
        let path_str = path.to_str().unwrap();
        let _ = std::fs::remove_file(&path);

        let target = LogTarget::from_path(Some(path_str), false).unwrap();
        target.write_line("first");
        target.write_line("second");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
        let _ = std::fs::remove_file(&path);
    }
}
