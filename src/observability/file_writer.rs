//! Append-only line writer with size-based rotation.
//!
//! Backups are numbered: `<file>.1` is the most recent, `<file>.N` the
//! oldest. A rotation shifts every backup up by one and drops whatever
//! falls past [`RotationPolicy::max_backups`].

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many backups to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotate before a write that would push the file past this size.
    pub max_bytes: u64,
    /// Rotated files to retain.
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MiB per file, 3 backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe rotating file writer. The file is opened lazily on first write.
pub struct FileWriter {
    file_path: PathBuf,
    policy: RotationPolicy,
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    pub const fn new(file_path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            file_path,
            policy,
            writer: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if it would not fit.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors while rotating, opening, or writing, and when the
    /// lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        let incoming = line.len() as u64 + 1;
        let current = fs::metadata(&self.file_path).map_or(0, |m| m.len());
        if current > 0 && current + incoming > self.policy.max_bytes {
            *writer = None;
            self.rotate()?;
        }

        let mut file = match writer.take() {
            Some(file) => file,
            None => OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?,
        };

        writeln!(file, "{line}")?;
        file.flush()?;
        *writer = Some(file);
        Ok(())
    }

    /// Path of backup number `n` (1 = newest).
    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.file_path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return remove_if_exists(&self.file_path);
        }

        remove_if_exists(&self.backup_path(self.policy.max_backups))?;
        for n in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.file_path, self.backup_path(1))
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn appends_until_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone(), RotationPolicy::default());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(read(&path), "{\"a\":1}\n{\"b\":2}\n");
        assert!(!writer.backup_path(1).exists());
    }

    #[test]
    fn rotates_and_prunes_oldest_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let policy = RotationPolicy {
            max_bytes: 16,
            max_backups: 2,
        };
        let writer = FileWriter::new(path.clone(), policy);

        for i in 1..=5 {
            writer.write_line(&format!("line-{i}-xxxx")).unwrap();
        }

        assert_eq!(read(&path), "line-5-xxxx\n");
        assert_eq!(read(&writer.backup_path(1)), "line-4-xxxx\n");
        assert_eq!(read(&writer.backup_path(2)), "line-3-xxxx\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn oversized_line_still_lands_in_fresh_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let policy = RotationPolicy {
            max_bytes: 4,
            max_backups: 0,
        };
        let writer = FileWriter::new(path.clone(), policy);

        writer.write_line("first line").unwrap();
        writer.write_line("second line").unwrap();

        assert_eq!(read(&path), "second line\n");
        assert!(!writer.backup_path(1).exists());
    }
}
