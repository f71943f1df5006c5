//! Size-rotated line writer for trace output.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Rotate once the file grows past 10 MiB.
pub const ROTATE_AT_BYTES: u64 = 10 * 1024 * 1024;

/// Rotated files kept next to the live one.
pub const KEPT_BACKUPS: usize = 3;

/// Appends lines to a file, moving it aside to `<file>.<utc-timestamp>` when it
/// grows too large. Opens lazily on the first write.
///
/// Backup suffixes are fixed-width UTC timestamps with nanoseconds
/// (`20240601T120000.123456789`), so they sort chronologically. A suffix that
/// is already taken gets a `-<n>` counter.
pub struct RotatingWriter {
    path: PathBuf,
    limit: u64,
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
    /// Writer rotating at [`ROTATE_AT_BYTES`].
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limit(path, ROTATE_AT_BYTES)
    }

    #[must_use]
    pub const fn with_limit(path: PathBuf, limit: u64) -> Self {
        Self {
            path,
            limit,
            file: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns an error if rotation, opening or writing fails, or if the lock was
    /// poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.limit) {
            *guard = None;
            self.rotate()?;
        }

        let opened = match guard.take() {
            Some(file) => file,
            None => OpenOptions::new().create(true).append(true).open(&self.path)?,
        };
        let file = guard.insert(opened);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.9f").to_string();
        fs::rename(&self.path, self.unused_backup_path(&stamp))?;
        self.prune_backups()
    }

    fn unused_backup_path(&self, stamp: &str) -> PathBuf {
        let with_suffix = |suffix: &str| {
            let mut backup = self.path.clone().into_os_string();
            backup.push(suffix);
            PathBuf::from(backup)
        };

        let mut backup = with_suffix(&format!(".{stamp}"));
        let mut counter = 1;
        while backup.exists() {
            backup = with_suffix(&format!(".{stamp}-{counter}"));
            counter += 1;
        }
        backup
    }

    /// Deletes the oldest backups beyond [`KEPT_BACKUPS`].
    fn prune_backups(&self) -> io::Result<()> {
        let (Some(dir), Some(name)) = (
            self.path.parent(),
            self.path.file_name().and_then(|name| name.to_str()),
        ) else {
            return Ok(());
        };
        let prefix = format!("{name}.");

        let mut backups: Vec<(String, PathBuf)> = fs::read_dir(dir)?
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let file_name = entry.file_name().to_str()?.to_string();
                file_name
                    .starts_with(&prefix)
                    .then(|| (file_name, entry.path()))
            })
            .collect();

        // Fixed-width timestamp suffixes sort chronologically.
        backups.sort_by(|a, b| b.0.cmp(&a.0));

        for (_, stale) in backups.iter().skip(KEPT_BACKUPS) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}
