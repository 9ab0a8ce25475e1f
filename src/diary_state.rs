use crate::config::RECENT_LIMIT;
use crate::diary_entry::DiaryEntry;
use crate::error::StoreError;
use chrono::Local;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How the diary file looked when it was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and held this many entries.
    Loaded(usize),
    /// There was no file yet.
    Fresh,
    /// The file could not be parsed and was moved to `backup`.
    Recovered { backup: PathBuf },
}

pub struct DiaryState {
    entries: Vec<DiaryEntry>,
    path: PathBuf,
}

impl DiaryState {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DiaryState {
            entries: Vec::new(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an entry and rewrite the file. On failure the entry is
    /// dropped again so memory never runs ahead of disk.
    pub fn add_entry(&mut self, entry: DiaryEntry) -> Result<(), StoreError> {
        self.entries.push(entry);
        if let Err(e) = self.save_to_file() {
            self.entries.pop();
            return Err(e);
        }
        info!(count = self.entries.len(), "Entry added");
        Ok(())
    }

    pub fn get_entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    /// The last `RECENT_LIMIT` entries, newest first.
    pub fn recent(&self) -> impl DoubleEndedIterator<Item = &DiaryEntry> + ExactSizeIterator {
        let start = self.entries.len().saturating_sub(RECENT_LIMIT);
        self.entries[start..].iter().rev()
    }

    pub fn save_to_file(&self) -> Result<(), StoreError> {
        let serialized = serde_json::to_string(&self.entries)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let tmp_path = sibling(&self.path, ".tmp");
        let write_err = |source: std::io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };
        if let Err(source) = fs::write(&tmp_path, serialized) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_err(source));
        }
        if let Err(source) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_err(source));
        }

        debug!(path = %self.path.display(), entries = self.entries.len(), "Diary saved");
        Ok(())
    }

    pub fn load_from_file(path: impl Into<PathBuf>) -> Result<(Self, LoadOutcome), StoreError> {
        let path = path.into();
        let serialized = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "No diary file yet, starting empty");
                return Ok((DiaryState::new(path), LoadOutcome::Fresh));
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };

        match serde_json::from_str::<Vec<DiaryEntry>>(&serialized) {
            Ok(entries) => {
                let count = entries.len();
                info!(path = %path.display(), entries = count, "Diary loaded");
                Ok((DiaryState { entries, path }, LoadOutcome::Loaded(count)))
            }
            Err(e) => {
                let backup = sibling(
                    &path,
                    &format!(".corrupt-{}", Local::now().format("%Y%m%d%H%M%S")),
                );
                warn!(
                    path = %path.display(),
                    backup = %backup.display(),
                    error = %e,
                    "Diary file is unreadable, moving it aside"
                );
                let backup = quarantine(&path, &backup)?;
                Ok((DiaryState::new(path), LoadOutcome::Recovered { backup }))
            }
        }
    }
}

/// Move `path` to `backup`, or to `backup-1`, `backup-2`, ... if that name
/// is taken. Earlier backups are never replaced.
fn quarantine(path: &Path, backup: &Path) -> Result<PathBuf, StoreError> {
    let mut target = backup.to_path_buf();
    let mut n = 0;
    while target.exists() {
        n += 1;
        target = sibling(backup, &format!("-{n}"));
    }
    fs::rename(path, &target).map_err(|source| StoreError::Quarantine {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(target)
}

/// `diary.json` + `suffix`, next to the original.
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    path.with_file_name(name)
}
