use crate::error::StoreError;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_ID: &str = "se.danielnylander.dagboken";
pub const APP_NAME: &str = "Dagboken";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_COMMENTS: &str = "Picture diary for children";
pub const APP_DEVELOPER: &str = "Daniel Nylander <daniel@danielnylander.se>";
pub const APP_WEBSITE: &str = "https://github.com/yeager/dagboken";
pub const APP_LICENSE: &str = "GPL-3.0";

pub const DIARY_FILE_NAME: &str = "diary.json";
pub const LOG_FILE_NAME: &str = "dagboken.log";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// `strftime` format of `DiaryEntry::time`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Format of the date line under the title.
pub const TODAY_FORMAT: &str = "%A %d %B %Y";

/// Number of entries shown on the main screen.
pub const RECENT_LIMIT: usize = 20;
/// Characters of entry text shown per row.
pub const PREVIEW_CHARS: usize = 80;

pub const MOODS: [&str; 6] = ["😊", "😐", "😢", "😡", "😴", "🤩"];

/// Where the diary and its log live on disk.
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
    pub diary_file: PathBuf,
    pub log_file: PathBuf,
}

impl Paths {
    /// Resolve paths from an explicit directory, or the user config dir.
    pub fn resolve(data_dir: Option<&Path>) -> Self {
        let data_dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_data_dir(),
        };
        Paths {
            diary_file: data_dir.join(DIARY_FILE_NAME),
            log_file: data_dir.join(LOG_FILE_NAME),
            data_dir,
        }
    }

    pub fn ensure_dir(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).map_err(|source| StoreError::CreateDir {
            path: self.data_dir.clone(),
            source,
        })
    }
}

fn default_data_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dagboken")
}
