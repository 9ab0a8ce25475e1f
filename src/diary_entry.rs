use crate::config::{PREVIEW_CHARS, TIME_FORMAT};
use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

/// One diary record. Keys missing from the file, or set to `null`, read as
/// empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mood: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl DiaryEntry {
    pub fn new(mood: impl Into<String>, text: impl Into<String>) -> Self {
        DiaryEntry::at(mood, text, Local::now())
    }

    pub fn at(mood: impl Into<String>, text: impl Into<String>, when: DateTime<Local>) -> Self {
        DiaryEntry {
            mood: mood.into(),
            text: text.into(),
            time: when.format(TIME_FORMAT).to_string(),
        }
    }

    /// The text as shown in the list: at most `PREVIEW_CHARS` characters.
    pub fn preview(&self) -> &str {
        match self.text.char_indices().nth(PREVIEW_CHARS) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }
}
