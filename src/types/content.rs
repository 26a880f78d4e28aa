//! Struct definitions for the content the app reads: chapters, verses,
//! and the user's saved verses.
//!
//! These types cross the persistence seam as JSON, so they all derive
//! serde traits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chapter of the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surah {
    /// Chapter number, 1 through 114.
    pub number: u32,
    /// Arabic name.
    pub name: String,
    /// Transliterated English name.
    pub english_name: String,
    /// How many verses the chapter holds.
    pub number_of_ayahs: u32,
    /// Where the chapter was revealed, `"Meccan"` or `"Medinan"`.
    pub revelation_type: String,
}

/// A single verse with its translation and optional recitation audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verse {
    /// Verse number within its chapter.
    pub number: u32,
    /// Arabic text.
    pub text: String,
    /// English translation; empty when the translation edition had no
    /// matching entry.
    pub translation: String,
    /// Chapter the verse belongs to.
    pub surah: u32,
    /// Recitation audio URL, when available.
    pub audio: Option<String>,
}

/// A verse the user saved, either as a bookmark or a favorite.
///
/// The verse text is denormalized into the record so saved verses stay
/// readable without refetching content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Synthetic id, a v4 UUID rendered as a string.
    pub id: String,
    pub surah: u32,
    pub verse: u32,
    pub text: String,
    pub translation: String,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Creates a saved-verse record for `verse`, stamping a fresh id
    /// and the current time.
    pub fn for_verse(verse: &Verse) -> Bookmark {
        Bookmark {
            id: Uuid::new_v4().to_string(),
            surah: verse.surah,
            verse: verse.number,
            text: verse.text.clone(),
            translation: verse.translation.clone(),
            created_at: Utc::now(),
        }
    }
}
