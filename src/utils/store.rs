//! Stores the state of the app.
//!
//! One [`AppState`] instance backs the whole UI: fetched content, the
//! user's saved verses, preferences, reading position, and audio
//! playback. Only a subset of it survives restarts; the
//! [`PersistedState`] snapshot is what actually crosses the external
//! key-value store seam.

use chrono::NaiveTime;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::types::content::{Bookmark, Surah, Verse};
use crate::types::settings::{FontSize, Settings, VerseType};

/// Key the snapshot is stored under in the external key-value store.
pub const STORAGE_KEY: &str = "quran-connect-storage";

/// All client-local state.
#[derive(Debug)]
pub struct AppState {
    pub surahs: Vec<Surah>,
    pub verses: Vec<Verse>,
    pub daily_verse: Option<Verse>,
    pub bookmarks: Vec<Bookmark>,
    pub favorites: Vec<Bookmark>,
    pub settings: Settings,
    pub current_surah: u32,
    pub current_verse: u32,
    pub is_playing: bool,
    pub current_audio: Option<String>,
}

impl Default for AppState {
    fn default() -> AppState {
        AppState {
            surahs: Vec::new(),
            verses: Vec::new(),
            daily_verse: None,
            bookmarks: Vec::new(),
            favorites: Vec::new(),
            settings: Settings::default(),
            current_surah: 1,
            current_verse: 1,
            is_playing: false,
            current_audio: None,
        }
    }
}

impl AppState {
    pub fn new() -> AppState {
        AppState::default()
    }

    /// Replaces the loaded chapter list.
    pub fn set_surahs(&mut self, surahs: Vec<Surah>) {
        debug!("Loaded {} surahs", surahs.len());
        self.surahs = surahs;
    }

    /// Replaces the loaded verses for the chapter being read.
    pub fn set_verses(&mut self, verses: Vec<Verse>) {
        debug!("Loaded {} verses", verses.len());
        self.verses = verses;
    }

    pub fn set_daily_verse(&mut self, verse: Verse) {
        self.daily_verse = Some(verse);
    }

    /// Bookmarks a verse, returning a reference to the stored record.
    pub fn bookmark_verse(&mut self, verse: &Verse) -> &Bookmark {
        let bookmark = Bookmark::for_verse(verse);
        info!("Bookmarking {}:{} as {}", verse.surah, verse.number, bookmark.id);
        self.bookmarks.push(bookmark);
        self.bookmarks.last().expect("just pushed")
    }

    pub fn add_bookmark(&mut self, bookmark: Bookmark) {
        self.bookmarks.push(bookmark);
    }

    /// Removes a bookmark by id. Unknown ids are a no-op; returns
    /// whether anything was removed.
    pub fn remove_bookmark(&mut self, id: &str) -> bool {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|b| b.id != id);
        before != self.bookmarks.len()
    }

    /// Marks a verse as a favorite, returning the stored record.
    pub fn favorite_verse(&mut self, verse: &Verse) -> &Bookmark {
        let favorite = Bookmark::for_verse(verse);
        info!("Favoriting {}:{} as {}", verse.surah, verse.number, favorite.id);
        self.favorites.push(favorite);
        self.favorites.last().expect("just pushed")
    }

    pub fn add_favorite(&mut self, favorite: Bookmark) {
        self.favorites.push(favorite);
    }

    /// Removes a favorite by id. Unknown ids are a no-op; returns
    /// whether anything was removed.
    pub fn remove_favorite(&mut self, id: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|f| f.id != id);
        before != self.favorites.len()
    }

    /// Whether the given verse is already bookmarked.
    pub fn is_bookmarked(&self, surah: u32, verse: u32) -> bool {
        self.bookmarks
            .iter()
            .any(|b| b.surah == surah && b.verse == verse)
    }

    /// Overlays the provided preference changes onto the current
    /// settings, leaving unset fields alone.
    pub fn update_settings(&mut self, update: SettingsUpdate) {
        debug!("Applying settings update: {:?}", update);
        update.apply_to(&mut self.settings);
    }

    /// Moves the reading position.
    pub fn set_current_position(&mut self, surah: u32, verse: u32) {
        self.current_surah = surah;
        self.current_verse = verse;
    }

    /// Updates audio playback state. Stopping playback clears the
    /// current track.
    pub fn set_audio_state(&mut self, is_playing: bool, audio_url: Option<String>) {
        self.is_playing = is_playing;
        self.current_audio = audio_url;
    }

    /// The subset of state written to the external key-value store.
    /// Fetched content and audio state are never persisted.
    pub fn snapshot(&self) -> PersistedState {
        PersistedState {
            bookmarks: self.bookmarks.clone(),
            favorites: self.favorites.clone(),
            settings: self.settings.clone(),
            current_surah: self.current_surah,
            current_verse: self.current_verse,
        }
    }

    /// Rebuilds state from a persisted snapshot. Everything outside
    /// the snapshot starts from defaults and is refetched by the UI.
    pub fn restore(persisted: PersistedState) -> AppState {
        info!(
            "Restoring state: {} bookmarks, {} favorites, position {}:{}",
            persisted.bookmarks.len(),
            persisted.favorites.len(),
            persisted.current_surah,
            persisted.current_verse
        );
        AppState {
            bookmarks: persisted.bookmarks,
            favorites: persisted.favorites,
            settings: persisted.settings,
            current_surah: persisted.current_surah,
            current_verse: persisted.current_verse,
            ..AppState::default()
        }
    }
}

/// Partial preference change, mirroring the settings screen where
/// each control updates one field.
#[derive(Debug, Default, Clone)]
pub struct SettingsUpdate {
    pub show_translation: Option<bool>,
    pub notification_time: Option<NaiveTime>,
    pub notification_enabled: Option<bool>,
    pub verse_type: Option<VerseType>,
    pub dark_mode: Option<bool>,
    pub font_size: Option<FontSize>,
}

impl SettingsUpdate {
    fn apply_to(self, settings: &mut Settings) {
        if let Some(show_translation) = self.show_translation {
            settings.show_translation = show_translation;
        }
        if let Some(notification_time) = self.notification_time {
            settings.notification_time = notification_time;
        }
        if let Some(notification_enabled) = self.notification_enabled {
            settings.notification_enabled = notification_enabled;
        }
        if let Some(verse_type) = self.verse_type {
            settings.verse_type = verse_type;
        }
        if let Some(dark_mode) = self.dark_mode {
            settings.dark_mode = dark_mode;
        }
        if let Some(font_size) = self.font_size {
            settings.font_size = font_size;
        }
    }
}

/// The snapshot written to and read from the external key-value store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub bookmarks: Vec<Bookmark>,
    pub favorites: Vec<Bookmark>,
    pub settings: Settings,
    pub current_surah: u32,
    pub current_verse: u32,
}
