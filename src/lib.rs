//! Quran Connect Core Library.
//! Handles the qibla direction math, content API payload mapping, and
//! the persisted application state behind the mobile reader UI.
//!
//! The crate owns no I/O: HTTP transport, device sensors, notification
//! scheduling, and the key-value backing store are external
//! collaborators. Callers fetch and sense; this library computes,
//! maps, and holds state.

pub mod types {
    pub mod content;
    pub mod location;
    pub mod qibla;
    pub mod settings;
}

pub mod utils {
    pub mod api;
    pub mod haversine;
    pub mod qibla;
    pub mod store;
}

pub use types::content::{Bookmark, Surah, Verse};
pub use types::location::Coordinates;
pub use types::qibla::{Accuracy, QiblaResult};
pub use types::settings::{FontSize, Settings, VerseType};
pub use utils::qibla::{compass_rotation, format_distance, qibla_direction, MECCA};
pub use utils::store::{AppState, PersistedState, SettingsUpdate};
