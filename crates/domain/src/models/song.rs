//! Song domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// A recording listed in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: Uuid,
    pub title: String,
    pub audio_url: String,
    /// Nominal duration for display (`"4:32"`); the player reads the real
    /// duration from the audio resource.
    pub duration: String,
    pub category: SongCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Song {
    /// Video thumbnails for the song's performance, best quality first.
    pub fn thumbnails(&self) -> Option<[String; 2]> {
        self.youtube_id.as_deref().map(youtube_thumbnails)
    }
}

/// Gallery tab a song belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SongCategory {
    Original,
    Cover,
    Live,
}

impl SongCategory {
    /// Converts to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SongCategory::Original => "original",
            SongCategory::Cover => "cover",
            SongCategory::Live => "live",
        }
    }

    /// Parses from database string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "original" => Some(SongCategory::Original),
            "cover" => Some(SongCategory::Cover),
            "live" => Some(SongCategory::Live),
            _ => None,
        }
    }
}

/// Request payload for adding a song.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSongRequest {
    pub title: String,
    pub audio_url: String,
    pub duration: String,
    pub category: SongCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_id: Option<String>,
}

/// Response for listing songs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSongsResponse {
    pub songs: Vec<Song>,
    pub total: usize,
}

/// Query parameters for listing songs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSongsQuery {
    /// Exact category match; unknown categories match nothing.
    pub category: Option<String>,
}

/// Keeps the songs whose category string equals `category` exactly.
pub fn filter_by_category(songs: Vec<Song>, category: &str) -> Vec<Song> {
    songs
        .into_iter()
        .filter(|s| s.category.as_str() == category)
        .collect()
}

/// YouTube thumbnail URLs for a video id: `maxresdefault` first, then the
/// always-present `hqdefault` used when the high-resolution image is missing.
pub fn youtube_thumbnails(video_id: &str) -> [String; 2] {
    [
        format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id),
        format!("https://img.youtube.com/vi/{}/hqdefault.jpg", video_id),
    ]
}
