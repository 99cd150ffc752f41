//! Two-tier content read for the landing page.
//!
//! Each showcase section reads its live collection and falls back to a
//! built-in sample dataset when the collection is empty or the read fails.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::event::{self, Event};
use crate::models::member::Member;
use crate::models::song::{Song, SongCategory};
use crate::services::record_store::{RecordStore, StoreError};

/// Upcoming events shown on the page by default.
pub const DEFAULT_UPCOMING_LIMIT: usize = 4;

/// Where a collection shown on the page came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Live,
    Sample,
}

/// A collection together with its source.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub items: Vec<T>,
    pub source: ContentSource,
}

/// Picks the live collection when it has records, the sample otherwise.
///
/// A failed live read is logged and treated like an empty one.
pub fn resolve<T>(
    collection: &str,
    live: Result<Vec<T>, StoreError>,
    sample: impl FnOnce() -> Vec<T>,
) -> Sourced<T> {
    match live {
        Ok(items) if !items.is_empty() => Sourced {
            items,
            source: ContentSource::Live,
        },
        Ok(_) => Sourced {
            items: sample(),
            source: ContentSource::Sample,
        },
        Err(e) => {
            warn!(collection, error = %e, "Live read failed, showing sample content");
            Sourced {
                items: sample(),
                source: ContentSource::Sample,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentOptions {
    /// Serve sample data for empty or failing collections.
    pub sample_fallback: bool,
    pub upcoming_limit: usize,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            sample_fallback: true,
            upcoming_limit: DEFAULT_UPCOMING_LIMIT,
        }
    }
}

/// Per-collection sources of a [`SiteContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSources {
    pub members: ContentSource,
    pub songs: ContentSource,
    pub events: ContentSource,
}

/// Everything the landing page renders from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub members: Vec<Member>,
    pub songs: Vec<Song>,
    pub events: Vec<Event>,
    pub upcoming_events: Vec<Event>,
    pub source: SiteSources,
}

fn live_only<T>(live: Result<Vec<T>, StoreError>) -> Result<Sourced<T>, StoreError> {
    Ok(Sourced {
        items: live?,
        source: ContentSource::Live,
    })
}

/// Reads members, songs and events for the page.
///
/// With fallback disabled a failing collection fails the whole read.
pub async fn load_site_content(
    store: &dyn RecordStore,
    options: &ContentOptions,
    today: NaiveDate,
) -> Result<SiteContent, StoreError> {
    let (members, songs, events) = if options.sample_fallback {
        (
            resolve("members", store.list_members().await, sample_members),
            resolve("songs", store.list_songs().await, sample_songs),
            resolve("events", store.list_events().await, sample_events),
        )
    } else {
        (
            live_only(store.list_members().await)?,
            live_only(store.list_songs().await)?,
            live_only(store.list_events().await)?,
        )
    };

    let upcoming_events = event::upcoming(&events.items, today, options.upcoming_limit);
    let source = SiteSources {
        members: members.source,
        songs: songs.source,
        events: events.source,
    };
    info!(
        members = members.items.len(),
        songs = songs.items.len(),
        events = events.items.len(),
        upcoming = upcoming_events.len(),
        "Site content loaded"
    );

    Ok(SiteContent {
        members: members.items,
        songs: songs.items,
        events: events.items,
        upcoming_events,
        source,
    })
}

fn sample_id(collection: u128, index: usize) -> Uuid {
    Uuid::from_u128((collection << 64) | (index as u128 + 1))
}

fn sample_timestamp() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

/// The group's members as shown before any are stored.
pub fn sample_members() -> Vec<Member> {
    [
        ("Davis Rogoncho", "Lead", "/images/dav-ron.jpg", 5,
            "Music has been my way of connecting with God and sharing His love with others."),
        ("Ken Ogetii", "Tenor", "/images/ken-1.jpg", 4,
            "Through a cappella, I've learned that harmony in music reflects harmony in life."),
        ("Ken", "Baritone", "/images/ken-2.jpg", 6,
            "Every performance is an opportunity to minister and touch someone's heart."),
        ("Sydney", "Soprano", "/images/sydney.jpg", 3,
            "The foundation of our music comes from the foundation of our faith."),
        ("Tenor Guy", "Tenor", "/images/tenor-guy.jpg", 2,
            "Singing praises lifts the soul and brings us closer to heaven."),
        ("Bass Man", "Bass", "/images/bass-man.jpg", 4,
            "The deep notes carry the weight of our worship and anchor our harmonies."),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, voice_part, image_url, years, testimony))| Member {
        id: sample_id(1, i),
        name: name.to_string(),
        voice_part: voice_part.to_string(),
        image_url: image_url.to_string(),
        years_with_group: years,
        testimony: Some(testimony.to_string()),
        created_at: sample_timestamp(),
    })
    .collect()
}

/// Performance calendar shown before any events are stored.
pub fn sample_events() -> Vec<Event> {
    [
        ("Sunday Morning Worship", "2024-03-17", "10:00 AM", "Syokimau Central SDA Church",
            "Church Service", "confirmed",
            "Join us for uplifting worship through a cappella ministry music."),
        ("Wedding Ceremony Performance", "2024-03-23", "2:00 PM", "Nairobi Wedding Gardens",
            "Private Event", "confirmed",
            "Special performance for Sarah & Michael's wedding ceremony."),
        ("Youth Conference 2024", "2024-04-05", "7:00 PM", "Adventist University of Africa",
            "Conference", "tentative",
            "Inspiring young hearts through gospel a cappella music."),
        ("Corporate Dinner Event", "2024-04-12", "6:30 PM", "Serena Hotel, Nairobi",
            "Corporate Event", "confirmed",
            "Professional performance for annual company celebration."),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, date, time, location, event_type, status, description))| Event {
        id: sample_id(2, i),
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        location: location.to_string(),
        event_type: event_type.to_string(),
        status: status.to_string(),
        description: Some(description.to_string()),
        attendance_link: None,
        created_at: sample_timestamp(),
    })
    .collect()
}

/// Gallery tracks: originals and covers with audio, live sets with video.
pub fn sample_songs() -> Vec<Song> {
    const LIVE_VIDEO: Option<&str> = Some("dQw4w9WgXcQ");

    [
        ("When They Ring Those Golden Bells", "4:32",
            "/audio/Acappella _When They Ring Those Golden Bells_ Rehearsal.mp3",
            SongCategory::Original, "Our signature arrangement of this beloved hymn", None),
        ("Ngoika Ka Nka", "5:18", "/audio/ngoika.mp3",
            SongCategory::Original, "A powerful rendition of this classic worship song", None),
        ("The Rock", "3:45", "/audio/The Rock.mp3",
            SongCategory::Original, "An uplifting arrangement filled with hope", None),
        ("Sunday Morning Worship - Syokimau Central SDA", "", "",
            SongCategory::Live, "Live performance during Sunday morning service", LIVE_VIDEO),
        ("Youth Conference 2023", "", "",
            SongCategory::Live, "Special performance at the annual youth conference", LIVE_VIDEO),
        ("Wedding Performance - Nairobi", "", "",
            SongCategory::Live, "Surprise performance at a beautiful wedding ceremony", LIVE_VIDEO),
        ("Waymaker - Sinach", "4:15", "/audio/waymaker.mp3",
            SongCategory::Cover, "Our a cappella arrangement of this contemporary gospel hit", None),
        ("Goodness of God - Bethel Music", "5:02", "/audio/goodness-of-god.mp3",
            SongCategory::Cover, "A heartfelt cover of this modern worship anthem", None),
        ("What a Beautiful Name - Hillsong", "4:28", "/audio/beautiful-name.mp3",
            SongCategory::Cover, "Our unique take on this powerful worship song", None),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (title, duration, audio_url, category, description, youtube_id))| Song {
        id: sample_id(3, i),
        title: title.to_string(),
        audio_url: audio_url.to_string(),
        duration: duration.to_string(),
        category,
        description: Some(description.to_string()),
        youtube_id: youtube_id.map(str::to_string),
        created_at: sample_timestamp(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::member::CreateMemberRequest;
    use crate::services::record_store::InMemoryRecordStore;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_resolve_prefers_live_records() {
        let sourced = resolve("numbers", Ok(vec![1, 2]), || vec![9]);
        assert_eq!(sourced.items, vec![1, 2]);
        assert_eq!(sourced.source, ContentSource::Live);
    }

    #[test]
    fn test_resolve_falls_back_on_empty_or_error() {
        let empty = resolve("numbers", Ok(Vec::new()), || vec![9]);
        assert_eq!(empty.source, ContentSource::Sample);
        assert_eq!(empty.items, vec![9]);

        let failed = resolve(
            "numbers",
            Err(StoreError::Unavailable("offline".to_string())),
            || vec![7],
        );
        assert_eq!(failed.source, ContentSource::Sample);
        assert_eq!(failed.items, vec![7]);
    }

    #[test]
    fn test_sample_datasets() {
        let members = sample_members();
        assert_eq!(members.len(), 6);
        assert_eq!(members[0].name, "Davis Rogoncho");
        assert_eq!(members[0].voice_part, "Lead");

        let songs = sample_songs();
        assert_eq!(songs.len(), 9);
        for category in [SongCategory::Original, SongCategory::Cover, SongCategory::Live] {
            assert_eq!(songs.iter().filter(|s| s.category == category).count(), 3);
        }
        assert!(songs
            .iter()
            .filter(|s| s.category == SongCategory::Live)
            .all(|s| s.youtube_id.is_some()));

        let events = sample_events();
        assert_eq!(events.len(), 4);
        assert_eq!(events[2].status, "tentative");

        let mut ids: Vec<Uuid> = members.iter().map(|m| m.id).collect();
        ids.extend(songs.iter().map(|s| s.id));
        ids.extend(events.iter().map(|e| e.id));
        let count = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[tokio::test]
    async fn test_load_site_content_from_empty_store_uses_samples() {
        let store = InMemoryRecordStore::new();
        let content = load_site_content(&store, &ContentOptions::default(), date("2024-03-20"))
            .await
            .unwrap();

        assert_eq!(content.source.members, ContentSource::Sample);
        assert_eq!(content.members.len(), 6);
        assert_eq!(content.songs.len(), 9);
        let upcoming: Vec<&str> = content
            .upcoming_events
            .iter()
            .map(|e| e.date.as_str())
            .collect();
        assert_eq!(upcoming, vec!["2024-03-23", "2024-04-05", "2024-04-12"]);
    }

    #[tokio::test]
    async fn test_load_site_content_mixes_live_and_sample() {
        let store = InMemoryRecordStore::new();
        store
            .create_member(CreateMemberRequest {
                name: "Amani".to_string(),
                voice_part: "Alto".to_string(),
                image_url: String::new(),
                years_with_group: 1,
                testimony: None,
            })
            .await
            .unwrap();

        let content = load_site_content(&store, &ContentOptions::default(), date("2030-01-01"))
            .await
            .unwrap();
        assert_eq!(content.source.members, ContentSource::Live);
        assert_eq!(content.members.len(), 1);
        assert_eq!(content.source.events, ContentSource::Sample);
        assert!(content.upcoming_events.is_empty());
    }

    #[tokio::test]
    async fn test_load_site_content_failure_handling() {
        let store = InMemoryRecordStore::failing();
        let today = date("2024-01-01");

        let content = load_site_content(&store, &ContentOptions::default(), today)
            .await
            .unwrap();
        assert_eq!(content.source.songs, ContentSource::Sample);
        assert_eq!(content.upcoming_events.len(), 4);

        let strict = ContentOptions {
            sample_fallback: false,
            upcoming_limit: 2,
        };
        assert!(load_site_content(&store, &strict, today).await.is_err());

        store.set_failing(false);
        let live = load_site_content(&store, &strict, today).await.unwrap();
        assert!(live.members.is_empty());
        assert_eq!(live.source.events, ContentSource::Live);
    }
}
