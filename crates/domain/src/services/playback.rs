//! Single-audio-player coordination.
//!
//! The page root owns one [`PlaybackCoordinator`]. It holds the id of the
//! track currently allowed to play and hands a [`PlaybackHandle`] to every
//! [`AudioPlayer`]. Each player owns its own audio resource and subscribes
//! to the shared id. A mounted player drives [`AudioPlayer::observe`] (or
//! [`AudioPlayer::observe_change`] from its own event loop), so it pauses as
//! soon as another track takes over. Players never reach into each other.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tracing::debug;

/// Identifier of a player instance (the song id it renders).
pub type TrackId = String;

/// Failure reported by an audio resource.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("Audio source could not be loaded: {0}")]
    Load(String),

    #[error("Playback was refused: {0}")]
    Playback(String),
}

/// Reason a player command was not carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("Track is still loading")]
    Loading,

    #[error(transparent)]
    Media(#[from] MediaError),
}

/// The underlying playable resource owned by one player.
pub trait AudioResource {
    fn play(&mut self) -> Result<(), MediaError>;
    fn pause(&mut self);
    fn seek(&mut self, position_secs: f64);
}

/// Owner of the "currently playing id".
#[derive(Debug)]
pub struct PlaybackCoordinator {
    current: Arc<watch::Sender<Option<TrackId>>>,
}

impl PlaybackCoordinator {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            current: Arc::new(tx),
        }
    }

    /// Handle to pass down to a child component.
    pub fn handle(&self) -> PlaybackHandle {
        PlaybackHandle {
            current: Arc::clone(&self.current),
        }
    }

    /// Id of the track holding playback, if any.
    pub fn currently_playing(&self) -> Option<TrackId> {
        self.current.borrow().clone()
    }
}

impl Default for PlaybackCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Read access and setter for the shared id.
#[derive(Debug, Clone)]
pub struct PlaybackHandle {
    current: Arc<watch::Sender<Option<TrackId>>>,
}

impl PlaybackHandle {
    pub fn currently_playing(&self) -> Option<TrackId> {
        self.current.borrow().clone()
    }

    /// Makes `id` the sole authorized player.
    pub fn request_play(&self, id: &str) {
        self.current.send_replace(Some(id.to_string()));
    }

    /// Clears the shared id, but only if `id` still holds it.
    pub fn release(&self, id: &str) -> bool {
        self.current.send_if_modified(|current| {
            if current.as_deref() == Some(id) {
                *current = None;
                true
            } else {
                false
            }
        })
    }

    /// Subscribes to changes of the shared id.
    pub fn subscribe(&self) -> watch::Receiver<Option<TrackId>> {
        self.current.subscribe()
    }
}

/// One player instance on the page.
pub struct AudioPlayer<R: AudioResource> {
    id: TrackId,
    nominal_duration: String,
    resource: R,
    handle: PlaybackHandle,
    current: watch::Receiver<Option<TrackId>>,
    playing: bool,
    loading: bool,
    errored: bool,
    position: f64,
    duration: Option<f64>,
}

impl<R: AudioResource> AudioPlayer<R> {
    /// Mounts a player for `id`. `nominal_duration` is shown until the
    /// resource reports its real duration.
    pub fn new(
        id: impl Into<TrackId>,
        nominal_duration: impl Into<String>,
        resource: R,
        handle: PlaybackHandle,
    ) -> Self {
        let current = handle.subscribe();
        Self {
            id: id.into(),
            nominal_duration: nominal_duration.into(),
            resource,
            handle,
            current,
            playing: false,
            loading: false,
            errored: false,
            position: 0.0,
            duration: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Reconciles with the shared id: pauses the own resource when another
    /// track has taken over.
    pub fn sync(&mut self) {
        let current = self.current.borrow_and_update().clone();
        if self.playing && current.as_deref() != Some(self.id.as_str()) {
            self.resource.pause();
            self.playing = false;
            debug!(track_id = %self.id, now_playing = ?current, "Paused for another track");
        }
    }

    /// Waits until the shared id changes, then reconciles. Returns `true`
    /// when the change paused this player.
    pub async fn observe_change(&mut self) -> bool {
        if self.current.changed().await.is_err() {
            return false;
        }
        let was_playing = self.playing;
        self.sync();
        was_playing && !self.playing
    }

    /// Follows the shared id until another track pauses this one.
    pub async fn observe(&mut self) {
        while !self.observe_change().await {}
    }

    /// Whether this instance currently holds the shared id.
    pub fn is_current(&self) -> bool {
        self.handle.currently_playing().as_deref() == Some(self.id.as_str())
    }

    pub fn is_playing(&mut self) -> bool {
        self.sync();
        self.playing
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_error(&self) -> bool {
        self.errored
    }

    /// Play control disabled state.
    pub fn controls_disabled(&self) -> bool {
        self.loading
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Duration reported by the resource, if known.
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Takes the shared id and starts the own resource.
    pub fn play(&mut self) -> Result<(), PlaybackError> {
        self.sync();
        if self.loading {
            return Err(PlaybackError::Loading);
        }
        if self.playing {
            return Ok(());
        }

        self.handle.request_play(&self.id);
        self.current.borrow_and_update();
        if let Err(e) = self.resource.play() {
            self.errored = true;
            self.handle.release(&self.id);
            return Err(e.into());
        }
        self.playing = true;
        self.errored = false;
        debug!(track_id = %self.id, "Playback started");
        Ok(())
    }

    /// Pauses and gives up the shared id.
    pub fn stop(&mut self) {
        self.sync();
        if self.playing {
            self.resource.pause();
            self.playing = false;
        }
        self.handle.release(&self.id);
    }

    /// The play/pause button.
    pub fn toggle(&mut self) -> Result<(), PlaybackError> {
        if self.is_playing() {
            self.stop();
            Ok(())
        } else {
            self.play()
        }
    }

    /// Seeks to `ratio` of the duration (clamped to `[0, 1]`).
    ///
    /// Returns the new position, or `None` when the player is not the current
    /// one or the duration is still unknown; position is left untouched then.
    pub fn seek_to_fraction(&mut self, ratio: f64) -> Option<f64> {
        self.sync();
        if !self.is_current() || ratio.is_nan() {
            return None;
        }
        let duration = self.duration?;
        let target = ratio.clamp(0.0, 1.0) * duration;
        self.resource.seek(target);
        self.position = target;
        Some(target)
    }

    /// Seeks from a click or drag at `offset` within a bar `width` wide.
    pub fn seek_from_pointer(&mut self, offset: f64, width: f64) -> Option<f64> {
        if !width.is_finite() || width <= 0.0 {
            return None;
        }
        self.seek_to_fraction(offset / width)
    }

    pub fn on_load_start(&mut self) {
        self.loading = true;
    }

    pub fn on_can_play(&mut self) {
        self.loading = false;
    }

    /// Records the real duration; NaN, infinite and non-positive values
    /// count as unknown.
    pub fn on_loaded_metadata(&mut self, duration_secs: f64) {
        self.duration = (duration_secs.is_finite() && duration_secs > 0.0).then_some(duration_secs);
    }

    pub fn on_time_update(&mut self, position_secs: f64) {
        if position_secs.is_finite() && position_secs >= 0.0 {
            self.position = position_secs;
        }
    }

    /// Natural end of the track: release the shared id and rewind.
    pub fn on_ended(&mut self) {
        if self.playing {
            self.resource.pause();
        }
        self.playing = false;
        self.handle.release(&self.id);
        self.position = 0.0;
        self.resource.seek(0.0);
        debug!(track_id = %self.id, "Playback ended");
    }

    /// The resource failed; degrade to an idle player instead of failing.
    pub fn on_error(&mut self, error: MediaError) {
        tracing::warn!(track_id = %self.id, error = %error, "Audio resource error");
        self.loading = false;
        self.errored = true;
        if self.playing {
            self.playing = false;
            self.resource.pause();
        }
        self.handle.release(&self.id);
    }

    /// Elapsed time label.
    pub fn elapsed_label(&self) -> String {
        format_time(self.position)
    }

    /// Duration label, falling back to the nominal string before metadata.
    pub fn display_duration(&self) -> String {
        match self.duration {
            Some(d) => format_time(d),
            None => self.nominal_duration.clone(),
        }
    }

    /// Progress bar fill in percent; 0 while the duration is unknown.
    pub fn progress_percent(&self) -> f64 {
        match self.duration {
            Some(d) => (self.position / d * 100.0).clamp(0.0, 100.0),
            None => 0.0,
        }
    }
}

/// Formats seconds as `m:ss`; non-finite or negative input renders `0:00`.
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "0:00".to_string();
    }
    let total = secs.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Audio resource that records what it was asked to do.
#[derive(Debug, Clone, Default)]
pub struct MockAudioResource {
    pub playing: bool,
    pub position: f64,
    pub play_calls: usize,
    pub pause_calls: usize,
    /// Refuse `play` as a browser would for a broken source.
    pub fail_play: bool,
}

impl MockAudioResource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn broken() -> Self {
        Self {
            fail_play: true,
            ..Self::default()
        }
    }
}

impl AudioResource for MockAudioResource {
    fn play(&mut self) -> Result<(), MediaError> {
        self.play_calls += 1;
        if self.fail_play {
            return Err(MediaError::Playback("source not supported".to_string()));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.playing = false;
    }

    fn seek(&mut self, position_secs: f64) {
        self.position = position_secs;
    }
}
