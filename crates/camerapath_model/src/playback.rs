// SPDX-License-Identifier: MIT OR Apache-2.0
//! Playback control for scrubbing and timed traversal of a camera path.

use crate::path::CameraPath;

/// Playback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Stopped at the start of the range.
    #[default]
    Stopped,
    /// Advancing with time.
    Playing,
    /// Holding the current time.
    Paused,
}

/// Drives a time cursor along a camera path.
///
/// The controller only moves the cursor; the caller pairs it with
/// [`CameraPath::camera_at`] to obtain poses. Everything runs on the
/// caller's thread, one `advance` per UI tick.
#[derive(Debug, Clone)]
pub struct PlaybackController {
    /// Current playback time.
    pub time: f64,
    /// Playback state.
    pub state: PlaybackState,
    /// Playback speed multiplier.
    pub speed: f64,
    /// Whether playback wraps around at the end of the range.
    pub looping: bool,
    /// Frame rate used for frame/time conversion.
    pub frame_rate: f64,
}

impl PlaybackController {
    /// Create a stopped controller at t = 0.
    pub fn new() -> Self {
        Self {
            time: 0.0,
            state: PlaybackState::Stopped,
            speed: 1.0,
            looping: false,
            frame_rate: 30.0,
        }
    }

    /// Start or resume playback.
    pub fn play(&mut self) {
        self.state = PlaybackState::Playing;
    }

    /// Pause playback, keeping the current time.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Stop and rewind to the start of the path's range.
    pub fn stop(&mut self, path: &CameraPath) {
        self.state = PlaybackState::Stopped;
        self.time = path.min_time().unwrap_or(0.0);
    }

    /// Toggle between playing and paused/stopped.
    pub fn toggle_playback(&mut self) {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused | PlaybackState::Stopped => self.play(),
        }
    }

    /// Whether the controller is currently advancing.
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Scrub to a time, clamped into the path's range.
    pub fn seek(&mut self, t: f64, path: &CameraPath) {
        self.time = path.clamp_time(t);
    }

    /// Advance the cursor by `delta_time`, scaled by the speed multiplier.
    ///
    /// Reaching the end of the range wraps when looping, otherwise clamps
    /// there and stops. Does nothing unless playing.
    pub fn advance(&mut self, delta_time: f64, path: &CameraPath) {
        if self.state != PlaybackState::Playing {
            return;
        }
        let (Some(min), Some(max)) = (path.min_time(), path.max_time()) else {
            return;
        };
        self.time += delta_time * self.speed;
        if self.time >= max {
            if self.looping && max > min {
                self.time = min + (self.time - max);
            } else {
                self.time = max;
                self.state = PlaybackState::Stopped;
            }
        }
    }

    /// Convert the current time to a frame number.
    pub fn current_frame(&self) -> u64 {
        (self.time.max(0.0) * self.frame_rate) as u64
    }

    /// Convert a frame number to a time value.
    pub fn frame_to_time(&self, frame: u64) -> f64 {
        frame as f64 / self.frame_rate
    }
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}
