// SPDX-License-Identifier: MIT OR Apache-2.0
//! Camera path: keyframe table, spline channels and path status.
//!
//! [`CameraPath`] owns the ordered keyframe table and the three vector
//! channels (position, focal point, view-up) interpolating through it.
//! Structural edits mark the built path stale; an explicit
//! [`CameraPath::create_path`] rebuilds every channel, so keystroke-level
//! editing never pays for nine scalar-spline refits per change.

use crate::camera::CameraPose;
use crate::error::{PathError, Result};
use crate::keyframe::KeyFrame;
use crate::point_spline::PointSpline;
use serde::{Deserialize, Serialize};

/// Default dense-sampling rate, in samples per unit time.
pub const DEFAULT_SAMPLE_RATE: f64 = 30.0;

/// Lifecycle of the interpolated path relative to the keyframe table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PathStatus {
    /// No path has been built yet; evaluation is rejected.
    #[default]
    NotCreated,
    /// A path exists but the keyframe table changed since it was built.
    NotUpToDate,
    /// The channels match the keyframe table.
    UpToDate,
}

/// A camera trajectory through time-stamped keyframes.
///
/// Keyframes are value copies, always sorted strictly ascending by time.
/// A deserialized path comes back with [`PathStatus::NotCreated`]; call
/// [`CameraPath::create_path`] before evaluating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraPath {
    key_frames: Vec<KeyFrame>,
    sample_rate: f64,
    #[serde(skip)]
    positions: PointSpline,
    #[serde(skip)]
    focal_points: PointSpline,
    #[serde(skip)]
    view_ups: PointSpline,
    #[serde(skip)]
    status: PathStatus,
}

impl CameraPath {
    /// Create an empty camera path.
    pub fn new() -> Self {
        Self {
            key_frames: Vec::new(),
            sample_rate: DEFAULT_SAMPLE_RATE,
            positions: PointSpline::new(),
            focal_points: PointSpline::new(),
            view_ups: PointSpline::new(),
            status: PathStatus::NotCreated,
        }
    }

    /// Current path status.
    pub fn status(&self) -> PathStatus {
        self.status
    }

    /// Number of keyframes in the table.
    pub fn key_frame_count(&self) -> usize {
        self.key_frames.len()
    }

    /// All keyframes, sorted ascending by time.
    pub fn key_frames(&self) -> &[KeyFrame] {
        &self.key_frames
    }

    /// The keyframe at `index`.
    pub fn key_frame(&self, index: usize) -> Result<&KeyFrame> {
        self.key_frames
            .get(index)
            .ok_or(PathError::IndexOutOfRange {
                index,
                count: self.key_frames.len(),
            })
    }

    /// Time of the keyframe at `index`.
    pub fn key_frame_time(&self, index: usize) -> Result<f64> {
        Ok(self.key_frame(index)?.time)
    }

    /// Pose of the keyframe at `index`.
    pub fn key_frame_pose(&self, index: usize) -> Result<CameraPose> {
        Ok(self.key_frame(index)?.camera)
    }

    /// Time of the first keyframe, `None` when the table is empty.
    pub fn min_time(&self) -> Option<f64> {
        self.key_frames.first().map(|k| k.time)
    }

    /// Time of the last keyframe, `None` when the table is empty.
    pub fn max_time(&self) -> Option<f64> {
        self.key_frames.last().map(|k| k.time)
    }

    /// Index of the keyframe at exactly `time`, if any.
    pub fn key_frame_index_at(&self, time: f64) -> Option<usize> {
        self.key_frames.iter().position(|k| k.time == time)
    }

    /// Dense-sampling rate used when rebuilding the display polyline.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Change the dense-sampling rate (samples per unit time).
    pub fn set_sample_rate(&mut self, rate: f64) -> Result<()> {
        if !(rate > 0.0) {
            return Err(PathError::InvalidInput(format!(
                "sample rate must be positive, got {rate}"
            )));
        }
        self.sample_rate = rate;
        Ok(())
    }

    /// The dense position polyline from the last [`CameraPath::create_path`].
    pub fn path_samples(&self) -> &[[f64; 3]] {
        self.positions.polyline()
    }

    /// The position channel.
    pub fn positions(&self) -> &PointSpline {
        &self.positions
    }

    /// The focal-point channel.
    pub fn focal_points(&self) -> &PointSpline {
        &self.focal_points
    }

    /// The view-up channel.
    pub fn view_ups(&self) -> &PointSpline {
        &self.view_ups
    }

    /// Add a keyframe, returning its index in the sorted table.
    ///
    /// Fails with [`PathError::DuplicateTime`] when a keyframe already owns
    /// `time`; the table is left unchanged. On success the built channels
    /// receive the new point when `time` falls inside their current domain,
    /// and a previously up-to-date path is marked stale.
    pub fn add_key_frame(&mut self, time: f64, camera: CameraPose) -> Result<usize> {
        if let Some(index) = self.key_frame_index_at(time) {
            return Err(PathError::DuplicateTime { time, index });
        }
        let at = self.key_frames.partition_point(|k| k.time < time);
        self.key_frames.insert(at, KeyFrame::new(time, camera));

        if self.channels_contain(time) {
            self.push_channel_points(time, &camera)?;
        }
        self.mark_stale();
        Ok(at)
    }

    /// Remove the keyframe at `index`, returning it.
    pub fn remove_key_frame(&mut self, index: usize) -> Result<KeyFrame> {
        self.key_frame(index)?;
        let removed = self.key_frames.remove(index);
        if self.channels_contain(removed.time) {
            self.remove_channel_points(removed.time)?;
        }
        self.mark_stale();
        Ok(removed)
    }

    /// Remove every keyframe and reset the channels.
    pub fn remove_all(&mut self) {
        self.key_frames.clear();
        self.positions = PointSpline::new();
        self.focal_points = PointSpline::new();
        self.view_ups = PointSpline::new();
        self.status = PathStatus::NotCreated;
        tracing::debug!("camera path cleared");
    }

    /// Move the keyframe at `index` to a new time.
    ///
    /// Fails with [`PathError::DuplicateTime`] when another keyframe owns
    /// `time`. Returns the keyframe's index after re-sorting; indices are
    /// not stable across a time edit.
    pub fn set_key_frame_time(&mut self, index: usize, time: f64) -> Result<usize> {
        let old = *self.key_frame(index)?;
        if old.time == time {
            tracing::debug!(time, "keyframe time identical, no effect");
            return Ok(index);
        }
        if let Some(other) = self.key_frame_index_at(time) {
            return Err(PathError::DuplicateTime { time, index: other });
        }

        if self.channels_contain(old.time) {
            self.remove_channel_points(old.time)?;
        }
        self.key_frames.remove(index);
        let at = self.key_frames.partition_point(|k| k.time < time);
        self.key_frames.insert(at, KeyFrame::new(time, old.camera));
        if self.channels_contain(time) {
            self.push_channel_points(time, &old.camera)?;
        }
        self.mark_stale();
        Ok(at)
    }

    /// Replace the whole pose of the keyframe at `index`.
    ///
    /// A pose identical to the stored one (exact component equality) is a
    /// no-op and does not invalidate the path.
    pub fn set_key_frame_pose(&mut self, index: usize, camera: CameraPose) -> Result<()> {
        let old = *self.key_frame(index)?;
        if old.camera == camera {
            tracing::debug!(index, "keyframe pose identical, no effect");
            return Ok(());
        }
        self.key_frames[index].camera = camera;
        if self.channels_contain(old.time) {
            self.push_channel_points(old.time, &camera)?;
        }
        self.mark_stale();
        Ok(())
    }

    /// Set the position of the keyframe at `index` (exact-equality no-op).
    pub fn set_key_frame_position(&mut self, index: usize, position: [f64; 3]) -> Result<()> {
        let old = *self.key_frame(index)?;
        if old.camera.position == position {
            tracing::debug!(index, "keyframe position identical, no effect");
            return Ok(());
        }
        self.key_frames[index].camera.position = position;
        if self.channels_contain(old.time) {
            self.positions.add_point(old.time, position)?;
        }
        self.mark_stale();
        Ok(())
    }

    /// Set the focal point of the keyframe at `index` (exact-equality no-op).
    pub fn set_key_frame_focal_point(&mut self, index: usize, focal_point: [f64; 3]) -> Result<()> {
        let old = *self.key_frame(index)?;
        if old.camera.focal_point == focal_point {
            tracing::debug!(index, "keyframe focal point identical, no effect");
            return Ok(());
        }
        self.key_frames[index].camera.focal_point = focal_point;
        if self.channels_contain(old.time) {
            self.focal_points.add_point(old.time, focal_point)?;
        }
        self.mark_stale();
        Ok(())
    }

    /// Set the view-up of the keyframe at `index` (exact-equality no-op).
    pub fn set_key_frame_view_up(&mut self, index: usize, view_up: [f64; 3]) -> Result<()> {
        let old = *self.key_frame(index)?;
        if old.camera.view_up == view_up {
            tracing::debug!(index, "keyframe view-up identical, no effect");
            return Ok(());
        }
        self.key_frames[index].camera.view_up = view_up;
        if self.channels_contain(old.time) {
            self.view_ups.add_point(old.time, view_up)?;
        }
        self.mark_stale();
        Ok(())
    }

    /// Rebuild all three channels from the sorted keyframe table.
    ///
    /// Re-initializes every channel to `[min_time, max_time]`, adds one
    /// point per keyframe in time order, regenerates the dense position
    /// polyline and promotes the status to [`PathStatus::UpToDate`]. Fails
    /// with [`PathError::NotReady`] on an empty table.
    pub fn create_path(&mut self) -> Result<()> {
        let (Some(min), Some(max)) = (self.min_time(), self.max_time()) else {
            return Err(PathError::NotReady);
        };

        self.positions.initialize(min, max)?;
        self.focal_points.initialize(min, max)?;
        self.view_ups.initialize(min, max)?;
        for kf in &self.key_frames {
            self.positions.add_point(kf.time, kf.camera.position)?;
            self.focal_points.add_point(kf.time, kf.camera.focal_point)?;
            self.view_ups.add_point(kf.time, kf.camera.view_up)?;
        }
        self.positions.update_polyline(self.sample_rate)?;

        self.status = PathStatus::UpToDate;
        tracing::debug!(
            key_frames = self.key_frames.len(),
            min,
            max,
            "camera path created"
        );
        Ok(())
    }

    /// Interpolated pose at `t`, clamped into the keyframe time range.
    ///
    /// Fails with [`PathError::NotReady`] until a path has been created.
    /// All three channels are evaluated at the same clamped `t`; any
    /// channel failure aborts the whole query.
    pub fn camera_at(&self, t: f64) -> Result<CameraPose> {
        if self.status == PathStatus::NotCreated {
            return Err(PathError::NotReady);
        }
        let t = self.clamp_time(t);
        let position = self.positions.evaluate(t)?;
        let focal_point = self.focal_points.evaluate(t)?;
        let view_up = self.view_ups.evaluate(t)?;
        Ok(CameraPose {
            position,
            focal_point,
            view_up,
        })
    }

    /// Interpolated position at the clamped `t`.
    pub fn position_at(&self, t: f64) -> Result<[f64; 3]> {
        if self.status == PathStatus::NotCreated {
            return Err(PathError::NotReady);
        }
        self.positions.evaluate(self.clamp_time(t))
    }

    /// Interpolated focal point at the clamped `t`.
    pub fn focal_point_at(&self, t: f64) -> Result<[f64; 3]> {
        if self.status == PathStatus::NotCreated {
            return Err(PathError::NotReady);
        }
        self.focal_points.evaluate(self.clamp_time(t))
    }

    /// Interpolated view-up at the clamped `t`.
    pub fn view_up_at(&self, t: f64) -> Result<[f64; 3]> {
        if self.status == PathStatus::NotCreated {
            return Err(PathError::NotReady);
        }
        self.view_ups.evaluate(self.clamp_time(t))
    }

    /// Clamp `t` into the keyframe time range.
    ///
    /// Pure: below the range snaps to the minimum, above snaps to the
    /// maximum, inside passes through. Identity on an empty table.
    pub fn clamp_time(&self, t: f64) -> f64 {
        match (self.min_time(), self.max_time()) {
            (Some(min), Some(max)) => t.clamp(min, max),
            _ => t,
        }
    }

    /// Whether the built channels currently cover `t`.
    fn channels_contain(&self, t: f64) -> bool {
        self.status != PathStatus::NotCreated
            && t >= self.positions.minimum_t()
            && t <= self.positions.maximum_t()
    }

    fn push_channel_points(&mut self, t: f64, camera: &CameraPose) -> Result<()> {
        self.positions.add_point(t, camera.position)?;
        self.focal_points.add_point(t, camera.focal_point)?;
        self.view_ups.add_point(t, camera.view_up)?;
        Ok(())
    }

    fn remove_channel_points(&mut self, t: f64) -> Result<()> {
        self.positions.remove_point(t)?;
        self.focal_points.remove_point(t)?;
        self.view_ups.remove_point(t)?;
        Ok(())
    }

    fn mark_stale(&mut self) {
        if self.status == PathStatus::UpToDate {
            self.status = PathStatus::NotUpToDate;
        }
    }
}

impl Default for CameraPath {
    fn default() -> Self {
        Self::new()
    }
}
