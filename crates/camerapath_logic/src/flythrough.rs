// SPDX-License-Identifier: MIT OR Apache-2.0
//! Sequential frame-by-frame traversal of a camera path.
//!
//! The export loop is entirely synchronous: advance time, evaluate the
//! path, hand the pose to the sink, poll for cancellation, repeat. Frame
//! capture and encoding live behind [`FrameSink`]; the host plugs in its
//! renderer there.

use camerapath_model::{CameraPath, CameraPose, PathError};
use std::io;
use thiserror::Error;

/// Receiver for the poses produced by a flythrough.
pub trait FrameSink {
    /// Handle one frame. `frame` counts from zero; `time` is the evaluated
    /// path time.
    fn write_frame(&mut self, frame: usize, time: f64, pose: &CameraPose) -> io::Result<()>;
}

/// Errors from a flythrough run.
#[derive(Debug, Error)]
pub enum FlythroughError {
    /// Non-positive frame rate.
    #[error("frame rate must be positive, got {0}")]
    InvalidFrameRate(f64),

    /// Path evaluation failed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// The sink rejected a frame.
    #[error("frame sink error: {0}")]
    Sink(#[from] io::Error),
}

/// Outcome of a flythrough run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlythroughReport {
    /// Frames handed to the sink.
    pub frames_written: usize,
    /// Whether the run ended early through the cancel callback.
    pub cancelled: bool,
}

/// Walk the path at `frame_rate` frames per unit time, writing each pose.
///
/// Sampling is endpoint-inclusive over the keyframe time range, so a run
/// produces `ceil(span * frame_rate) + 1` frames (one frame for a
/// single-keyframe path). `should_cancel` is polled before every frame;
/// cancellation is cooperative and ends the run cleanly.
pub fn fly(
    path: &CameraPath,
    frame_rate: f64,
    sink: &mut dyn FrameSink,
    mut should_cancel: impl FnMut() -> bool,
) -> Result<FlythroughReport, FlythroughError> {
    if !(frame_rate > 0.0) {
        return Err(FlythroughError::InvalidFrameRate(frame_rate));
    }
    let (Some(min), Some(max)) = (path.min_time(), path.max_time()) else {
        return Err(PathError::NotReady.into());
    };

    let span = max - min;
    let steps = if span > 0.0 {
        (span * frame_rate).ceil() as usize
    } else {
        0
    };
    for frame in 0..=steps {
        if should_cancel() {
            tracing::debug!(frame, "flythrough cancelled");
            return Ok(FlythroughReport {
                frames_written: frame,
                cancelled: true,
            });
        }
        let t = if steps == 0 {
            min
        } else {
            min + span * (frame as f64 / steps as f64)
        };
        let pose = path.camera_at(t)?;
        sink.write_frame(frame, t, &pose)?;
    }

    Ok(FlythroughReport {
        frames_written: steps + 1,
        cancelled: false,
    })
}
