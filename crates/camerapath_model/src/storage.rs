// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframe CSV (`kcsv`) reading and writing.
//!
//! One keyframe per line, ten comma-separated scalars:
//!
//! ```text
//! # CameraPath file version = 0.1.0
//! # columns = time,posX,posY,posZ,focX,focY,focZ,viewX,viewY,viewZ
//! 0,10,0,0,0,0,0,0,1,0
//! ```
//!
//! Lines starting with `#` are comments, blank lines are skipped. An
//! unparseable or missing component reads as `0.0` with a warning rather
//! than rejecting the line; whole-file I/O failures abort the operation
//! and leave the caller's table untouched.

use crate::camera::CameraPose;
use crate::keyframe::KeyFrame;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Default file extension for keyframe CSV files.
pub const KCSV_EXTENSION: &str = "kcsv";

/// Errors from keyframe file storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No file name was given.
    #[error("file name not specified")]
    EmptyFileName,

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Write keyframes in kcsv format.
///
/// Lines are emitted in the order given; pass a sorted table to satisfy the
/// ascending-time file convention.
pub fn write_key_frames<W: Write>(writer: &mut W, key_frames: &[KeyFrame]) -> Result<(), StorageError> {
    writeln!(
        writer,
        "# CameraPath file version = {}",
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(
        writer,
        "# columns = time,posX,posY,posZ,focX,focY,focZ,viewX,viewY,viewZ"
    )?;
    for kf in key_frames {
        let p = kf.camera.position;
        let f = kf.camera.focal_point;
        let v = kf.camera.view_up;
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{},{}",
            kf.time, p[0], p[1], p[2], f[0], f[1], f[2], v[0], v[1], v[2]
        )?;
    }
    Ok(())
}

/// Read keyframes from kcsv input.
///
/// Returns the frames in file order; duplicate-time handling is left to
/// whoever inserts them into a table.
pub fn read_key_frames<R: BufRead>(reader: R) -> Result<Vec<KeyFrame>, StorageError> {
    let mut key_frames = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut components = line.split(',');
        let mut next = |column: &str| parse_component(components.next(), column, line_number + 1);

        let time = next("time");
        let position = [next("posX"), next("posY"), next("posZ")];
        let focal_point = [next("focX"), next("focY"), next("focZ")];
        let view_up = [next("viewX"), next("viewY"), next("viewZ")];
        key_frames.push(KeyFrame::new(
            time,
            CameraPose::new(position, focal_point, view_up),
        ));
    }
    Ok(key_frames)
}

/// Parse one CSV component, falling back to zero on anything unreadable.
fn parse_component(component: Option<&str>, column: &str, line_number: usize) -> f64 {
    match component.map(str::trim) {
        Some(text) if !text.is_empty() => text.parse().unwrap_or_else(|_| {
            tracing::warn!(line_number, column, text, "unparseable component, using 0");
            0.0
        }),
        _ => {
            tracing::warn!(line_number, column, "missing component, using 0");
            0.0
        }
    }
}

/// Write keyframes to a kcsv file.
pub fn save_kcsv(path: &Path, key_frames: &[KeyFrame]) -> Result<(), StorageError> {
    if path.as_os_str().is_empty() {
        return Err(StorageError::EmptyFileName);
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_key_frames(&mut writer, key_frames)?;
    writer.flush()?;
    Ok(())
}

/// Read keyframes from a kcsv file.
pub fn load_kcsv(path: &Path) -> Result<Vec<KeyFrame>, StorageError> {
    if path.as_os_str().is_empty() {
        return Err(StorageError::EmptyFileName);
    }
    read_key_frames(BufReader::new(File::open(path)?))
}
