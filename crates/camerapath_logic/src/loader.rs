// SPDX-License-Identifier: MIT OR Apache-2.0
//! Loading a camera path file into the scene.

use crate::scene::{NodeId, Scene, SceneNode};
use camerapath_model::{storage, CameraPath, PathError, StorageError};
use std::path::Path;
use thiserror::Error;

/// Errors from the load-camera-path entry point.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No node name was given.
    #[error("node name not specified")]
    EmptyNodeName,

    /// Reading the keyframe file failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Building the path failed.
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Load a kcsv file and register the resulting nodes in the scene.
///
/// Creates one camera path node, one display node per spline channel and
/// one camera node per keyframe, returning their IDs in creation order.
/// The file is read before any node is registered, so a failed load leaves
/// the scene untouched. Keyframes whose time collides with an earlier line
/// are skipped with a warning.
pub fn load_camera_path(
    scene: &mut Scene,
    file_name: &Path,
    node_name: &str,
) -> Result<Vec<NodeId>, LoadError> {
    if node_name.is_empty() {
        return Err(LoadError::EmptyNodeName);
    }

    let frames = storage::load_kcsv(file_name)?;
    tracing::debug!(
        file = %file_name.display(),
        frames = frames.len(),
        "read camera path file"
    );

    let mut path = CameraPath::new();
    for frame in &frames {
        match path.add_key_frame(frame.time, frame.camera) {
            Ok(_) => {}
            Err(PathError::DuplicateTime { time, .. }) => {
                tracing::warn!(time, "skipping keyframe with duplicate time");
            }
            Err(err) => return Err(err.into()),
        }
    }
    if path.key_frame_count() > 0 {
        path.create_path()?;
    }

    let mut created = Vec::with_capacity(path.key_frame_count() + 4);
    let position_samples = path.path_samples().to_vec();
    let key_frames: Vec<_> = path.key_frames().to_vec();

    created.push(scene.add_node(SceneNode::CameraPath {
        name: node_name.to_string(),
        path,
    }));
    for channel in ["positions", "focal points", "view-ups"] {
        // Only the position channel carries display samples, matching the
        // rebuild in CameraPath::create_path.
        let samples = if channel == "positions" {
            position_samples.clone()
        } else {
            Vec::new()
        };
        created.push(scene.add_node(SceneNode::PointSpline {
            name: format!("{node_name} {channel}"),
            samples,
        }));
    }
    for frame in &key_frames {
        created.push(scene.add_node(SceneNode::Camera {
            name: format!("{node_name} T = {}", frame.time),
            pose: frame.camera,
        }));
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camerapath_model::{CameraPose, KeyFrame, PathStatus};
    use std::path::PathBuf;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    fn temp_kcsv(tag: &str, frames: &[KeyFrame]) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "camerapath_loader_{tag}_{}.kcsv",
            std::process::id()
        ));
        storage::save_kcsv(&path, frames).unwrap();
        path
    }

    fn sample_frames() -> Vec<KeyFrame> {
        vec![
            KeyFrame::new(
                0.0,
                CameraPose::new([0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ),
            KeyFrame::new(
                5.0,
                CameraPose::new([10.0, 0.0, 0.0], [0.0; 3], [0.0, 1.0, 0.0]),
            ),
        ]
    }

    #[test]
    fn test_load_registers_all_nodes() {
        init_tracing();
        let file = temp_kcsv("ok", &sample_frames());
        let mut scene = Scene::new();
        let ids = load_camera_path(&mut scene, &file, "flight").unwrap();
        std::fs::remove_file(&file).ok();

        // Path node + three spline nodes + one camera per keyframe.
        assert_eq!(ids.len(), 6);
        assert_eq!(scene.node_count(), 6);

        let path = scene.camera_path(ids[0]).unwrap();
        assert_eq!(path.status(), PathStatus::UpToDate);
        assert_eq!(path.key_frame_count(), 2);
        assert_eq!(path.camera_at(5.0).unwrap().position, [10.0, 0.0, 0.0]);

        // The position spline node carries the display samples.
        let Some(SceneNode::PointSpline { samples, .. }) = scene.node(ids[1]) else {
            panic!("expected a point spline node");
        };
        assert!(!samples.is_empty());
        assert_eq!(scene.node(ids[4]).unwrap().name(), "flight T = 0");
    }

    #[test]
    fn test_load_missing_file_leaves_scene_unchanged() {
        init_tracing();
        let mut scene = Scene::new();
        let missing = std::env::temp_dir().join("camerapath_loader_missing.kcsv");
        let err = load_camera_path(&mut scene, &missing, "flight").unwrap_err();
        assert!(matches!(err, LoadError::Storage(StorageError::Io(_))));
        assert_eq!(scene.node_count(), 0);
        assert!(scene.take_events().is_empty());
    }

    #[test]
    fn test_load_rejects_empty_node_name() {
        let mut scene = Scene::new();
        let err = load_camera_path(&mut scene, Path::new("whatever.kcsv"), "").unwrap_err();
        assert!(matches!(err, LoadError::EmptyNodeName));
    }

    #[test]
    fn test_load_rejects_empty_file_name() {
        let mut scene = Scene::new();
        let err = load_camera_path(&mut scene, Path::new(""), "flight").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Storage(StorageError::EmptyFileName)
        ));
    }

    #[test]
    fn test_load_skips_duplicate_times() {
        init_tracing();
        let mut frames = sample_frames();
        frames.push(KeyFrame::new(
            0.0,
            CameraPose::new([99.0; 3], [0.0; 3], [0.0, 1.0, 0.0]),
        ));
        let file = temp_kcsv("dup", &frames);
        let mut scene = Scene::new();
        let ids = load_camera_path(&mut scene, &file, "flight").unwrap();
        std::fs::remove_file(&file).ok();

        let path = scene.camera_path(ids[0]).unwrap();
        assert_eq!(path.key_frame_count(), 2);
        // First occurrence wins.
        assert_eq!(path.key_frame_pose(0).unwrap().position, [0.0; 3]);
    }

    #[test]
    fn test_load_empty_file_creates_empty_path() {
        init_tracing();
        let file = temp_kcsv("empty", &[]);
        let mut scene = Scene::new();
        let ids = load_camera_path(&mut scene, &file, "flight").unwrap();
        std::fs::remove_file(&file).ok();

        assert_eq!(ids.len(), 4);
        let path = scene.camera_path(ids[0]).unwrap();
        assert_eq!(path.status(), PathStatus::NotCreated);
        assert!(matches!(path.camera_at(0.0), Err(PathError::NotReady)));
    }
}
