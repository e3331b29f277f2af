// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Frame-tree snapshot to transform list.

use crate::msgs::{Header, Quaternion, TfMessage, Time, Transform, TransformStamped, Vector3};
use crate::records::{FrameTreeSnapshot, ParentEdge, SE3Pose};

/// Convert every non-root edge of a snapshot into a stamped transform.
///
/// Edges are visited in snapshot order (sorted by child frame name). Root
/// edges, which have an empty parent name, carry no transform and are skipped.
pub fn snapshot_transforms(stamp: Time, snapshot: &FrameTreeSnapshot) -> TfMessage {
    let transforms = snapshot
        .child_to_parent_edge_map
        .iter()
        .filter(|(_, edge)| !edge.parent_frame_name.is_empty())
        .map(|(child, edge)| edge_transform(stamp, child, edge))
        .collect();

    TfMessage { transforms }
}

fn edge_transform(stamp: Time, child: &str, edge: &ParentEdge) -> TransformStamped {
    TransformStamped {
        header: Header::new(stamp, edge.parent_frame_name.as_str()),
        child_frame_id: child.to_string(),
        transform: pose_transform(&edge.parent_tform_child.unwrap_or_default()),
    }
}

fn pose_transform(pose: &SE3Pose) -> Transform {
    let position = pose.position.unwrap_or_default();
    let rotation = pose.rotation.unwrap_or_default();
    Transform {
        translation: Vector3 {
            x: position.x,
            y: position.y,
            z: position.z,
        },
        rotation: Quaternion {
            x: rotation.x,
            y: rotation.y,
            z: rotation.z,
            w: rotation.w,
        },
    }
}
