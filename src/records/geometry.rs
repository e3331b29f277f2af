// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Geometry and frame-tree records.

use std::collections::BTreeMap;

/// Two-dimensional vector (focal length, principal point).
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Vec2 {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
}

/// Three-dimensional vector.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Vec3 {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
    #[prost(double, tag = "3")]
    pub z: f64,
}

/// Rotation quaternion.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Quaternion {
    #[prost(double, tag = "1")]
    pub x: f64,
    #[prost(double, tag = "2")]
    pub y: f64,
    #[prost(double, tag = "3")]
    pub z: f64,
    #[prost(double, tag = "4")]
    pub w: f64,
}

/// Rigid transform: translation followed by rotation.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct SE3Pose {
    #[prost(message, optional, tag = "1")]
    pub position: Option<Vec3>,
    #[prost(message, optional, tag = "2")]
    pub rotation: Option<Quaternion>,
}

/// Linear and angular velocity of a frame.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct SE3Velocity {
    #[prost(message, optional, tag = "1")]
    pub linear: Option<Vec3>,
    #[prost(message, optional, tag = "2")]
    pub angular: Option<Vec3>,
}

/// Edge from a child frame to its parent.
///
/// Root frames carry an empty `parent_frame_name`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ParentEdge {
    #[prost(string, tag = "1")]
    pub parent_frame_name: String,
    #[prost(message, optional, tag = "2")]
    pub parent_tform_child: Option<SE3Pose>,
}

/// Point-in-time frame tree, keyed by child frame name.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FrameTreeSnapshot {
    #[prost(btree_map = "string, message", tag = "1")]
    pub child_to_parent_edge_map: BTreeMap<String, ParentEdge>,
}

impl FrameTreeSnapshot {
    /// Add an edge, replacing any existing edge for `child`.
    pub fn with_edge(
        mut self,
        child: impl Into<String>,
        parent: impl Into<String>,
        parent_tform_child: SE3Pose,
    ) -> Self {
        self.child_to_parent_edge_map.insert(
            child.into(),
            ParentEdge {
                parent_frame_name: parent.into(),
                parent_tform_child: Some(parent_tform_child),
            },
        );
        self
    }
}

impl SE3Pose {
    /// Build a pose from translation and quaternion components.
    pub fn new(position: [f64; 3], rotation: [f64; 4]) -> Self {
        Self {
            position: Some(Vec3 {
                x: position[0],
                y: position[1],
                z: position[2],
            }),
            rotation: Some(Quaternion {
                x: rotation[0],
                y: rotation[1],
                z: rotation[2],
                w: rotation[3],
            }),
        }
    }
}
