//! Geometry of the clock face: hand angles and the resizable layout.

mod angles;
mod layout;

pub use angles::RotationSnapshot;
pub use layout::{
    ContainerTracker, FACE_SIDES, FaceLayout, HAND_WIDTH, HandGeometry, HandKind, Vertex,
};
