//! Built-in stand-in body: a segmented mannequin made of boxes.
//!
//! Authored at 60x the normalised scene scale so loading it goes through the
//! same scale fit as a scanned model. It is already centred with its feet at
//! the origin, so the fitted translation is zero and the zone table lines up
//! with it unchanged.

use crate::error::SceneResult;
use crate::mesh::{Geometry, MeshHierarchy};
use glam::{Mat4, Vec3};

const RAW_SCALE: f32 = 60.0;

struct Segment {
    name: &'static str,
    parent: Option<usize>,
    /// Centre in normalised scene units.
    center: [f32; 3],
    size: [f32; 3],
}

const fn seg(
    name: &'static str,
    parent: Option<usize>,
    center: [f32; 3],
    size: [f32; 3],
) -> Segment {
    Segment {
        name,
        parent,
        center,
        size,
    }
}

// Indices into this table are the node indices after the root (offset by 1).
const SEGMENTS: [Segment; 18] = [
    seg("pelvis", None, [0.0, 1.1, 0.0], [0.75, 0.2, 0.35]),
    seg("abdomen", Some(0), [0.0, 1.5, 0.0], [0.7, 0.6, 0.35]),
    seg("chest", Some(1), [0.0, 2.1, 0.0], [0.9, 0.6, 0.4]),
    seg("neck", Some(2), [0.0, 2.45, 0.0], [0.18, 0.1, 0.18]),
    seg("head", Some(3), [0.0, 2.75, 0.0], [0.4, 0.5, 0.45]),
    seg("upper_arm_l", Some(2), [-0.75, 2.05, 0.0], [0.2, 0.6, 0.2]),
    seg("forearm_l", Some(5), [-0.95, 1.6, 0.0], [0.18, 0.5, 0.18]),
    seg("hand_l", Some(6), [-1.12, 1.3, 0.0], [0.12, 0.2, 0.08]),
    seg("upper_arm_r", Some(2), [0.75, 2.05, 0.0], [0.2, 0.6, 0.2]),
    seg("forearm_r", Some(8), [0.95, 1.6, 0.0], [0.18, 0.5, 0.18]),
    seg("hand_r", Some(9), [1.12, 1.3, 0.0], [0.12, 0.2, 0.08]),
    seg("thigh_l", Some(0), [-0.2, 0.75, 0.0], [0.28, 0.5, 0.28]),
    seg("shin_l", Some(11), [-0.2, 0.28, 0.0], [0.22, 0.44, 0.22]),
    seg("foot_l", Some(12), [-0.2, 0.03, 0.0], [0.22, 0.06, 0.4]),
    seg("thigh_r", Some(0), [0.2, 0.75, 0.0], [0.28, 0.5, 0.28]),
    seg("shin_r", Some(14), [0.2, 0.28, 0.0], [0.22, 0.44, 0.22]),
    seg("foot_r", Some(15), [0.2, 0.03, 0.0], [0.22, 0.06, 0.4]),
    // Shoulder yoke spanning the top of the chest.
    seg("shoulders", Some(2), [0.0, 2.35, 0.0], [1.3, 0.12, 0.3]),
];

/// Number of renderable segments in [`mannequin`].
pub const MANNEQUIN_SEGMENTS: usize = SEGMENTS.len();

pub fn mannequin() -> SceneResult<MeshHierarchy> {
    let mut h = MeshHierarchy::new();
    let root = h.add_node(
        "body",
        None,
        Mat4::from_scale(Vec3::splat(RAW_SCALE)),
        None,
    )?;
    for s in SEGMENTS.iter() {
        let center = Vec3::from_array(s.center);
        let parent_center = s
            .parent
            .map(|p| Vec3::from_array(SEGMENTS[p].center))
            .unwrap_or(Vec3::ZERO);
        let half = Vec3::from_array(s.size) * 0.5;
        h.add_node(
            s.name,
            Some(s.parent.map(|p| p + 1).unwrap_or(root)),
            Mat4::from_translation(center - parent_center),
            Some(Geometry::cuboid(-half, half)),
        )?;
    }
    Ok(h)
}
