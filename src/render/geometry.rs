use crate::constants::*;
use bioscan_core::{MeshHierarchy, MeshId, ZoneFamily, ZoneRegistry};
use fnv::FnvHashSet;

/// Highlight bits per mesh slot; meshes past the last word never glow.
pub(crate) const HIGHLIGHT_SLOTS: usize = 128;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshVertex {
    pub(crate) pos: [f32; 3],
    pub(crate) normal: [f32; 3],
    pub(crate) slot: u32,
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LineVertex {
    pub(crate) pos: [f32; 3],
    pub(crate) color: [f32; 3],
}

impl MeshVertex {
    pub(crate) const ATTRS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Uint32];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

impl LineVertex {
    pub(crate) const ATTRS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Flat-shaded world-space triangles for every mesh in the hierarchy.
pub(crate) fn mesh_vertices(model: &MeshHierarchy) -> Vec<MeshVertex> {
    let mut out = Vec::new();
    for id in model.meshes() {
        for tri in model.world_triangles(id) {
            let n = (tri[1] - tri[0]).cross(tri[2] - tri[0]).normalize_or_zero();
            for p in tri {
                out.push(MeshVertex {
                    pos: p.to_array(),
                    normal: n.to_array(),
                    slot: id.0 as u32,
                });
            }
        }
    }
    out
}

fn zone_color(family: ZoneFamily) -> [f32; 3] {
    match family {
        ZoneFamily::Head => ZONE_COLOR_HEAD,
        ZoneFamily::Chest => ZONE_COLOR_CHEST,
        ZoneFamily::Abdomen => ZONE_COLOR_ABDOMEN,
        ZoneFamily::Arm(_) => ZONE_COLOR_ARM,
        ZoneFamily::Leg(_) => ZONE_COLOR_LEG,
    }
}

// Corner pairs of a box whose corners are ordered bottom face first.
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Wireframe boxes for the zone debug view, in the registry's current frame.
pub(crate) fn zone_box_lines(registry: &ZoneRegistry) -> Vec<LineVertex> {
    let mut out = Vec::with_capacity(registry.all().len() * BOX_EDGES.len() * 2);
    for zone in registry.all() {
        let color = zone_color(zone.id.family());
        let corners = zone.bounds.corners();
        for (a, b) in BOX_EDGES {
            out.push(LineVertex {
                pos: corners[a].to_array(),
                color,
            });
            out.push(LineVertex {
                pos: corners[b].to_array(),
                color,
            });
        }
    }
    out
}

pub(crate) fn highlight_mask(meshes: &FnvHashSet<MeshId>) -> [u32; 4] {
    let mut mask = [0u32; 4];
    for id in meshes.iter().filter(|m| m.0 < HIGHLIGHT_SLOTS) {
        mask[id.0 / 32] |= 1 << (id.0 % 32);
    }
    mask
}
