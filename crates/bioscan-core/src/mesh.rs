//! Loaded model geometry as a flat node hierarchy.
//!
//! Each node carries a local transform and optionally a triangle list in its
//! own space. World transforms are resolved by walking parents, which are
//! always stored before their children.

use crate::error::{SceneError, SceneResult};
use crate::ray::{ray_aabb, ray_triangle, Ray};
use crate::zone::Aabb;
use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub usize);

#[derive(Clone, Debug, Default)]
pub struct Geometry {
    pub triangles: Vec<[Vec3; 3]>,
}

impl Geometry {
    /// Twelve triangles for a box spanning `min..max` in local space.
    pub fn cuboid(min: Vec3, max: Vec3) -> Self {
        let c = Aabb::new(min, max).corners();
        let quads = [
            [0, 3, 2, 1], // bottom
            [4, 5, 6, 7], // top
            [0, 1, 5, 4], // back
            [3, 7, 6, 2], // front
            [0, 4, 7, 3], // left
            [1, 2, 6, 5], // right
        ];
        let triangles = quads
            .iter()
            .flat_map(|q| [[c[q[0]], c[q[1]], c[q[2]]], [c[q[0]], c[q[2]], c[q[3]]]])
            .collect();
        Self { triangles }
    }
}

#[derive(Clone, Debug)]
pub struct MeshNode {
    pub name: String,
    pub parent: Option<usize>,
    pub local: Mat4,
    pub geometry: Option<Geometry>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshHit {
    pub mesh: MeshId,
    pub point: Vec3,
    pub distance: f32,
}

#[derive(Clone, Debug)]
pub struct MeshHierarchy {
    nodes: Vec<MeshNode>,
    /// Applied above the root nodes; set by the model transform.
    root: Mat4,
}

impl Default for MeshHierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl MeshHierarchy {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: Mat4::IDENTITY,
        }
    }

    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        parent: Option<usize>,
        local: Mat4,
        geometry: Option<Geometry>,
    ) -> SceneResult<usize> {
        if let Some(p) = parent {
            if p >= self.nodes.len() {
                return Err(SceneError::UnknownParent {
                    parent: p,
                    len: self.nodes.len(),
                });
            }
        }
        self.nodes.push(MeshNode {
            name: name.into(),
            parent,
            local,
            geometry,
        });
        Ok(self.nodes.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<&MeshNode> {
        self.nodes.get(index)
    }

    pub fn root_transform(&self) -> Mat4 {
        self.root
    }

    pub fn set_root_transform(&mut self, m: Mat4) {
        self.root = m;
    }

    /// Root transform times every local transform up the parent chain;
    /// `None` for an index outside this hierarchy.
    pub fn world_transform(&self, index: usize) -> Option<Mat4> {
        let mut m = Mat4::IDENTITY;
        let mut cur = Some(index);
        while let Some(i) = cur {
            let node = self.nodes.get(i)?;
            m = node.local * m;
            cur = node.parent;
        }
        Some(self.root * m)
    }

    /// Ids of nodes that carry geometry, in insertion order.
    pub fn meshes(&self) -> impl Iterator<Item = MeshId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.geometry.is_some())
            .map(|(i, _)| MeshId(i))
    }

    pub fn name(&self, id: MeshId) -> &str {
        self.nodes.get(id.0).map(|n| n.name.as_str()).unwrap_or("")
    }

    /// World-space position of the mesh's local origin.
    pub fn world_origin(&self, id: MeshId) -> Option<Vec3> {
        self.world_transform(id.0)
            .map(|m| m.transform_point3(Vec3::ZERO))
    }

    /// Triangles of one mesh in world space; empty for non-mesh nodes.
    pub fn world_triangles(&self, id: MeshId) -> Vec<[Vec3; 3]> {
        let Some(geometry) = self.nodes.get(id.0).and_then(|n| n.geometry.as_ref()) else {
            return Vec::new();
        };
        let Some(m) = self.world_transform(id.0) else {
            return Vec::new();
        };
        geometry
            .triangles
            .iter()
            .map(|t| t.map(|v| m.transform_point3(v)))
            .collect()
    }

    pub fn world_bounds(&self) -> Option<Aabb> {
        self.meshes()
            .filter_map(|id| self.mesh_bounds(id))
            .reduce(Aabb::union)
    }

    pub fn mesh_bounds(&self, id: MeshId) -> Option<Aabb> {
        Aabb::from_points(self.world_triangles(id).into_iter().flatten())
    }

    /// Closest intersection of `ray` with any mesh.
    pub fn raycast(&self, ray: &Ray) -> Option<MeshHit> {
        let mut best: Option<MeshHit> = None;
        for id in self.meshes() {
            let tris = self.world_triangles(id);
            let Some(bounds) = Aabb::from_points(tris.iter().flatten().copied()) else {
                continue;
            };
            match (ray_aabb(ray, &bounds), best) {
                (None, _) => continue,
                (Some(t_box), Some(b)) if t_box > b.distance => continue,
                _ => {}
            }
            for tri in &tris {
                if let Some(t) = ray_triangle(ray, tri) {
                    match best {
                        Some(b) if t >= b.distance => {}
                        _ => {
                            best = Some(MeshHit {
                                mesh: id,
                                point: ray.at(t),
                                distance: t,
                            })
                        }
                    }
                }
            }
        }
        best
    }
}
