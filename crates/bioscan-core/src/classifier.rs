//! Zone-to-mesh membership used for highlighting.
//!
//! Independent of the resolver: meshes are tested by world-space origin with
//! per-family predicates whose thresholds differ from the resolver's.

use crate::config::ClassifierParams;
use crate::mesh::{MeshHierarchy, MeshId};
use crate::zone::{Side, ZoneFamily, ZoneName, ZoneRegistry};
use fnv::FnvHashSet;
use glam::Vec3;

pub struct MeshClassifier {
    params: ClassifierParams,
}

impl Default for MeshClassifier {
    fn default() -> Self {
        Self::new(ClassifierParams::default())
    }
}

impl MeshClassifier {
    pub fn new(params: ClassifierParams) -> Self {
        Self { params }
    }

    fn side_of(&self, x: f32) -> Side {
        if x < self.params.side_split_x {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Whether a mesh whose origin sits at `origin` belongs to `zone`.
    pub fn origin_in_zone(&self, registry: &ZoneRegistry, zone: ZoneName, origin: Vec3) -> bool {
        let p = &self.params;
        let Vec3 { x, y, .. } = origin;
        match zone.family() {
            ZoneFamily::Arm(side) => {
                self.side_of(x) == side && y > p.arm_y_min && y < p.arm_y_max
            }
            ZoneFamily::Leg(side) => {
                self.side_of(x) == side && y > p.leg_y_min && y < p.leg_y_max
            }
            ZoneFamily::Abdomen => {
                x.abs() < p.abdomen_x_max && y > p.abdomen_y_min && y < p.abdomen_y_max
            }
            ZoneFamily::Head | ZoneFamily::Chest => registry
                .lookup(zone)
                .bounds
                .expanded(p.tolerance)
                .contains(origin),
        }
    }

    pub fn meshes_in_zone(
        &self,
        registry: &ZoneRegistry,
        zone: ZoneName,
        model: &MeshHierarchy,
    ) -> FnvHashSet<MeshId> {
        let set: FnvHashSet<MeshId> = model
            .meshes()
            .filter(|&id| {
                model
                    .world_origin(id)
                    .is_some_and(|origin| self.origin_in_zone(registry, zone, origin))
            })
            .collect();
        log::debug!("[classify] {} -> {} meshes", zone, set.len());
        set
    }
}
