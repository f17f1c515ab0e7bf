//! Point-to-zone resolution.
//!
//! Rules run in a fixed priority order and the first match wins:
//! arm override, abdomen override, tolerant containment, nearest centre.
//! The overrides use world-frame constants and ignore the registry bounds.

use crate::config::ResolverParams;
use crate::zone::{ZoneName, ZoneRegistry};
use glam::Vec3;

/// Which rule produced a zone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    ArmOverride,
    AbdomenOverride,
    Containment,
    Nearest { distance: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub zone: ZoneName,
    pub rule: Rule,
}

#[inline]
fn open(v: f32, lo: f32, hi: f32) -> bool {
    v > lo && v < hi
}

pub struct SpatialResolver {
    params: ResolverParams,
}

impl Default for SpatialResolver {
    fn default() -> Self {
        Self::new(ResolverParams::default())
    }
}

impl SpatialResolver {
    pub fn new(params: ResolverParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ResolverParams {
        &self.params
    }

    pub fn resolve(&self, registry: &ZoneRegistry, point: Vec3) -> Option<ZoneName> {
        self.resolve_detailed(registry, point).map(|r| r.zone)
    }

    pub fn resolve_detailed(&self, registry: &ZoneRegistry, point: Vec3) -> Option<Resolution> {
        if !point.is_finite() {
            log::debug!("[resolve] non-finite point ignored");
            return None;
        }
        let p = &self.params;
        let Vec3 { x, y, .. } = point;

        if open(y, p.arm_y_min, p.arm_y_max) {
            if x < -p.arm_x_min {
                return Some(Resolution {
                    zone: ZoneName::LeftArm,
                    rule: Rule::ArmOverride,
                });
            }
            if x > p.arm_x_min {
                return Some(Resolution {
                    zone: ZoneName::RightArm,
                    rule: Rule::ArmOverride,
                });
            }
        }

        if x.abs() < p.abdomen_x_max && open(y, p.abdomen_y_min, p.abdomen_y_max) {
            return Some(Resolution {
                zone: ZoneName::Abdomen,
                rule: Rule::AbdomenOverride,
            });
        }

        if let Some(zone) = registry
            .all()
            .iter()
            .find(|z| z.bounds.expanded(p.tolerance).contains(point))
        {
            return Some(Resolution {
                zone: zone.id,
                rule: Rule::Containment,
            });
        }

        // Strict `<` keeps the earliest zone on ties.
        let mut best: Option<(ZoneName, f32)> = None;
        for zone in registry.all() {
            let d = point.distance(zone.bounds.center());
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((zone.id, d)),
            }
        }
        match best {
            Some((zone, distance)) if distance < p.nearest_max_distance => {
                log::debug!("[resolve] nearest zone {} at {:.3}", zone, distance);
                Some(Resolution {
                    zone,
                    rule: Rule::Nearest { distance },
                })
            }
            _ => None,
        }
    }
}
