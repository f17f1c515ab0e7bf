//! Named anatomical zones and their bounding volumes.
//!
//! The registry is built once at scene start and translated exactly once when
//! the model transform is known, so zone bounds live in the same world frame
//! as ray-cast hits from then on.

use crate::error::SceneError;
use glam::Vec3;
use std::fmt;
use std::str::FromStr;

/// Axis-aligned box with inclusive faces.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box around `points`, or `None` when there are none.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |b, p| b.including(p)))
    }

    pub fn including(self, p: Vec3) -> Self {
        Self::new(self.min.min(p), self.max.max(p))
    }

    pub fn union(self, other: Self) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Grow every face outward by `margin`.
    pub fn expanded(&self, margin: f32) -> Self {
        Self::new(self.min - Vec3::splat(margin), self.max + Vec3::splat(margin))
    }

    pub fn translated(&self, offset: Vec3) -> Self {
        Self::new(self.min + offset, self.max + offset)
    }

    pub fn contains(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// The eight corners, bottom face first.
    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(b.x, b.y, b.z),
            Vec3::new(a.x, b.y, b.z),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

/// Groups zones that share a classification rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoneFamily {
    Head,
    Chest,
    Abdomen,
    Arm(Side),
    Leg(Side),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ZoneName {
    Head,
    Chest,
    Abdomen,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl ZoneName {
    /// Registry order; also the tie-break order for the nearest-zone fallback.
    pub const ALL: [ZoneName; 7] = [
        ZoneName::Head,
        ZoneName::Chest,
        ZoneName::Abdomen,
        ZoneName::LeftArm,
        ZoneName::RightArm,
        ZoneName::LeftLeg,
        ZoneName::RightLeg,
    ];

    /// The id string the page uses (`leftArm`, not `left_arm`).
    pub fn as_str(self) -> &'static str {
        match self {
            ZoneName::Head => "head",
            ZoneName::Chest => "chest",
            ZoneName::Abdomen => "abdomen",
            ZoneName::LeftArm => "leftArm",
            ZoneName::RightArm => "rightArm",
            ZoneName::LeftLeg => "leftLeg",
            ZoneName::RightLeg => "rightLeg",
        }
    }

    pub fn family(self) -> ZoneFamily {
        match self {
            ZoneName::Head => ZoneFamily::Head,
            ZoneName::Chest => ZoneFamily::Chest,
            ZoneName::Abdomen => ZoneFamily::Abdomen,
            ZoneName::LeftArm => ZoneFamily::Arm(Side::Left),
            ZoneName::RightArm => ZoneFamily::Arm(Side::Right),
            ZoneName::LeftLeg => ZoneFamily::Leg(Side::Left),
            ZoneName::RightLeg => ZoneFamily::Leg(Side::Right),
        }
    }

    /// Left/right counterpart; central zones map to themselves.
    pub fn mirror(self) -> ZoneName {
        match self {
            ZoneName::LeftArm => ZoneName::RightArm,
            ZoneName::RightArm => ZoneName::LeftArm,
            ZoneName::LeftLeg => ZoneName::RightLeg,
            ZoneName::RightLeg => ZoneName::LeftLeg,
            other => other,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ZoneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ZoneName {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZoneName::ALL
            .into_iter()
            .find(|z| z.as_str() == s)
            .ok_or_else(|| SceneError::UnknownZone(s.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Zone {
    pub id: ZoneName,
    pub display_name: &'static str,
    pub system_label: &'static str,
    pub description: &'static str,
    pub bounds: Aabb,
}

const REACTION_DESCRIPTION: &str = "Measurement of neural pathway efficiency and response time.";
const STABILITY_DESCRIPTION: &str =
    "Evaluation of balance, proprioception, and vestibular system performance.";

fn default_zones() -> [Zone; 7] {
    [
        Zone {
            id: ZoneName::Head,
            display_name: "Cognitive Assessment",
            system_label: "Neural Function",
            description: "Analysis of memory function and cognitive processing abilities.",
            bounds: Aabb::new(Vec3::new(-0.5, 2.6, -0.5), Vec3::new(0.5, 3.5, 0.5)),
        },
        Zone {
            id: ZoneName::Chest,
            display_name: "Cardiovascular Test",
            system_label: "Circulatory Function",
            description:
                "Evaluation of heart rate patterns and cardiovascular health indicators.",
            bounds: Aabb::new(Vec3::new(-0.8, 1.5, -0.5), Vec3::new(0.8, 2.6, 0.5)),
        },
        Zone {
            id: ZoneName::Abdomen,
            display_name: "Body Composition",
            system_label: "Metabolic Status",
            description: "Assessment of body mass index and tissue composition metrics.",
            bounds: Aabb::new(Vec3::new(-0.4, 1.0, -0.3), Vec3::new(0.4, 1.8, 0.3)),
        },
        Zone {
            id: ZoneName::LeftArm,
            display_name: "Reaction Assessment",
            system_label: "Neural Responsiveness",
            description: REACTION_DESCRIPTION,
            bounds: Aabb::new(Vec3::new(-1.5, 1.2, -0.6), Vec3::new(-0.5, 2.6, 0.6)),
        },
        Zone {
            id: ZoneName::RightArm,
            display_name: "Reaction Assessment",
            system_label: "Neural Responsiveness",
            description: REACTION_DESCRIPTION,
            bounds: Aabb::new(Vec3::new(0.5, 1.2, -0.6), Vec3::new(1.5, 2.6, 0.6)),
        },
        Zone {
            id: ZoneName::LeftLeg,
            display_name: "Stability Assessment",
            system_label: "Vestibular Function",
            description: STABILITY_DESCRIPTION,
            bounds: Aabb::new(Vec3::new(-0.6, -0.2, -0.5), Vec3::new(-0.1, 1.0, 0.5)),
        },
        Zone {
            id: ZoneName::RightLeg,
            display_name: "Stability Assessment",
            system_label: "Vestibular Function",
            description: STABILITY_DESCRIPTION,
            bounds: Aabb::new(Vec3::new(0.1, -0.2, -0.5), Vec3::new(0.6, 1.0, 0.5)),
        },
    ]
}

/// Static table of the seven zones, indexed in [`ZoneName::ALL`] order.
#[derive(Clone, Debug)]
pub struct ZoneRegistry {
    zones: [Zone; 7],
    offset: Vec3,
}

impl Default for ZoneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self {
            zones: default_zones(),
            offset: Vec3::ZERO,
        }
    }

    pub fn lookup(&self, id: ZoneName) -> &Zone {
        &self.zones[id.index()]
    }

    /// String lookup for ids coming from the page; unknown ids are `None`.
    pub fn lookup_id(&self, id: &str) -> Option<&Zone> {
        id.parse::<ZoneName>().ok().map(|z| self.lookup(z))
    }

    pub fn all(&self) -> &[Zone] {
        &self.zones
    }

    /// Offset applied so far; zero until the model transform is known.
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// Move every zone into the post-transform world frame. Bounds are shifted,
    /// never rescaled. Calling again re-bases from the base table so the
    /// offset is never applied twice.
    pub fn translate(&mut self, offset: Vec3) {
        let base = default_zones();
        for (zone, base_zone) in self.zones.iter_mut().zip(base.iter()) {
            zone.bounds = base_zone.bounds.translated(offset);
        }
        self.offset = offset;
        log::debug!(
            "[zones] translated by ({:.3},{:.3},{:.3})",
            offset.x,
            offset.y,
            offset.z
        );
    }
}
