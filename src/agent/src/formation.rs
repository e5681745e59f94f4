use crate::field::{FieldPoint, normalize};
use log::warn;
use std::fmt::{Display, Formatter};

/// Area a role slot may occupy. The home position moves inside it as the
/// ball moves over the pitch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionRect {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl RegionRect {
    pub const fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        RegionRect {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Linear interpolation inside the rectangle. Factors outside `[0, 1]`
    /// extrapolate past the edges.
    #[inline]
    pub fn interpolate(&self, u: f32, v: f32) -> FieldPoint {
        FieldPoint::new(
            self.min_x + (self.max_x - self.min_x) * u,
            self.min_y + (self.max_y - self.min_y) * v,
        )
    }

    /// Interpolation driven by a ball position.
    #[inline]
    pub fn interpolate_at(&self, ball: &FieldPoint) -> FieldPoint {
        let (u, v) = normalize(ball);
        self.interpolate(u, v)
    }

    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }
}

#[cfg(test)]
impl RegionRect {
    pub fn contains(&self, point: &FieldPoint) -> bool {
        point.x >= self.min_x && point.x <= self.max_x && point.y >= self.min_y && point.y <= self.max_y
    }
}

/// Slot 0 and any slot past the table: zero-area, in front of the own goal.
pub const FALLBACK_REGION: RegionRect = RegionRect::new(-50.0, -50.0, 0.0, 0.0);

const GOALIE_BOX: RegionRect = RegionRect::new(-52.0, -48.0, -2.0, 2.0);

/// Number of role slots in a full team
pub const MAX_ROLE_SLOTS: usize = 11;

const STANDARD_REGIONS: [RegionRect; MAX_ROLE_SLOTS] = [
    // 1 goalkeeper
    GOALIE_BOX,
    // 2-5 back four
    RegionRect::new(-52.0, -10.0, -20.0, 10.0),
    RegionRect::new(-52.0, -10.0, -10.0, 20.0),
    RegionRect::new(-52.0, -10.0, -30.0, -10.0),
    RegionRect::new(-52.0, -10.0, 10.0, 30.0),
    // 6-8 midfield
    RegionRect::new(-30.0, 15.0, -20.0, 20.0),
    RegionRect::new(-30.0, 15.0, -30.0, 0.0),
    RegionRect::new(-30.0, 15.0, 0.0, 30.0),
    // 9-11 forwards
    RegionRect::new(0.0, 50.0, -20.0, 20.0),
    RegionRect::new(0.0, 50.0, -30.0, 0.0),
    RegionRect::new(0.0, 50.0, 0.0, 30.0),
];

// 1-2-1 for four players. Slots 5-11 are parked in the goalkeeper box.
const REDUCED_REGIONS: [RegionRect; MAX_ROLE_SLOTS] = [
    GOALIE_BOX,
    RegionRect::new(-35.0, -20.0, -10.0, 10.0),
    RegionRect::new(-20.0, 5.0, -25.0, -5.0),
    RegionRect::new(-20.0, 5.0, 5.0, 25.0),
    GOALIE_BOX,
    GOALIE_BOX,
    GOALIE_BOX,
    GOALIE_BOX,
    GOALIE_BOX,
    GOALIE_BOX,
    GOALIE_BOX,
];

/// Highest uniform number that still counts as a reduced four-player game
pub const REDUCED_MAX_UNUM: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormationKind {
    Standard,
    Reduced,
}

impl FormationKind {
    /// Picks the table from the roster seen this cycle: reduced when the
    /// agent and every teammate with a known number wear 1 to 4.
    pub fn select<I>(self_unum: u8, teammate_unums: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        let max_teammate_unum = teammate_unums.into_iter().fold(1, u8::max);

        if self_unum <= REDUCED_MAX_UNUM && max_teammate_unum <= REDUCED_MAX_UNUM {
            FormationKind::Reduced
        } else {
            FormationKind::Standard
        }
    }

    pub fn table(&self) -> &'static FormationTable {
        match self {
            FormationKind::Standard => &STANDARD_FORMATION,
            FormationKind::Reduced => &REDUCED_FORMATION,
        }
    }
}

impl Display for FormationKind {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            FormationKind::Standard => write!(f, "standard"),
            FormationKind::Reduced => write!(f, "reduced"),
        }
    }
}

/// Role-indexed regions, slot `n` stored at index `n - 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct FormationTable {
    regions: [RegionRect; MAX_ROLE_SLOTS],
}

pub static STANDARD_FORMATION: FormationTable = FormationTable {
    regions: STANDARD_REGIONS,
};

pub static REDUCED_FORMATION: FormationTable = FormationTable {
    regions: REDUCED_REGIONS,
};

impl FormationTable {
    /// Builds a custom table. Every region must satisfy `min <= max` on both axes.
    pub fn new(regions: &[RegionRect]) -> Result<Self, FormationError> {
        if regions.len() != MAX_ROLE_SLOTS {
            return Err(FormationError::SlotCount {
                expected: MAX_ROLE_SLOTS,
                found: regions.len(),
            });
        }

        if let Some(idx) = regions.iter().position(|region| !region.is_valid()) {
            return Err(FormationError::InvalidRegion {
                slot: idx as u8 + 1,
                region: regions[idx],
            });
        }

        let mut table = [FALLBACK_REGION; MAX_ROLE_SLOTS];
        table.copy_from_slice(regions);

        Ok(FormationTable { regions: table })
    }

    /// Region of a role slot. Slot 0 and slots past the table resolve to
    /// [`FALLBACK_REGION`] so a bad role id degrades the cycle instead of
    /// failing it.
    pub fn region(&self, slot: u8) -> RegionRect {
        match slot {
            1..=11 => self.regions[slot as usize - 1],
            _ => {
                warn!("role slot {} outside formation table, using fallback region", slot);
                FALLBACK_REGION
            }
        }
    }

    pub fn regions(&self) -> &[RegionRect] {
        &self.regions
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormationError {
    SlotCount { expected: usize, found: usize },
    InvalidRegion { slot: u8, region: RegionRect },
}

impl Display for FormationError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            FormationError::SlotCount { expected, found } => {
                write!(f, "Invalid formation size: expected {} slots, found {}", expected, found)
            }
            FormationError::InvalidRegion { slot, region } => write!(
                f,
                "Invalid region for slot {}: x [{}, {}], y [{}, {}]",
                slot, region.min_x, region.max_x, region.min_y, region.max_y
            ),
        }
    }
}

impl std::error::Error for FormationError {}
