//! Terrain and resource kinds.
//!
//! Both are closed enumerations; board construction validates every token
//! against them and rejects anything else.

use serde::Serialize;

/// Number of distinct resource kinds.
pub const KIND_COUNT: usize = 3;

/// All terrain variants, in ascending enter-cost order.
pub const ALL_TERRAINS: [Terrain; 4] = [
    Terrain::Grass,
    Terrain::Hill,
    Terrain::Swamp,
    Terrain::Mountain,
];

/// All resource kinds, in index order.
pub const ALL_KINDS: [ResourceKind; KIND_COUNT] =
    [ResourceKind::Stone, ResourceKind::Iron, ResourceKind::Crystal];

/// A terrain tier. Every tier is passable; they differ only in enter cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Terrain {
    Grass,
    Hill,
    Swamp,
    Mountain,
}

impl Terrain {
    /// Cost paid when stepping onto a cell of this terrain.
    pub const fn enter_cost(self) -> u32 {
        match self {
            Terrain::Grass => 1,
            Terrain::Hill => 2,
            Terrain::Swamp => 3,
            Terrain::Mountain => 4,
        }
    }

    /// Minimum enter cost over the whole terrain table.
    ///
    /// Heuristics multiply Manhattan distances by this to stay admissible.
    pub const fn cheapest_cost() -> u32 {
        let mut best = ALL_TERRAINS[0].enter_cost();
        let mut i = 1;
        while i < ALL_TERRAINS.len() {
            let c = ALL_TERRAINS[i].enter_cost();
            if c < best {
                best = c;
            }
            i += 1;
        }
        best
    }

    /// Returns the uppercase layout token for this terrain.
    pub const fn token(self) -> &'static str {
        match self {
            Terrain::Grass => "GRASS",
            Terrain::Hill => "HILL",
            Terrain::Swamp => "SWAMP",
            Terrain::Mountain => "MOUNTAIN",
        }
    }

    /// Parses a terrain from its layout token.
    pub fn from_token(s: &str) -> Option<Terrain> {
        match s {
            "GRASS" => Some(Terrain::Grass),
            "HILL" => Some(Terrain::Hill),
            "SWAMP" => Some(Terrain::Swamp),
            "MOUNTAIN" => Some(Terrain::Mountain),
            _ => None,
        }
    }
}

/// A collectible resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResourceKind {
    Stone,
    Iron,
    Crystal,
}

impl ResourceKind {
    /// Index into per-kind count arrays.
    pub const fn index(self) -> usize {
        match self {
            ResourceKind::Stone => 0,
            ResourceKind::Iron => 1,
            ResourceKind::Crystal => 2,
        }
    }

    /// Returns the uppercase layout token for this kind.
    pub const fn token(self) -> &'static str {
        match self {
            ResourceKind::Stone => "STONE",
            ResourceKind::Iron => "IRON",
            ResourceKind::Crystal => "CRYSTAL",
        }
    }

    /// Parses a resource kind from its layout token.
    pub fn from_token(s: &str) -> Option<ResourceKind> {
        match s {
            "STONE" => Some(ResourceKind::Stone),
            "IRON" => Some(ResourceKind::Iron),
            "CRYSTAL" => Some(ResourceKind::Crystal),
            _ => None,
        }
    }
}
