//! Tile catalog: the immutable per-direction adjacency model
//!
//! A catalog is authored once (from a tileset file or the built-in set)
//! and read-only afterwards. Adjacency is declared independently per
//! direction and is not required to be symmetric between neighbors.

use crate::algorithm::bitset::TileSet;
use crate::io::error::{GenerationError, Result};
use crate::spatial::grid::Direction;

/// One tile type: identity, display color, and four adjacency sets
///
/// `allowed[Direction::Up.index()]` is the set of tiles permitted to sit
/// directly above this tile, and likewise for the other three directions.
#[derive(Clone, Debug)]
pub struct TileDef {
    name: String,
    color: [u8; 4],
    allowed: [TileSet; 4],
}

impl TileDef {
    /// Create a tile definition from its four direction-ordered sets
    ///
    /// The array follows the canonical direction order up, down, left, right.
    pub fn new(name: impl Into<String>, color: [u8; 4], allowed: [TileSet; 4]) -> Self {
        Self {
            name: name.into(),
            color,
            allowed,
        }
    }

    /// Tile name, unique within its catalog
    pub fn name(&self) -> &str {
        &self.name
    }

    /// RGBA display color
    pub const fn color(&self) -> [u8; 4] {
        self.color
    }

    /// Tiles permitted adjacent in the given direction
    pub const fn allowed(&self, direction: Direction) -> &TileSet {
        match direction {
            Direction::Up => &self.allowed[0],
            Direction::Down => &self.allowed[1],
            Direction::Left => &self.allowed[2],
            Direction::Right => &self.allowed[3],
        }
    }
}

/// Fixed set of tile types with per-direction adjacency lookup
///
/// Construction validates the catalog once; afterwards every operation is
/// read-only. Membership tests on the adjacency sets are O(1).
#[derive(Clone, Debug)]
pub struct TileCatalog {
    tiles: Vec<TileDef>,
}

impl TileCatalog {
    /// Build a catalog, failing fast on malformed input
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog is empty, a tile name is duplicated,
    /// or any adjacency set's capacity does not match the catalog size
    /// (which would let dangling indices pass membership tests silently).
    pub fn new(tiles: Vec<TileDef>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(GenerationError::InvalidTileset {
                reason: "tile catalog contains no tiles".to_string(),
            });
        }

        let count = tiles.len();
        for (index, tile) in tiles.iter().enumerate() {
            if tiles
                .iter()
                .take(index)
                .any(|other| other.name() == tile.name())
            {
                return Err(GenerationError::InvalidTileset {
                    reason: format!("duplicate tile name '{}'", tile.name()),
                });
            }

            for direction in Direction::ALL {
                if tile.allowed(direction).capacity() != count {
                    return Err(GenerationError::InvalidTileset {
                        reason: format!(
                            "tile '{}' has a {} adjacency set sized for {} tiles, catalog has {}",
                            tile.name(),
                            direction.name(),
                            tile.allowed(direction).capacity(),
                            count
                        ),
                    });
                }
            }
        }

        Ok(Self { tiles })
    }

    /// Number of tile types
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog holds no tiles (never true post-validation)
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Borrow a tile definition by index
    pub fn tile(&self, index: usize) -> Option<&TileDef> {
        self.tiles.get(index)
    }

    /// Index of the tile with the given name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.name() == name)
    }

    /// RGBA display color for a tile index
    pub fn color(&self, index: usize) -> Option<[u8; 4]> {
        self.tiles.get(index).map(TileDef::color)
    }

    /// Tiles permitted adjacent to `tile` in the given direction
    pub fn allowed(&self, tile: usize, direction: Direction) -> Option<&TileSet> {
        self.tiles.get(tile).map(|def| def.allowed(direction))
    }

    /// A fresh option set containing every tile in the catalog
    pub fn full_set(&self) -> TileSet {
        TileSet::full(self.tiles.len())
    }

    /// The classic five-tile pipe maze set
    ///
    /// A blank tile plus four T-junctions, with adjacency derived from edge
    /// connector profiles: two tiles may neighbor each other exactly when
    /// their facing edges agree on carrying a pipe connection.
    pub fn pipe_maze() -> Self {
        // (name, [up, down, left, right] connector edges, color)
        let profiles: [(&str, [bool; 4], [u8; 4]); 5] = [
            ("blank", [false, false, false, false], [38, 38, 46, 255]),
            ("up", [true, false, true, true], [214, 84, 84, 255]),
            ("right", [true, true, false, true], [92, 204, 124, 255]),
            ("down", [false, true, true, true], [88, 128, 222, 255]),
            ("left", [true, true, true, false], [228, 198, 94, 255]),
        ];

        let count = profiles.len();
        let tiles = profiles
            .iter()
            .map(|&(name, edges, color)| {
                let allowed = Direction::ALL.map(|direction| {
                    let facing = edges_at(edges, direction);
                    TileSet::from_indices(
                        profiles.iter().enumerate().filter_map(|(other, entry)| {
                            (edges_at(entry.1, direction.opposite()) == facing).then_some(other)
                        }),
                        count,
                    )
                });

                TileDef::new(name, color, allowed)
            })
            .collect();

        Self { tiles }
    }
}

/// Whether an edge profile carries a connector toward the given direction
const fn edges_at(edges: [bool; 4], direction: Direction) -> bool {
    match direction {
        Direction::Up => edges[0],
        Direction::Down => edges[1],
        Direction::Left => edges[2],
        Direction::Right => edges[3],
    }
}
