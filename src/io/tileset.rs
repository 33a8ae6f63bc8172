//! JSON tileset loading with name-resolved adjacency lists
//!
//! A tileset file is an object with a `tiles` array; each entry names a
//! tile, gives its RGBA color, and lists the tile names permitted adjacent
//! in each of the four directions:
//!
//! ```json
//! {
//!   "tiles": [
//!     { "name": "blank", "color": [40, 40, 48, 255],
//!       "up": ["blank"], "down": ["blank"],
//!       "left": ["blank"], "right": ["blank"] }
//!   ]
//! }
//! ```
//!
//! All four direction keys are required per tile, so a catalog migrated
//! from the original's two conflicting field orders cannot silently carry
//! that ambiguity forward. Dangling names are rejected at load time.

use crate::algorithm::bitset::TileSet;
use crate::io::error::{GenerationError, Result};
use crate::spatial::{Direction, TileCatalog, TileDef};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TilesetFile {
    tiles: Vec<TileEntry>,
}

#[derive(Debug, Deserialize)]
struct TileEntry {
    name: String,
    color: [u8; 4],
    up: Vec<String>,
    down: Vec<String>,
    left: Vec<String>,
    right: Vec<String>,
}

impl TileEntry {
    fn names(&self, direction: Direction) -> &[String] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }
}

/// Load and validate a tileset file
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON for the
/// tileset schema, or fails catalog validation (empty tile list, duplicate
/// names, dangling adjacency references).
pub fn load_tileset(path: &Path) -> Result<TileCatalog> {
    let data = std::fs::read_to_string(path).map_err(|e| GenerationError::FileSystem {
        path: path.to_path_buf(),
        operation: "read tileset",
        source: e,
    })?;

    let file: TilesetFile =
        serde_json::from_str(&data).map_err(|e| GenerationError::TilesetParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    catalog_from_entries(&file.tiles)
}

/// Build a validated catalog from a JSON string
///
/// # Errors
///
/// As [`load_tileset`], without the file read.
pub fn parse_tileset(json: &str) -> Result<TileCatalog> {
    let file: TilesetFile =
        serde_json::from_str(json).map_err(|e| GenerationError::TilesetParse {
            path: "<inline>".into(),
            source: e,
        })?;

    catalog_from_entries(&file.tiles)
}

fn catalog_from_entries(entries: &[TileEntry]) -> Result<TileCatalog> {
    let count = entries.len();
    let index_by_name: HashMap<&str, usize> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| (entry.name.as_str(), index))
        .collect();

    let mut tiles = Vec::with_capacity(count);
    for entry in entries {
        let mut allowed = [
            TileSet::new(count),
            TileSet::new(count),
            TileSet::new(count),
            TileSet::new(count),
        ];

        for (slot, direction) in allowed.iter_mut().zip(Direction::ALL) {
            *slot = resolve_names(entry.names(direction), &index_by_name, count, |name| {
                format!(
                    "tile '{}' references unknown tile '{name}' in its {} list",
                    entry.name,
                    direction.name()
                )
            })?;
        }

        tiles.push(TileDef::new(entry.name.clone(), entry.color, allowed));
    }

    TileCatalog::new(tiles)
}

fn resolve_names(
    names: &[String],
    index_by_name: &HashMap<&str, usize>,
    capacity: usize,
    describe: impl Fn(&str) -> String,
) -> Result<TileSet> {
    let mut set = TileSet::new(capacity);
    for name in names {
        let Some(&index) = index_by_name.get(name.as_str()) else {
            return Err(GenerationError::InvalidTileset {
                reason: describe(name),
            });
        };
        set.insert(index);
    }
    Ok(set)
}
