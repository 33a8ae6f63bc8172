//! PNG export of a collapsed grid
//!
//! Each cell becomes a solid `cell_pixels`² block in its catalog color.
//! Uncollapsed cells render transparent, so a partially-solved grid still
//! exports cleanly.

use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::{Grid, TileCatalog};
use image::{ImageBuffer, Rgba};

/// Export the grid's tile assignment as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is zero
/// - A committed tile index has no color in the catalog
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &Grid,
    catalog: &TileCatalog,
    cell_pixels: u32,
    output_path: &str,
) -> Result<()> {
    if cell_pixels == 0 {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"cell size must be at least one pixel",
        ));
    }

    let side = grid.dimensions() as u32 * cell_pixels;
    let mut img = ImageBuffer::new(side, side);
    let tile_map = grid.tile_map();

    for ((row, col), tile) in tile_map.indexed_iter() {
        let color = match tile {
            Some(tile) => {
                let rgba = catalog.color(*tile).ok_or_else(|| {
                    GenerationError::InvalidTileIndex {
                        index: *tile,
                        max_tiles: catalog.len(),
                    }
                })?;
                Rgba(rgba)
            }
            None => Rgba([0, 0, 0, 0]),
        };

        for dy in 0..cell_pixels {
            for dx in 0..cell_pixels {
                let pixel_x = col as u32 * cell_pixels + dx;
                let pixel_y = row as u32 * cell_pixels + dy;
                img.put_pixel(pixel_x, pixel_y, color);
            }
        }
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| GenerationError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}
