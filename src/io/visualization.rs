//! Collapse-order capture and GIF generation
//!
//! `SolveRecorder` listens on the solver's hook seam, records each
//! realization event, and replays the sequence into an animated GIF after
//! the run: one frame per collapse, with the finished grid held longer.

use crate::algorithm::solver::StepHooks;
use crate::io::configuration::FINAL_FRAME_HOLD;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::TileCatalog;
use image::{Delay, Frame, Rgba, RgbaImage};

/// A single recorded collapse event
#[derive(Clone, Copy, Debug)]
struct CollapseEvent {
    x: usize,
    y: usize,
    tile: usize,
}

/// Records collapse events for post-run visualization
///
/// The average of all tile colors is used for not-yet-collapsed cells so
/// the animation reads as resolving out of uncertainty.
pub struct SolveRecorder {
    dimensions: usize,
    cell_pixels: u32,
    color_mapping: Vec<[u8; 4]>,
    empty_color: [u8; 4],
    events: Vec<CollapseEvent>,
}

impl SolveRecorder {
    /// Create a recorder sized for one run
    pub fn new(dimensions: usize, cell_pixels: u32, catalog: &TileCatalog) -> Self {
        let color_mapping: Vec<[u8; 4]> = (0..catalog.len())
            .map(|tile| catalog.color(tile).unwrap_or([0, 0, 0, 0]))
            .collect();

        let empty_color = if color_mapping.is_empty() {
            [128, 128, 128, 255]
        } else {
            let mut sums = [0u32; 4];
            for color in &color_mapping {
                for (sum, &channel) in sums.iter_mut().zip(color) {
                    *sum += u32::from(channel);
                }
            }
            let count = color_mapping.len() as u32;
            [
                (sums[0] / count) as u8,
                (sums[1] / count) as u8,
                (sums[2] / count) as u8,
                (sums[3] / count) as u8,
            ]
        };

        Self {
            dimensions,
            cell_pixels,
            color_mapping,
            empty_color,
            events: Vec::with_capacity(dimensions * dimensions),
        }
    }

    /// Number of collapse events captured so far
    pub fn recorded_steps(&self) -> usize {
        self.events.len()
    }

    /// Export the captured collapse order as an animated GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No collapse events were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.events.is_empty() {
            return Err(invalid_parameter(
                "visualization",
                &"empty",
                &"no collapse events captured",
            ));
        }

        let mut assigned: Vec<Option<usize>> = vec![None; self.dimensions * self.dimensions];
        let mut frames = Vec::with_capacity(self.events.len() + 2);
        frames.push(self.render_frame(&assigned, frame_delay_ms)?);

        for event in &self.events {
            if let Some(slot) = assigned.get_mut(event.x + event.y * self.dimensions) {
                *slot = Some(event.tile);
            }
            frames.push(self.render_frame(&assigned, frame_delay_ms)?);
        }

        // Final frame displays longer for better visibility
        frames.push(self.render_frame(&assigned, frame_delay_ms * FINAL_FRAME_HOLD)?);

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file =
            std::fs::File::create(output_path).map_err(|e| GenerationError::FileSystem {
                path: output_path.into(),
                operation: "create file",
                source: e,
            })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GenerationError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    fn render_frame(&self, assigned: &[Option<usize>], delay_ms: u32) -> Result<Frame> {
        let side = self.dimensions as u32 * self.cell_pixels;
        let mut img = RgbaImage::new(side, side);

        for (index, tile) in assigned.iter().enumerate() {
            let color = match tile {
                Some(tile) => self.color_mapping.get(*tile).copied().ok_or_else(|| {
                    GenerationError::InvalidTileIndex {
                        index: *tile,
                        max_tiles: self.color_mapping.len(),
                    }
                })?,
                None => self.empty_color,
            };

            let x = (index % self.dimensions) as u32;
            let y = (index / self.dimensions) as u32;
            for dy in 0..self.cell_pixels {
                for dx in 0..self.cell_pixels {
                    img.put_pixel(
                        x * self.cell_pixels + dx,
                        y * self.cell_pixels + dy,
                        Rgba(color),
                    );
                }
            }
        }

        Ok(Frame::from_parts(
            img,
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        ))
    }
}

impl StepHooks for SolveRecorder {
    fn realize_tile(&mut self, tile: usize, position: [i32; 3], _iteration: usize) {
        // World positions are (x, 0, y) and never negative on this grid
        let x = position[0].max(0) as usize;
        let y = position[2].max(0) as usize;

        if x < self.dimensions && y < self.dimensions {
            self.events.push(CollapseEvent { x, y, tile });
        }
    }
}
