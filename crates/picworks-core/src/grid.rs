//! Alignment grid overlay.
//!
//! The grid is a tile one project unit square that the renderer repeats
//! across the scene. Each tile draws solid lines on its far border and
//! dotted lines at every fifth of the unit.

use crate::shapes::SerializableColor;
use kurbo::{Line, Point};
use serde::{Deserialize, Serialize};

/// Number of subdivisions per grid unit.
pub const GRID_SUBDIVISIONS: i32 = 5;

/// Direction a grid line runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Runs along x at a fixed y offset.
    Horizontal,
    /// Runs along y at a fixed x offset.
    Vertical,
}

/// Pen style of a grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStroke {
    Solid,
    Dotted,
}

/// One line of a grid tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLine {
    pub axis: Axis,
    /// Pixel offset across the line's axis.
    pub offset: i32,
    pub stroke: LineStroke,
}

impl GridLine {
    /// The line's segment within a tile of `size` pixels.
    pub fn segment(&self, size: u32) -> Line {
        let far = size as f64 - 1.0;
        let offset = self.offset as f64;
        match self.axis {
            Axis::Horizontal => Line::new(Point::new(0.0, offset), Point::new(far, offset)),
            Axis::Vertical => Line::new(Point::new(offset, 0.0), Point::new(offset, far)),
        }
    }
}

/// A repeatable grid pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridTile {
    /// Tile width and height in pixels.
    pub size: u32,
    /// Pen color for every line.
    pub color: SerializableColor,
    /// Lines in drawing order.
    pub lines: Vec<GridLine>,
}

impl GridTile {
    /// Build the tile for a project unit.
    ///
    /// Small units crowd the dotted lines together, and below five pixels
    /// the subdivision offsets collapse to -1. The arithmetic is kept as is.
    pub fn generate(unit: u32, color: SerializableColor) -> Self {
        let unit_i = i32::try_from(unit).unwrap_or(i32::MAX);
        let border = unit_i - 1;
        let step = unit_i / GRID_SUBDIVISIONS;

        let mut lines = vec![
            GridLine {
                axis: Axis::Horizontal,
                offset: border,
                stroke: LineStroke::Solid,
            },
            GridLine {
                axis: Axis::Vertical,
                offset: border,
                stroke: LineStroke::Solid,
            },
        ];
        for k in 1..GRID_SUBDIVISIONS {
            let offset = step * k - 1;
            lines.push(GridLine {
                axis: Axis::Horizontal,
                offset,
                stroke: LineStroke::Dotted,
            });
            lines.push(GridLine {
                axis: Axis::Vertical,
                offset,
                stroke: LineStroke::Dotted,
            });
        }

        Self {
            size: unit,
            color,
            lines,
        }
    }

    pub fn solid_lines(&self) -> impl Iterator<Item = &GridLine> {
        self.lines.iter().filter(|l| l.stroke == LineStroke::Solid)
    }

    pub fn dotted_lines(&self) -> impl Iterator<Item = &GridLine> {
        self.lines.iter().filter(|l| l.stroke == LineStroke::Dotted)
    }

    /// Distinct offsets drawn with `stroke`, in ascending order.
    pub fn offsets(&self, stroke: LineStroke) -> Vec<i32> {
        let mut offsets: Vec<i32> = self
            .lines
            .iter()
            .filter(|l| l.stroke == stroke)
            .map(|l| l.offset)
            .collect();
        offsets.sort_unstable();
        offsets.dedup();
        offsets
    }
}
