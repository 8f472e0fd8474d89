//! Viewport of the component graph.
//!
//! `x` and `y` are translation units and `k` is the scale factor. The text
//! renderer maps one column to [`X_UNITS_PER_COLUMN`] and one row to
//! [`Y_UNITS_PER_ROW`].

/// Translation units covered by one terminal column.
pub const X_UNITS_PER_COLUMN: f64 = 10.0;

/// Translation units covered by one terminal row.
pub const Y_UNITS_PER_ROW: f64 = 100.0;

/// Multiplier applied per zoom step.
pub const ZOOM_STEP: f64 = 1.25;

pub const MIN_SCALE: f64 = 0.01;
pub const MAX_SCALE: f64 = 10.0;

/// Scale at which one depth level is indented by [`BASE_INDENT`] columns.
const BASE_SCALE: f64 = 0.07;
const BASE_INDENT: f64 = 4.0;
const MAX_INDENT: usize = 16;

/// Pan/zoom state of the component graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomState {
    pub x: f64,
    pub y: f64,
    pub k: f64,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            x: 50.0,
            y: 380.0,
            k: 0.07,
        }
    }
}

impl ZoomState {
    pub fn new(x: f64, y: f64, k: f64) -> Self {
        Self { x, y, k }
    }

    /// Shift the viewport by whole terminal cells.
    pub fn panned(self, columns: i32, rows: i32) -> Self {
        Self {
            x: self.x + f64::from(columns) * X_UNITS_PER_COLUMN,
            y: self.y + f64::from(rows) * Y_UNITS_PER_ROW,
            ..self
        }
    }

    pub fn zoomed_in(self) -> Self {
        self.with_scale(self.k * ZOOM_STEP)
    }

    pub fn zoomed_out(self) -> Self {
        self.with_scale(self.k / ZOOM_STEP)
    }

    fn with_scale(self, k: f64) -> Self {
        Self {
            k: k.clamp(MIN_SCALE, MAX_SCALE),
            ..self
        }
    }

    /// Columns the diagram is shifted right by. Negative values clip.
    pub fn column_offset(&self) -> i32 {
        (self.x / X_UNITS_PER_COLUMN).round() as i32
    }

    /// Rows the diagram is shifted down by. Negative values clip.
    pub fn row_offset(&self) -> i32 {
        (self.y / Y_UNITS_PER_ROW).round() as i32
    }

    /// Columns of indentation per tree depth level at the current scale.
    pub fn indent_width(&self) -> usize {
        let width = (BASE_INDENT * self.k / BASE_SCALE).round();
        (width.max(1.0) as usize).min(MAX_INDENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_viewport() {
        let zoom = ZoomState::default();
        assert_eq!(zoom, ZoomState::new(50.0, 380.0, 0.07));
        assert_eq!(zoom.column_offset(), 5);
        assert_eq!(zoom.row_offset(), 4);
        assert_eq!(zoom.indent_width(), 4);
    }

    #[test]
    fn test_pan_moves_by_cells() {
        let zoom = ZoomState::default().panned(-2, 1);
        assert_eq!(zoom.x, 30.0);
        assert_eq!(zoom.y, 480.0);
        assert_eq!(zoom.k, 0.07);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut zoom = ZoomState::new(0.0, 0.0, MAX_SCALE);
        zoom = zoom.zoomed_in();
        assert_eq!(zoom.k, MAX_SCALE);

        zoom = ZoomState::new(0.0, 0.0, MIN_SCALE).zoomed_out();
        assert_eq!(zoom.k, MIN_SCALE);
    }

    #[test]
    fn test_indent_width_bounds() {
        assert_eq!(ZoomState::new(0.0, 0.0, MIN_SCALE).indent_width(), 1);
        assert_eq!(ZoomState::new(0.0, 0.0, MAX_SCALE).indent_width(), 16);
        assert_eq!(ZoomState::new(0.0, 0.0, 0.14).indent_width(), 8);
    }
}
