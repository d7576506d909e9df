use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Full drawing surface in pixels, margins included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub right: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, bottom: f64, right: f64, left: f64) -> Self {
        Self {
            top,
            bottom,
            right,
            left,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(40.0, 90.0, 40.0, 100.0)
    }
}

/// Inner plotting rectangle; marks and axes are laid out relative to its
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Resolves the plot rectangle left after subtracting margins.
    pub fn resolve(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        for (side, value) in [
            ("top", margins.top),
            ("bottom", margins.bottom),
            ("right", margins.right),
            ("left", margins.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margins leave no plot area: width={width}, height={height}"
            )));
        }

        Ok(Self {
            origin_x: margins.left,
            origin_y: margins.top,
            width,
            height,
        })
    }

    /// Converts plot-local coordinates to surface coordinates.
    #[must_use]
    pub fn to_surface(self, x: f64, y: f64) -> (f64, f64) {
        (self.origin_x + x, self.origin_y + y)
    }

    /// Converts surface coordinates to plot-local coordinates.
    #[must_use]
    pub fn to_local(self, x: f64, y: f64) -> (f64, f64) {
        (x - self.origin_x, y - self.origin_y)
    }
}
