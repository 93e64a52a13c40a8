use egui::{Pos2, Rect, Vec2};

use crate::error::{CanvasError, CanvasResult};

/// Where the drawing surface sits on screen and how dense its backing store is.
///
/// Positions stay in logical points (CSS pixels on the web). egui scales the
/// backing store by `pixels_per_point` and compensates when tessellating, so
/// recorded points never need rescaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    /// Top-left corner in screen points
    pub origin: Pos2,
    pub size: Vec2,
    pub pixels_per_point: f32,
}

impl SurfaceMetrics {
    pub fn new(rect: Rect, pixels_per_point: f32) -> Self {
        Self {
            origin: rect.min,
            size: rect.size(),
            pixels_per_point,
        }
    }

    pub fn screen_rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size)
    }

    /// Map a raw screen position to surface-local points.
    /// Missing position data maps to the origin.
    pub fn to_local(&self, raw: Option<Pos2>) -> Pos2 {
        raw.map_or(Pos2::ZERO, |pos| pos - self.origin.to_vec2())
    }

    pub fn contains(&self, raw: Pos2) -> bool {
        self.screen_rect().contains(raw)
    }

    /// Size of the physical backing store in pixels
    pub fn backing_size(&self) -> [u32; 2] {
        let px = self.size * self.pixels_per_point.max(0.0);
        [px.x.ceil().max(0.0) as u32, px.y.ceil().max(0.0) as u32]
    }

    pub fn is_drawable(&self) -> bool {
        self.size.x.is_finite()
            && self.size.y.is_finite()
            && self.size.x > 0.0
            && self.size.y > 0.0
            && self.pixels_per_point > 0.0
    }

    pub fn ensure_drawable(&self) -> CanvasResult<()> {
        if self.is_drawable() {
            Ok(())
        } else {
            Err(CanvasError::SurfaceUnavailable(format!(
                "surface of {}x{} points at {} pixels per point",
                self.size.x, self.size.y, self.pixels_per_point
            )))
        }
    }
}
