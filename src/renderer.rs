// src/renderer.rs
use std::ops::Range;

use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke as EguiStroke};

use crate::config::InkConfig;
use crate::geometry::StrokePath;
use crate::particle::Particle;

/// A single paint operation, in surface-local points
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Shape(Shape),
    /// Text needs the painter's fonts, so it is laid out at paint time
    Text {
        pos: Pos2,
        anchor: Align2,
        text: String,
        font: FontId,
        color: Color32,
    },
}

/// Everything drawn in one frame, in paint order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    primitives: Vec<Primitive>,
    speckle: Range<usize>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: Shape) {
        self.primitives.push(Primitive::Shape(shape));
    }

    pub fn push_text(&mut self, pos: Pos2, anchor: Align2, text: impl Into<String>, font: FontId, color: Color32) {
        self.primitives.push(Primitive::Text {
            pos,
            anchor,
            text: text.into(),
            font,
            color,
        });
    }

    /// Push the paper texture. Its entries are random, so they are tracked
    /// separately for frame comparisons.
    pub fn push_speckle(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        let start = self.primitives.len();
        self.primitives.extend(shapes.into_iter().map(Primitive::Shape));
        self.speckle = start..self.primitives.len();
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn speckle_count(&self) -> usize {
        self.speckle.len()
    }

    /// The frame minus its non-reproducible paper texture
    pub fn without_speckle(&self) -> Vec<Primitive> {
        self.primitives
            .iter()
            .enumerate()
            .filter(|(i, _)| !self.speckle.contains(i))
            .map(|(_, p)| p.clone())
            .collect()
    }

    /// Hand the frame to egui, offset to the surface's screen position
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        for primitive in &self.primitives {
            match primitive {
                Primitive::Shape(shape) => {
                    let mut shape = shape.clone();
                    shape.translate(offset);
                    painter.add(shape);
                }
                Primitive::Text { pos, anchor, text, font, color } => {
                    painter.text(*pos + offset, *anchor, text, font.clone(), *color);
                }
            }
        }
    }
}

/// Append a stroke as a glowing ink line. Strokes with fewer than two
/// points produce nothing.
pub fn draw_stroke(list: &mut DisplayList, points: &[Pos2], ink: &InkConfig) {
    let line = match StrokePath::from_points(points) {
        StrokePath::Empty => return,
        StrokePath::Segment(segment) => segment.to_vec(),
        curve => curve.polyline(ink.curve_steps),
    };
    let (Some(&first), Some(&last)) = (line.first(), line.last()) else {
        return;
    };

    for (width, color) in [(ink.glow_width, ink.glow_color), (ink.width, ink.color)] {
        if line.len() == 2 {
            list.push(Shape::line_segment([first, last], EguiStroke::new(width, color)));
        } else {
            list.push(Shape::line(line.clone(), EguiStroke::new(width, color)));
        }
        // Round caps
        list.push(Shape::circle_filled(first, width / 2.0, color));
        list.push(Shape::circle_filled(last, width / 2.0, color));
    }
}

/// Color that egui sums onto the target instead of blending over it:
/// premultiplied RGB with zero alpha, scaled by `intensity`.
pub fn additive(color: Color32, intensity: f32) -> Color32 {
    let k = intensity.clamp(0.0, 1.0);
    let scale = |c: u8| (c as f32 * k).round() as u8;
    Color32::from_rgba_premultiplied(scale(color.r()), scale(color.g()), scale(color.b()), 0)
}

/// Append sparkles with additive blending, faded by remaining life
pub fn draw_particles(list: &mut DisplayList, particles: &[Particle]) {
    for particle in particles.iter().filter(|p| p.is_alive()) {
        list.push(Shape::circle_filled(
            particle.pos,
            particle.size.max(0.0),
            additive(particle.color, particle.life),
        ));
    }
}
