use egui::Pos2;

/// Quadratic Bézier segment between two stroke midpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
    pub from: Pos2,
    pub control: Pos2,
    pub to: Pos2,
}

impl QuadSegment {
    /// Point at parameter `t` in `[0, 1]`
    pub fn sample(&self, t: f32) -> Pos2 {
        let u = 1.0 - t;
        let x = u * u * self.from.x + 2.0 * u * t * self.control.x + t * t * self.to.x;
        let y = u * u * self.from.y + 2.0 * u * t * self.control.y + t * t * self.to.y;
        Pos2::new(x, y)
    }
}

/// Render geometry of a stroke. Built from the recorded points without
/// modifying them.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokePath {
    /// Fewer than two points: nothing is drawn
    Empty,
    /// Exactly two points
    Segment([Pos2; 2]),
    /// Three or more points, smoothed through the midpoints of consecutive
    /// points with each intermediate point as the control point
    Curve {
        start: Pos2,
        segments: Vec<QuadSegment>,
        end: Pos2,
    },
}

impl StrokePath {
    pub fn from_points(points: &[Pos2]) -> Self {
        match points {
            [] | [_] => Self::Empty,
            [a, b] => Self::Segment([*a, *b]),
            _ => {
                let segments = points
                    .windows(3)
                    .map(|w| QuadSegment {
                        from: w[0].lerp(w[1], 0.5),
                        control: w[1],
                        to: w[1].lerp(w[2], 0.5),
                    })
                    .collect();
                Self::Curve {
                    start: points[0],
                    segments,
                    end: points[points.len() - 1],
                }
            }
        }
    }

    /// Flatten to a polyline, `steps` line segments per curve segment.
    ///
    /// Curves run start → first midpoint → ... → last midpoint → end.
    pub fn polyline(&self, steps: usize) -> Vec<Pos2> {
        match self {
            Self::Empty => Vec::new(),
            Self::Segment(points) => points.to_vec(),
            Self::Curve { start, segments, end } => {
                let steps = steps.max(1);
                let mut out = Vec::with_capacity(segments.len() * steps + 3);
                out.push(*start);
                for segment in segments {
                    out.push(segment.from);
                    for i in 1..=steps {
                        out.push(segment.sample(i as f32 / steps as f32));
                    }
                }
                out.push(*end);
                out.dedup();
                out
            }
        }
    }
}
