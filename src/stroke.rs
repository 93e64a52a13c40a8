use egui::Pos2;

// Finalized stroke, never mutated again
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Pos2>,
}

// Stroke still being drawn, append-only
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveStroke {
    points: Vec<Pos2>,
}

impl Stroke {
    pub fn new(points: Vec<Pos2>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl ActiveStroke {
    // Start a stroke at its first point
    pub fn new(start: Pos2) -> Self {
        Self { points: vec![start] }
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    // Finalize into an immutable Stroke
    pub fn finish(self) -> Stroke {
        Stroke::new(self.points)
    }
}

/// Completed strokes plus the one in progress
#[derive(Debug, Default)]
pub struct StrokeModel {
    strokes: Vec<Stroke>,
    active: Option<ActiveStroke>,
}

impl StrokeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new active stroke containing exactly `point`.
    ///
    /// Ignored while a stroke is already active; it must be ended first.
    pub fn begin_stroke(&mut self, point: Pos2) {
        if self.active.is_some() {
            return;
        }
        self.active = Some(ActiveStroke::new(point));
    }

    /// Append to the active stroke, if any
    pub fn extend_stroke(&mut self, point: Pos2) {
        if let Some(active) = &mut self.active {
            active.add_point(point);
        }
    }

    /// Move the active stroke into the completed collection.
    ///
    /// Returns the number of points committed, if a stroke was active.
    pub fn end_stroke(&mut self) -> Option<usize> {
        let stroke = self.active.take()?.finish();
        if stroke.is_empty() {
            return None;
        }
        let len = stroke.len();
        self.strokes.push(stroke);
        Some(len)
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.active = None;
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn active(&self) -> Option<&ActiveStroke> {
        self.active.as_ref()
    }

    pub fn active_points(&self) -> &[Pos2] {
        self.active.as_ref().map_or(&[], |active| active.points())
    }

    pub fn is_drawing(&self) -> bool {
        self.active.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_begin_extend_end() {
        let mut model = StrokeModel::new();
        model.begin_stroke(pos2(1.0, 1.0));
        model.extend_stroke(pos2(2.0, 2.0));
        assert_eq!(model.active_points(), &[pos2(1.0, 1.0), pos2(2.0, 2.0)]);

        assert_eq!(model.end_stroke(), Some(2));
        assert!(!model.is_drawing());
        assert_eq!(model.strokes().len(), 1);
        assert_eq!(model.strokes()[0].points(), &[pos2(1.0, 1.0), pos2(2.0, 2.0)]);
    }

    #[test]
    fn test_begin_while_active_is_ignored() {
        let mut model = StrokeModel::new();
        model.begin_stroke(pos2(1.0, 1.0));
        model.begin_stroke(pos2(5.0, 5.0));
        assert_eq!(model.active_points(), &[pos2(1.0, 1.0)]);
    }

    #[test]
    fn test_extend_and_end_without_active_are_noops() {
        let mut model = StrokeModel::new();
        model.extend_stroke(pos2(1.0, 1.0));
        assert_eq!(model.end_stroke(), None);
        assert!(model.strokes().is_empty());
        assert!(model.active().is_none());
    }

    #[test]
    fn test_single_point_stroke_is_committed() {
        let mut model = StrokeModel::new();
        model.begin_stroke(pos2(3.0, 4.0));
        assert_eq!(model.end_stroke(), Some(1));
        assert_eq!(model.strokes()[0].len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut model = StrokeModel::new();
        model.begin_stroke(pos2(0.0, 0.0));
        model.end_stroke();
        model.begin_stroke(pos2(1.0, 1.0));
        model.clear();
        assert!(model.strokes().is_empty());
        assert!(!model.is_drawing());
    }
}
