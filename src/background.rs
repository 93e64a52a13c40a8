use egui::{Align2, Color32, FontId, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2, pos2};
use rand::Rng;

use crate::config::PaperConfig;
use crate::renderer::DisplayList;

/// Spacing constants derived from the viewport size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaperLayout {
    pub size: Vec2,
    pub line_spacing: f32,
    pub margin: f32,
    pub header_height: f32,
    pub title_size: f32,
}

impl PaperLayout {
    pub fn new(size: Vec2, paper: &PaperConfig) -> Self {
        let short_side = size.x.min(size.y).max(0.0);
        let derive = |divisor: f32, minimum: f32| (short_side / divisor).floor().max(minimum);

        let line_spacing = derive(paper.line_divisor, paper.min_line_spacing);
        Self {
            size,
            line_spacing,
            margin: derive(paper.margin_divisor, paper.min_margin),
            header_height: line_spacing * paper.header_lines as f32,
            title_size: derive(paper.title_divisor, paper.min_title_size),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size)
    }

    /// y coordinates of the ruled lines, one spacing apart starting one spacing down
    pub fn rule_positions(&self) -> impl Iterator<Item = f32> + '_ {
        let spacing = self.line_spacing;
        (1..)
            .map(move |i| i as f32 * spacing)
            .take_while(move |y| spacing > 0.0 && *y < self.size.y)
    }

    pub fn speckle_count(&self, paper: &PaperConfig) -> usize {
        let area = self.size.x.max(0.0) * self.size.y.max(0.0);
        ((area / paper.speckle_area_per_dot) as usize).min(paper.max_speckles)
    }
}

/// Paint the paper backdrop: base fill, optional speckle texture, ruled lines,
/// margin, then header band and title. The speckle comes from [`speckles`].
pub fn paint_background(
    list: &mut DisplayList,
    layout: &PaperLayout,
    paper: &PaperConfig,
    speckle: Option<&[Shape]>,
) {
    let rect = layout.rect();
    list.push(Shape::rect_filled(rect, 0.0, paper.paper_color));

    if let Some(speckle) = speckle {
        list.push_speckle(speckle.iter().cloned());
    }

    let rule = EguiStroke::new(paper.rule_width, paper.rule_color);
    for y in layout.rule_positions() {
        list.push(Shape::line_segment([pos2(0.0, y), pos2(rect.max.x, y)], rule));
    }

    let margin = EguiStroke::new(paper.margin_width, paper.margin_color);
    list.push(Shape::line_segment(
        [pos2(layout.margin, 0.0), pos2(layout.margin, rect.max.y)],
        margin,
    ));

    if layout.header_height > 0.0 {
        let band = Rect::from_min_size(Pos2::ZERO, Vec2::new(rect.width(), layout.header_height.min(rect.height())));
        list.push(Shape::rect_filled(band, 0.0, paper.header_color));
        if !paper.title.is_empty() {
            list.push_text(
                pos2(layout.margin + layout.line_spacing, band.center().y),
                Align2::LEFT_CENTER,
                paper.title.clone(),
                FontId::proportional(layout.title_size),
                paper.title_color,
            );
        }
    }
}

/// Scatter the paper texture over a layout. Generated once per layout and
/// reused every frame.
pub fn speckles(rng: &mut dyn rand::RngCore, layout: &PaperLayout, paper: &PaperConfig) -> Vec<Shape> {
    let count = layout.speckle_count(paper);
    if layout.size.x <= 0.0 || layout.size.y <= 0.0 {
        return Vec::new();
    }
    let color = Color32::from_black_alpha((paper.speckle_opacity.clamp(0.0, 1.0) * 255.0) as u8);
    (0..count)
        .map(|_| {
            let at = pos2(rng.gen_range(0.0..layout.size.x), rng.gen_range(0.0..layout.size.y));
            Shape::circle_filled(at, rng.gen_range(0.3..1.2), color)
        })
        .collect()
}
