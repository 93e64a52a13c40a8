use egui::Shape;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::background::{PaperLayout, paint_background, speckles};
use crate::command::Command;
use crate::config::CanvasConfig;
use crate::error::CanvasResult;
use crate::frame_loop::{FrameLoop, RepaintScheduler};
use crate::input::{InputController, InputEvent, InputState};
use crate::particle::ParticleSystem;
use crate::renderer::{DisplayList, draw_particles, draw_stroke};
use crate::stroke::StrokeModel;
use crate::surface::SurfaceMetrics;
use crate::util::time;

/// One drawing canvas: owns every stroke and particle, the derived paper
/// layout, and the frame loop. Input is routed through it and rendering only
/// reads from it.
#[derive(Debug)]
pub struct CanvasSession {
    config: CanvasConfig,
    surface: SurfaceMetrics,
    layout: PaperLayout,
    strokes: StrokeModel,
    particles: ParticleSystem,
    input: InputController,
    frame_loop: FrameLoop,
    rng: SmallRng,
    speckle: bool,
    // Paper texture for the current layout
    texture: Vec<Shape>,
}

impl CanvasSession {
    /// Create a session for a surface, seeding randomness from the clock
    pub fn new(config: CanvasConfig, surface: SurfaceMetrics) -> CanvasResult<Self> {
        let seed = (time::current_time_secs() * 1000.0) as u64;
        Self::with_rng(config, surface, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: CanvasConfig, surface: SurfaceMetrics, mut rng: SmallRng) -> CanvasResult<Self> {
        config.validate()?;
        surface.ensure_drawable()?;

        let layout = PaperLayout::new(surface.size, &config.paper);
        let texture = speckles(&mut rng, &layout, &config.paper);
        log::info!(
            "Canvas session created: {}x{} points, backing store {:?}",
            surface.size.x,
            surface.size.y,
            surface.backing_size()
        );

        Ok(Self {
            layout,
            strokes: StrokeModel::new(),
            particles: ParticleSystem::new(config.particles.clone()),
            input: InputController::new(config.input.clone()),
            frame_loop: FrameLoop::new(),
            rng,
            speckle: true,
            texture,
            surface,
            config,
        })
    }

    /// Toggle the random paper texture
    pub fn set_speckle(&mut self, enabled: bool) {
        self.speckle = enabled;
    }

    pub fn start(&mut self, scheduler: &dyn RepaintScheduler) {
        if self.is_active() {
            self.frame_loop.start(scheduler);
        }
    }

    /// Adopt new surface metrics, recompute the layout and repaint right away.
    /// A surface that is not drawable is ignored.
    pub fn resize(&mut self, surface: SurfaceMetrics, scheduler: &dyn RepaintScheduler) {
        if !self.is_active() || surface == self.surface || !surface.is_drawable() {
            return;
        }
        let layout = PaperLayout::new(surface.size, &self.config.paper);
        log::debug!(
            "Surface resized {:?} -> {:?} (ppp {}), line spacing {}, margin {}",
            self.surface.size,
            surface.size,
            surface.pixels_per_point,
            layout.line_spacing,
            layout.margin
        );
        if layout != self.layout {
            self.texture = speckles(&mut self.rng, &layout, &self.config.paper);
        }
        self.surface = surface;
        self.layout = layout;
        scheduler.schedule_next();
    }

    pub fn handle_input(&mut self, event: &InputEvent) {
        for command in self.input.handle(event, &self.surface) {
            self.execute(command);
        }
    }

    /// Apply one mutation. Ignored after teardown.
    pub fn execute(&mut self, command: Command) {
        if !self.is_active() {
            return;
        }
        log::trace!("Executing {}", command.name());
        match command {
            Command::BeginStroke(at) => self.strokes.begin_stroke(at),
            Command::ExtendStroke(at) => self.strokes.extend_stroke(at),
            Command::EndStroke => {
                if let Some(points) = self.strokes.end_stroke() {
                    log::debug!("Stroke finished with {} points", points);
                }
            }
            Command::Emit { at, count, speed } => self.particles.emit(&mut self.rng, at, count, speed),
            Command::Clear => {
                self.strokes.clear();
                self.particles.clear();
                self.input.reset();
                log::info!("Canvas cleared");
            }
        }
    }

    /// The Clear Command: drop all strokes and particles, forget any press in
    /// progress, then repaint at once
    pub fn clear(&mut self, scheduler: &dyn RepaintScheduler) {
        self.execute(Command::Clear);
        scheduler.schedule_next();
    }

    /// Paint the current state without advancing anything: background,
    /// completed strokes, the active stroke, then particles.
    pub fn render(&self) -> DisplayList {
        let mut list = DisplayList::new();
        let texture = self.speckle.then_some(self.texture.as_slice());
        paint_background(&mut list, &self.layout, &self.config.paper, texture);

        for stroke in self.strokes.strokes() {
            draw_stroke(&mut list, stroke.points(), &self.config.ink);
        }
        draw_stroke(&mut list, self.strokes.active_points(), &self.config.ink);
        draw_particles(&mut list, self.particles.particles());
        list
    }

    /// One frame of the render loop: advance particles, paint, schedule the
    /// next frame. Returns an empty list once torn down.
    pub fn tick(&mut self, scheduler: &dyn RepaintScheduler) -> DisplayList {
        if !self.frame_loop.is_running() {
            return DisplayList::new();
        }
        self.particles.step();
        let list = self.render();
        self.frame_loop.finish_frame(scheduler);
        list
    }

    /// Stop the frame loop and detach input
    pub fn teardown(&mut self) {
        if !self.is_active() {
            return;
        }
        self.frame_loop.stop();
        self.input.detach();
        log::info!("Canvas session torn down after {} frames", self.frame_loop.frames());
    }

    pub fn is_active(&self) -> bool {
        self.input.is_attached()
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn strokes(&self) -> &StrokeModel {
        &self.strokes
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn input_state(&self) -> InputState {
        self.input.state()
    }

    pub fn layout(&self) -> &PaperLayout {
        &self.layout
    }

    pub fn surface(&self) -> &SurfaceMetrics {
        &self.surface
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn frames(&self) -> u64 {
        self.frame_loop.frames()
    }
}
