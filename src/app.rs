use crate::config::CanvasConfig;
use crate::error::CanvasError;
use crate::panels;
use crate::session::CanvasSession;
use crate::surface::SurfaceMetrics;

/// The canvas page: a full-window drawing surface and a floating clear button.
///
/// Only the config is persisted. Strokes live for the lifetime of the app.
pub struct CanvasApp {
    config: CanvasConfig,
    session: Option<CanvasSession>,
    // Set once the surface could not be acquired; nothing is rendered after that
    unavailable: bool,
}

impl CanvasApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = CanvasConfig::load(cc.storage);
        let mut app = Self::with_config(config);
        if cc.gl.is_none() {
            app.fail(CanvasError::SurfaceUnavailable("no GL context".into()));
        }
        app
    }

    pub fn with_config(config: CanvasConfig) -> Self {
        Self {
            config,
            session: None,
            unavailable: false,
        }
    }

    pub fn session(&self) -> Option<&CanvasSession> {
        self.session.as_ref()
    }

    pub fn is_unavailable(&self) -> bool {
        self.unavailable
    }

    /// The session for this surface, created on first use
    pub fn session_for(&mut self, metrics: SurfaceMetrics, ctx: &egui::Context) -> Option<&mut CanvasSession> {
        if self.unavailable {
            return None;
        }
        if self.session.is_none() {
            match CanvasSession::new(self.config.clone(), metrics) {
                Ok(mut session) => {
                    session.start(ctx);
                    self.session = Some(session);
                }
                Err(err) => {
                    self.fail(err);
                    return None;
                }
            }
        }
        self.session.as_mut()
    }

    pub fn clear(&mut self, ctx: &egui::Context) {
        if let Some(session) = &mut self.session {
            session.clear(ctx);
        }
    }

    /// One frame of the page. Draws nothing once the surface is unavailable.
    pub fn show(&mut self, ctx: &egui::Context) {
        if self.unavailable {
            return;
        }
        // Controls first, so a clear lands in this frame's paint
        panels::controls(self, ctx);
        panels::central_panel(self, ctx);
    }

    fn fail(&mut self, err: CanvasError) {
        log::error!("Canvas disabled: {}", err);
        self.unavailable = true;
        self.session = None;
    }
}

impl eframe::App for CanvasApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.config.save(storage);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(session) = &mut self.session {
            session.teardown();
        }
    }
}
