/// Something that can schedule another frame
pub trait RepaintScheduler {
    fn schedule_next(&self);
}

impl RepaintScheduler for egui::Context {
    fn schedule_next(&self) {
        self.request_repaint();
    }
}

/// Repeating frame driver. Each finished frame schedules the next one
/// until the loop is stopped.
#[derive(Debug, Default)]
pub struct FrameLoop {
    running: bool,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, scheduler: &dyn RepaintScheduler) {
        if !self.running {
            self.running = true;
            scheduler.schedule_next();
        }
    }

    /// Stop scheduling. Frames already requested still arrive, but do nothing.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of frames completed while running
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Finish the current frame and request the next. Returns false once stopped.
    pub fn finish_frame(&mut self, scheduler: &dyn RepaintScheduler) -> bool {
        if !self.running {
            return false;
        }
        self.frames += 1;
        scheduler.schedule_next();
        true
    }
}
