#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod background;
pub mod command;
pub mod components;
pub mod config;
pub mod error;
pub mod frame_loop;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod particle;
pub mod renderer;
pub mod session;
pub mod stroke;
pub mod surface;
pub mod util;

pub use app::CanvasApp;
pub use background::PaperLayout;
pub use command::Command;
pub use config::CanvasConfig;
pub use error::{CanvasError, CanvasResult, ConfigError};
pub use frame_loop::{FrameLoop, RepaintScheduler};
pub use input::{InputController, InputEvent};
pub use particle::{Particle, ParticleSystem};
pub use renderer::{DisplayList, Primitive};
pub use session::CanvasSession;
pub use stroke::{Stroke, StrokeModel};
pub use surface::SurfaceMetrics;
