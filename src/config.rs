use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Storage key the config is persisted under. Drawings are never persisted.
pub const CONFIG_KEY: &str = "sparkle_canvas_config";

/// Environment variable naming a JSON config file (native only)
pub const CONFIG_ENV_VAR: &str = "SPARKLE_CANVAS_CONFIG";

/// Notebook paper appearance and the layout constants derived from the viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperConfig {
    pub paper_color: Color32,
    pub rule_color: Color32,
    pub rule_width: f32,
    pub margin_color: Color32,
    pub margin_width: f32,
    pub header_color: Color32,
    pub title: String,
    pub title_color: Color32,

    /// Ruled line spacing is `max(floor(min(w, h) / line_divisor), min_line_spacing)`
    pub line_divisor: f32,
    pub min_line_spacing: f32,
    /// Margin offset is `max(floor(min(w, h) / margin_divisor), min_margin)`
    pub margin_divisor: f32,
    pub min_margin: f32,
    /// Header band height in ruled lines. Zero disables the header.
    pub header_lines: u32,
    pub title_divisor: f32,
    pub min_title_size: f32,

    /// Paper texture: one speckle per this many square points
    pub speckle_area_per_dot: f32,
    pub max_speckles: usize,
    pub speckle_opacity: f32,
}

impl Default for PaperConfig {
    fn default() -> Self {
        Self {
            paper_color: Color32::from_rgb(0xFF, 0xB6, 0xC1),
            rule_color: Color32::from_black_alpha(26),
            rule_width: 1.0,
            margin_color: Color32::from_rgba_unmultiplied(255, 0, 0, 77),
            margin_width: 2.0,
            header_color: Color32::from_rgba_unmultiplied(255, 20, 147, 40),
            title: "Sparkle Notebook".to_owned(),
            title_color: Color32::from_rgb(0xC7, 0x15, 0x85),
            line_divisor: 40.0,
            min_line_spacing: 20.0,
            margin_divisor: 16.0,
            min_margin: 50.0,
            header_lines: 3,
            title_divisor: 24.0,
            min_title_size: 16.0,
            speckle_area_per_dot: 400.0,
            max_speckles: 1500,
            speckle_opacity: 0.06,
        }
    }
}

/// How strokes are inked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InkConfig {
    pub color: Color32,
    pub width: f32,
    pub glow_color: Color32,
    pub glow_width: f32,
    /// Line segments used to flatten each quadratic curve segment
    pub curve_steps: usize,
}

impl Default for InkConfig {
    fn default() -> Self {
        Self {
            color: Color32::from_rgb(0xFF, 0xD7, 0x00),
            width: 3.0,
            glow_color: Color32::from_rgba_unmultiplied(0xFF, 0x69, 0xB4, 70),
            glow_width: 10.0,
            curve_steps: 8,
        }
    }
}

/// Sparkle particle tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub palette: Vec<Color32>,
    pub min_size: f32,
    pub max_size: f32,
    /// Life lost per frame
    pub decay: f32,
    /// Multiplicative size factor applied per frame
    pub shrink: f32,
    /// Maximum live particles. The oldest are dropped first.
    pub cap: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            palette: vec![
                Color32::from_rgb(0xFF, 0x14, 0x93),
                Color32::from_rgb(0xFF, 0x69, 0xB4),
                Color32::from_rgb(0xFF, 0xD7, 0x00),
            ],
            min_size: 1.0,
            max_size: 4.0,
            decay: 0.01,
            shrink: 0.99,
            cap: 100,
        }
    }
}

/// Particle bursts emitted by pointer input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub start_burst: usize,
    pub start_speed: f32,
    pub move_burst: usize,
    pub move_speed: f32,
    /// Emit on every n-th move event
    pub move_emit_stride: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            start_burst: 6,
            start_speed: 2.0,
            move_burst: 1,
            move_speed: 1.0,
            move_emit_stride: 2,
        }
    }
}

/// All tunables of the canvas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields fall back to defaults
pub struct CanvasConfig {
    pub paper: PaperConfig,
    pub ink: InkConfig,
    pub particles: ParticleConfig,
    pub input: InputConfig,
}

impl CanvasConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a JSON config file from disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the config persisted in app storage, or defaults.
    ///
    /// On native builds a file named by [`CONFIG_ENV_VAR`] takes precedence.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            match Self::from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path);
                    return config;
                }
                Err(err) => log::warn!("Ignoring config file {}: {}", path, err),
            }
        }

        let Some(json) = storage.and_then(|storage| storage.get_string(CONFIG_KEY)) else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Stored config is unreadable, using defaults: {}", err);
                Self::default()
            }
        }
    }

    pub fn save(&self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => storage.set_string(CONFIG_KEY, json),
            Err(err) => log::warn!("Failed to save config: {}", err),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let paper = &self.paper;
        if !(paper.line_divisor > 0.0 && paper.margin_divisor > 0.0 && paper.title_divisor > 0.0) {
            return Err(ConfigError::Invalid("layout divisors must be positive".into()));
        }
        if paper.min_line_spacing <= 0.0 {
            return Err(ConfigError::Invalid("min_line_spacing must be positive".into()));
        }
        if paper.speckle_area_per_dot <= 0.0 {
            return Err(ConfigError::Invalid("speckle_area_per_dot must be positive".into()));
        }

        let particles = &self.particles;
        if particles.cap == 0 {
            return Err(ConfigError::Invalid("particle cap must be at least 1".into()));
        }
        if !(particles.decay > 0.0 && particles.decay <= 1.0) {
            return Err(ConfigError::Invalid(format!("decay {} is outside (0, 1]", particles.decay)));
        }
        if !(particles.shrink > 0.0 && particles.shrink <= 1.0) {
            return Err(ConfigError::Invalid(format!("shrink {} is outside (0, 1]", particles.shrink)));
        }
        if particles.palette.is_empty() {
            return Err(ConfigError::Invalid("particle palette is empty".into()));
        }
        if particles.min_size > particles.max_size {
            return Err(ConfigError::Invalid("particle min_size exceeds max_size".into()));
        }

        if self.input.move_emit_stride == 0 {
            return Err(ConfigError::Invalid("move_emit_stride must be at least 1".into()));
        }
        Ok(())
    }
}
