// config.rs - Field tuning and palette
//
// Defaults reproduce the portfolio page background. The modal preset only
// thins the field out.

/// Particle count for the page background.
pub const DEFAULT_COUNT: usize = 60;
/// Particle count for the background behind the project modal.
pub const MODAL_COUNT: usize = 40;

const INTERACTION_RADIUS: f32 = 150.0;
const MAX_REPULSION: f32 = 2.0;
const SPEED: f32 = 0.15;
const SEED: u64 = 0xDEADBEEF;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb`
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `rgba(r, g, b, a)`
    pub fn rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Gradient stop at the surface midpoint (dark navy)
    pub inner: Rgb,
    /// Gradient stop at the far radius (near black)
    pub outer: Rgb,
    /// Particle fill, alpha comes from each particle
    pub accent: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            inner: Rgb::new(0x0f, 0x17, 0x2a),
            outer: Rgb::new(0x03, 0x07, 0x12),
            accent: Rgb::new(56, 189, 248),
        }
    }
}

/// What happens to the pointer push once a particle has been drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repulsion {
    /// Displacement only moves the drawn circle; stored position is untouched,
    /// so particles spring back once the pointer leaves.
    #[default]
    Transient,
    /// Displacement is written into the stored position.
    Persistent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    pub interaction_radius: f32,
    pub max_repulsion: f32,
    /// Circle radius, sampled in [min, max)
    pub radius_range: (f32, f32),
    /// Fill alpha, sampled in [min, max)
    pub opacity_range: (f32, f32),
    /// Per-axis velocity bound, sampled in [-speed, speed)
    pub speed: f32,
    pub repulsion: Repulsion,
    pub palette: Palette,
    pub seed: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            interaction_radius: INTERACTION_RADIUS,
            max_repulsion: MAX_REPULSION,
            radius_range: (0.5, 2.5),
            opacity_range: (0.1, 0.6),
            speed: SPEED,
            repulsion: Repulsion::default(),
            palette: Palette::default(),
            seed: SEED,
        }
    }
}

impl FieldConfig {
    pub fn page() -> Self {
        Self::default()
    }

    pub fn modal() -> Self {
        Self::default().with_count(MODAL_COUNT)
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_repulsion(mut self, repulsion: Repulsion) -> Self {
        self.repulsion = repulsion;
        self
    }

    pub fn with_interaction(mut self, radius: f32, max_repulsion: f32) -> Self {
        self.interaction_radius = radius;
        self.max_repulsion = max_repulsion;
        self
    }
}
