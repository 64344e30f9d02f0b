pub mod config;
pub mod constants;
pub mod engine;
pub mod lifecycle;
pub mod magnetic;
pub mod parallax;
pub mod particles;
pub mod pool;
pub mod registry;
pub mod reveal;
pub mod ripple;
pub mod scheduler;
pub mod sos;
pub mod styles;
pub mod surface;
pub mod theme;
pub mod trail;

pub use config::*;
pub use engine::Engine;
pub use lifecycle::{NoticeRules, NoticeState, SubmitGuard};
pub use magnetic::{magnetic_offset, CardGlow, MagneticField};
pub use parallax::{parallax_style, ParallaxController};
pub use particles::{ParticleDescriptor, ParticleField};
pub use pool::EffectPool;
pub use registry::TargetRegistry;
pub use reveal::{IntersectionEntry, RevealKind, RevealObserver, Typewriter};
pub use ripple::{ripple_geometry, RippleEmitter, RippleGeometry};
pub use scheduler::FrameScheduler;
pub use surface::*;
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemeController};
pub use trail::{PointerTrail, TrailPoint};
