//! Animation engine behind the portfolio backdrop.
//!
//! Platform-neutral: no web or GPU APIs. Front ends feed it time, scroll
//! progress and pointer position, and draw the buffers it fills.

pub mod boot;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod field;
pub mod motion;
pub mod pointer;
pub mod scene;
pub mod splash;
pub mod timer;
pub mod topology;
pub mod typewriter;

pub use boot::{BootConfig, BootPhase, BootSequencer, BootState};
pub use config::{EdgeStyle, FieldConfig, MotionParams, Variant};
pub use error::{ConfigError, Result};
pub use field::Particle;
pub use motion::{EdgeVertex, MotionInterpolator, NodeInstance, RenderFrame, SimulationContext};
pub use pointer::{PointerState, ScrollProgress};
pub use scene::Scene;
pub use splash::{NetworkSplash, NetworkSplashConfig, SplashFrame, SplashPhase};
pub use timer::{CompletionHook, TimerId, TimerQueue};
pub use topology::Edge;
pub use typewriter::{Typewriter, TypewriterConfig};
