pub mod api;
pub mod core;
pub mod input;
pub mod systems;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use crate::api::config::{ParticleConfig, ColorMode, BoundaryMode};
pub use crate::api::error::ConfigError;
pub use crate::api::system::ParticleSystem;
pub use crate::core::particle::Particle;
pub use crate::core::field::ParticleField;
pub use crate::core::rng::Rng;
pub use crate::core::frame_loop::{FrameLoop, LoopState};
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::input::pointer::PointerState;
pub use crate::renderer::traits::Surface;
pub use crate::renderer::draw_list::{DrawList, DrawCommand};
pub use crate::renderer::instance::{InstanceBuffer, ParticleInstance, LineInstance};
pub use crate::systems::color::Rgba;
pub use crate::systems::connections::{Connection, connection_alpha, find_connections};
pub use crate::systems::motion::repulsion;
