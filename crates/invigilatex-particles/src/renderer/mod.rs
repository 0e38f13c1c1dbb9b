pub mod traits;
pub mod draw_list;
pub mod instance;

// Re-export key types for convenient access
pub use traits::Surface;
pub use draw_list::{DrawList, DrawCommand};
pub use instance::{InstanceBuffer, ParticleInstance, LineInstance};
