pub mod color;
pub mod motion;
pub mod connections;
pub mod render;
