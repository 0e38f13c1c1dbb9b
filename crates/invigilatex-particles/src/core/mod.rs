pub mod rng;
pub mod particle;
pub mod field;
pub mod frame_loop;
