//! Darwin - a grid of programmable creatures that hop, turn and infect

pub mod core;
pub mod entity;
pub mod program;
pub mod render;
pub mod scenario;
pub mod simulation;
pub mod world;
