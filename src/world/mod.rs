//! The board and the per-turn view creatures act through

pub mod board;
pub mod view;

pub use board::World;
pub use view::{ActiveView, WorldView};
