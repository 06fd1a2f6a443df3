pub mod config;
pub mod error;
pub mod types;

pub use config::SimulationConfig;
pub use error::{DarwinError, Result};
pub use types::{Direction, Position, Round};
