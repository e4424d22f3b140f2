//! Domain models for the nutrikit system.

mod food;
mod log;
mod needs;
mod profile;

pub use food::*;
pub use log::*;
pub use needs::*;
pub use profile::*;
