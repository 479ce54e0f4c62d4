pub use animation::*;
pub use controls::*;
pub use error::*;
pub use input::*;
pub use options::*;
pub use output::*;
pub use timer::{Scheduler, TaskHandle};

mod animation;
mod controls;
mod error;
mod input;
mod options;
mod output;
#[cfg(test)]
mod testing;
mod timer;
#[cfg(feature = "web")]
pub mod web;
