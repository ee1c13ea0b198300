mod engine;
mod input;
mod results;
mod target;

pub use engine::*;
pub use input::*;
pub use results::*;
pub use target::*;
