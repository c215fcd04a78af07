mod mania_error;
mod beatmap_error;

pub use mania_error::*;
pub use beatmap_error::*;

