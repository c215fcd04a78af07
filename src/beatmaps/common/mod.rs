mod parse_options;
mod beatmap_builder;

pub use parse_options::*;
pub use beatmap_builder::*;
