mod osu;
mod common;

pub use osu::*;
pub use common::*;
