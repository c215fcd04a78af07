mod line_fields;
mod hit_object;
mod hit_sample;
mod osu_beatmap;
mod timing_point;
mod beatmap_section;

pub(crate) use line_fields::*;
pub use hit_object::*;
pub use hit_sample::*;
pub use osu_beatmap::*;
pub use timing_point::*;
pub use beatmap_section::*;
