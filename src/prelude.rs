// std imports
pub use std::path::Path;

// serde imports
pub use serde::{ Serialize, Deserialize };

// crate imports
pub use crate::engine::*;
pub use crate::beatmaps::*;
