mod io;
mod errors;
mod helpers;

pub use io::*;
pub use errors::*;
pub use helpers::*;
