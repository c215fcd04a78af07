mod decode_cli;

pub use decode_cli::*;
