mod crypto;
mod md5_hash;

pub use crypto::*;
pub use md5_hash::*;
