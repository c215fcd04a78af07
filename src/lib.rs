#[macro_use] extern crate log;
pub mod cli;
pub mod engine;
pub mod beatmaps;
pub mod prelude;

