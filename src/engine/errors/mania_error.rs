use std::fmt::Display;
use std::io::Error as IOError;
use std::num::{ ParseFloatError, ParseIntError };

use serde_json::Error as JsonError;

use super::*;

pub type ManiaResult<T=()> = Result<T, ManiaError>;

#[derive(Debug)]
pub enum ManiaError {
    Beatmap(BeatmapError),
    IO(IOError),
    Serde(JsonError),

    ParseInt(ParseIntError),
    ParseFloat(ParseFloatError),

    /// contains the path that was looked up
    FileNotFound(String),
    MissingArgument(&'static str),
}

impl Display for ManiaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::Beatmap(e) => write!(f, "{e}"),
            Self::IO(e) => write!(f, "{e}"),
            Self::Serde(e) => write!(f, "{e}"),
            Self::ParseInt(e) => write!(f, "error parsing integer: {e}"),
            Self::ParseFloat(e) => write!(f, "error parsing float: {e}"),
            Self::FileNotFound(path) => write!(f, "file at {path} does not exist"),
            Self::MissingArgument(arg) => write!(f, "missing argument: {arg}"),
        }
    }
}
impl std::error::Error for ManiaError {}


impl From<BeatmapError> for ManiaError {
    fn from(e: BeatmapError) -> Self {Self::Beatmap(e)}
}
impl From<IOError> for ManiaError {
    fn from(e: IOError) -> Self {Self::IO(e)}
}
impl From<JsonError> for ManiaError {
    fn from(e: JsonError) -> Self {Self::Serde(e)}
}
impl From<ParseIntError> for ManiaError {
    fn from(e: ParseIntError) -> Self {Self::ParseInt(e)}
}
impl From<ParseFloatError> for ManiaError {
    fn from(e: ParseFloatError) -> Self {Self::ParseFloat(e)}
}
