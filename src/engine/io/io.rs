use crate::prelude::*;
use std::fs::File;
use std::io::{ self, Read };
use std::time::Instant;

/// line terminator used by .osu files. lines ending in a bare `\n` are not split
pub const LINE_TERMINATOR: &str = "\r\n";
/// prefix of a comment line
pub const COMMENT_PREFIX: &str = "//";


pub struct Io;
impl Io {

    /// read a file into bytes
    pub fn read_file(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
        let time = Instant::now();
        let mut bytes = Vec::new();

        // the handle is dropped at the end of this block, including on error
        {
            let mut f = File::open(&path)?;
            f.read_to_end(&mut bytes)?;
        }

        let duration = time.elapsed().as_secs_f32() * 1000.0;
        if duration > 1000.0 { warn!("took {duration:.2}ms to load file bytes {}", path.as_ref().display()); }

        Ok(bytes)
    }

    // check if file or folder exists
    pub fn exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists()
    }

    /// read a file as utf8 text, failing with [`ManiaError::FileNotFound`] if it doesnt exist
    pub fn read_beatmap_file(path: impl AsRef<Path>) -> ManiaResult<String> {
        let path = path.as_ref();
        if !Self::exists(path) {
            return Err(ManiaError::FileNotFound(path.display().to_string()));
        }

        let bytes = Self::read_file(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(text)
    }

    /// split file contents into the lines worth looking at.
    /// 
    /// empty lines and comments are dropped
    pub fn content_lines(contents: &str) -> impl Iterator<Item = &str> {
        contents
            .split(LINE_TERMINATOR)
            .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
    }
}
