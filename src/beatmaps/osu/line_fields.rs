use crate::prelude::*;
use std::str::{ FromStr, Split };

/// walks the comma separated fields of a single line, reporting which field was missing
pub(crate) struct LineFields<'a> {
    line: &'a str,
    split: Split<'a, char>,
}
impl<'a> LineFields<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            line,
            split: line.split(','),
        }
    }

    /// next raw field, erroring if the line has run out
    pub fn next_str(&mut self, field: &'static str) -> ManiaResult<&'a str> {
        self.split.next().ok_or_else(|| BeatmapError::MissingField {
            line: self.line.to_owned(),
            field,
        }.into())
    }

    /// next field, parsed. surrounding whitespace is ignored
    pub fn next<T>(&mut self, field: &'static str) -> ManiaResult<T>
    where 
        T: FromStr,
        ManiaError: From<T::Err>
    {
        Ok(self.next_str(field)?.trim().parse::<T>()?)
    }

    /// next field if there is one
    pub fn optional(&mut self) -> Option<&'a str> {
        self.split.next()
    }
}

/// parse a value that might be surrounded by whitespace
pub(crate) fn parse_trimmed<T>(value: &str) -> ManiaResult<T>
where 
    T: FromStr,
    ManiaError: From<T::Err>
{
    Ok(value.trim().parse::<T>()?)
}
