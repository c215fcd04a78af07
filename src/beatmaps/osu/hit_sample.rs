use crate::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitSample {
    // Hit sample syntax: normalSet:additionSet:index:volume:filename

    /// Sample set of the normal sound.
    pub normal_set: i32,
    /// Sample set of the whistle, finish, and clap sounds.
    pub addition_set: i32,
    /// Index of the sample. If this is 0, the timing point's sample index will be used instead.
    pub index: i32,
    /// Volume of the sample from 1 to 100. If this is 0, the timing point's volume will be used instead.
    pub volume: i32,
    /// Custom filename of the addition sound.
    pub filename: Option<String>,
}
impl HitSample {
    /// read the colon separated components of a hit sample.
    /// 
    /// components which are missing or empty fall back to their defaults
    pub fn from_parts<'a>(mut parts: impl Iterator<Item = &'a str>) -> ManiaResult<Self> {
        fn read_val<T>(part: Option<&str>) -> ManiaResult<T>
        where 
            T: std::str::FromStr + Default,
            ManiaError: From<T::Err>
        {
            match part.map(str::trim) {
                None | Some("") => Ok(T::default()),
                Some(s) => Ok(s.parse()?),
            }
        }

        Ok(Self {
            normal_set: read_val(parts.next())?,
            addition_set: read_val(parts.next())?,
            index: read_val(parts.next())?,
            volume: read_val(parts.next())?,
            filename: parts.next().filter(|s| !s.is_empty()).map(ToOwned::to_owned),
        })
    }

    pub fn from_str(str: Option<&str>) -> ManiaResult<Self> {
        match str {
            None => Ok(Self::default()),
            Some(str) => Self::from_parts(str.split(':')),
        }
    }

    /// like [`HitSample::from_parts`], but a bad sample only costs the sample, not the object
    pub fn from_parts_or_default<'a>(parts: impl Iterator<Item = &'a str>, line: &str) -> Self {
        Self::from_parts(parts).unwrap_or_else(|e| {
            warn!("error parsing hit sample, using defaults: {e} (line: {line})");
            Self::default()
        })
    }
}
