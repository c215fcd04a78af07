use std::fmt::Display;

#[derive(Clone, Debug, PartialEq)]
pub enum BeatmapError {
    /// `Mode` in [General] was set to something other than mania (3). contains the raw value
    InvalidGameMode(String),
    /// neither the note nor the hold bit was set. contains the raw type flags
    UnknownHitObjectType(u32),
    /// an inherited timing point with a beat length of 0, which has no velocity
    ZeroBeatLength,
    /// a comma separated line was missing a required field
    MissingField {
        line: String,
        field: &'static str,
    },
}

impl Display for BeatmapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGameMode(mode) => write!(f, "beatmap's game mode is not set to osu!mania (got '{mode}')"),
            Self::UnknownHitObjectType(flags) => write!(f, "unknown hit object type (type flags {flags})"),
            Self::ZeroBeatLength => write!(f, "timing point has a beat length of 0"),
            Self::MissingField { line, field } => write!(f, "missing field '{field}' in line '{line}'"),
        }
    }
}
