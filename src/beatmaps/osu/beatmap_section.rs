/// sections of a .osu file we care about
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BeatmapSection {
    /// before the first header, where the format version lives
    Version,
    General,
    Metadata,
    Difficulty,
    TimingPoints,
    HitObjects,
    /// [Editor], [Events], [Colours], etc. lines in these are skipped
    Other,
}
impl BeatmapSection {
    /// check if a line is a section header, ie `[General]`.
    /// 
    /// the name has to be a single alphanumeric token, anything else is a data line
    pub fn from_header(line: &str) -> Option<Self> {
        let name = line.strip_prefix('[')?.strip_suffix(']')?;
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }

        Some(match name {
            "General" => Self::General,
            "Metadata" => Self::Metadata,
            "Difficulty" => Self::Difficulty,
            "TimingPoints" => Self::TimingPoints,
            "HitObjects" => Self::HitObjects,
            _ => Self::Other,
        })
    }
}
