use crate::prelude::*;
use std::str::FromStr;

/// type flag bits
const TYPE_NOTE: u32 = 1 << 0;
const TYPE_NEW_COMBO: u32 = 1 << 2;
const TYPE_COMBO_SKIP: u32 = 0b11100;
const TYPE_HOLD: u32 = 1 << 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all="lowercase")]
pub enum HitObjectType {
    Note,
    Hold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all="lowercase")]
pub enum HitSound {
    Normal,
    Whistle,
    Finish,
    Clap,
}
impl HitSound {
    /// in flag order
    pub const ALL: [HitSound; 4] = [HitSound::Normal, HitSound::Whistle, HitSound::Finish, HitSound::Clap];

    /// this sound's bit in the hitsound field
    pub fn flag(&self) -> u32 {
        match self {
            Self::Normal => 0b1,
            Self::Whistle => 0b10,
            Self::Finish => 0b100,
            Self::Clap => 0b1000,
        }
    }
}

/// the sounds played when an object is hit. never empty
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from="Vec<HitSound>", into="Vec<HitSound>")]
pub struct HitSounds(Vec<HitSound>);
impl HitSounds {
    /// decode the hitsound bitmask. no bits set means a plain normal sound
    pub fn from_flags(flags: u32) -> Self {
        let mut sounds = HitSound::ALL
            .into_iter()
            .filter(|s| flags & s.flag() != 0)
            .collect::<Vec<_>>();

        if sounds.is_empty() {
            sounds.push(HitSound::Normal)
        }

        Self(sounds)
    }

    pub fn contains(&self, sound: HitSound) -> bool {
        self.0.contains(&sound)
    }

    pub fn as_slice(&self) -> &[HitSound] {
        &self.0
    }
}
impl Default for HitSounds {
    fn default() -> Self {
        Self(vec![HitSound::Normal])
    }
}
impl TryFrom<Vec<HitSound>> for HitSounds {
    type Error = String;

    fn try_from(sounds: Vec<HitSound>) -> Result<Self, Self::Error> {
        if sounds.is_empty() {
            return Err("hit sound list cannot be empty".to_owned());
        }
        Ok(Self(sounds))
    }
}
impl From<HitSounds> for Vec<HitSound> {
    fn from(sounds: HitSounds) -> Self {
        sounds.0
    }
}


/// https://osu.ppy.sh/wiki/en/osu%21_File_Formats/Osu_%28file_format%29#hit-objects
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HitObject {
    #[serde(rename="type")]
    pub kind: HitObjectType,
    pub hit_sound: HitSounds,
    pub new_combo: bool,
    /// how many combo colours to skip, 0-7
    pub combo_colors_skipped: u8,

    /// Position in osu! pixels of the object. the x position decides the column
    pub x: i32,
    /// Position in osu! pixels of the object.
    pub y: i32,
    /// Time when the object is to be hit, in milliseconds from the beginning of the beatmap's audio.
    pub time: i32,
    /// Release time of a hold. same as `time` for notes
    pub end_time: i32,

    pub hit_sample: HitSample,
}
impl HitObject {
    pub fn is_hold(&self) -> bool {
        self.kind == HitObjectType::Hold
    }

    /// how long the object has to be held for. 0 for notes
    pub fn duration(&self) -> i32 {
        self.end_time - self.time
    }
}

impl FromStr for HitObject {
    type Err = ManiaError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // x,y,time,type,hitSound,objectParams,hitSample
        let mut fields = LineFields::new(line);
        let x = fields.next::<i32>("x")?;
        let y = fields.next::<i32>("y")?;
        let time = fields.next::<i32>("time")?;
        let type_flags = fields.next::<u32>("type")?;

        // read type, lowest bit first:
        // 0 = note
        // 2 = new combo
        // 2..=4 = combo color skip count
        // 7 = mania hold
        let kind = if (type_flags & TYPE_NOTE) != 0 {
            HitObjectType::Note
        } else if (type_flags & TYPE_HOLD) != 0 {
            HitObjectType::Hold
        } else {
            return Err(BeatmapError::UnknownHitObjectType(type_flags).into());
        };

        let new_combo = (type_flags & TYPE_NEW_COMBO) != 0;
        let combo_colors_skipped = ((type_flags & TYPE_COMBO_SKIP) / 4) as u8;

        let hit_sound = HitSounds::from_flags(fields.next::<u32>("hit_sound")?);

        let (end_time, hit_sample) = match kind {
            HitObjectType::Note => {
                let parts = fields.optional().unwrap_or_default().split(':');
                (time, HitSample::from_parts_or_default(parts, line))
            }
            HitObjectType::Hold => {
                // endTime:hitSample
                let mut parts = fields.next_str("end_time")?.split(':');
                let end_time = parse_trimmed::<i32>(parts.next().unwrap_or_default())?;
                (end_time, HitSample::from_parts_or_default(parts, line))
            }
        };

        Ok(Self {
            kind,
            hit_sound,
            new_combo,
            combo_colors_skipped,
            x,
            y,
            time,
            end_time,
            hit_sample,
        })
    }
}
