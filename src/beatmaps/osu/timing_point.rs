use crate::prelude::*;
use std::str::FromStr;

/// kiai bit of the effects field
const EFFECT_KIAI: i32 = 0b1;
/// omit first barline bit of the effects field
const EFFECT_OMIT_FIRST_BARLINE: i32 = 0b100;

///https://osu.ppy.sh/wiki/en/osu%21_File_Formats/Osu_%28file_format%29#timing-points
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimingPoint {
    /// Start time of the timing section, in milliseconds from the beginning of the beatmap's audio. The end of the timing section is the next timing point's time (or never, if this is the last timing point).
    pub time: i32,
    /// Tempo of this section. Only present when the point defines a tempo (positive beat length)
    pub bpm: Option<u32>,
    /// Scroll velocity multiplier. Always 1.0 for tempo points
    pub velocity: f64,
    /// Amount of beats in a measure. Inherited timing points ignore this property.
    pub timing_signature: i32,

    // samples

    /// Default sample set for hit objects (0 = beatmap default, 1 = normal, 2 = soft, 3 = drum)
    pub sample_set: i32,
    /// Custom sample index for hit objects. 0 indicates osu!'s default hitsounds
    pub sample_index: i32,
    /// Volume percentage for hit objects
    pub volume: i32,

    /// Whether or not the timing point is uninherited, as written in the file.
    /// `bpm` and `velocity` are derived from the sign of the beat length instead
    pub uninherited: bool,

    // effects

    /// Whether or not kiai time is enabled
    pub kiai_time: bool,
    /// Whether or not the first barline is omitted in osu!mania
    pub omit_first_bar_line: bool,
}
impl TimingPoint {
    /// an inherited point only changes the scroll velocity
    pub fn is_inherited(&self) -> bool {
        self.bpm.is_none()
    }

    /// duration of a beat in ms, derived from the rounded bpm
    pub fn beat_length(&self) -> Option<f64> {
        self.bpm.map(|bpm| 60_000.0 / bpm as f64)
    }
}

impl FromStr for TimingPoint {
    type Err = ManiaError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        // time,beatLength,meter,sampleSet,sampleIndex,volume,uninherited,effects
        let mut fields = LineFields::new(line);
        let time = fields.next::<i32>("time")?;
        let beat_length = fields.next::<f64>("beat_length")?;
        let timing_signature = fields.next::<i32>("meter")?;
        let sample_set = fields.next::<i32>("sample_set")?;
        let sample_index = fields.next::<i32>("sample_index")?;
        let volume = fields.next::<i32>("volume")?;
        let uninherited = fields.next_str("uninherited")? == "1";
        let effects = fields.next::<i32>("effects")?;

        let (bpm, velocity) = if beat_length > 0.0 {
            let bpm = (60_000.0 / beat_length).round_ties_even() as u32;
            // a stupidly long beat can round down to nothing
            (Some(bpm).filter(|bpm| *bpm != 0), 1.0)
        } else if beat_length == 0.0 {
            return Err(BeatmapError::ZeroBeatLength.into());
        } else {
            (None, 100.0 / beat_length.abs())
        };

        Ok(Self {
            time,
            bpm,
            velocity,
            timing_signature,

            sample_set,
            sample_index,
            volume,

            uninherited,
            kiai_time: (effects & EFFECT_KIAI) != 0,
            omit_first_bar_line: (effects & EFFECT_OMIT_FIRST_BARLINE) != 0,
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninherited_point() {
        let tp = "320,789.473684210526,4,2,1,60,1,0".parse::<TimingPoint>().unwrap();
        assert_eq!(tp.time, 320);
        assert_eq!(tp.bpm, Some(76));
        assert_eq!(tp.velocity, 1.0);
        assert_eq!(tp.timing_signature, 4);
        assert_eq!(tp.sample_set, 2);
        assert_eq!(tp.sample_index, 1);
        assert_eq!(tp.volume, 60);
        assert!(tp.uninherited);
        assert!(!tp.kiai_time);
        assert!(!tp.omit_first_bar_line);
        assert!(!tp.is_inherited());
    }

    #[test]
    fn inherited_point() {
        let tp = "1000,-50,4,2,0,40,0,0".parse::<TimingPoint>().unwrap();
        assert_eq!(tp.bpm, None);
        assert_eq!(tp.velocity, 2.0);
        assert!(!tp.uninherited);
        assert!(tp.is_inherited());
        assert_eq!(tp.beat_length(), None);
    }

    #[test]
    fn effects_bits() {
        let tp = "0,500,4,1,0,100,1,1".parse::<TimingPoint>().unwrap();
        assert!(tp.kiai_time);
        assert!(!tp.omit_first_bar_line);

        let tp = "0,500,4,1,0,100,1,4".parse::<TimingPoint>().unwrap();
        assert!(!tp.kiai_time);
        assert!(tp.omit_first_bar_line);

        let tp = "0,500,4,1,0,100,1,5".parse::<TimingPoint>().unwrap();
        assert!(tp.kiai_time);
        assert!(tp.omit_first_bar_line);

        // bit 3 (taiko barline) is not the omit flag
        let tp = "0,500,4,1,0,100,1,8".parse::<TimingPoint>().unwrap();
        assert!(!tp.omit_first_bar_line);
    }

    #[test]
    fn sign_of_beat_length_beats_uninherited_flag() {
        // says inherited, but has a positive beat length
        let tp = "0,500,4,1,0,100,0,0".parse::<TimingPoint>().unwrap();
        assert!(!tp.uninherited);
        assert_eq!(tp.bpm, Some(120));
        assert_eq!(tp.velocity, 1.0);

        // says uninherited, but has a negative beat length
        let tp = "0,-200,4,1,0,100,1,0".parse::<TimingPoint>().unwrap();
        assert!(tp.uninherited);
        assert_eq!(tp.bpm, None);
        assert_eq!(tp.velocity, 0.5);
    }

    #[test]
    fn bpm_rounds_half_to_even() {
        assert_eq!("0,480,4,1,0,100,1,0".parse::<TimingPoint>().unwrap().bpm, Some(125));
        // 60000 / 24000 = 2.5 -> 2
        assert_eq!("0,24000,4,1,0,100,1,0".parse::<TimingPoint>().unwrap().bpm, Some(2));
        // 60000 / 40000 = 1.5 -> 2
        assert_eq!("0,40000,4,1,0,100,1,0".parse::<TimingPoint>().unwrap().bpm, Some(2));
    }

    #[test]
    fn tiny_bpm_is_absent() {
        let tp = "0,1000000,4,1,0,100,1,0".parse::<TimingPoint>().unwrap();
        assert_eq!(tp.bpm, None);
        assert_eq!(tp.velocity, 1.0);
    }

    #[test]
    fn wide_sample_fields() {
        let tp = "0,500,4,-1,1000,300,1,0".parse::<TimingPoint>().unwrap();
        assert_eq!(tp.sample_set, -1);
        assert_eq!(tp.sample_index, 1000);
        assert_eq!(tp.volume, 300);
    }

    #[test]
    fn zero_beat_length_is_an_error() {
        let err = "0,0,4,1,0,100,0,0".parse::<TimingPoint>().unwrap_err();
        assert!(matches!(err, ManiaError::Beatmap(BeatmapError::ZeroBeatLength)));
    }

    #[test]
    fn malformed_lines() {
        assert!(matches!(
            "0,abc,4,1,0,100,1,0".parse::<TimingPoint>(),
            Err(ManiaError::ParseFloat(_))
        ));
        assert!(matches!(
            "0,500,4,1,0,100,1".parse::<TimingPoint>(),
            Err(ManiaError::Beatmap(BeatmapError::MissingField { field: "effects", .. }))
        ));
    }
}
