use crate::prelude::*;

/// accumulates a [`Beatmap`] while its file is being read.
/// 
/// nothing else holds the beatmap until [`BeatmapBuilder::finish`] hands it out
#[derive(Default)]
pub struct BeatmapBuilder {
    pub(crate) map: Beatmap,
    /// (min, max) of every bpm seen so far. set by the first tempo point
    bpm_range: Option<(u32, u32)>,
}
impl BeatmapBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_timing_point(&mut self, point: TimingPoint) {
        if let Some(bpm) = point.bpm {
            self.bpm_range = Some(match self.bpm_range {
                None => (bpm, bpm),
                Some((min, max)) => (min.min(bpm), max.max(bpm)),
            });
        }

        self.map.timing_points.push(point);
    }

    pub fn add_hit_object(&mut self, obj: HitObject) {
        match obj.kind {
            HitObjectType::Note => self.map.nb_notes += 1,
            HitObjectType::Hold => self.map.nb_holds += 1,
        }

        if !self.map.key_positions.contains(&obj.x) {
            self.map.key_positions.push(obj.x);
        }

        self.map.hit_objects.push(obj);
    }

    /// current bpm bounds, `(0, 0)` if no tempo point has been added
    pub fn bpm_range(&self) -> (u32, u32) {
        self.bpm_range.unwrap_or_default()
    }

    pub fn finish(mut self) -> Beatmap {
        let (min_bpm, max_bpm) = self.bpm_range();
        self.map.min_bpm = min_bpm;
        self.map.max_bpm = max_bpm;
        self.map.key_positions.sort_unstable();
        self.map
    }
}
