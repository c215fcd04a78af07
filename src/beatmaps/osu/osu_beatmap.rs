use crate::prelude::*;

/// `Mode` value for osu!mania
const MANIA_MODE: &str = "3";
/// width of the playfield in osu! pixels
const PLAYFIELD_WIDTH: f32 = 512.0;

/// a decoded osu!mania beatmap
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Beatmap {
    // meta info
    /// Romanised song title
    pub title: String,
    pub title_unicode: String,
    /// Romanised artist name
    pub artist: String,
    pub artist_unicode: String,
    pub creator: String,
    /// Difficulty name
    pub version: String,
    pub source: String,
    /// in file order, duplicates and all
    pub tags: Vec<String>,
    pub map_id: i32,
    pub mapset_id: i32,
    /// relative to the beatmap's folder
    pub audio_filename: String,
    /// preview offset in ms after audio start
    pub preview_time: i32,

    pub key_count: u32,
    pub hp_drain: f32,
    /// overall difficulty
    pub difficulty: f32,

    /// the `osu file format vN` header
    pub format_version: u8,
    /// md5 of the file contents
    pub beatmap_hash: Md5Hash,

    // derived while reading
    /// distinct x positions of every hit object, ascending
    pub key_positions: Vec<i32>,
    pub min_bpm: u32,
    pub max_bpm: u32,
    pub nb_notes: usize,
    pub nb_holds: usize,

    pub timing_points: Vec<TimingPoint>,
    pub hit_objects: Vec<HitObject>,
}
impl Beatmap {
    pub fn load(file_path: impl AsRef<Path>) -> ManiaResult<Beatmap> {
        Self::base_loader(file_path, ParseOptions::default())
    }

    /// read only the metadata sections, timing points and hit objects are left empty
    pub fn load_metadata(file_path: impl AsRef<Path>) -> ManiaResult<Beatmap> {
        Self::base_loader(file_path, ParseOptions::metadata_only())
    }

    /// loader for both metadata only and full map
    fn base_loader(file_path: impl AsRef<Path>, options: ParseOptions) -> ManiaResult<Beatmap> {
        let file_path = file_path.as_ref();
        let contents = Io::read_beatmap_file(file_path)?;
        let beatmap = Self::parse_with_options(&contents, options)?;

        info!(
            "[{}] loaded '{}': {} notes, {} holds, {} timing points", 
            file_path.display(),
            beatmap.version_string(),
            beatmap.nb_notes,
            beatmap.nb_holds,
            beatmap.timing_points.len()
        );

        Ok(beatmap)
    }

    pub fn parse_str(contents: &str) -> ManiaResult<Beatmap> {
        Self::parse_with_options(contents, ParseOptions::default())
    }

    pub fn parse_with_options(contents: &str, options: ParseOptions) -> ManiaResult<Beatmap> {
        let mut builder = BeatmapBuilder::new();
        builder.map.beatmap_hash = md5(contents);

        let mut current_area = BeatmapSection::Version;

        for line in Io::content_lines(contents) {
            // check for section change
            if let Some(section) = BeatmapSection::from_header(line) {
                debug!("entering section {section:?} ({line})");
                current_area = section;
                continue;
            }

            // not a change in area, check line
            match current_area {
                BeatmapSection::Version => read_version(&mut builder.map, line),
                BeatmapSection::General => read_general(&mut builder.map, line)?,
                BeatmapSection::Metadata => read_metadata(&mut builder.map, line)?,
                BeatmapSection::Difficulty => read_difficulty(&mut builder.map, line)?,

                BeatmapSection::TimingPoints if !options.metadata_only => {
                    let point = line.parse::<TimingPoint>()?;
                    trace!("timing point: {point:?}");
                    builder.add_timing_point(point);
                }
                BeatmapSection::HitObjects if !options.metadata_only => {
                    let obj = line.parse::<HitObject>()?;
                    trace!("hit object: {obj:?}");
                    builder.add_hit_object(obj);
                }

                BeatmapSection::TimingPoints
                | BeatmapSection::HitObjects
                | BeatmapSection::Other => {}
            }
        }

        Ok(builder.finish())
    }


    /// the timing point in effect at `time`.
    /// 
    /// times before the first point get the first point. `None` if there are no timing points at all
    pub fn get_active_timing_point(&self, time: i32) -> Option<&TimingPoint> {
        self.timing_points
            .iter()
            .rev()
            .find(|tp| tp.time <= time)
            .or_else(|| self.timing_points.first())
    }

    /// which column an x position lands in. `None` if the key count is unknown
    pub fn column_of(&self, x: i32) -> Option<u32> {
        if self.key_count == 0 { return None }

        let column = (x as f32 * self.key_count as f32 / PLAYFIELD_WIDTH).floor().max(0.0) as u32;
        Some(column.min(self.key_count - 1))
    }

    /// time in ms from the first hit to the last release
    pub fn duration(&self) -> i32 {
        let Some(start) = self.hit_objects.iter().map(|o| o.time).min() else { return 0 };
        let end = self.hit_objects.iter().map(|o| o.end_time).max().unwrap_or(start);
        end - start
    }

    pub fn has_bpm_changes(&self) -> bool {
        self.min_bpm != self.max_bpm
    }

    /// get the title string with the version
    pub fn version_string(&self) -> String {
        let artist = if self.artist.is_empty() {&self.artist_unicode} else {&self.artist};
        let title = if self.title.is_empty() {&self.title_unicode} else {&self.title};
        format!("{} - {} [{}]", artist, title, self.version)
    }
}


fn read_version(map: &mut Beatmap, line: &str) {
    let header = line.trim_start_matches('\u{feff}').trim();
    match header.strip_prefix("osu file format v").map(str::parse::<u8>) {
        Some(Ok(v)) => map.format_version = v,
        Some(Err(e)) => warn!("error parsing beatmap version: {e} (map will still load)"),
        None => warn!("unexpected line before the first section: '{line}'"),
    }
}

fn read_general(map: &mut Beatmap, line: &str) -> ManiaResult {
    let mut split = line.split(": ");
    let key = split.next().unwrap_or_default();
    let val = split.next().unwrap_or_default();

    match key {
        "Mode" if val != MANIA_MODE => return Err(BeatmapError::InvalidGameMode(val.to_owned()).into()),
        "PreviewTime" => map.preview_time = parse_trimmed(val)?,
        "AudioFilename" => map.audio_filename = val.to_owned(),
        _ => {}
    }

    Ok(())
}

fn read_metadata(map: &mut Beatmap, line: &str) -> ManiaResult {
    // only the piece between the first and second colon is the value
    let mut split = line.split(':');
    let key = split.next().unwrap_or_default();
    let val = split.next().unwrap_or_default();

    match key {
        "Title" => map.title = val.to_owned(),
        "TitleUnicode" => map.title_unicode = val.to_owned(),
        "Artist" => map.artist = val.to_owned(),
        "ArtistUnicode" => map.artist_unicode = val.to_owned(),
        "Creator" => map.creator = val.to_owned(),
        "Version" => map.version = val.to_owned(),
        "Source" => map.source = val.to_owned(),
        "Tags" => map.tags = val.split(' ').map(ToOwned::to_owned).collect(),
        "BeatmapID" => map.map_id = parse_trimmed(val)?,
        "BeatmapSetID" => map.mapset_id = parse_trimmed(val)?,
        _ => {}
    }

    Ok(())
}

fn read_difficulty(map: &mut Beatmap, line: &str) -> ManiaResult {
    let mut split = line.split(':');
    let key = split.next().unwrap_or_default();
    let val = split.next().unwrap_or_default();

    match key {
        "HPDrainRate" => map.hp_drain = parse_trimmed(val)?,
        "CircleSize" => map.key_count = parse_trimmed(val)?,
        "OverallDifficulty" => map.difficulty = parse_trimmed(val)?,
        _ => {}
    }

    Ok(())
}
