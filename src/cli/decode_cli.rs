use crate::prelude::*;

pub const USAGE: &str = "Usage: osu-mania-parser <beatmap_file> [--compact] [--metadata-only] [--summary]";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeArgs {
    pub map: Option<String>,
    /// single line json instead of indented
    pub compact: bool,
    pub metadata_only: bool,
    /// print one line about the map instead of json
    pub summary: bool,
}
impl DecodeArgs {
    pub fn from_args(args: &mut impl Iterator<Item = String>) -> Self {
        let mut data = Self::default();

        while let Some(other_arg) = args.next() {
            match &*other_arg {
                "--compact" => data.compact = true,
                "--metadata-only" => data.metadata_only = true,
                "--summary" => data.summary = true,
                flag if flag.starts_with("--") => warn!("ignoring unknown flag '{flag}'"),

                path if data.map.is_none() => data.map = Some(path.to_owned()),
                extra => warn!("ignoring extra argument '{extra}'"),
            }
        }

        data
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions { metadata_only: self.metadata_only }
    }
}

/// decode the map named in `args` and render it for printing
pub fn decode_cli(args: &DecodeArgs) -> ManiaResult<String> {
    let Some(path) = &args.map else {
        return Err(ManiaError::MissingArgument("beatmap_file"));
    };

    let beatmap = if args.metadata_only {
        Beatmap::load_metadata(path)?
    } else {
        Beatmap::load(path)?
    };

    render(&beatmap, args)
}

pub fn render(beatmap: &Beatmap, args: &DecodeArgs) -> ManiaResult<String> {
    if args.summary {
        return Ok(format!(
            "{} | {}K | {}-{} bpm | {} notes, {} holds | {}ms",
            beatmap.version_string(),
            beatmap.key_count,
            beatmap.min_bpm,
            beatmap.max_bpm,
            beatmap.nb_notes,
            beatmap.nb_holds,
            beatmap.duration(),
        ));
    }

    Ok(if args.compact {
        serde_json::to_string(beatmap)?
    } else {
        serde_json::to_string_pretty(beatmap)?
    })
}
