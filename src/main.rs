use log::LevelFilter;
use osu_mania_parser::cli::{ DecodeArgs, USAGE, decode_cli };

fn main() {
    // RUST_LOG overrides the default
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = DecodeArgs::from_args(&mut std::env::args().skip(1));
    if args.map.is_none() {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }

    match decode_cli(&args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
