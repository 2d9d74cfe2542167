use std::path::PathBuf;
use std::process;

use brine_bake::bake::{self, BakeSettings};
use brine_bake::error::BakeError;
use brine_bake::report::{self, BakeReport};
use brine_core::config::WaterConfig;

struct Args {
    config_path: Option<PathBuf>,
    output_path: PathBuf,
    report_path: Option<PathBuf>,
    settings: BakeSettings,
}

fn print_usage() {
    eprintln!("Usage: normal-bake [OPTIONS]");
    eprintln!("  --config <path>    Water config RON (default: built-in look)");
    eprintln!("  --size <n>         Texture edge in texels (default: 256)");
    eprintln!("  --scale <f>        Gradient scale (default: 4.0)");
    eprintln!("  --time <f>         Animation time to bake (default: 0.0)");
    eprintln!("  --output <path>    Raw RGBA8 output (default: water_normal.rgba)");
    eprintln!("  --report <path>    Save a JSON bake report");
}

fn next_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, BakeError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| BakeError::Argument(format!("{flag} needs a value")))
}

fn parse_num<T: std::str::FromStr>(value: &str, flag: &str) -> Result<T, BakeError> {
    value
        .parse()
        .map_err(|_| BakeError::Argument(format!("invalid {flag} value '{value}'")))
}

fn parse_args(args: &[String]) -> Result<Args, BakeError> {
    let mut parsed = Args {
        config_path: None,
        output_path: PathBuf::from("water_normal.rgba"),
        report_path: None,
        settings: BakeSettings::default(),
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                parsed.config_path = Some(PathBuf::from(next_value(args, &mut i, "--config")?));
            }
            "--size" => {
                parsed.settings.size = parse_num(next_value(args, &mut i, "--size")?, "--size")?;
            }
            "--scale" => {
                parsed.settings.scale =
                    parse_num(next_value(args, &mut i, "--scale")?, "--scale")?;
            }
            "--time" => {
                parsed.settings.time = parse_num(next_value(args, &mut i, "--time")?, "--time")?;
            }
            "--output" => {
                parsed.output_path = PathBuf::from(next_value(args, &mut i, "--output")?);
            }
            "--report" => {
                parsed.report_path = Some(PathBuf::from(next_value(args, &mut i, "--report")?));
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => return Err(BakeError::Argument(format!("unknown argument: {other}"))),
        }
        i += 1;
    }
    Ok(parsed)
}

fn run(args: Args) -> Result<(), BakeError> {
    let config = match &args.config_path {
        Some(path) => {
            log::info!("Loading water config from {}", path.display());
            WaterConfig::from_ron_str(&std::fs::read_to_string(path)?)?
        }
        None => WaterConfig::default(),
    };

    let (map, texels) = bake::bake(&args.settings, &config)?;
    bake::write_texels(&args.output_path, &texels)?;
    log::info!(
        "Wrote {} texels to {}",
        texels.len(),
        args.output_path.display()
    );

    let summary = BakeReport::from_map(&map, &args.settings, &config);
    println!("{}", report::format_markdown(&summary));

    if let Some(path) = &args.report_path {
        report::save_report(path, &summary)?;
        log::info!("Saved bake report to {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let argv: Vec<String> = std::env::args().collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        log::error!("Bake failed: {e}");
        process::exit(1);
    }
}
