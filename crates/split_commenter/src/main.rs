use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use split_commenter::{make_split_comment, make_split_comment3, AppConfig, BannerShape, LineBuffer};

fn main() -> Result<()> {
    let config = parse_args();
    init_logging(config.verbose);
    debug!("{:?}", config);

    if config.in_place && config.file.is_none() {
        bail!("--in-place requires --file");
    }

    let text = read_input(config.file.as_ref())?;
    let mut buffer = LineBuffer::from_text(&text, config.row)?;

    let provider = config.provider();
    match config.shape {
        BannerShape::Single => make_split_comment(&mut buffer, &provider, config.text.as_deref()),
        BannerShape::Framed => make_split_comment3(&mut buffer, &provider, config.text.as_deref()),
    }

    let output = buffer.to_text();
    match (&config.file, config.in_place) {
        (Some(path), true) => {
            fs::write(path, output).with_context(|| format!("Error writing file {}", path.display()))?;
            info!("rewrote line {} of {}", config.row, path.display());
        }
        _ => {
            io::stdout()
                .write_all(output.as_bytes())
                .context("Error writing to stdout")?;
        }
    }

    Ok(())
}

fn parse_args() -> AppConfig {
    let matches = Command::new("split_commenter")
        .version("0.1.0")
        .about("Turns a line into a `// ---- section ----` banner comment")
        .arg(
            Arg::new("text")
                .help("Banner label (default: the label already on the line)")
                .num_args(1)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("Read the buffer from this file instead of stdin"),
        )
        .arg(
            Arg::new("line")
                .short('l')
                .long("line")
                .num_args(1)
                .value_parser(value_parser!(usize))
                .default_value("1")
                .help("1-based line to turn into a banner"),
        )
        .arg(
            Arg::new("three")
                .short('3')
                .long("three")
                .help("Frame the banner with splitter lines above and below")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("comment")
                .short('c')
                .long("comment")
                .num_args(1)
                .help("Comment string (default: $SPLIT_COMMENT_STR, then //)"),
        )
        .arg(
            Arg::new("columns")
                .short('n')
                .long("columns")
                .num_args(1)
                .value_parser(value_parser!(usize))
                .help("Column width (default: $SPLIT_COMMENT_COLUMN, then 80)"),
        )
        .arg(
            Arg::new("in_place")
                .short('i')
                .long("in-place")
                .help("Write the result back to --file")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let shape = if matches.get_flag("three") {
        BannerShape::Framed
    } else {
        BannerShape::Single
    };

    AppConfig {
        file: matches.get_one::<PathBuf>("file").cloned(),
        row: matches.get_one::<usize>("line").copied().unwrap_or(1),
        shape,
        text: matches.get_one::<String>("text").cloned(),
        comment_str: matches.get_one::<String>("comment").cloned(),
        n_col: matches.get_one::<usize>("columns").copied(),
        in_place: matches.get_flag("in_place"),
        verbose: matches.get_flag("verbose"),
    }
}

/// Logs go to stderr so stdout stays the transformed buffer.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Error opening file {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Error reading stdin")?;
            Ok(text)
        }
    }
}
