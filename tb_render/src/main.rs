//! Bracket renderer for tournament snapshots.
//!
//! Reads a JSON snapshot exported by the tournament site, resolves it into
//! tiers and prints them. Resolution failures are reported with the same
//! wording the site shows to staff.

mod render;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Error};
use log::{debug, info};
use pico_args::Arguments;
use render::Format;
use tourney_bracket::{BracketSnapshot, ResolverConfig, SharedFeederPolicy, SiblingOrder};

const HELP: &str = "\
Render a tournament bracket snapshot as ordered tiers

USAGE:
  tb_render [OPTIONS] FILE

ARGS:
  FILE                     Snapshot JSON file, or - to read stdin

OPTIONS:
  --shared-feeders POLICY  reject | nearest  [default: env BRACKET_SHARED_FEEDERS or reject]
  --order ORDER            id | input        [default: env BRACKET_SIBLING_ORDER or id]

FLAGS:
  --json                   Print tiers as JSON
  -h, --help               Print help information

ENVIRONMENT:
  BRACKET_SHARED_FEEDERS   Handling of matches reachable along two paths
  BRACKET_SIBLING_ORDER    Ordering of feeders within a tier
  RUST_LOG                 Log filter (e.g., debug)
";

struct Args {
    input: PathBuf,
    format: Format,
    shared_feeders: Option<SharedFeederPolicy>,
    sibling_order: Option<SiblingOrder>,
}

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let format = if pargs.contains("--json") {
        Format::Json
    } else {
        Format::Text
    };
    let args = Args {
        format,
        shared_feeders: pargs
            .opt_value_from_str("--shared-feeders")
            .context("Invalid --shared-feeders")?,
        sibling_order: pargs
            .opt_value_from_str("--order")
            .context("Invalid --order")?,
        input: pargs.free_from_str().context("Missing snapshot FILE")?,
    };

    env_logger::builder().format_target(false).init();

    run(args)
}

fn run(args: Args) -> Result<(), Error> {
    let mut config = ResolverConfig::from_env()?;
    if let Some(policy) = args.shared_feeders {
        config.shared_feeders = policy;
    }
    if let Some(order) = args.sibling_order {
        config.sibling_order = order;
    }
    debug!(
        "Resolver config: shared_feeders={}, sibling_order={}",
        config.shared_feeders, config.sibling_order
    );

    let json = read_input(&args.input)?;
    let snapshot = BracketSnapshot::from_json(&json)?;
    info!(
        "Loaded {} matches from {}",
        snapshot.matches.len(),
        args.input.display()
    );

    let tiers = match snapshot.resolve(config) {
        Ok(tiers) => tiers,
        Err(e) => {
            eprintln!("{}", render::user_message(&e));
            std::process::exit(1);
        }
    };

    match args.format {
        Format::Text => print!("{}", render::render_text(&snapshot, &tiers)),
        Format::Json => println!("{}", render::render_json(&tiers)?),
    }

    Ok(())
}

fn read_input(path: &Path) -> Result<String, Error> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read snapshot from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot {}", path.display()))
}
