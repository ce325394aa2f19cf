use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sector::api::{ordering_sign, Sector, AREA_EPS};
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Debug, Parser)]
#[command(name = "sector-cli")]
#[command(about = "Inspect and compare circular sectors")]
struct Cmd {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Print derived values of one sector as JSON
    Describe {
        #[arg(long, allow_hyphen_values = true)]
        radius: f64,
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
    },
    /// Compare two sectors by area; prints -1, 0 or 1
    Compare {
        /// First sector as `radius,angle`
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        a: (f64, f64),
        /// Second sector as `radius,angle`
        #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
        b: (f64, f64),
        #[arg(long, default_value_t = AREA_EPS)]
        tolerance: f64,
    },
}

/// JSON view of a sector and its derived values.
#[derive(Debug, Serialize)]
struct SectorReport {
    radius: f64,
    angle_degrees: f64,
    area: f64,
    arc_length: f64,
    chord_length: f64,
    centroid: [f64; 2],
    display: String,
}

impl From<&Sector> for SectorReport {
    fn from(s: &Sector) -> Self {
        let c = s.centroid();
        Self {
            radius: s.radius(),
            angle_degrees: s.angle_degrees(),
            area: s.area(),
            arc_length: s.arc_length(),
            chord_length: s.chord_length(),
            centroid: [c.x, c.y],
            display: s.to_string(),
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let out = run(cmd.action)?;
    println!("{out}");
    Ok(())
}

/// Execute one action and return what goes to stdout.
fn run(action: Action) -> Result<String> {
    match action {
        Action::Describe { radius, angle } => describe(radius, angle),
        Action::Compare { a, b, tolerance } => compare(a, b, tolerance),
    }
}

fn parse_pair(s: &str) -> Result<(f64, f64), String> {
    let (r, a) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `radius,angle`, got `{s}`"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("`{}`: {e}", v.trim()))
    };
    Ok((parse(r)?, parse(a)?))
}

fn describe(radius: f64, angle: f64) -> Result<String> {
    tracing::debug!(radius, angle, "describe");
    let s = Sector::new(radius, angle)?;
    Ok(serde_json::to_string_pretty(&SectorReport::from(&s))?)
}

fn compare(a: (f64, f64), b: (f64, f64), tolerance: f64) -> Result<String> {
    let sa = Sector::new(a.0, a.1).context("sector a")?;
    let sb = Sector::new(b.0, b.1).context("sector b")?;
    let ord = sa.cmp_area_eps(&sb, tolerance);
    tracing::debug!(a = %sa, b = %sb, tolerance, ?ord, "compare");
    Ok(ordering_sign(ord).to_string())
}
