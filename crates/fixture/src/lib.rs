//! Day-by-day printout of an inventory, for eyeballing and golden-master
//! comparison of the update rules.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;

use gildedrose_core::DomainResult;
use gildedrose_inventory::{ItemSpec, ItemView, Quality, UpdateEngine};
use gildedrose_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "gildedrose-fixture", about = "Print inventory state day by day")]
pub struct Args {
    /// Number of daily snapshots to print, starting at day 0.
    #[arg(short, long, default_value_t = 2)]
    pub days: u32,

    /// JSON file with an array of items; defaults to the sample inventory.
    #[arg(short, long)]
    pub items: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[arg(long, value_enum, default_value_t = LogFormatArg::Pretty)]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Json,
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Pretty => LogFormat::Pretty,
        }
    }
}

/// The classic sample inventory.
pub fn sample_inventory() -> Vec<ItemSpec> {
    vec![
        ItemSpec::new("+5 Dexterity Vest", 10, 20),
        ItemSpec::new("Aged Brie", 2, 0),
        ItemSpec::new("Elixir of the Mongoose", 5, 7),
        ItemSpec::new("Sulfuras, Hand of Ragnaros", 0, Quality::LEGENDARY),
        ItemSpec::new("Sulfuras, Hand of Ragnaros", -1, Quality::LEGENDARY),
        ItemSpec::new("Backstage passes to a TAFKAL80ETC concert", 15, 20),
        ItemSpec::new("Backstage passes to a TAFKAL80ETC concert", 10, 49),
        ItemSpec::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
        ItemSpec::new("Conjured Mana Cake", 3, 6),
    ]
}

pub fn load_inventory(path: &Path) -> anyhow::Result<Vec<ItemSpec>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

pub fn build_engine(specs: Vec<ItemSpec>) -> DomainResult<UpdateEngine> {
    UpdateEngine::from_specs(specs)
}

#[derive(Debug, Serialize)]
struct DaySnapshot {
    day: u64,
    items: Vec<ItemView>,
}

pub fn write_text_day(out: &mut impl Write, engine: &UpdateEngine) -> std::io::Result<()> {
    writeln!(out, "-------- day {} --------", engine.days_elapsed())?;
    writeln!(out, "name, sellIn, quality")?;
    for item in engine {
        writeln!(out, "{item}")?;
    }
    writeln!(out)
}

pub fn write_json_day(out: &mut impl Write, engine: &UpdateEngine) -> anyhow::Result<()> {
    let snapshot = DaySnapshot {
        day: engine.days_elapsed(),
        items: engine.items().iter().map(|item| item.view()).collect(),
    };
    serde_json::to_writer(&mut *out, &snapshot)?;
    writeln!(out)?;
    Ok(())
}

/// Print `days` snapshots, advancing one day after each.
pub fn render(
    engine: &mut UpdateEngine,
    days: u32,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for _ in 0..days {
        match format {
            OutputFormat::Text => write_text_day(out, engine)?,
            OutputFormat::Json => write_json_day(out, engine)?,
        }
        engine.advance_one_day();
        engine.check_invariants()?;
    }
    Ok(())
}

pub fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let specs = match &args.items {
        Some(path) => load_inventory(path)?,
        None => sample_inventory(),
    };
    let mut engine = build_engine(specs).context("invalid inventory")?;
    tracing::info!(items = engine.len(), days = args.days, "printing inventory");

    render(&mut engine, args.days, args.format, out)
}
