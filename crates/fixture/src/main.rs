use clap::Parser;

use gildedrose_fixture::{Args, run};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    gildedrose_observability::init_with(args.log_format.into());

    let stdout = std::io::stdout();
    run(&args, &mut stdout.lock())
}
