use clap::Parser;
use locus_cli::Cli;
use locus_logger::{Logger, level_from_verbosity};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(level_from_verbosity(cli.verbose))
        .init()?;

    cli.run(&mut std::io::stdout().lock())
}
