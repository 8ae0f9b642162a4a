use anyhow::Context;
use clap::Parser;
use folio_render::{Cli, write_site};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let site = cli.site().context("Critical: site configuration is unusable")?;
    let _logger = cli.logger(&site)?;

    write_site(&site, &cli.stylesheet, &cli.out)?;
    Ok(())
}
