use std::io;

use anyhow::Context;
use bikeshare_explorer::app::BikeshareApp;
use bikeshare_explorer::config::Config;
use bikeshare_explorer::prompt::Prompter;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::parse();
    log::info!(
        "data directory: {}, page size: {}",
        config.data_dir.display(),
        config.page_size
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    BikeshareApp::new(config)
        .run(&mut prompter)
        .context("bikeshare session failed")
}
