// src/bin/cli.rs
use dex_export::{cli, log, progress::ConsoleProgress};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let result = cli::run(&mut ConsoleProgress);
    if let Err(e) = &result {
        dex_export::loge!("{e}");
        println!("Error: {e}");
    }
    cli::wait_for_key();

    result?;
    Ok(())
}
