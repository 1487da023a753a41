use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

pub fn init(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    SimpleLogger::new()
        .with_level(level)
        .with_module_level("hyper", LevelFilter::Warn)
        .with_module_level("reqwest", LevelFilter::Warn)
        .with_module_level("handlebars", LevelFilter::Warn)
        .init()?;

    Ok(())
}
