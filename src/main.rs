use anyhow::Result;
use songcraft::config::{config_path, SongcraftConfig};
use songcraft::{logger, repl};

fn main() -> Result<()> {
    let path = config_path(std::env::args().skip(1));
    let config = SongcraftConfig::load(path.as_deref())?;
    logger::init(&config.log_level)?;
    repl::start(&config)
}
