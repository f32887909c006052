//! `geocsv config` – show where the config lives and what is in effect.

use anyhow::Result;
use geocsv_core::config::{self, GeocsvConfig};

pub fn run_show_config(cfg: &GeocsvConfig) -> Result<()> {
    let path = config::config_path()?;
    let state = if path.exists() { "" } else { " (not present, using defaults)" };
    println!("# {}{}", path.display(), state);
    print!("{}", config::render(cfg)?);
    Ok(())
}
