use anyhow::Result;

use smoothscroll_core::AppConfig;

pub fn run(config: &AppConfig, init: bool) -> Result<()> {
    let path = AppConfig::config_path();

    if init {
        config.save()?;
        println!("Wrote configuration to {}\n", path.display());
    } else if path.exists() {
        println!("# Loaded from {}\n", path.display());
    } else {
        println!("# No file at {}, using defaults\n", path.display());
    }

    print!("{}", config.to_toml()?);
    Ok(())
}
