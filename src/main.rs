use log::error;
use recipe_finder::{run_with_config, AppConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AppConfig::load()?;
    if let Err(e) = run_with_config(&config) {
        error!("Recipe finder stopped: {}", e);
        return Err(e.into());
    }

    Ok(())
}
