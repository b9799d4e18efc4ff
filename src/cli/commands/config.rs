use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

pub fn handle(cfg: &Config, print_config: bool) -> AppResult<()> {
    if print_config {
        info(format!("Configuration file: {:?}", Config::config_file()));
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("{}", yaml);
        return Ok(());
    }

    info("Nothing to do. Try --print.");
    Ok(())
}
