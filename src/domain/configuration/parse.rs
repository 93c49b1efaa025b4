//! Pure parse/validate for maintenance configuration (`dirkeep.toml`).

use crate::domain::{AppError, MaintenanceConfig};

/// Parse and validate maintenance configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<MaintenanceConfig, AppError> {
    let config: MaintenanceConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
