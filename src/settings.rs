use consult_config::{Config, ConfigManager};
use consult_core::ConsultPolicy;

use crate::{errors::Result, utils::paths::app_data_dir};

/// Opens the config manager rooted at the application data directory.
pub fn config_manager() -> Result<ConfigManager> {
    Ok(ConfigManager::with_base_dir(app_data_dir())?)
}

pub fn load_config() -> Result<Config> {
    Ok(config_manager()?.load()?)
}

/// Consult thresholds taken from the user's configuration.
pub fn consult_policy(config: &Config) -> ConsultPolicy {
    ConsultPolicy {
        income_share_warning: config.income_share_warning,
        high_interest_rate: config.high_interest_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_maps_to_default_policy() {
        assert_eq!(consult_policy(&Config::default()), ConsultPolicy::default());
    }
}
