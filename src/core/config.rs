use crate::config::Config;
use crate::errors::AppResult;

pub struct ConfigLogic;

impl ConfigLogic {
    /// YAML dump of the active configuration with password hashes and the
    /// cookie key masked.
    pub fn render_masked(cfg: &Config) -> AppResult<String> {
        let mut masked = cfg.clone();
        masked.cookie.key = "********".into();
        for user in masked.credentials.usernames.values_mut() {
            user.password = "********".into();
        }
        Ok(serde_yaml::to_string(&masked)?)
    }
}
