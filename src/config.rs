use serde::Deserialize;
use crate::errors::AppResult;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub credentials_path: String,
    pub payroll_path: String,
}

impl Config {
    /// Built-in defaults, then `config/default.*` if present, then `APP_` variables
    /// such as `APP_STORAGE__PAYROLL_PATH`.
    pub fn load() -> AppResult<Self> {
        let config = config::Config::builder()
            .set_default("storage.credentials_path", "user_data.txt")?
            .set_default("storage.payroll_path", "employee_data.txt")?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
