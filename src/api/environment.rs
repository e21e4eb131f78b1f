//! Environment Config Endpoint

use super::get_json;
use crate::error::ApiError;
use crate::models::EnvironmentConfig;

pub async fn get_environment_config() -> Result<EnvironmentConfig, ApiError> {
    get_json("/config").await
}
