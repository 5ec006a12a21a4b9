//! Upstream users API client.

use log::{error, info};

use crate::config::BusinessConfig;
use crate::error::{BusinessError, BusinessResult};
use crate::user::User;

/// Reads the user list from the upstream API.
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    config: BusinessConfig,
}

impl UsersClient {
    pub fn new(config: BusinessConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// GET `/api/v1/users`
    ///
    /// Any non-2xx status or a body that is not a JSON array of users is an error.
    pub async fn list_users(&self) -> BusinessResult<Vec<User>> {
        let url = self.config.users_url();
        info!("Fetching users from {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Users API returned status: {status}");
            return Err(BusinessError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let users: Vec<User> = serde_json::from_slice(&body)?;
        info!("Fetched {} users successfully", users.len());
        Ok(users)
    }
}
