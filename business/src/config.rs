/// Where the business layer finds the upstream users API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            api_base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Full URL of the users listing endpoint.
    pub fn users_url(&self) -> String {
        format!("{}/api/v1/users", self.api_base_url)
    }
}
