use serde_json::{json, Value};

use tiendaops_core::UserId;

use crate::config::DbConfig;
use crate::error::{DbError, DbResult};

/// Outcome of an account-creation attempt against the identity admin API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateUserOutcome {
    Created(UserId),
    /// The email is already registered. Not an error: the seeder is
    /// expected to run repeatedly.
    AlreadyRegistered,
}

/// Client for the hosted database's identity admin API.
///
/// Uses the same service-role credential as the data API; user creation is
/// an elevated operation the browser-facing key cannot perform.
#[derive(Debug, Clone)]
pub struct AdminAuthClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl AdminAuthClient {
    pub fn new(config: &DbConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url().to_string(),
            service_key: config.service_role_key().to_string(),
        }
    }

    /// Create a confirmed user with the given metadata.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        metadata: Value,
    ) -> DbResult<CreateUserOutcome> {
        let resp = self
            .http
            .post(format!("{}/auth/v1/admin/users", self.base_url))
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .json(&json!({
                "email": email,
                "password": password,
                "email_confirm": true,
                "user_metadata": metadata,
            }))
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            let body: Value = resp.json().await?;
            let id = body
                .get("id")
                .and_then(|v| v.as_str())
                .ok_or_else(|| {
                    DbError::UnexpectedBody("user id missing from create response".to_string())
                })?;
            let id = id
                .parse::<UserId>()
                .map_err(|e| DbError::UnexpectedBody(e.to_string()))?;
            return Ok(CreateUserOutcome::Created(id));
        }

        let body = resp.text().await.unwrap_or_default();
        if is_already_registered(status.as_u16(), &body) {
            return Ok(CreateUserOutcome::AlreadyRegistered);
        }
        Err(DbError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}

/// Duplicate emails come back as a 422 (older API versions use 400) with an
/// "already registered" message rather than a conflict status.
fn is_already_registered(status: u16, body: &str) -> bool {
    if status != 422 && status != 400 {
        return false;
    }
    let body = body.to_ascii_lowercase();
    body.contains("already") && body.contains("registered")
}
