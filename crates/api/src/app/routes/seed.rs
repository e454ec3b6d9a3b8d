use std::sync::Arc;

use axum::extract::Extension;
use serde_json::json;

use tiendaops_accounts::{DemoAccount, ProfileMirror, SeedResult, DEMO_ACCOUNTS};
use tiendaops_db::{CreateUserOutcome, DbError};

use crate::app::dto::SeedBatch;
use crate::app::{errors, services::AppServices};

/// `POST /functions/seed-users`
///
/// Idempotent: accounts that already exist are reported as such, and the
/// mirrored profile row is upserted either way.
pub async fn seed_demo_users(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match seed_accounts(&services).await {
        Ok(batch) => errors::json_success(batch),
        Err(e) => errors::json_error("seed_users_failed", e.to_string()),
    }
}

async fn seed_accounts(services: &AppServices) -> Result<SeedBatch, DbError> {
    let mut results = Vec::with_capacity(DEMO_ACCOUNTS.len());
    for account in DEMO_ACCOUNTS {
        results.push(seed_one(services, account).await);
    }
    Ok(SeedBatch { results })
}

async fn seed_one(services: &AppServices, account: &DemoAccount) -> SeedResult {
    let metadata = json!({
        "full_name": account.full_name,
        "role": account.role,
    });

    let outcome = match services
        .auth
        .create_user(account.email, account.password, metadata)
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => return SeedResult::failed(account.email, e.to_string()),
    };

    if let Err(e) = services
        .db
        .upsert("profiles", "email", &ProfileMirror::from(account))
        .await
    {
        return SeedResult::failed(account.email, format!("profile mirror: {e}"));
    }

    match outcome {
        CreateUserOutcome::Created(_) => SeedResult::created(account.email),
        CreateUserOutcome::AlreadyRegistered => SeedResult::already_exists(account.email),
    }
}
