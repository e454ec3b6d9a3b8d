use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::DbConfig;
use crate::error::{DbError, DbResult};
use crate::query::Query;

/// Client for the hosted database's REST data API.
///
/// Every request authenticates with the service-role key (`apikey` header +
/// bearer token). Writes ask for `return=minimal`; callers that need the
/// written row back re-read it.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl RestClient {
    pub fn new(config: &DbConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url().to_string(),
            service_key: config.service_role_key().to_string(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    /// Read rows matching `query`.
    pub async fn select<T: DeserializeOwned>(&self, table: &str, query: Query) -> DbResult<Vec<T>> {
        let req = self
            .http
            .get(self.table_url(table))
            .query(query.params());
        let resp = check_status(self.authed(req).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Read at most one row matching `query`.
    pub async fn select_one<T: DeserializeOwned>(
        &self,
        table: &str,
        query: Query,
    ) -> DbResult<Option<T>> {
        let rows: Vec<T> = self.select(table, query.limit(1)).await?;
        Ok(rows.into_iter().next())
    }

    /// Append one row.
    pub async fn insert<B: Serialize + ?Sized>(&self, table: &str, row: &B) -> DbResult<()> {
        let req = self
            .http
            .post(self.table_url(table))
            .header("Prefer", "return=minimal")
            .json(row);
        check_status(self.authed(req).send().await?).await?;
        Ok(())
    }

    /// Insert-or-merge one row keyed on `conflict_column`.
    pub async fn upsert<B: Serialize + ?Sized>(
        &self,
        table: &str,
        conflict_column: &str,
        row: &B,
    ) -> DbResult<()> {
        let req = self
            .http
            .post(self.table_url(table))
            .query(&[("on_conflict", conflict_column)])
            .header("Prefer", "resolution=merge-duplicates,return=minimal")
            .json(row);
        check_status(self.authed(req).send().await?).await?;
        Ok(())
    }

    /// Partially update the rows matching `query`.
    pub async fn update<B: Serialize + ?Sized>(
        &self,
        table: &str,
        query: Query,
        patch: &B,
    ) -> DbResult<()> {
        let req = self
            .http
            .patch(self.table_url(table))
            .query(query.params())
            .header("Prefer", "return=minimal")
            .json(patch);
        check_status(self.authed(req).send().await?).await?;
        Ok(())
    }
}

async fn check_status(resp: reqwest::Response) -> DbResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    tracing::debug!(status = status.as_u16(), "data API request failed");
    Err(DbError::UnexpectedStatus {
        status: status.as_u16(),
        body,
    })
}
