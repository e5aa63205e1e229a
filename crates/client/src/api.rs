//! Typed client for the backend REST API.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use anyhow::Context;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use brewpos_core::IngredientId;

use crate::config::ClientConfig;
use crate::dto::{
    ApiMessage, ExpenseDto, IngredientDto, IngredientUpdate, LoginRequest, LoginResponse,
    NewExpense, NewIngredient, PageEnvelope, SaleDto, SalesResponse, SessionResponse,
};
use crate::error::ApiError;

/// Bounded request timeout: a hung backend is reported like any other
/// network failure rather than leaving a spinner up indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Inclusive date filter applied to the paginated report endpoints.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

/// Query for the paginated list endpoints. `page` is 1-based on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
    pub range: Option<DateRange>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            range: None,
        }
    }
}

/// Seam between the auth gateway and the backend.
///
/// [`ApiClient`] is the production implementation; gateway tests substitute
/// a scripted one.
pub trait AuthApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError>;
    async fn restore(&self, token: &str) -> Result<SessionResponse, ApiError>;
    /// Install (or drop) the bearer credential used by subsequent requests.
    fn set_credential(&self, token: Option<&str>);
}

/// HTTP client for the backend.
///
/// Clones share one credential cell, so installing a token after login is
/// visible to every screen holding a clone (the same way the original UI
/// shared one configured HTTP instance).
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<Mutex<Option<String>>>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: Arc::new(Mutex::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn with_auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.bearer() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ApiMessage>()
                .await
                .ok()
                .map(|body| body.message);
            return Err(ApiError::from_http(status.as_u16(), message));
        }
        resp.json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    // ── auth ────────────────────────────────────────────────────────────

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp = self.http.post(self.url("/login")).json(&body).send().await?;
        Self::read_json(resp).await
    }

    /// Restoration probe: validate a stored token and get the user back.
    pub async fn restore(&self, token: &str) -> Result<SessionResponse, ApiError> {
        let resp = self
            .http
            .get(self.url("/session/fetch"))
            .bearer_auth(token)
            .send()
            .await?;
        Self::read_json(resp).await
    }

    pub fn set_credential(&self, token: Option<&str>) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) =
            token.map(|t| t.to_string());
    }

    // ── ingredients ─────────────────────────────────────────────────────

    pub async fn fetch_ingredients(&self) -> Result<Vec<IngredientDto>, ApiError> {
        let resp = self
            .with_auth(self.http.get(self.url("/ingredient/fetch")))
            .send()
            .await?;
        Self::read_json(resp).await
    }

    pub async fn add_ingredient(&self, item: &NewIngredient) -> Result<ApiMessage, ApiError> {
        let resp = self
            .with_auth(self.http.post(self.url("/ingredient/add")).json(item))
            .send()
            .await?;
        Self::read_json(resp).await
    }

    pub async fn update_ingredient(
        &self,
        id: IngredientId,
        update: &IngredientUpdate,
    ) -> Result<ApiMessage, ApiError> {
        let resp = self
            .with_auth(
                self.http
                    .put(self.url(&format!("/ingredient/update/{id}")))
                    .json(update),
            )
            .send()
            .await?;
        Self::read_json(resp).await
    }

    /// Soft delete: the ingredient is disabled, not removed.
    pub async fn disable_ingredient(&self, id: IngredientId) -> Result<ApiMessage, ApiError> {
        let resp = self
            .with_auth(self.http.patch(self.url(&format!("/ingredient/disable/{id}"))))
            .send()
            .await?;
        Self::read_json(resp).await
    }

    // ── sales & expenses ────────────────────────────────────────────────

    pub async fn fetch_sales(&self, query: &PageQuery) -> Result<PageEnvelope<SaleDto>, ApiError> {
        let mut params = vec![
            ("page", query.page.to_string()),
            ("per_page", query.page_size.to_string()),
        ];
        // The date pair goes on the wire only when both ends are set.
        if let Some(range) = &query.range {
            params.push(("start_date", range.start_param()));
            params.push(("end_date", range.end_param()));
        }
        let resp = self
            .with_auth(self.http.get(self.url("/sales/fetch")).query(&params))
            .send()
            .await?;
        let body: SalesResponse = Self::read_json(resp).await?;
        Ok(body.sales)
    }

    pub async fn fetch_expenses(
        &self,
        query: &PageQuery,
    ) -> Result<PageEnvelope<ExpenseDto>, ApiError> {
        let mut params = vec![
            ("page", query.page.to_string()),
            // This endpoint names its page-size key differently from
            // /sales/fetch; both spellings are load-bearing.
            ("pageSize", query.page_size.to_string()),
        ];
        if let Some(range) = &query.range {
            params.push(("start_date", range.start_param()));
            params.push(("end_date", range.end_param()));
        }
        let resp = self
            .with_auth(self.http.get(self.url("/expenses/fetch")).query(&params))
            .send()
            .await?;
        Self::read_json(resp).await
    }

    pub async fn add_expense(&self, expense: &NewExpense) -> Result<ApiMessage, ApiError> {
        let resp = self
            .with_auth(self.http.post(self.url("/expenses/add")).json(expense))
            .send()
            .await?;
        Self::read_json(resp).await
    }
}

impl AuthApi for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        ApiClient::login(self, username, password).await
    }

    async fn restore(&self, token: &str) -> Result<SessionResponse, ApiError> {
        ApiClient::restore(self, token).await
    }

    fn set_credential(&self, token: Option<&str>) {
        ApiClient::set_credential(self, token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_its_trailing_slash() {
        let client =
            ApiClient::new(ClientConfig::new("http://localhost:8000/api/")).expect("client");
        assert_eq!(client.url("/login"), "http://localhost:8000/api/login");
    }

    #[test]
    fn credential_cell_is_shared_between_clones() {
        let client = ApiClient::new(ClientConfig::new("http://localhost")).expect("client");
        let clone = client.clone();
        client.set_credential(Some("tok-1"));
        assert_eq!(clone.bearer(), Some("tok-1".to_string()));
        clone.set_credential(None);
        assert_eq!(client.bearer(), None);
    }

    #[test]
    fn date_range_formats_as_iso_dates() {
        let range = DateRange {
            start: NaiveDate::from_ymd_opt(2025, 5, 1).expect("date"),
            end: NaiveDate::from_ymd_opt(2025, 5, 31).expect("date"),
        };
        assert_eq!(range.start_param(), "2025-05-01");
        assert_eq!(range.end_param(), "2025-05-31");
    }
}
