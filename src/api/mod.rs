use crate::models::{DashboardConfig, WidgetFormValues};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Unauthorized,
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    fn unauthorized() -> Self {
        Self {
            kind: ApiErrorKind::Unauthorized,
            message: "Unauthorized".to_string(),
        }
    }

    fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {body}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

pub(crate) const DEFAULT_API_URL: &str = "http://localhost:8092";

#[derive(Serialize, Deserialize, Clone, Debug)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        // `window.ENV.API_URL` first, then the lower-case `api_url` spelling.
        if let Some(window) = web_sys::window() {
            if let Some(env) = window.get("ENV") {
                if !env.is_undefined() && env.is_object() {
                    for key in ["API_URL", "api_url"] {
                        if let Ok(api_url) = js_sys::Reflect::get(&env, &key.into()) {
                            if let Some(url_str) = api_url.as_string() {
                                return Self::with_api_url(&url_str);
                            }
                        }
                    }
                }
            }
        }

        Self::with_api_url(DEFAULT_API_URL)
    }

    /// Blank values fall back to the default; a trailing slash is dropped.
    pub fn with_api_url(api_url: &str) -> Self {
        let trimmed = api_url.trim().trim_end_matches('/');
        let api_url = if trimmed.is_empty() {
            DEFAULT_API_URL
        } else {
            trimmed
        };
        Self {
            api_url: api_url.to_string(),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Body of `POST /api/widget/contentUpdate`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct WidgetContentUpdateRequest {
    pub id: String,

    #[serde(rename = "clearItems", skip_serializing_if = "Option::is_none")]
    pub clear_items: Option<bool>,

    #[serde(rename = "selectedItem", skip_serializing_if = "Option::is_none")]
    pub selected_item: Option<String>,
}

#[derive(Clone)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(req: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
        let res = req.send().await.map_err(ApiError::network)?;

        if res.status().is_success() {
            Ok(res)
        } else if res.status().as_u16() == 401 {
            Err(ApiError::unauthorized())
        } else {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            Err(ApiError::http(status, body, "Request failed"))
        }
    }

    async fn get_api<T: serde::de::DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let client = reqwest::Client::new();
        let res = Self::send(client.get(self.url(path))).await?;
        res.json().await.map_err(ApiError::parse)
    }

    /// POST whose response body is not needed.
    async fn post_api(&self, path: &str, body: &impl serde::Serialize) -> ApiResult<()> {
        let client = reqwest::Client::new();
        Self::send(client.post(self.url(path)).json(body)).await?;
        Ok(())
    }

    pub(crate) fn parse_config_response(data: serde_json::Value) -> ApiResult<DashboardConfig> {
        let mut config: DashboardConfig = serde_json::from_value(data).map_err(ApiError::parse)?;

        // Widget values may omit their own id; the map key is authoritative.
        for (id, values) in config.widgets.iter_mut() {
            if values.id.trim().is_empty() {
                values.id = id.clone();
            }
        }
        config.boards.retain(|b| !b.id.trim().is_empty());

        Ok(config)
    }

    pub async fn get_config(&self) -> ApiResult<DashboardConfig> {
        let data: serde_json::Value = self.get_api("/api/config").await?;
        Self::parse_config_response(data)
    }

    pub async fn update_widget(&self, values: &WidgetFormValues) -> ApiResult<()> {
        self.post_api("/api/widget/update", values).await
    }

    pub async fn post_widget_content_update(
        &self,
        req_body: &WidgetContentUpdateRequest,
    ) -> ApiResult<()> {
        self.post_api("/api/widget/contentUpdate", req_body).await
    }
}
