// ABOUTME: Blocking HTTP client for the content REST API
// ABOUTME: Handles auth headers, link resolution params and fail-fast errors

use crate::model::{ListResponse, NodeResponse, SchemaResponse};
use crate::util::truncate_str;
use crate::{Error, Result};
use reqwest::blocking::{Client, RequestBuilder, Response};
use std::io::Read;
use std::time::Duration;

/// How the API should render links inside node fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    Off,
    Short,
    Medium,
    Full,
}

impl LinkType {
    pub fn as_param(self) -> &'static str {
        match self {
            LinkType::Off => "off",
            LinkType::Short => "short",
            LinkType::Medium => "medium",
            LinkType::Full => "full",
        }
    }
}

/// Everything the exporter needs from the remote side. Calls either
/// succeed or return an error that aborts the run.
pub trait ContentSource {
    fn list_schemas(&self, project: &str) -> Result<Vec<SchemaResponse>>;

    fn list_nodes(&self, project: &str, resolve_links: LinkType) -> Result<Vec<NodeResponse>>;

    fn fetch_localized_node(
        &self,
        project: &str,
        node_uuid: &str,
        lang: &str,
        resolve_links: LinkType,
    ) -> Result<NodeResponse>;

    fn fetch_binary_stream(
        &self,
        project: &str,
        node_uuid: &str,
        lang: &str,
        field_key: &str,
    ) -> Result<Box<dyn Read + '_>>;
}

pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .timeout(None::<Duration>)
            .user_agent(concat!("mesh2hugo/", env!("CARGO_PKG_VERSION"), " (Rust)"))
            .build()?;

        let base_url: String = base_url.into();
        Ok(ApiClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn get(&self, endpoint: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, endpoint);
        let request = self.client.get(url);
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<Response> {
        tracing::debug!(endpoint, "GET");
        let response = request.send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(Error::Api {
                endpoint: endpoint.into(),
                status: status.as_u16(),
                message: truncate_str(&message, 100),
            });
        }
        Ok(response)
    }

    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let response = self.send(endpoint, self.get(endpoint).query(query))?;

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                endpoint,
                body = %truncate_str(&body, 500),
                "failed to parse response: {}",
                e
            );
            Error::Parse(e)
        })
    }
}

impl ContentSource for ApiClient {
    fn list_schemas(&self, project: &str) -> Result<Vec<SchemaResponse>> {
        let resp: ListResponse<SchemaResponse> =
            self.get_json(&format!("/{}/schemas", project), &[])?;
        Ok(resp.data)
    }

    fn list_nodes(&self, project: &str, resolve_links: LinkType) -> Result<Vec<NodeResponse>> {
        let resp: ListResponse<NodeResponse> = self.get_json(
            &format!("/{}/nodes", project),
            &[("resolveLinks", resolve_links.as_param())],
        )?;
        Ok(resp.data)
    }

    fn fetch_localized_node(
        &self,
        project: &str,
        node_uuid: &str,
        lang: &str,
        resolve_links: LinkType,
    ) -> Result<NodeResponse> {
        self.get_json(
            &format!("/{}/nodes/{}", project, node_uuid),
            &[("lang", lang), ("resolveLinks", resolve_links.as_param())],
        )
    }

    fn fetch_binary_stream(
        &self,
        project: &str,
        node_uuid: &str,
        lang: &str,
        field_key: &str,
    ) -> Result<Box<dyn Read + '_>> {
        let endpoint = format!("/{}/nodes/{}/binary/{}", project, node_uuid, field_key);
        let request = self.get(&endpoint).query(&[("lang", lang)]);
        let response = self.send(&endpoint, request)?;
        Ok(Box::new(response))
    }
}
