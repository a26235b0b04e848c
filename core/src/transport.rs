//! The transport seam between the facade and the network.
//!
//! # Design
//! `Transport` executes one `HttpRequest` and returns the response as data
//! for every status code; only failures to get a response at all are
//! errors. `HttpTransport` is the real implementation: a single
//! `reqwest::Client` built once with a JSON content-type default header and
//! bound to a base URL. Its configuration cannot change after construction.

use std::future::Future;

use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes plain-data HTTP requests.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send;
}

/// `reqwest`-backed transport bound to one base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder().default_headers(headers).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
        async move {
            let url = self.url(&request.path);
            debug!("{} {url}", request.method.as_str());

            let mut builder = self.client.request(method(request.method), &url);
            if let Some(body) = request.body {
                builder = builder.body(body);
            }
            let response = builder.send().await?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|v| (name.as_str().to_string(), v.to_string()))
                })
                .collect();
            let body = response.text().await?;

            if !(200..300).contains(&status) {
                warn!("{} {url} returned HTTP {status}", request.method.as_str());
            }
            Ok(HttpResponse { status, headers, body })
        }
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}
