//! The todo facade: five CRUD operations over a shared transport.
//!
//! # Design
//! Each operation is split in two. A synchronous `build_*` method produces
//! the `HttpRequest` (path, method, whitelisted JSON body) without touching
//! the network, and an `async` method hands that request to the transport.
//! The async methods resolve with the raw `HttpResponse` on any 2xx status
//! and fail with `ApiError` otherwise; the body is never interpreted here.
//!
//! `TodoApi` holds its transport behind an `Arc`, so clones share one
//! underlying client. Calls take `&self` and may run concurrently with no
//! ordering between completions. Dropping a returned future cancels it.

use std::sync::Arc;

use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{HttpTransport, Transport};
use crate::types::{TodoId, TodoInput, TodoPayload};

/// Client for the `/todos` resource.
#[derive(Debug)]
pub struct TodoApi<T = HttpTransport> {
    transport: Arc<T>,
}

impl<T> Clone for TodoApi<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl TodoApi<HttpTransport> {
    /// Resolve the base URL from `config` and build the one HTTP transport.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        Ok(Self::new(HttpTransport::new(&config.base_url())?))
    }
}

impl<T: Transport> TodoApi<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: "/todos".to_string(),
            body: None,
        }
    }

    pub fn build_get_todo(&self, id: TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("/todos/{id}"),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &TodoInput) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: "/todos".to_string(),
            body: Some(to_json(&TodoPayload::for_create(input))?),
        })
    }

    pub fn build_update_todo(&self, id: TodoId, input: &TodoInput) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("/todos/{id}"),
            body: Some(to_json(&TodoPayload::for_update(input))?),
        })
    }

    pub fn build_delete_todo(&self, id: TodoId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("/todos/{id}"),
            body: None,
        }
    }

    /// `GET /todos`
    pub async fn list_todos(&self) -> Result<HttpResponse, ApiError> {
        self.execute(self.build_list_todos()).await
    }

    /// `GET /todos/{id}`
    pub async fn get_todo(&self, id: TodoId) -> Result<HttpResponse, ApiError> {
        self.execute(self.build_get_todo(id)).await
    }

    /// `POST /todos`
    pub async fn create_todo(&self, input: &TodoInput) -> Result<HttpResponse, ApiError> {
        self.execute(self.build_create_todo(input)?).await
    }

    /// `PUT /todos/{id}`
    pub async fn update_todo(&self, id: TodoId, input: &TodoInput) -> Result<HttpResponse, ApiError> {
        self.execute(self.build_update_todo(id, input)?).await
    }

    /// `DELETE /todos/{id}`
    pub async fn delete_todo(&self, id: TodoId) -> Result<HttpResponse, ApiError> {
        self.execute(self.build_delete_todo(id)).await
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let response = self.transport.send(request).await?;
        check_status(response)
    }
}

fn to_json<S: Serialize>(payload: &S) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Turn non-2xx responses into `ApiError::Status`.
fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body,
    })
}
