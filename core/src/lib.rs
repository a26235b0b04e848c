//! Async client for the todo service.
//!
//! # Overview
//! Resolves which server to talk to, builds one shared HTTP transport bound
//! to it, and exposes the five `/todos` CRUD calls through `TodoApi`.
//!
//! # Design
//! - `config::resolve_base_url` is a pure function of the configured URL and
//!   the host the client runs on; `ClientConfig::from_env` is the only place
//!   that reads the environment.
//! - `TodoApi` builds plain-data `HttpRequest`s (`build_*`) and executes them
//!   through a `Transport`, so tests can swap in a fake without globals.
//! - Responses come back raw; non-2xx statuses and network failures surface
//!   as `ApiError` with no retry.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use client::TodoApi;
pub use config::{resolve_base_url, ClientConfig, FALLBACK_BASE_URL};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::{HttpTransport, Transport};
pub use types::{Todo, TodoId, TodoInput, TodoPayload};
