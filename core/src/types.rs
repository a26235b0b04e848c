//! Domain DTOs for the todo API.
//!
//! # Design
//! `Todo` mirrors what the server returns. `TodoInput` is what callers hand
//! to create/update: every field is optional and unknown JSON fields are
//! ignored on deserialization, so a todo fetched from the server (or any
//! object carrying stray `id` / `createdAt` keys) can be passed straight
//! back in. `TodoPayload` is the wire body and carries exactly the three
//! whitelisted fields; absent fields are omitted rather than sent as `null`.

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier.
pub type TodoId = i64;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

/// Caller-supplied fields for creating or updating a todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl TodoInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

impl From<&Todo> for TodoInput {
    fn from(todo: &Todo) -> Self {
        Self {
            title: Some(todo.title.clone()),
            description: todo.description.clone(),
            completed: Some(todo.completed),
        }
    }
}

impl From<Todo> for TodoInput {
    fn from(todo: Todo) -> Self {
        Self {
            title: Some(todo.title),
            description: todo.description,
            completed: Some(todo.completed),
        }
    }
}

/// Request body for `POST /todos` and `PUT /todos/{id}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TodoPayload<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl<'a> TodoPayload<'a> {
    /// Body for create: a missing `completed` becomes `false`.
    pub fn for_create(input: &'a TodoInput) -> Self {
        Self {
            completed: Some(input.completed.unwrap_or(false)),
            ..Self::for_update(input)
        }
    }

    /// Body for update: fields are forwarded exactly as given.
    pub fn for_update(input: &'a TodoInput) -> Self {
        Self {
            title: input.title.as_deref(),
            description: input.description.as_deref(),
            completed: input.completed,
        }
    }
}
