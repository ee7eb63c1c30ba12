//! Test module for the Todo REST API.
//!
//! Endpoints (relative to the configured base address, e.g.
//! `http://localhost:60157/api/todo`):
//!
//! | Operation          | Request                    |
//! |--------------------|----------------------------|
//! | Get all tasks      | `GET /`                    |
//! | Get task by ID     | `GET /{id}`                |
//! | Create task        | `POST /` + JSON body       |
//! | Update task        | `PUT /{id}` + JSON body    |
//! | Delete task        | `DELETE /{id}`             |
//! | Mark task complete | `PATCH /{id}/complete`     |

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::catalog::{
    ParameterDefinition, ParameterType, ParameterValues, TestDataSet, TestMethodDescriptor,
    TestModule, TestResult,
};
use crate::http::{Client, Method, Request};

/// Request body of create and update
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TodoItem<'a> {
    title: &'a str,
    description: &'a str,
}

/// Shape of one operation: verb, path suffix after `/{id}` and whether the
/// request carries a task body.
#[derive(Debug, Clone, Copy)]
struct Operation {
    method: Method,
    needs_id: bool,
    action: Option<&'static str>,
    with_body: bool,
}

impl Operation {
    fn new(method: Method) -> Self {
        Self {
            method,
            needs_id: false,
            action: None,
            with_body: false,
        }
    }

    fn by_id(mut self) -> Self {
        self.needs_id = true;
        self
    }

    fn action(mut self, action: &'static str) -> Self {
        self.action = Some(action);
        self
    }

    fn with_body(mut self) -> Self {
        self.with_body = true;
        self
    }
}

/// Shared state of every delegate of this module
struct Endpoint {
    base_url: String,
    timeout: Duration,
}

impl Endpoint {
    /// Resolve the address of `op`. Ids are pushed as a single path segment
    /// so they are percent-encoded.
    fn address(&self, op: &Operation, params: &ParameterValues) -> Result<String, String> {
        let mut url = url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid base address '{}': {}", self.base_url, e))?;

        if op.needs_id {
            let id = params.get("id").unwrap_or_default();
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| format!("Base address '{}' cannot have a path", self.base_url))?;
            segments.pop_if_empty().push(id);
            if let Some(action) = op.action {
                segments.push(action);
            }
        }

        Ok(url.to_string())
    }

    async fn run(&self, op: Operation, required: &[String], params: ParameterValues) -> TestResult {
        // A blank value counts as unset: an empty id would address the collection.
        let unset = |name: &&String| params.get(name).is_none_or(|v| v.trim().is_empty());
        if let Some(missing) = required.iter().find(unset) {
            return TestResult::error(&self.base_url, format!("Parameter '{missing}' is not set."));
        }

        let address = match self.address(&op, &params) {
            Ok(address) => address,
            Err(e) => return TestResult::error(&self.base_url, e),
        };

        let mut request = Request::new(op.method, address.clone());
        if op.with_body {
            let item = TodoItem {
                title: params.get("Title").unwrap_or_default(),
                description: params.get("Description").unwrap_or_default(),
            };
            request = match request.with_json(&item) {
                Ok(request) => request,
                Err(e) => return TestResult::error(address, e.to_string()),
            };
        }

        // The client lives only for this call and is released on every return path.
        let client = match Client::new(self.timeout) {
            Ok(client) => client,
            Err(e) => return TestResult::error(address, e.to_string()),
        };

        let result = match client.execute(request).await {
            Ok(response) if response.is_success() => TestResult::success(&address, response.body),
            Ok(response) => TestResult::failure(
                &address,
                response.body,
                format!("Status: {}", response.status),
            ),
            Err(e) => TestResult::error(&address, e.to_string()),
        };

        info!(
            method = %op.method,
            address = %address,
            success = result.success,
            "Todo API call finished"
        );
        result
    }
}

pub struct TodoApiModule {
    endpoint: Arc<Endpoint>,
}

impl TodoApiModule {
    pub const NAME: &'static str = "Todo API";

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: Arc::new(Endpoint {
                base_url: base_url.into(),
                timeout,
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.endpoint.base_url
    }

    /// Build a descriptor whose delegate runs `op`. All declared parameters
    /// are required.
    fn descriptor(
        &self,
        name: &str,
        description: &str,
        op: Operation,
        parameters: Vec<ParameterDefinition>,
    ) -> TestMethodDescriptor {
        let endpoint = Arc::clone(&self.endpoint);
        let required: Arc<[String]> = parameters.iter().map(|p| p.name.clone()).collect();

        let mut descriptor = TestMethodDescriptor::new(name, description, move |params| {
            let endpoint = Arc::clone(&endpoint);
            let required = Arc::clone(&required);
            async move { endpoint.run(op, &required, params).await }
        });
        for parameter in parameters {
            descriptor = descriptor.with_parameter(parameter);
        }
        descriptor
    }
}

fn id_param() -> ParameterDefinition {
    ParameterDefinition::new("id", "Task identifier", ParameterType::Integer)
}

fn title_param(description: &str) -> ParameterDefinition {
    ParameterDefinition::new("Title", description, ParameterType::String)
}

fn description_param(description: &str) -> ParameterDefinition {
    ParameterDefinition::new("Description", description, ParameterType::String)
}

fn task_data_set(n: u32) -> TestDataSet {
    TestDataSet::new(
        format!("Set {n}"),
        ParameterValues::new()
            .with("Title", format!("Задача {n}"))
            .with("Description", format!("Описание задачи {n}")),
    )
}

impl TestModule for TodoApiModule {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn test_methods(&self) -> Vec<TestMethodDescriptor> {
        vec![
            self.descriptor(
                "Get all tasks",
                "GET /api/todo",
                Operation::new(Method::Get),
                vec![],
            ),
            self.descriptor(
                "Get task by ID",
                "GET /api/todo/{id}",
                Operation::new(Method::Get).by_id(),
                vec![id_param()],
            ),
            self.descriptor(
                "Create task",
                "POST /api/todo",
                Operation::new(Method::Post).with_body(),
                vec![title_param("Task title"), description_param("Task description")],
            )
            .with_data_set(task_data_set(1))
            .with_data_set(task_data_set(2)),
            self.descriptor(
                "Update task",
                "PUT /api/todo/{id}",
                Operation::new(Method::Put).by_id().with_body(),
                vec![
                    id_param(),
                    title_param("New task title"),
                    description_param("New task description"),
                ],
            ),
            self.descriptor(
                "Delete task",
                "DELETE /api/todo/{id}",
                Operation::new(Method::Delete).by_id(),
                vec![id_param()],
            ),
            self.descriptor(
                "Mark task complete",
                "PATCH /api/todo/{id}/complete",
                Operation::new(Method::Patch).by_id().action("complete"),
                vec![id_param()],
            ),
        ]
    }
}
