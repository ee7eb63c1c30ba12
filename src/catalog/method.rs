use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::catalog::result::TestResult;
use crate::catalog::types::{ParameterDefinition, ParameterValues, TestDataSet};

pub type ExecuteFuture = Pin<Box<dyn Future<Output = TestResult> + Send + 'static>>;

/// Execution delegate. It never fails: every outcome is folded into a `TestResult`.
pub type ExecuteFn = Arc<dyn Fn(ParameterValues) -> ExecuteFuture + Send + Sync>;

/// Declarative description of one testable operation
#[derive(Clone)]
pub struct TestMethodDescriptor {
    pub name: String,
    pub description: String,
    pub parameters: Vec<ParameterDefinition>,
    pub data_sets: Vec<TestDataSet>,
    execute: ExecuteFn,
}

impl TestMethodDescriptor {
    pub fn new<F, Fut>(name: impl Into<String>, description: impl Into<String>, delegate: F) -> Self
    where
        F: Fn(ParameterValues) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = TestResult> + Send + 'static,
    {
        let execute: ExecuteFn = Arc::new(move |params: ParameterValues| -> ExecuteFuture {
            Box::pin(delegate(params))
        });
        Self {
            name: name.into(),
            description: description.into(),
            parameters: Vec::new(),
            data_sets: Vec::new(),
            execute,
        }
    }

    pub fn with_parameter(mut self, parameter: ParameterDefinition) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_data_set(mut self, data_set: TestDataSet) -> Self {
        self.data_sets.push(data_set);
        self
    }

    pub fn find_data_set(&self, name: &str) -> Option<&TestDataSet> {
        self.data_sets.iter().find(|ds| ds.name == name)
    }

    /// Declared parameters absent from `values`, in declaration order
    pub fn missing_parameters<'a>(&'a self, values: &ParameterValues) -> Vec<&'a str> {
        self.parameters
            .iter()
            .filter(|p| !values.contains(&p.name))
            .map(|p| p.name.as_str())
            .collect()
    }

    /// Run the delegate. This is the only point where the caller waits on I/O.
    pub async fn execute(&self, values: ParameterValues) -> TestResult {
        (self.execute)(values).await
    }
}

impl fmt::Debug for TestMethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestMethodDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("parameters", &self.parameters)
            .field("data_sets", &self.data_sets)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::types::ParameterType;

    fn echo_descriptor() -> TestMethodDescriptor {
        TestMethodDescriptor::new("Echo", "returns the id", |params: ParameterValues| async move {
            match params.get("id") {
                Some(id) => TestResult::success(format!("mem://{id}"), id),
                None => TestResult::error("mem://", "Parameter 'id' is not set."),
            }
        })
        .with_parameter(ParameterDefinition::new("id", "Task id", ParameterType::Integer))
        .with_data_set(TestDataSet::new(
            "Set 1",
            ParameterValues::new().with("id", "5"),
        ))
    }

    #[tokio::test]
    async fn test_execute_invokes_delegate() {
        let descriptor = echo_descriptor();
        let result = descriptor
            .execute(ParameterValues::new().with("id", "9"))
            .await;

        assert!(result.success);
        assert_eq!(result.request_address, "mem://9");
        assert_eq!(result.response_text(), "9");
    }

    #[tokio::test]
    async fn test_cloned_descriptor_shares_delegate() {
        let descriptor = echo_descriptor();
        let copy = descriptor.clone();

        let result = copy.execute(ParameterValues::new()).await;
        assert!(!result.success);
        assert_eq!(result.error_message.as_deref(), Some("Parameter 'id' is not set."));
    }

    #[test]
    fn test_missing_parameters() {
        let descriptor = echo_descriptor();
        assert_eq!(descriptor.missing_parameters(&ParameterValues::new()), vec!["id"]);
        assert!(
            descriptor
                .missing_parameters(&ParameterValues::new().with("id", "1"))
                .is_empty()
        );
    }

    #[test]
    fn test_find_data_set() {
        let descriptor = echo_descriptor();
        let set = descriptor.find_data_set("Set 1").unwrap();
        assert_eq!(set.parameters.get("id"), Some("5"));
        assert!(descriptor.find_data_set("Set 9").is_none());
    }
}
