pub mod method;
pub mod module;
pub mod result;
pub mod types;

pub use method::{ExecuteFn, ExecuteFuture, TestMethodDescriptor};
pub use module::{ModuleRegistry, TestModule};
pub use result::TestResult;
pub use types::{ParameterDefinition, ParameterType, ParameterValues, TestDataSet};
