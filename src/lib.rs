pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
pub mod journal;
pub mod logger;
pub mod modules;
pub mod runner;

// Re-export commonly used types
pub use catalog::{
    ModuleRegistry, ParameterDefinition, ParameterType, ParameterValues, TestDataSet,
    TestMethodDescriptor, TestModule, TestResult,
};
pub use error::{Result, VerifyxError};
