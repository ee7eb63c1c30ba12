pub mod todo;

pub use todo::TodoApiModule;

use crate::catalog::ModuleRegistry;
use crate::config::Config;

/// Registry with every built-in module, configured from `config`
pub fn default_registry(config: &Config) -> ModuleRegistry {
    ModuleRegistry::new().with_module(TodoApiModule::new(
        config.todo.base_url.clone(),
        config.todo.timeout(),
    ))
}
