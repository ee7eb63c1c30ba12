use crate::catalog::method::TestMethodDescriptor;

/// A named group of related API operations.
///
/// `test_methods` builds a fresh list on every call and must be free of side
/// effects; callers should not rely on descriptor identity across calls.
pub trait TestModule: Send + Sync {
    fn name(&self) -> &str;

    fn test_methods(&self) -> Vec<TestMethodDescriptor>;
}

/// Ordered set of modules offered by the runner. Built once at startup and
/// read-only afterwards.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: Vec<Box<dyn TestModule>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<M: TestModule + 'static>(&mut self, module: M) {
        self.modules.push(Box::new(module));
    }

    pub fn with_module<M: TestModule + 'static>(mut self, module: M) -> Self {
        self.register(module);
        self
    }

    pub fn modules(&self) -> &[Box<dyn TestModule>] {
        &self.modules
    }

    pub fn get(&self, index: usize) -> Option<&dyn TestModule> {
        self.modules.get(index).map(|m| m.as_ref())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
