use crate::builtins;
use crate::core::Heap;
use crate::errors::NumericResult;
use grim_core::Value;

pub type BuiltinFn = fn(&mut Heap, &[Value]) -> NumericResult<Value>;

pub struct BuiltinRegistry {
    entries: Vec<(String, BuiltinFn)>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry with the standard numeric built-ins installed.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        StdBuiltinProvider.install(&mut registry);
        registry
    }

    /// Later registrations shadow earlier ones under the same name.
    pub fn register(&mut self, name: &str, fun: BuiltinFn) {
        self.entries.push((name.to_string(), fun));
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn lookup(&self, name: &str) -> Option<BuiltinFn> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, f)| *f)
    }

    /// Call `name`, or `None` when nothing is registered under it.
    pub fn call(&self, name: &str, heap: &mut Heap, args: &[Value]) -> Option<NumericResult<Value>> {
        self.lookup(name).map(|f| f(heap, args))
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub trait BuiltinProvider {
    fn install(&self, registry: &mut BuiltinRegistry);
}

pub struct StdBuiltinProvider;

impl BuiltinProvider for StdBuiltinProvider {
    fn install(&self, registry: &mut BuiltinRegistry) {
        registry.register("+", builtins::builtin_add);
        registry.register("-", builtins::builtin_sub);
    }
}
