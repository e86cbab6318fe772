use quine_core::BooleanFunction;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

/// The interpreter's workspace: boolean functions bound to names.
#[derive(Debug, Default)]
pub struct Runtime {
    workspace: FxHashMap<SmolStr, BooleanFunction>,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a function to a name, replacing any previous binding.
    pub fn save(&mut self, name: impl Into<SmolStr>, function: BooleanFunction) {
        self.workspace.insert(name.into(), function);
    }

    pub fn get(&self, name: &str) -> Option<&BooleanFunction> {
        self.workspace.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<BooleanFunction> {
        self.workspace.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.workspace.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.workspace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workspace.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quine_core::parse;

    #[test]
    fn test_save_and_get() {
        let mut runtime = Runtime::new();
        assert!(runtime.is_empty());
        runtime.save("f", parse("a & b").unwrap());
        assert!(runtime.contains("f"));
        assert_eq!(runtime.get("f").unwrap().minterms(), [3]);
        assert!(runtime.get("g").is_none());
    }

    #[test]
    fn test_save_overwrites() {
        let mut runtime = Runtime::new();
        runtime.save("f", parse("a").unwrap());
        runtime.save("f", parse("!a").unwrap());
        assert_eq!(runtime.len(), 1);
        assert_eq!(runtime.get("f").unwrap().minterms(), [0]);
    }

    #[test]
    fn test_remove() {
        let mut runtime = Runtime::new();
        runtime.save("f", parse("a").unwrap());
        assert!(runtime.remove("f").is_some());
        assert!(runtime.remove("f").is_none());
        assert!(!runtime.contains("f"));
    }
}
