use serde::{Deserialize, Serialize};

/// Per-method settings threaded through a fragmentation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Internal name (`pkg/sub/Outer$Inner`) of the type whose method is being
    /// fragmented. Reference tokens use it as their owner.
    pub current_internal_type_name: String,
}

impl Environment {
    pub fn new(current_internal_type_name: &str) -> Self {
        Self {
            current_internal_type_name: current_internal_type_name.to_string(),
        }
    }

    /// Package of the current type, `/`-separated; empty for the default
    /// package.
    pub fn package(&self) -> &str {
        match self.current_internal_type_name.rfind('/') {
            Some(pos) => &self.current_internal_type_name[..pos],
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_of_current_type() {
        assert_eq!(Environment::new("com/acme/Main$1").package(), "com/acme");
        assert_eq!(Environment::new("Main").package(), "");
    }
}
