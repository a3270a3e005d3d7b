mod builtin;

use std::collections::HashMap;

use crate::error::{Result, RouterError};
use crate::models::ToolSpec;

pub use builtin::builtin_tools;

/// Immutable, ordered set of tool declarations.
///
/// Declaration order is kept because it decides both the order in which
/// matched tools are reported and which tool wins a key collision when
/// results are merged.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    specs: Vec<ToolSpec>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Build a registry, rejecting any id declared twice.
    pub fn new(specs: Vec<ToolSpec>) -> Result<Self> {
        let mut index = HashMap::with_capacity(specs.len());

        for (position, spec) in specs.iter().enumerate() {
            if spec.id.trim().is_empty() {
                return Err(RouterError::ConfigError(format!(
                    "Tool #{} is missing an 'id'",
                    position + 1
                )));
            }
            if spec.endpoint.trim().is_empty() {
                return Err(RouterError::ConfigError(format!(
                    "Tool '{}' is missing an 'endpoint'",
                    spec.id
                )));
            }
            if index.insert(spec.id.clone(), position).is_some() {
                return Err(RouterError::DuplicateTool(spec.id.clone()));
            }
        }

        Ok(Self { specs, index })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(builtin_tools())
    }

    pub fn get(&self, id: &str) -> Option<&ToolSpec> {
        self.index.get(id).map(|&position| &self.specs[position])
    }

    /// All declarations, in declaration order.
    pub fn all(&self) -> impl Iterator<Item = (&str, &ToolSpec)> {
        self.specs.iter().map(|spec| (spec.id.as_str(), spec))
    }

    pub fn specs(&self) -> &[ToolSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
