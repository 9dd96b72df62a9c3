//! Table-backed name resolver.

use std::collections::HashMap;

use async_trait::async_trait;

use sharereview_core::error::AppError;
use sharereview_core::result::AppResult;
use sharereview_core::traits::NameResolver;

/// Resolves identifiers from a fixed id → display-name table.
#[derive(Debug, Clone, Default)]
pub struct TableResolver {
    names: HashMap<String, String>,
}

impl TableResolver {
    /// Create a resolver over `names`.
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }
}

#[async_trait]
impl NameResolver for TableResolver {
    async fn resolve(&self, id: &str) -> AppResult<String> {
        self.names
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("No display name for '{id}'")))
    }
}
