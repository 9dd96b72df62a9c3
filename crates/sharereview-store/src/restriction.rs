//! Fixed app restriction list.

use async_trait::async_trait;

use sharereview_core::result::AppResult;
use sharereview_core::traits::AppRestriction;

/// App restriction read from the fixture.
#[derive(Debug, Clone, Default)]
pub struct StaticRestriction {
    groups: Vec<String>,
}

impl StaticRestriction {
    /// Restrict the app to `groups`; empty means unrestricted.
    pub fn new(groups: Vec<String>) -> Self {
        Self { groups }
    }
}

#[async_trait]
impl AppRestriction for StaticRestriction {
    async fn restricted_groups(&self) -> AppResult<Vec<String>> {
        Ok(self.groups.clone())
    }
}
