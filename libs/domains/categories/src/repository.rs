use async_trait::async_trait;

use crate::error::CategoryResult;
use crate::models::Category;

/// Repository trait for Category reads
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category, unfiltered and unpaginated
    async fn list_all(&self) -> CategoryResult<Vec<Category>>;
}
