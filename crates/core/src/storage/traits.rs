use async_trait::async_trait;

use crate::menu::{Category, MenuItem};

use super::{QueryOutcome, Result};

/// Read access to the menu catalog.
///
/// Every operation issues exactly one store call. Zero matching items yield
/// [`QueryOutcome::Empty`]; store and decode failures yield an error.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Lists every category of a branch.
    async fn list_categories(
        &self,
        country_code: &str,
        branch_id: &str,
    ) -> Result<QueryOutcome<Vec<Category>>>;

    /// Lists the menu items of one category of a branch.
    async fn list_menu_items_by_category(
        &self,
        country_code: &str,
        branch_id: &str,
        category_id: &str,
    ) -> Result<QueryOutcome<Vec<MenuItem>>>;

    /// Lists the items stored under the raw branch id partition.
    async fn list_all_menu_items_for_branch(
        &self,
        branch_id: &str,
    ) -> Result<QueryOutcome<Vec<MenuItem>>>;

    /// Gets a single menu item by its full primary key.
    async fn get_menu_item(&self, pk: &str, sk: &str) -> Result<QueryOutcome<MenuItem>>;
}
