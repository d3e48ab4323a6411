mod error;
mod mock_data;
mod requests;
mod types;

pub use error::ValidationError;
pub use mock_data::{demo_catalog, DemoCatalog};
pub use requests::{
    BranchMenuRequest, CategoriesRequest, MenuItemsRequest, SingleMenuItemRequest, Validate,
};
pub use types::{Category, MenuItem, ENTITY_MENU_ITEM};
