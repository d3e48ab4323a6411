//! API request types for the catalog operations.
//!
//! Every field is a required non-empty string. Missing fields deserialize as
//! empty strings so absence and emptiness are reported the same way by
//! [`Validate::validate`].

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Request payload validation.
pub trait Validate {
    /// Checks that every required field is present and non-empty.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Fails with the name of the first empty field.
fn require(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((name, _)) => Err(ValidationError::MissingField(*name)),
        None => Ok(()),
    }
}

/// Request payload for `POST /api/categories`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesRequest {
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub branch_id: String,
}

impl Validate for CategoriesRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&[
            ("countryCode", self.country_code.as_str()),
            ("branchId", self.branch_id.as_str()),
        ])
    }
}

/// Request payload for `POST /api/menu/items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemsRequest {
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub branch_id: String,
    #[serde(default)]
    pub category_id: String,
}

impl Validate for MenuItemsRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&[
            ("countryCode", self.country_code.as_str()),
            ("branchId", self.branch_id.as_str()),
            ("categoryId", self.category_id.as_str()),
        ])
    }
}

/// Request payload for `POST /api/menu/item`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleMenuItemRequest {
    #[serde(default)]
    pub pk: String,
    #[serde(default)]
    pub sk: String,
}

impl Validate for SingleMenuItemRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&[("pk", self.pk.as_str()), ("sk", self.sk.as_str())])
    }
}

/// Request payload for `POST /api/branch/menu`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchMenuRequest {
    #[serde(default)]
    pub branch_id: String,
}

impl Validate for BranchMenuRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&[("branchId", self.branch_id.as_str())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_request_valid() {
        let request: CategoriesRequest =
            serde_json::from_str(r#"{"countryCode":"US","branchId":"b1"}"#).unwrap();

        assert_eq!(request.country_code, "US");
        assert_eq!(request.branch_id, "b1");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_categories_request_missing_branch() {
        let request: CategoriesRequest = serde_json::from_str(r#"{"countryCode":"US"}"#).unwrap();

        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingField("branchId"))
        );
    }

    #[test]
    fn test_menu_items_request_reports_first_empty_field() {
        let request: MenuItemsRequest =
            serde_json::from_str(r#"{"countryCode":"","branchId":"","categoryId":"c1"}"#).unwrap();

        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingField("countryCode"))
        );
    }

    #[test]
    fn test_single_menu_item_request_empty_sk() {
        let request: SingleMenuItemRequest =
            serde_json::from_str(r#"{"pk":"US#MI#BR#b1","sk":""}"#).unwrap();

        assert_eq!(request.validate(), Err(ValidationError::MissingField("sk")));
    }

    #[test]
    fn test_branch_menu_request_empty_object() {
        let request: BranchMenuRequest = serde_json::from_str("{}").unwrap();

        assert_eq!(
            request.validate(),
            Err(ValidationError::MissingField("branchId"))
        );
    }

    #[test]
    fn test_wrong_field_type_fails_to_decode() {
        let result = serde_json::from_str::<BranchMenuRequest>(r#"{"branchId":42}"#);

        assert!(result.is_err());
    }
}
