//! Key generation functions for the single-table catalog.
//!
//! Pure functions for generating partition and sort keys. Every access
//! pattern of the catalog builds its keys here. All functions are sync,
//! total and have no side effects; empty inputs are rejected by request
//! validation before they reach this module.

// ============================================================================
// Key components
// ============================================================================

/// Separator between key components.
pub const KEY_DELIMITER: &str = "#";

/// Partition type marker for categories.
pub const CATEGORY_MARKER: &str = "CAT";

/// Partition type marker for menu items.
pub const MENU_ITEM_MARKER: &str = "MI";

/// Branch marker preceding the branch id in composite partition keys.
pub const BRANCH_MARKER: &str = "BR";

fn branch_scoped_pk(country_code: &str, marker: &str, branch_id: &str) -> String {
    format!("{country_code}{KEY_DELIMITER}{marker}{KEY_DELIMITER}{BRANCH_MARKER}{KEY_DELIMITER}{branch_id}")
}

// ============================================================================
// Category keys
// ============================================================================

/// Generate the partition key holding every category of a branch.
///
/// Pattern: `<country_code>#CAT#BR#<branch_id>`
pub fn categories_pk(country_code: &str, branch_id: &str) -> String {
    branch_scoped_pk(country_code, CATEGORY_MARKER, branch_id)
}

// ============================================================================
// Menu item keys
// ============================================================================

/// Generate the partition key holding every menu item of a branch.
///
/// Pattern: `<country_code>#MI#BR#<branch_id>`
pub fn menu_items_pk(country_code: &str, branch_id: &str) -> String {
    branch_scoped_pk(country_code, MENU_ITEM_MARKER, branch_id)
}

/// Generate the sort key of a menu item.
///
/// Pattern: `<category_id>#<item_id>`
pub fn menu_item_sk(category_id: &str, item_id: &str) -> String {
    format!("{category_id}{KEY_DELIMITER}{item_id}")
}

/// Generate the sort key prefix matching every item of a category.
///
/// Pattern: `<category_id>#`
///
/// The trailing delimiter keeps category `10` from matching items of
/// category `100`.
pub fn category_sk_prefix(category_id: &str) -> String {
    format!("{category_id}{KEY_DELIMITER}")
}

// ============================================================================
// Branch keys
// ============================================================================

/// Generate the partition key for the "all items of a branch" query.
///
/// Pattern: `<branch_id>` (no composite prefix)
///
/// Unlike every other access pattern this one uses the raw branch id, so it
/// cannot match items written under `<country_code>#MI#BR#<branch_id>`.
/// Kept as-is until the intended layout is clarified.
pub fn branch_all_items_pk(branch_id: &str) -> String {
    branch_id.to_string()
}

/// Returns true when `sort_key` falls under `prefix` (DynamoDB `begins_with`).
pub fn sort_key_matches(sort_key: &str, prefix: &str) -> bool {
    sort_key.starts_with(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_pk() {
        assert_eq!(
            categories_pk("US", "01FHZXHK8PTP9FVK99Z66GXQTX"),
            "US#CAT#BR#01FHZXHK8PTP9FVK99Z66GXQTX"
        );
    }

    #[test]
    fn test_categories_pk_distinct_pairs_do_not_collide() {
        let pairs = [("US", "b1"), ("UY", "b1"), ("US", "b2"), ("USB", "1")];
        let keys: std::collections::HashSet<String> = pairs
            .iter()
            .map(|(country, branch)| categories_pk(country, branch))
            .collect();

        assert_eq!(keys.len(), pairs.len());
    }

    #[test]
    fn test_menu_items_pk() {
        assert_eq!(
            menu_items_pk("US", "01FHZXHK8PTP9FVK99Z66GXQTX"),
            "US#MI#BR#01FHZXHK8PTP9FVK99Z66GXQTX"
        );
    }

    #[test]
    fn test_categories_and_menu_items_use_different_partitions() {
        assert_ne!(categories_pk("US", "b1"), menu_items_pk("US", "b1"));
    }

    #[test]
    fn test_menu_item_sk() {
        assert_eq!(menu_item_sk("drinks", "espresso"), "drinks#espresso");
    }

    #[test]
    fn test_category_sk_prefix() {
        assert_eq!(category_sk_prefix("drinks"), "drinks#");
    }

    #[test]
    fn test_prefix_matches_items_of_category() {
        let prefix = category_sk_prefix("10");

        assert!(sort_key_matches(&menu_item_sk("10", "a"), &prefix));
        assert!(sort_key_matches("10#anything#else", &prefix));
    }

    #[test]
    fn test_prefix_does_not_match_longer_category_id() {
        let prefix = category_sk_prefix("10");

        assert!(!sort_key_matches(&menu_item_sk("100", "a"), &prefix));
        assert!(!sort_key_matches("10x#a", &prefix));
        assert!(!sort_key_matches("10", &prefix));
    }

    #[test]
    fn test_branch_all_items_pk_is_raw_branch_id() {
        assert_eq!(branch_all_items_pk("b1"), "b1");
        assert_ne!(branch_all_items_pk("b1"), menu_items_pk("US", "b1"));
    }
}
