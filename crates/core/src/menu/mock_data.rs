//! Demo catalog generation for local runs and seeding.
//!
//! Pure functions producing a small but realistic menu for one branch. Used
//! by the in-memory backend's demo mode and by `cargo xtask dynamodb seed`.

use crate::storage::keys;

use super::types::{Category, MenuItem};

/// Categories and menu items of one branch.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoCatalog {
    pub categories: Vec<Category>,
    pub menu_items: Vec<MenuItem>,
}

struct DemoItem {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    price: f64,
    sub_category: &'static str,
    tags: &'static [&'static str],
    is_available: bool,
}

const STARTERS: &[DemoItem] = &[
    DemoItem {
        id: "01HM0A2B3C4D5E6F7G8H9J0K1M",
        title: "Garlic Bread",
        description: "Toasted sourdough with garlic butter and parsley",
        price: 4.5,
        sub_category: "Breads",
        tags: &["vegetarian"],
        is_available: true,
    },
    DemoItem {
        id: "01HM0A2B3C4D5E6F7G8H9J0K1N",
        title: "Chicken Wings",
        description: "Six wings tossed in smoked paprika glaze",
        price: 8.25,
        sub_category: "Fried",
        tags: &["spicy", "gluten-free"],
        is_available: true,
    },
];

const MAINS: &[DemoItem] = &[
    DemoItem {
        id: "01HM0A2B3C4D5E6F7G8H9J0K2A",
        title: "Margherita Pizza",
        description: "Tomato, fior di latte and basil",
        price: 11.0,
        sub_category: "Pizza",
        tags: &["vegetarian"],
        is_available: true,
    },
    DemoItem {
        id: "01HM0A2B3C4D5E6F7G8H9J0K2B",
        title: "Ribeye Steak",
        description: "300g ribeye with chimichurri and fries",
        price: 24.9,
        sub_category: "Grill",
        tags: &[],
        is_available: false,
    },
];

const DRINKS: &[DemoItem] = &[
    DemoItem {
        id: "01HM0A2B3C4D5E6F7G8H9J0K3A",
        title: "Espresso",
        description: "Single shot",
        price: 2.2,
        sub_category: "Coffee",
        tags: &["hot"],
        is_available: true,
    },
    DemoItem {
        id: "01HM0A2B3C4D5E6F7G8H9J0K3B",
        title: "Lemonade",
        description: "House-made with fresh mint",
        price: 3.75,
        sub_category: "Cold",
        tags: &["vegan"],
        is_available: true,
    },
];

/// Category ids, names and items of the demo menu.
const DEMO_MENU: &[(&str, &str, &[DemoItem])] = &[
    ("01HM0CATSTARTERS000000000A", "Starters", STARTERS),
    ("01HM0CATMAINS0000000000000B", "Mains", MAINS),
    ("01HM0CATDRINKS00000000000C", "Drinks", DRINKS),
];

/// Generate the demo catalog of a branch.
///
/// Keys follow the catalog key schema, so the result can be queried with
/// the same access patterns as production data.
///
/// # Example
///
/// ```
/// use smartmenu_core::menu::demo_catalog;
///
/// let catalog = demo_catalog("US", "01FHZXHK8PTP9FVK99Z66GXQTX");
///
/// assert_eq!(catalog.categories.len(), 3);
/// assert!(catalog.menu_items.iter().all(|item| item.pk == "US#MI#BR#01FHZXHK8PTP9FVK99Z66GXQTX"));
/// ```
pub fn demo_catalog(country_code: &str, branch_id: &str) -> DemoCatalog {
    let categories_pk = keys::categories_pk(country_code, branch_id);
    let items_pk = keys::menu_items_pk(country_code, branch_id);

    let mut categories = Vec::with_capacity(DEMO_MENU.len());
    let mut menu_items = Vec::new();

    for (category_id, name, items) in DEMO_MENU {
        categories.push(Category::new(
            categories_pk.clone(),
            *category_id,
            *name,
            *category_id,
        ));

        for item in items.iter() {
            menu_items.push(
                MenuItem::new(
                    items_pk.clone(),
                    keys::menu_item_sk(category_id, item.id),
                    item.id,
                    item.title,
                    item.price,
                    "USD",
                )
                .with_gsi1_pk(format!("{country_code}#MI#{}", item.id))
                .with_category(*name, *category_id)
                .with_sub_category(item.sub_category)
                .with_description(item.description)
                .with_image_url(format!("https://images.smartmenu.dev/{}.jpg", item.id))
                .with_tags(item.tags.iter().copied())
                .with_availability(item.is_available),
            );
        }
    }

    DemoCatalog {
        categories,
        menu_items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_counts() {
        let catalog = demo_catalog("US", "b1");

        assert_eq!(catalog.categories.len(), 3);
        assert_eq!(catalog.menu_items.len(), 6);
    }

    #[test]
    fn test_demo_categories_share_partition() {
        let catalog = demo_catalog("UY", "b7");

        assert!(catalog
            .categories
            .iter()
            .all(|category| category.pk == "UY#CAT#BR#b7"));
    }

    #[test]
    fn test_demo_items_sorted_under_their_category() {
        let catalog = demo_catalog("US", "b1");

        for item in &catalog.menu_items {
            assert!(item
                .sk
                .starts_with(&keys::category_sk_prefix(&item.category_id)));
            assert!(item.sk.ends_with(&item.entity_id));
        }
    }

    #[test]
    fn test_demo_catalog_has_unavailable_and_untagged_item() {
        let catalog = demo_catalog("US", "b1");

        assert!(catalog.menu_items.iter().any(|item| !item.is_available));
        assert!(catalog.menu_items.iter().any(|item| item.tags.is_empty()));
    }
}
