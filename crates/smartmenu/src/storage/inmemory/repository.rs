//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use smartmenu_core::menu::{demo_catalog, Category, MenuItem};
use smartmenu_core::storage::{keys, CatalogRepository, QueryOutcome, RepositoryError, Result};

/// A record stored in the single table.
#[derive(Debug, Clone, PartialEq)]
enum StoredItem {
    Category(Category),
    MenuItem(MenuItem),
}

/// Primary key: (partition key, sort key).
type TableKey = (String, String);

/// In-memory storage backend for tests and demos.
///
/// Mirrors the single-table layout: records are ordered by
/// `(pk, sk)` and queried with the same key conditions the DynamoDB backend
/// sends (partition equality, sort-key prefix, point get). A record of the
/// wrong entity kind under a queried partition fails to decode, as it would
/// in DynamoDB.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    items: Arc<RwLock<BTreeMap<TableKey, StoredItem>>>,
    /// Error returned by every call instead of touching the table.
    failure: Option<RepositoryError>,
    calls: Arc<AtomicUsize>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-loaded with the demo catalog of a branch.
    pub fn with_demo_data(country_code: &str, branch_id: &str) -> Self {
        let catalog = demo_catalog(country_code, branch_id);
        let mut items = BTreeMap::new();

        for category in catalog.categories {
            items.insert(
                (category.pk.clone(), category.sk.clone()),
                StoredItem::Category(category),
            );
        }
        for menu_item in catalog.menu_items {
            items.insert(
                (menu_item.pk.clone(), menu_item.sk.clone()),
                StoredItem::MenuItem(menu_item),
            );
        }

        Self {
            items: Arc::new(RwLock::new(items)),
            ..Self::default()
        }
    }

    /// Creates a repository whose every call fails with `error`.
    pub fn failing(error: RepositoryError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Stores a category, replacing any record with the same key.
    pub async fn put_category(&self, category: Category) {
        let key = (category.pk.clone(), category.sk.clone());
        self.items
            .write()
            .await
            .insert(key, StoredItem::Category(category));
    }

    /// Stores a menu item, replacing any record with the same key.
    pub async fn put_menu_item(&self, menu_item: MenuItem) {
        let key = (menu_item.pk.clone(), menu_item.sk.clone());
        self.items
            .write()
            .await
            .insert(key, StoredItem::MenuItem(menu_item));
    }

    /// Number of catalog operations served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin_call(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    /// Collects the records of one partition whose sort key starts with
    /// `sk_prefix`, in sort key order.
    async fn query(&self, pk: &str, sk_prefix: &str) -> Vec<(TableKey, StoredItem)> {
        let items = self.items.read().await;
        items
            .range((pk.to_string(), String::new())..)
            .take_while(|((item_pk, _), _)| item_pk == pk)
            .filter(|((_, item_sk), _)| keys::sort_key_matches(item_sk, sk_prefix))
            .map(|(key, item)| (key.clone(), item.clone()))
            .collect()
    }
}

fn wrong_entity(key: &TableKey, expected: &str) -> RepositoryError {
    RepositoryError::InvalidData(format!(
        "Item {}/{} is not a {}",
        key.0, key.1, expected
    ))
}

fn into_category((key, item): (TableKey, StoredItem)) -> Result<Category> {
    match item {
        StoredItem::Category(category) => Ok(category),
        StoredItem::MenuItem(_) => Err(wrong_entity(&key, "category")),
    }
}

fn into_menu_item((key, item): (TableKey, StoredItem)) -> Result<MenuItem> {
    match item {
        StoredItem::MenuItem(menu_item) => Ok(menu_item),
        StoredItem::Category(_) => Err(wrong_entity(&key, "menu item")),
    }
}

#[async_trait]
impl CatalogRepository for InMemoryRepository {
    async fn list_categories(
        &self,
        country_code: &str,
        branch_id: &str,
    ) -> Result<QueryOutcome<Vec<Category>>> {
        self.begin_call()?;
        let pk = keys::categories_pk(country_code, branch_id);

        let categories = self
            .query(&pk, "")
            .await
            .into_iter()
            .map(into_category)
            .collect::<Result<Vec<_>>>()?;

        Ok(QueryOutcome::from_items(categories))
    }

    async fn list_menu_items_by_category(
        &self,
        country_code: &str,
        branch_id: &str,
        category_id: &str,
    ) -> Result<QueryOutcome<Vec<MenuItem>>> {
        self.begin_call()?;
        let pk = keys::menu_items_pk(country_code, branch_id);
        let prefix = keys::category_sk_prefix(category_id);

        let menu_items = self
            .query(&pk, &prefix)
            .await
            .into_iter()
            .map(into_menu_item)
            .collect::<Result<Vec<_>>>()?;

        Ok(QueryOutcome::from_items(menu_items))
    }

    async fn list_all_menu_items_for_branch(
        &self,
        branch_id: &str,
    ) -> Result<QueryOutcome<Vec<MenuItem>>> {
        self.begin_call()?;
        let pk = keys::branch_all_items_pk(branch_id);

        let menu_items = self
            .query(&pk, "")
            .await
            .into_iter()
            .map(into_menu_item)
            .collect::<Result<Vec<_>>>()?;

        Ok(QueryOutcome::from_items(menu_items))
    }

    async fn get_menu_item(&self, pk: &str, sk: &str) -> Result<QueryOutcome<MenuItem>> {
        self.begin_call()?;
        let key = (pk.to_string(), sk.to_string());

        let found = self.items.read().await.get(&key).cloned();
        match found {
            Some(item) => Ok(QueryOutcome::Found(into_menu_item((key, item))?)),
            None => Ok(QueryOutcome::Empty),
        }
    }
}
