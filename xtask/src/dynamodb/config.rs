//! Table configuration types (Functional Core - pure data).

use smartmenu_core::storage::conversions::{GSI1_PK, PK, SK};

/// Default name of the catalog table.
pub const DEFAULT_TABLE_NAME: &str = "SmartMenu";

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
    pub gsis: Vec<GsiConfig>,
}

/// A key attribute definition. Every key in the catalog table is a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
}

impl KeyAttribute {
    fn string(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Global Secondary Index configuration. Projections are always `ALL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GsiConfig {
    pub name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }

    /// Names of every attribute used in a key schema, table or index,
    /// without duplicates.
    pub fn key_attribute_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        let gsi_keys = self
            .gsis
            .iter()
            .flat_map(|gsi| std::iter::once(&gsi.partition_key).chain(gsi.sort_key.as_ref()));

        for key in std::iter::once(&self.partition_key)
            .chain(self.sort_key.as_ref())
            .chain(gsi_keys)
        {
            if !names.contains(&key.name.as_str()) {
                names.push(&key.name);
            }
        }
        names
    }
}

/// Returns the table configuration of the catalog: `pk`/`sk` primary key
/// plus `GSI1` on `indexGSI1PK`, billed per request.
pub fn smartmenu_table_config() -> TableConfig {
    TableConfig {
        table_name: DEFAULT_TABLE_NAME.to_string(),
        partition_key: KeyAttribute::string(PK),
        sort_key: Some(KeyAttribute::string(SK)),
        gsis: vec![GsiConfig {
            name: "GSI1".to_string(),
            partition_key: KeyAttribute::string(GSI1_PK),
            sort_key: None,
        }],
    }
}
