//! Pure functions for calculating deployment plans (Functional Core).

use std::fmt;

use super::config::{GsiConfig, TableConfig};

/// Represents the current state of a table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
    pub gsis: Vec<GsiState>,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            TableStatus::Active => "ACTIVE",
            TableStatus::Creating => "CREATING",
            TableStatus::Updating => "UPDATING",
            TableStatus::Deleting => "DELETING",
        };
        f.write_str(status)
    }
}

/// GSI state.
#[derive(Debug, Clone)]
pub struct GsiState {
    pub name: String,
    pub status: GsiStatus,
}

/// GSI status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GsiStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

impl TableState {
    /// True once the table and all of its indexes accept traffic.
    pub fn is_ready(&self) -> bool {
        self.status == TableStatus::Active && self.gsis.iter().all(|g| g.status == GsiStatus::Active)
    }
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists, GSIs need to be added.
    AddGsis {
        table_name: String,
        gsis_to_add: Vec<GsiConfig>,
    },
    /// Table exists but is mid-transition; nothing can be applied now.
    Blocked {
        table_name: String,
        status: TableStatus,
    },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

/// Calculate what changes are needed to reach the desired state.
///
/// Indexes present on the table but absent from `desired` are left alone.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    let Some(state) = current else {
        return DeployPlan::CreateTable {
            config: desired.clone(),
        };
    };

    let gsis_to_add: Vec<GsiConfig> = desired
        .gsis
        .iter()
        .filter(|gsi| !state.gsis.iter().any(|g| g.name == gsi.name))
        .cloned()
        .collect();

    if gsis_to_add.is_empty() {
        DeployPlan::NoChanges {
            table_name: desired.table_name.clone(),
        }
    } else if state.status != TableStatus::Active {
        DeployPlan::Blocked {
            table_name: desired.table_name.clone(),
            status: state.status,
        }
    } else {
        DeployPlan::AddGsis {
            table_name: desired.table_name.clone(),
            gsis_to_add,
        }
    }
}

/// Calculate the destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    let table_name = table_name.to_string();
    match current {
        Some(_) => DestroyPlan::DeleteTable { table_name },
        None => DestroyPlan::AlreadyGone { table_name },
    }
}

fn format_gsi(gsi: &GsiConfig, marker: &str) -> Vec<String> {
    let mut lines = vec![
        format!("  {} GSI: {}", marker, gsi.name),
        format!("    Partition key: {} (S)", gsi.partition_key.name),
    ];
    if let Some(sk) = &gsi.sort_key {
        lines.push(format!("    Sort key: {} (S)", sk.name));
    }
    lines
}

/// Format a deploy plan for display.
///
/// Lines start with `+` (create), `~` (update), `!` (blocked) or `=` (no-op).
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => {
            let mut lines = vec![
                format!("+ Create table: {}", config.table_name),
                format!("  Partition key: {} (S)", config.partition_key.name),
            ];
            if let Some(sk) = &config.sort_key {
                lines.push(format!("  Sort key: {} (S)", sk.name));
            }
            for gsi in &config.gsis {
                lines.extend(format_gsi(gsi, "+"));
            }
            lines.push("  Billing: PAY_PER_REQUEST".to_string());
            lines
        }
        DeployPlan::AddGsis {
            table_name,
            gsis_to_add,
        } => {
            let mut lines = vec![format!("~ Update table: {}", table_name)];
            for gsi in gsis_to_add {
                lines.extend(format_gsi(gsi, "+ Add"));
            }
            lines
        }
        DeployPlan::Blocked { table_name, status } => {
            vec![format!("! Table '{}' is {}", table_name, status)]
        }
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

/// Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::smartmenu_table_config;

    fn state(status: TableStatus, gsis: &[&str]) -> TableState {
        TableState {
            status,
            gsis: gsis
                .iter()
                .map(|name| GsiState {
                    name: name.to_string(),
                    status: GsiStatus::Active,
                })
                .collect(),
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = smartmenu_table_config();

        let plan = calculate_deploy_plan(None, &desired);

        assert_eq!(plan, DeployPlan::CreateTable { config: desired });
    }

    #[test]
    fn test_missing_gsi_is_added() {
        let desired = smartmenu_table_config();

        let plan = calculate_deploy_plan(Some(&state(TableStatus::Active, &[])), &desired);

        assert_eq!(
            plan,
            DeployPlan::AddGsis {
                table_name: "SmartMenu".to_string(),
                gsis_to_add: desired.gsis.clone(),
            }
        );
    }

    #[test]
    fn test_complete_table_has_no_changes() {
        let desired = smartmenu_table_config();

        let plan = calculate_deploy_plan(
            Some(&state(TableStatus::Active, &["GSI1", "Legacy"])),
            &desired,
        );

        assert!(matches!(plan, DeployPlan::NoChanges { .. }));
    }

    #[test]
    fn test_updating_table_blocks_gsi_changes() {
        let desired = smartmenu_table_config();

        let plan = calculate_deploy_plan(Some(&state(TableStatus::Updating, &[])), &desired);

        assert_eq!(
            format_deploy_plan(&plan),
            vec!["! Table 'SmartMenu' is UPDATING".to_string()]
        );
    }

    #[test]
    fn test_format_create_plan() {
        let plan = calculate_deploy_plan(None, &smartmenu_table_config());

        assert_eq!(
            format_deploy_plan(&plan),
            vec![
                "+ Create table: SmartMenu",
                "  Partition key: pk (S)",
                "  Sort key: sk (S)",
                "  + GSI: GSI1",
                "    Partition key: indexGSI1PK (S)",
                "  Billing: PAY_PER_REQUEST",
            ]
        );
    }

    #[test]
    fn test_destroy_plan() {
        let existing = state(TableStatus::Active, &["GSI1"]);

        assert_eq!(
            calculate_destroy_plan(Some(&existing), "SmartMenu"),
            DestroyPlan::DeleteTable {
                table_name: "SmartMenu".to_string()
            }
        );
        assert_eq!(
            format_destroy_plan(&calculate_destroy_plan(None, "SmartMenu")),
            vec!["= Table 'SmartMenu' does not exist".to_string()]
        );
    }

    #[test]
    fn test_is_ready_requires_active_indexes() {
        let mut table = state(TableStatus::Active, &["GSI1"]);
        assert!(table.is_ready());

        table.gsis[0].status = GsiStatus::Creating;
        assert!(!table.is_ready());
    }
}
