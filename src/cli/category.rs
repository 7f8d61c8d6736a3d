//! Category CLI commands

use clap::Subcommand;

use crate::error::BizbookResult;
use crate::models::Money;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Display color (hex)
        #[arg(short, long, default_value = "#71717a")]
        color: String,
        /// Icon name
        #[arg(short, long)]
        icon: Option<String>,
        /// Monthly budget (e.g., "5000" or "5000.00")
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// Rename a category
    Rename {
        /// Category name or ID
        category: String,
        /// New name
        name: String,
    },

    /// Delete a category (expenses keep the old name)
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> BizbookResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            for category in &categories {
                let budget = category
                    .budget
                    .map(|b| format!("  budget: {}", b))
                    .unwrap_or_default();
                println!("{:<24} {}{}", category.name, category.color, budget);
            }
            println!("\n{} category(ies)", categories.len());
        }

        CategoryCommands::Add {
            name,
            color,
            icon,
            budget,
        } => {
            let budget = budget
                .map(|raw| {
                    Money::parse(&raw)
                        .map_err(|e| crate::error::BizbookError::input(e.to_string()))
                })
                .transpose()?;

            let category = service.create(&name, &color, icon, budget)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id.as_uuid());
        }

        CategoryCommands::Rename { category, name } => {
            let existing = service
                .find(&category)?
                .ok_or_else(|| crate::error::BizbookError::category_not_found(&category))?;
            let renamed = service.rename(existing.id, &name)?;
            println!("Renamed category to: {}", renamed.name);
        }

        CategoryCommands::Delete { category } => {
            service.delete(&category)?;
            println!("Deleted category: {}", category);
            println!("Existing expenses keep the old category name.");
        }
    }

    Ok(())
}
