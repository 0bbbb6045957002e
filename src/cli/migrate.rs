use crate::{Config, Database};
use anyhow::Result;
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let db = Database::open_with_pool_size(&config.database.path, config.database.pool_size)?;

    let report = db.migrate()?;

    if report.added.is_empty() {
        println!("Schema up to date ({})", config.database.path);
    } else {
        println!("\n  Added columns\n");
        for column in &report.added {
            println!("  {:<10} {}", column.table, column.column);
        }
        println!();
    }

    Ok(())
}
