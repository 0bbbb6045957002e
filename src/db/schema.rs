use anyhow::{Context, Result};
use rusqlite::Connection;

struct TableSpec {
    name: &'static str,
    create_sql: &'static str,
    /// Columns added after the first release; appended when absent.
    optional_columns: &'static [(&'static str, &'static str)],
}

const TABLES: &[TableSpec] = &[
    TableSpec {
        name: "blog",
        create_sql: r#"
        CREATE TABLE IF NOT EXISTS blog (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            img TEXT,
            title TEXT,
            title_uz TEXT,
            title_en TEXT,
            description TEXT,
            description_uz TEXT,
            description_en TEXT
        )
        "#,
        optional_columns: &[
            ("images", "TEXT"),
            ("links", "TEXT"),
            ("title_uz", "TEXT"),
            ("title_en", "TEXT"),
            ("description_uz", "TEXT"),
            ("description_en", "TEXT"),
        ],
    },
    TableSpec {
        name: "projects",
        create_sql: r#"
        CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            img TEXT,
            title TEXT,
            title_uz TEXT,
            title_en TEXT,
            description TEXT,
            description_uz TEXT,
            description_en TEXT
        )
        "#,
        optional_columns: &[
            ("images", "TEXT"),
            ("links", "TEXT"),
            ("title_uz", "TEXT"),
            ("title_en", "TEXT"),
            ("description_uz", "TEXT"),
            ("description_en", "TEXT"),
        ],
    },
    TableSpec {
        name: "led",
        create_sql: r#"
        CREATE TABLE IF NOT EXISTS led (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            img TEXT,
            title TEXT,
            title_uz TEXT,
            title_en TEXT,
            description TEXT,
            description_uz TEXT,
            description_en TEXT,
            location TEXT,
            images TEXT
        )
        "#,
        optional_columns: &[
            ("images", "TEXT"),
            ("location", "TEXT"),
            ("title_uz", "TEXT"),
            ("title_en", "TEXT"),
            ("description_uz", "TEXT"),
            ("description_en", "TEXT"),
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedColumn {
    pub table: &'static str,
    pub column: &'static str,
}

#[derive(Debug, Default)]
pub struct SchemaReport {
    pub added: Vec<AddedColumn>,
}

pub(super) fn initialize(conn: &Connection) -> Result<SchemaReport> {
    let mut report = SchemaReport::default();

    for table in TABLES {
        conn.execute_batch(table.create_sql)
            .with_context(|| format!("creating table {}", table.name))?;

        for &(column, column_type) in table.optional_columns {
            if ensure_column(conn, table.name, column, column_type)? {
                tracing::info!("Added column {}.{}", table.name, column);
                report.added.push(AddedColumn {
                    table: table.name,
                    column,
                });
            }
        }
    }

    Ok(report)
}

/// Returns `true` when the column had to be added.
fn ensure_column(conn: &Connection, table: &str, column: &str, column_type: &str) -> Result<bool> {
    if column_names(conn, table)?.iter().any(|c| c == column) {
        return Ok(false);
    }

    conn.execute_batch(&format!(
        "ALTER TABLE {} ADD COLUMN {} {}",
        table, column, column_type
    ))
    .with_context(|| format!("adding column {}.{}", table, column))?;
    Ok(true)
}

pub(crate) fn column_names(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(names)
}
