//! Database Schema
//!
//! Applied on every startup. All statements carry IF NOT EXISTS so a boot
//! over an existing data directory changes nothing.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

/// Tables, unique constraints and lookup indexes
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS client SCHEMALESS;
DEFINE INDEX IF NOT EXISTS client_name ON client FIELDS name UNIQUE;

DEFINE TABLE IF NOT EXISTS project SCHEMALESS;
DEFINE INDEX IF NOT EXISTS project_client ON project FIELDS client;

DEFINE TABLE IF NOT EXISTS phase SCHEMALESS;
DEFINE INDEX IF NOT EXISTS phase_project ON phase FIELDS project;

DEFINE TABLE IF NOT EXISTS variant SCHEMALESS;
DEFINE INDEX IF NOT EXISTS variant_phase ON variant FIELDS phase;

DEFINE TABLE IF NOT EXISTS room SCHEMALESS;
DEFINE INDEX IF NOT EXISTS room_variant ON room FIELDS variant;

DEFINE TABLE IF NOT EXISTS room_product SCHEMALESS;
DEFINE INDEX IF NOT EXISTS room_product_room ON room_product FIELDS room;

DEFINE TABLE IF NOT EXISTS product SCHEMALESS;
DEFINE INDEX IF NOT EXISTS product_code ON product FIELDS code UNIQUE;

DEFINE TABLE IF NOT EXISTS order SCHEMALESS;
DEFINE INDEX IF NOT EXISTS order_number ON order FIELDS number UNIQUE;

DEFINE TABLE IF NOT EXISTS invoice SCHEMALESS;
DEFINE INDEX IF NOT EXISTS invoice_number ON invoice FIELDS number UNIQUE;
DEFINE INDEX IF NOT EXISTS invoice_order ON invoice FIELDS order;

DEFINE TABLE IF NOT EXISTS offer SCHEMALESS;
DEFINE INDEX IF NOT EXISTS offer_number ON offer FIELDS number UNIQUE;
"#;

/// Run the schema statements against the given connection
pub async fn apply(db: &Surreal<Db>) -> Result<(), surrealdb::Error> {
    db.query(SCHEMA).await?.check()?;
    Ok(())
}
