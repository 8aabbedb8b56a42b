use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;

/// Shared server state handed to every request handler.
///
/// Cloning is cheap: the database handle is reference counted
/// internally, so each handler gets a shallow copy.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB on RocksDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// Build state from already-initialized parts.
    ///
    /// Usually [`initialize()`](Self::initialize) is what you want.
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Initialize the server state.
    ///
    /// In order:
    /// 1. Working directory structure (created when missing)
    /// 2. Database at `work_dir/database/parket.db`
    ///
    /// # Panics
    ///
    /// Panics when the working directory cannot be created or the
    /// database fails to open. There is nothing to serve without them.
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("parket.db");
        let db_path_str = db_path.to_string_lossy();

        let db_service = DbService::new(&db_path_str)
            .await
            .expect("Failed to initialize database");

        Self::new(config.clone(), db_service.db)
    }
}
