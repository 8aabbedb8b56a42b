//! Parket Server - ERP backend for a flooring and interior design company
//!
//! # Overview
//!
//! Main entry point of the server, wiring together:
//!
//! - **Database** (`db`): embedded SurrealDB storage with one repository per table
//! - **Pricing** (`pricing`): waste/discount pipeline and room/variant/phase roll-ups
//! - **HTTP API** (`api`): RESTful endpoints for the client/project tree,
//!   the product catalog, orders, invoices and offers
//! - **Services** (`services`): router assembly and on-demand summary computation
//!
//! # Module structure
//!
//! ```text
//! parket-server/src/
//! ├── core/          # configuration, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # router assembly, summary service
//! ├── pricing/       # price aggregation
//! ├── db/            # models, repositories, schema
//! └── utils/         # logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod pricing;
pub mod services;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use services::SummaryService;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Prepare the process environment: .env file, log directory, logger.
///
/// Must run before anything logs.
pub fn setup_environment() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();

    if let Some(dir) = &log_dir {
        std::fs::create_dir_all(dir)?;
        cleanup_old_logs(dir, 30)?;
    }

    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____             __        __
   / __ \____ ______/ /_____  / /_
  / /_/ / __ `/ ___/ //_/ _ \/ __/
 / ____/ /_/ / /  / ,< /  __/ /_
/_/    \__,_/_/  /_/|_|\___/\__/
    "#
    );
}
