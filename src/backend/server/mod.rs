//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`config`** - Configuration loading from the environment, database pool
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - ServerConfig and database loading
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Database**: Connect the SQLite pool and run migrations
//! 3. **State Creation**: Pool, token keys and password hasher into `AppState`
//! 4. **Router Creation**: Routes, auth gate, tracing and CORS layers
//!
//! # Example
//!
//! ```rust,no_run
//! use inkpost::backend::server::{create_app, config::ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::AppState;
