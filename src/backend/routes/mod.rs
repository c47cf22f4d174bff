//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, tracing and CORS layers
//! ├── user_routes.rs  - Public signup and signin routes
//! └── blog_routes.rs  - Blog routes behind the auth gate
//! ```
//!
//! # Routes
//!
//! ## User (public)
//!
//! - `POST /user/signup` - User registration
//! - `POST /user/signin` - User authentication
//!
//! ## Blog (bearer token required)
//!
//! - `POST /blog/` - Create a post
//! - `PUT /blog/` - Update an owned post
//! - `GET /blog/bulk` - List all posts
//! - `GET /blog/{id}` - Get a post by ID

/// Main router creation
pub mod router;

/// Signup and signin routes
pub mod user_routes;

/// Blog post routes
pub mod blog_routes;

// Re-export commonly used functions
pub use router::create_router;
