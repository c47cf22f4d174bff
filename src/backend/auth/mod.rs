//! Authentication Module
//!
//! This module handles user registration, signin and the bearer tokens that
//! authenticate every blog request.
//!
//! # Architecture
//!
//! - **`users`** - User data model, password hashing, database operations
//! - **`sessions`** - JWT token issuing and verification
//! - **`handlers`** - HTTP handlers for `/user/signup` and `/user/signin`
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Response types
//!     ├── signup.rs   - User registration handler
//!     └── signin.rs   - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → user created → token returned
//! 2. **Signin**: email and password → hash verified → token returned
//! 3. **Blog requests**: token in `Authorization: Bearer` → verified by the
//!    auth gate → user ID available to handlers
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are stateless HS256 JWTs with an expiry
//! - Unknown email and wrong password get the same 403 response

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::AuthResponse;
pub use handlers::{signin, signup};
pub use sessions::{Claims, TokenKeys};
pub use users::{PasswordHasher, User};
