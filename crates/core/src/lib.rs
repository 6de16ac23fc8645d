// Core types for the pkgdocs tool adapter: argument shapes and validation

pub mod error;
pub mod schema;
pub mod types;

pub use error::ValidationError;
pub use schema::{ArgumentShape, FieldKind, FieldSpec};
pub use types::*;
