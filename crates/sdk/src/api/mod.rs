//! Endpoint groups of the pkgdocs API.

pub mod docs;
pub mod packages;

pub use docs::DocsApi;
pub use packages::PackagesApi;
