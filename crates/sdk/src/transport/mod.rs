//! Transport layer for the pkgdocs SDK.

pub mod http;

pub use http::HttpTransport;
