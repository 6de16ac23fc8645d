pub mod docs;
pub mod packages;
mod registry;

pub use docs::{PackageDocSearchTool, PACKAGE_DOC_SEARCH};
pub use packages::{PackageSearchTool, PACKAGE_SEARCH};
pub use registry::{Tool, ToolError, ToolRegistry};
