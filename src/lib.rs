//! houseflow-codegen library
//!
//! - [`defines`]: layered dotenv loading and build define injection
//! - [`scrape`]: device trait and device type table extraction
//! - [`render`]: doc-commented enum variant output
//! - [`fetch`]: documentation page retrieval
//! - [`config`]: the tool's own settings

pub mod config;
pub mod defines;
pub mod domain;
pub mod fetch;
pub mod render;
pub mod scrape;
pub mod utils;
