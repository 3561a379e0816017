//! Configuration system for oxbind
//!
//! Project-level defaults for parse options and source map rendering,
//! discovered by walking up from a start directory.
//!
//! ## Configuration Files
//!
//! Searched in this order in each directory:
//! - `.oxbindrc.json`
//! - `.oxbindrc.toml`
//! - `oxbind.json`
//!
//! ## Example Configuration
//!
//! ```json
//! {
//!   "parser": {
//!     "sourceType": "module",
//!     "lang": "tsx",
//!     "showSemanticErrors": true
//!   },
//!   "sourceMap": {
//!     "includeContent": true,
//!     "hires": false
//!   }
//! }
//! ```

mod loader;
mod oxbind_config;

pub use loader::ConfigLoader;
pub use oxbind_config::{OxbindConfiguration, ParserDefaults, SourceMapDefaults};
