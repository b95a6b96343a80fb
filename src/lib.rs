//! # kitbag
//!
//! A grab-bag utility library: the small, boring helpers that every tool
//! ends up needing — filesystem existence checks and text/JSON file I/O,
//! human-readable size parsing, recursive JSON merging, string padding and
//! truncation, URL decomposition, digests, and schema-driven `--flag`
//! parsing.
//!
//! Every function is independent and synchronous; there is no shared state
//! or initialization. Fallible operations come in two flavors, each marked
//! in its module docs: silent/defaulting helpers return a sentinel
//! (`false`, `""`, `{}`, `NaN`) and log the underlying error through the
//! [`log`] facade, while writes propagate an [`anyhow::Error`].
//!
//! ## Example
//!
//! ```
//! use kitbag::merge::update_object;
//! use kitbag::size::parse_size;
//! use serde_json::json;
//!
//! assert_eq!(parse_size("10KB"), 10240.0);
//!
//! let mut config = json!({"retries": 3, "log": {"level": "info"}});
//! update_object(&mut config, &json!({"log": {"level": "debug"}}), false);
//! assert_eq!(config["log"]["level"], "debug");
//! ```

pub mod args;
pub mod env;
pub mod fs;
pub mod hash;
pub mod json;
pub mod merge;
pub mod size;
pub mod strings;
pub mod url;

pub use args::{Coerce, OptValue, OptionsSchema, ParsedOptions, parse_options};
pub use env::user_home;
pub use json::{SaveOptions, load_from_json_file, save_to_json_file};
pub use merge::{is_obj_empty, update_object};
pub use size::{SizeBase, SizeOptions, format_bytes, parse_size, parse_size_with};
