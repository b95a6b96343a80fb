//! Process-environment helpers.

use std::env;
use std::path::PathBuf;

/// The current user's home directory.
///
/// Reads `USERPROFILE` on Windows and `HOME` elsewhere, falling back to the
/// platform lookup from the `dirs` crate when the variable is unset.
/// `None` only when neither source knows the home directory.
#[must_use]
pub fn user_home() -> Option<PathBuf> {
    let var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    env::var_os(var).map(PathBuf::from).or_else(dirs::home_dir)
}
