//! Path helpers for user supplied file names.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    match (path, dirs::home_dir()) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

/// Decide whether `path` may be written.
///
/// A missing file, or `force`, is always fine. Otherwise the user is asked on
/// an interactive terminal; without one the write is refused.
pub fn ensure_writable(path: &Path, force: bool, what: &str) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    let refused = || {
        AppError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!(
                "{what} cancelled: '{}' already exists (use --force)",
                path.display()
            ),
        ))
    };

    if !io::stdin().is_terminal() {
        return Err(refused());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info("Existing file will be overwritten.");
            Ok(())
        }
        _ => Err(refused()),
    }
}
