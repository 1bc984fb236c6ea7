use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::path::ensure_writable;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the workbook to `dest_file`, or archive it there with `compress`
    /// (the target then gets a `.zip` extension). Returns the path written.
    pub fn backup(
        workbook: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = Path::new(workbook);
        let requested = Path::new(dest_file);

        let target = if compress {
            requested.with_extension("zip")
        } else {
            requested.to_path_buf()
        };

        // 1️⃣ Check workbook exists
        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Workbook not found: {}", src.display()),
            )));
        }

        // 2️⃣ Never write over the workbook itself
        if same_location(src, &target)? {
            return Err(AppError::InvalidValue(format!(
                "backup target '{}' is the workbook itself",
                target.display()
            )));
        }

        // 3️⃣ Ensure destination folder exists
        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 4️⃣ Existing destination → --force or confirmation
        ensure_writable(&target, force, "Backup")?;

        // 5️⃣ Copy or archive
        if compress {
            write_zip(src, &target)?;
        } else {
            fs::copy(src, &target)?;
        }
        success(format!("Backup created: {}", target.display()));

        // 6️⃣ Log in the workbook
        if let Ok(conn) = Connection::open(src)
            && let Err(e) = ttlog(
                &conn,
                "backup",
                &target.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            )
        {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(target)
    }
}

/// True when `target` names the same file as `src`. The target may not exist
/// yet, so its parent is resolved instead.
fn same_location(src: &Path, target: &Path) -> AppResult<bool> {
    let src = fs::canonicalize(src)?;

    if target.exists() {
        return Ok(fs::canonicalize(target)? == src);
    }

    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    match (fs::canonicalize(parent), target.file_name()) {
        (Ok(dir), Some(name)) => Ok(dir.join(name) == src),
        _ => Ok(false),
    }
}

/// Archive the workbook straight into `zip_path`, entry named after the
/// workbook file.
fn write_zip(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "farmledger.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    info(format!("Compressed: {}", zip_path.display()));
    Ok(())
}
