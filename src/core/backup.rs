use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy both tables to `dest`.
    ///
    /// Without `compress`, `dest` is a directory receiving a copy of each
    /// table. With `compress`, `dest` is a `.zip` archive holding both.
    pub fn backup(cfg: &Config, dest: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let tables = [cfg.roster_path(), cfg.history_path()];
        let existing: Vec<&PathBuf> = tables.iter().filter(|p| p.exists()).collect();

        // 1️⃣ Nothing to back up
        if existing.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No tables found in {}", cfg.data_path().display()),
            )
            .into());
        }

        let dest = Path::new(dest);

        // 2️⃣ Write
        let final_path = if compress {
            let zip_path = dest.with_extension("zip");
            refuse_overwrite(&zip_path, force)?;
            if let Some(parent) = zip_path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            write_zip(&zip_path, &existing)?;
            success(format!("Backup archive created: {}", zip_path.display()));
            zip_path
        } else {
            fs::create_dir_all(dest)?;
            for table in &existing {
                let target = dest.join(file_name(table)?);
                refuse_overwrite(&target, force)?;
                fs::copy(table, &target)?;
                success(format!("Backup created: {}", target.display()));
            }
            dest.to_path_buf()
        };

        // 3️⃣ Audit
        if let Err(e) = cfg.audit(
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(final_path)
    }
}

fn file_name(path: &Path) -> AppResult<String> {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("not a file path: {}", path.display())))
}

fn refuse_overwrite(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Validation(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Ok(())
}

/// Store every table in a deflated zip archive.
fn write_zip(zip_path: &Path, tables: &[&PathBuf]) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for table in tables {
        let mut f = fs::File::open(table)?;
        zip.start_file(file_name(table)?, options)
            .map_err(io::Error::other)?;
        io::copy(&mut f, &mut zip)?;
    }

    zip.finish().map_err(io::Error::other)?;
    Ok(())
}
