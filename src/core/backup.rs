//! Backup of the storage documents into a zip archive.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::confirm_overwrite;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::Path;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Archive every regular file in the data directory into `dest_file`.
    /// `compress` switches between deflate and plain store.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<()> {
        let data_dir = expand_tilde(&cfg.data_dir);
        if !data_dir.exists() {
            return Err(AppError::Backup(format!(
                "Data directory not found: {}",
                data_dir.display()
            )));
        }

        let dest = Path::new(dest_file);
        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if !confirm_overwrite(dest, force)? {
            println!("Backup cancelled.");
            return Ok(());
        }

        let method = if compress {
            zip::CompressionMethod::Deflated
        } else {
            zip::CompressionMethod::Stored
        };
        let options: FileOptions<'_, ()> = FileOptions::default().compression_method(method);

        let file = fs::File::create(dest)?;
        let mut zip = ZipWriter::new(file);
        let mut archived = 0usize;

        let mut entries: Vec<_> = fs::read_dir(&data_dir)?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .collect();
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            zip.start_file(&name, options)
                .map_err(|e| AppError::Backup(e.to_string()))?;
            let mut src = fs::File::open(&path)?;
            std::io::copy(&mut src, &mut zip)?;
            archived += 1;
        }

        zip.finish().map_err(|e| AppError::Backup(e.to_string()))?;

        if archived == 0 {
            return Err(AppError::Backup(format!(
                "Nothing to back up in {}",
                data_dir.display()
            )));
        }

        success(format!(
            "Backup created: {} ({} file(s))",
            dest.display(),
            archived
        ));
        Ok(())
    }
}
