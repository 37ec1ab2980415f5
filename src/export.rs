//! Export sinks for normalized datasets
//!
//! Writes deal datasets and per-seller rollups to CSV and JSON files under
//! an export directory (`<base>/csv`, `<base>/json`), creating the
//! directories on demand. An empty dataset writes nothing and reports
//! `None` instead of producing an empty file.

use crate::analytics::StoreStats;
use crate::catalog::DealRecord;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err)
    }
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportError::Io(e) => write!(f, "IO error: {}", e),
            ExportError::Serialization(e) => write!(f, "Serialization error: {}", e),
        }
    }
}

impl std::error::Error for ExportError {}

/// File exporter rooted at one base directory.
pub struct Exporter {
    base_dir: PathBuf,
}

impl Exporter {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into() }
    }

    /// Write a deal dataset as CSV. Returns the written path, or `None`
    /// when the dataset is empty.
    pub fn export_deals_csv(
        &self,
        deals: &[DealRecord],
        name: &str,
    ) -> Result<Option<PathBuf>, ExportError> {
        if deals.is_empty() {
            return Ok(None);
        }

        let path = self.prepare("csv", name, "csv")?;
        let mut writer = BufWriter::new(File::create(&path)?);

        writeln!(
            writer,
            "title,salePrice,normalPrice,savings,steamRating,storeID,gameID,thumb"
        )?;
        for deal in deals {
            writeln!(
                writer,
                "{},{},{},{},{},{},{},{}",
                csv_escape(&deal.title),
                csv_number(deal.sale_price),
                csv_number(deal.normal_price),
                csv_number(deal.savings),
                csv_escape(&deal.steam_rating),
                csv_escape(&deal.store_id),
                csv_escape(&deal.game_id),
                csv_escape(&deal.thumbnail_url),
            )?;
        }
        writer.flush()?;

        log::info!("📝 Exported {} deals to {}", deals.len(), path.display());
        Ok(Some(path))
    }

    /// Write per-seller rollups as CSV.
    pub fn export_store_stats_csv(
        &self,
        rollups: &[StoreStats],
        name: &str,
    ) -> Result<Option<PathBuf>, ExportError> {
        if rollups.is_empty() {
            return Ok(None);
        }

        let path = self.prepare("csv", name, "csv")?;
        let mut writer = BufWriter::new(File::create(&path)?);

        writeln!(writer, "storeID,storeName,numDeals,avgSavings,avgPrice,minPrice,maxPrice")?;
        for row in rollups {
            writeln!(
                writer,
                "{},{},{},{},{},{},{}",
                csv_escape(&row.store_id),
                csv_escape(&row.store_name),
                row.num_deals,
                row.avg_savings,
                row.avg_price,
                row.min_price,
                row.max_price,
            )?;
        }
        writer.flush()?;

        log::info!("📝 Exported {} store rollups to {}", rollups.len(), path.display());
        Ok(Some(path))
    }

    /// Write any serializable dataset as a pretty-printed JSON array.
    pub fn export_json<T: Serialize>(
        &self,
        rows: &[T],
        name: &str,
    ) -> Result<Option<PathBuf>, ExportError> {
        if rows.is_empty() {
            return Ok(None);
        }

        let path = self.prepare("json", name, "json")?;
        let json = serde_json::to_string_pretty(rows)?;
        fs::write(&path, json)?;

        log::info!("📝 Exported {} rows to {}", rows.len(), path.display());
        Ok(Some(path))
    }

    /// Create the per-format subdirectory and build the target path.
    fn prepare(&self, subdir: &str, name: &str, ext: &str) -> Result<PathBuf, ExportError> {
        let dir = self.base_dir.join(subdir);
        fs::create_dir_all(&dir)?;

        // Strip any caller-supplied path or extension
        let stem = Path::new(name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("export");
        Ok(dir.join(format!("{}.{}", stem, ext)))
    }
}

fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn csv_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
