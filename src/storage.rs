use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{Table, TableData};
use crate::pools;

/// 按扩展名加载表格：.toml 为通用表格，.json 为池数据
pub fn load_table(path: &Path, config: &Config) -> Result<Table> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let mut table = match extension.as_deref() {
        Some("toml") => {
            let data: TableData = toml::from_str(&content).map_err(|source| Error::Toml {
                path: path.to_path_buf(),
                source,
            })?;
            Table::from_data(data)?
        }
        Some("json") => {
            let report = pools::process(pools::parse_pools(&content, path)?, &config.pools);
            pools::to_table(String::new(), &report)?
        }
        _ => return Err(Error::UnsupportedFormat(path.to_path_buf())),
    };

    if let Some(title) = &config.ui.title {
        table.title = title.clone();
    }
    if table.title.is_empty() {
        table.title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    tracing::info!(
        path = %path.display(),
        columns = table.width(),
        rows = table.rows.len(),
        "表格已加载"
    );
    if !table.has_sortable_columns() {
        tracing::info!("表格没有可排序的列");
    }

    Ok(table)
}
