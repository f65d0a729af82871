use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sorting;

/// 列定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    #[serde(default)]
    pub sortable: bool,
}

impl Column {
    pub fn new(title: impl Into<String>, sortable: bool) -> Self {
        Self {
            title: title.into(),
            sortable,
        }
    }
}

/// 表格行，身份由其在表体中的位置决定
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    pub cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn cell(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

/// TOML 文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableData {
    #[serde(default)]
    pub meta: TableMeta,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableMeta {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub built_at: Option<DateTime<Local>>,
}

/// 运行时表格
#[derive(Debug, Clone)]
pub struct Table {
    pub title: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub built_at: DateTime<Local>,
}

impl Table {
    /// 校验每行宽度与表头一致
    pub fn new(title: String, columns: Vec<Column>, rows: Vec<Row>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::NoColumns);
        }

        for (i, row) in rows.iter().enumerate() {
            if row.cells.len() != columns.len() {
                return Err(Error::RowWidth {
                    row: i + 1,
                    expected: columns.len(),
                    found: row.cells.len(),
                });
            }
        }

        Ok(Self {
            title,
            columns,
            rows,
            built_at: Local::now(),
        })
    }

    pub fn from_data(data: TableData) -> Result<Self> {
        let mut table = Self::new(data.meta.title, data.columns, data.rows)?;
        if let Some(built_at) = data.meta.built_at {
            table.built_at = built_at;
        }
        Ok(table)
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn has_sortable_columns(&self) -> bool {
        self.columns.iter().any(|c| c.sortable)
    }

    /// 按指定列重排表体
    pub fn sort_by_column(&mut self, column: usize, ascending: bool) {
        if column >= self.width() {
            tracing::warn!(column, width = self.width(), "排序列越界，忽略");
            return;
        }
        sorting::sort_rows(&mut self.rows, column, ascending);
        tracing::debug!(column, ascending, rows = self.rows.len(), "表体已重排");
    }
}
