//! App 状态定义 (Model)
//!
//! 表格数据、表头控制器以及上一次渲染得到的布局信息

use ratatui::layout::{Position, Rect};

use crate::header::HeaderController;
use crate::models::Table;

/// 指针停在可排序表头上时的提示
pub const SORT_HINT: &str = "点击排序";

/// 应用状态
pub struct App {
    pub table: Table,
    pub headers: HeaderController,
    pub focused_header: Option<usize>, // 键盘焦点所在的列
    pub scroll: usize,
    pub message: Option<String>,
    pub hint: Option<&'static str>,
    pub header_hitboxes: Vec<Rect>, // 由 view 在每次渲染时更新
    pub body_height: usize,
}

impl App {
    /// 创建新的应用实例
    pub fn new(table: Table, hover_enabled: bool) -> Self {
        let headers = HeaderController::new(&table.columns, hover_enabled);
        let focused_header = table.columns.iter().position(|c| c.sortable);
        Self {
            table,
            headers,
            focused_header,
            scroll: 0,
            message: None,
            hint: None,
            header_hitboxes: Vec::new(),
            body_height: 0,
        }
    }

    /// 命中测试：终端坐标对应的表头列
    pub fn header_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.header_hitboxes
            .iter()
            .position(|rect| rect.contains(position))
    }

    /// 最大滚动偏移
    pub fn max_scroll(&self) -> usize {
        self.table.rows.len().saturating_sub(self.body_height.max(1))
    }
}
