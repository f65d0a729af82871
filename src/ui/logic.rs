//! 业务逻辑处理 (Update/Dispatch)
//!
//! 表头点击转化为排序命令，再交给行排序器执行

use super::actions::Action;
use super::state::{App, SORT_HINT};
use crate::header::SortCommand;

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::HeaderClicked(column) => self.click_header(column),
            Action::HeaderHovered(column) => self.hover_header(column),

            Action::FocusPrevHeader => self.move_focus(false),
            Action::FocusNextHeader => self.move_focus(true),
            Action::SortFocused => {
                if let Some(column) = self.focused_header {
                    self.click_header(column);
                }
            }

            Action::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            Action::ScrollDown => self.scroll = (self.scroll + 1).min(self.max_scroll()),
            Action::ScrollTop => self.scroll = 0,
            Action::ScrollBottom => self.scroll = self.max_scroll(),
        }
        false
    }

    // ============ 表头相关 ============

    /// 点击表头：更新方向并排序
    pub fn click_header(&mut self, column: usize) {
        let Some(command) = self.headers.click(column) else {
            return;
        };
        self.focused_header = Some(column);
        self.apply_sort(command);
    }

    /// 执行排序命令
    pub fn apply_sort(&mut self, command: SortCommand) {
        let SortCommand { column, ascending } = command;
        self.table.sort_by_column(column, ascending);

        if let Some(col) = self.table.columns.get(column) {
            let order = if ascending { "升序" } else { "降序" };
            self.message = Some(format!("已按 {} {order}排列", col.title));
        }
    }

    /// 指针进入/离开表头
    pub fn hover_header(&mut self, column: Option<usize>) {
        self.headers.hover(column);
        self.hint = match column {
            Some(c) if self.headers.is_sortable(c) => Some(SORT_HINT),
            _ => None,
        };
    }

    // ============ 键盘焦点 ============

    /// 在可排序列之间循环移动焦点
    pub fn move_focus(&mut self, forward: bool) {
        let sortable: Vec<usize> = (0..self.table.width())
            .filter(|&i| self.headers.is_sortable(i))
            .collect();
        if sortable.is_empty() {
            return;
        }

        let current = self
            .focused_header
            .and_then(|f| sortable.iter().position(|&i| i == f));
        let next = match current {
            None => 0,
            Some(p) if forward => (p + 1) % sortable.len(),
            Some(p) => (p + sortable.len() - 1) % sortable.len(),
        };
        self.focused_header = Some(sortable[next]);
    }
}
