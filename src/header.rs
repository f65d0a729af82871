//! 表头控制器
//!
//! 每一列的排序方向由控制器显式持有，同一时刻最多一个表头处于激活状态

use crate::models::Column;

/// 中性图标
pub const NEUTRAL_GLYPH: &str = "⇅";
pub const ASCENDING_GLYPH: &str = "▲";
pub const DESCENDING_GLYPH: &str = "▼";

pub const DIM_OPACITY: f32 = 0.3;
pub const HOVER_OPACITY: f32 = 0.6;
pub const FULL_OPACITY: f32 = 1.0;

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Ascending,
    Descending,
}

impl Direction {
    /// 首次点击默认降序（数值列通常从大到小浏览）
    pub fn toggled(self) -> Self {
        match self {
            Direction::None | Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    pub fn is_active(self) -> bool {
        self != Direction::None
    }
}

/// 排序指示器（图标 + 不透明度）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    pub glyph: &'static str,
    pub opacity: f32,
}

/// 单个表头的状态
#[derive(Debug, Clone)]
pub struct HeaderState {
    pub title: String,
    pub sortable: bool,
    pub direction: Direction,
    pub hovered: bool,
}

impl HeaderState {
    /// 不可排序的表头没有指示器
    pub fn indicator(&self) -> Option<Indicator> {
        if !self.sortable {
            return None;
        }

        let indicator = match self.direction {
            Direction::None => Indicator {
                glyph: NEUTRAL_GLYPH,
                opacity: if self.hovered {
                    HOVER_OPACITY
                } else {
                    DIM_OPACITY
                },
            },
            Direction::Ascending => Indicator {
                glyph: ASCENDING_GLYPH,
                opacity: FULL_OPACITY,
            },
            Direction::Descending => Indicator {
                glyph: DESCENDING_GLYPH,
                opacity: FULL_OPACITY,
            },
        };
        Some(indicator)
    }
}

/// 点击表头后发出的排序命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCommand {
    pub column: usize,
    pub ascending: bool,
}

#[derive(Debug, Clone)]
pub struct HeaderController {
    headers: Vec<HeaderState>,
    hover_enabled: bool,
}

impl HeaderController {
    pub fn new(columns: &[Column], hover_enabled: bool) -> Self {
        let headers = columns
            .iter()
            .map(|c| HeaderState {
                title: c.title.clone(),
                sortable: c.sortable,
                direction: Direction::None,
                hovered: false,
            })
            .collect();

        Self {
            headers,
            hover_enabled,
        }
    }

    pub fn headers(&self) -> &[HeaderState] {
        &self.headers
    }

    pub fn get(&self, column: usize) -> Option<&HeaderState> {
        self.headers.get(column)
    }

    pub fn is_sortable(&self, column: usize) -> bool {
        self.get(column).is_some_and(|h| h.sortable)
    }

    /// 当前激活的列及其方向
    pub fn active(&self) -> Option<(usize, Direction)> {
        self.headers
            .iter()
            .enumerate()
            .find(|(_, h)| h.direction.is_active())
            .map(|(i, h)| (i, h.direction))
    }

    /// 处理表头点击
    pub fn click(&mut self, column: usize) -> Option<SortCommand> {
        if !self.is_sortable(column) {
            tracing::debug!(column, "点击了不可排序的表头，忽略");
            return None;
        }

        let new_direction = self.headers[column].direction.toggled();

        for (i, header) in self.headers.iter_mut().enumerate() {
            header.direction = Direction::None;
            // 其余表头回到暗淡状态，悬停等下一次指针移动再恢复
            if i != column {
                header.hovered = false;
            }
        }
        self.headers[column].direction = new_direction;

        tracing::info!(
            column,
            title = %self.headers[column].title,
            direction = ?new_direction,
            "切换排序方向"
        );

        Some(SortCommand {
            column,
            ascending: new_direction == Direction::Ascending,
        })
    }

    /// 指针移动到某个表头（或离开所有表头）
    ///
    /// 返回悬停状态是否发生变化
    pub fn hover(&mut self, column: Option<usize>) -> bool {
        if !self.hover_enabled {
            return false;
        }

        let mut changed = false;
        for (i, header) in self.headers.iter_mut().enumerate() {
            let hovered = Some(i) == column && header.sortable;
            if header.hovered != hovered {
                header.hovered = hovered;
                changed = true;
            }
        }
        changed
    }

    pub fn hovered(&self) -> Option<usize> {
        self.headers.iter().position(|h| h.hovered)
    }
}
