//! Action 枚举定义 (Intent)
//!
//! 鼠标与键盘交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 表头交互
    HeaderClicked(usize),
    HeaderHovered(Option<usize>), // None 表示指针离开所有表头

    // 键盘焦点
    FocusPrevHeader,
    FocusNextHeader,
    SortFocused, // Enter / s，等同于点击焦点所在表头

    // 滚动
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
}
