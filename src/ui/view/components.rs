//! 通用 UI 组件
//!
//! 表头单元格与排序指示器

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::header::{FULL_OPACITY, HOVER_OPACITY, HeaderState, Indicator};

/// 终端没有不透明度，用样式近似：0.3 暗淡、0.6 正常、1.0 加粗高亮
pub fn indicator_style(indicator: &Indicator) -> Style {
    if indicator.opacity >= FULL_OPACITY {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if indicator.opacity >= HOVER_OPACITY {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    }
}

/// [组件] 表头单元格：标题 + 指示器
pub fn render_header_cell(frame: &mut Frame, area: Rect, header: &HeaderState, focused: bool) {
    let mut title_style = Style::default().add_modifier(Modifier::BOLD);
    if focused {
        title_style = title_style.add_modifier(Modifier::UNDERLINED);
    }

    let mut spans = vec![Span::styled(header.title.as_str(), title_style)];
    if let Some(indicator) = header.indicator() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(indicator.glyph, indicator_style(&indicator)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
