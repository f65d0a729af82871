//! 视图层模块
//!
//! 包含主渲染入口；表头单元格单独渲染，以便记录命中区域

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use super::state::App;
use components::render_header_cell;

/// 列间距，表头与表体必须一致
const COLUMN_SPACING: u16 = 1;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Min(4),    // 表格
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, app, chunks[0]);
    render_table(frame, app, chunks[1]);
    render_help(frame, app, chunks[2]);
}

fn render_title(frame: &mut Frame, app: &App, area: Rect) {
    let text = format!(
        "📊 {}  ({} 行, 生成于 {})",
        app.table.title,
        app.table.rows.len(),
        app.table.built_at.format("%Y-%m-%d %H:%M:%S")
    );
    let title = Paragraph::new(text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

/// 每列宽度取表头（含指示器）与单元格内容的最大值
fn column_widths(app: &App) -> Vec<Constraint> {
    app.headers
        .headers()
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let indicator = if header.sortable { 2 } else { 0 };
            let header_width = Line::from(header.title.as_str()).width() + indicator;
            let cell_width = app
                .table
                .rows
                .iter()
                .filter_map(|r| r.cell(i))
                .map(|c| Line::from(c.trim()).width())
                .max()
                .unwrap_or(0);
            Constraint::Length(u16::try_from(header_width.max(cell_width)).unwrap_or(u16::MAX))
        })
        .collect()
}

fn render_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default().title("表格").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [header_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);

    let widths = column_widths(app);

    let header_rects = Layout::horizontal(widths.clone())
        .flex(Flex::Start)
        .spacing(COLUMN_SPACING)
        .split(header_area);

    for (i, rect) in header_rects.iter().enumerate() {
        if let Some(header) = app.headers.get(i) {
            let focused = app.focused_header == Some(i);
            render_header_cell(frame, *rect, header, focused);
        }
    }
    app.header_hitboxes = header_rects.to_vec();
    app.body_height = usize::from(body_area.height);
    app.scroll = app.scroll.min(app.max_scroll());

    let rows: Vec<Row> = app
        .table
        .rows
        .iter()
        .map(|row| Row::new(row.cells.iter().map(|c| Cell::from(c.trim()))))
        .collect();

    let table = Table::new(rows, widths)
        .column_spacing(COLUMN_SPACING)
        .flex(Flex::Start);

    let mut state = TableState::default().with_offset(app.scroll);
    frame.render_stateful_widget(table, body_area, &mut state);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = "[点击表头/Enter] 排序  [h/l] 选择列  [j/k] 滚动  [g/G] 首/尾  [q] 退出";

    let status = app.hint.or(app.message.as_deref()).unwrap_or("");
    let text = if status.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, status)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}
