mod config;
mod error;
mod header;
mod logging;
mod models;
mod pools;
mod sorting;
mod storage;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::storage::load_table;
use crate::ui::{App, render};

/// 在终端中浏览表格，点击表头排序
#[derive(Debug, Parser)]
#[command(name = "tabsort", version, about)]
struct Cli {
    /// 表格文件 (.toml 或池数据 .json)，默认 ~/.local/share/tabsort/table.toml
    file: Option<PathBuf>,

    /// 配置文件路径
    #[arg(long)]
    config: Option<PathBuf>,

    /// 日志文件路径
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// 提高日志级别 (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// 获取数据目录路径 (~/.local/share/tabsort/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join("tabsort");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let data_dir = get_data_dir()?;

    let config_path = cli.config.clone().or_else(config::default_config_path);
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| data_dir.join("tabsort.log"));
    logging::init(&log_file, &config.log.level, cli.verbose)?;

    // 日志初始化之后再记录配置来源
    match config_path.as_deref().filter(|p| p.exists()) {
        Some(path) => tracing::info!(path = %path.display(), "已加载配置文件"),
        None => tracing::debug!(?config_path, "配置文件不存在，使用默认配置"),
    }

    let table_path = cli.file.unwrap_or_else(|| data_dir.join("table.toml"));
    let table = load_table(&table_path, &config)
        .with_context(|| format!("加载表格失败: {}", table_path.display()))?;

    // 创建应用状态
    let mut app = App::new(table, config.ui.hover);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "主循环异常退出");
    }
    tracing::info!("退出");

    result.map_err(Into::into)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let quit = match crossterm::event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                ui::handle_key_event(app, key.code)?
            }
            Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse)?,
            _ => false,
        };

        if quit {
            break;
        }
    }
    Ok(())
}
