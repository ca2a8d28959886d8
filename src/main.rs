mod event;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph, Widget};
use tracing::{error, info, warn};

use folio::app::App;
use folio::config::Config;
use folio::content::Portfolio;
use folio::nav::SectionId;
use folio::ui::components::header::Header;
use folio::ui::components::nav_list::NavList;
use folio::ui::layout::{AppLayout, pack_hint_lines};
use folio::ui::theme::Theme;

use event::{AppEvent, EventHandler};

const LIST_HINTS: &[&str] = &[
    "[1-4] Sections",
    "[j/k] Scroll",
    "[Tab] Next project",
    "[Enter] Open",
    "[r] Reload",
    "[q] Quit",
];
const DETAIL_HINTS: &[&str] = &["[Esc] Back", "[1-4] Sections", "[j/k] Scroll", "[q] Quit"];

#[derive(Parser)]
#[command(name = "folio", version, about = "Single-page terminal portfolio")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Portfolio TOML file to show instead of the default")]
    content: Option<PathBuf>,

    #[arg(short, long, help = "Section to open at (about, projects, experience, contact)")]
    section: Option<SectionId>,

    #[arg(long, help = "Jump instead of smooth scrolling")]
    no_smooth: bool,

    #[arg(long, help = "List bundled themes and exit")]
    list_themes: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for name in Theme::available_themes() {
            println!("{name}");
        }
        return Ok(());
    }

    let mut config = Config::load().unwrap_or_default();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(content) = &cli.content {
        config.content_path = Some(content.to_string_lossy().to_string());
    }
    if cli.no_smooth {
        config.smooth_scroll = false;
    }

    if let Err(err) = folio::logging::init(&config.log_path()) {
        eprintln!("Warning: logging disabled: {err:#}");
    }
    info!(theme = %config.theme, "starting folio");

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        warn!(theme = %config.theme, "unknown theme, using default");
        Theme::default()
    });
    let content_path = config.content_path.as_deref().map(PathBuf::from);
    let portfolio = Portfolio::load_or_bundled(content_path.as_deref())?;

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(config, theme, portfolio);
    if let Some(section) = cli.section {
        app.navigate_to(section);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(tick_rate);

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!(error = %err, "event loop failed");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Mouse(mouse) => handle_mouse(app, mouse),
            AppEvent::Tick => app.tick(),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char(ch @ '1'..='4') => {
            let index = ch as usize - '1' as usize;
            if let Some(section) = SectionId::from_index(index) {
                app.navigate_to(section);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_page(1),
        KeyCode::PageUp => app.scroll_page(-1),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
        KeyCode::Tab => app.focus_next_project(),
        KeyCode::BackTab => app.focus_prev_project(),
        KeyCode::Enter => app.select_focused(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back(),
        KeyCode::Char('r') => reload(app),
        _ => {}
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => app.scroll_by(3),
        MouseEventKind::ScrollUp => app.scroll_by(-3),
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse.column, mouse.row),
        _ => {}
    }
}

fn reload(app: &mut App) {
    let path = app.config.content_path.as_deref().map(PathBuf::from);
    match Portfolio::load(path.as_deref()) {
        Ok(portfolio) => app.reload_content(portfolio),
        Err(err) => warn!(error = %err, "reload failed, keeping current content"),
    }
}

fn render(frame: &mut ratatui::Frame, app: &mut App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let hints = if app.view_mode().is_list() {
        LIST_HINTS
    } else {
        DETAIL_HINTS
    };
    let mut hint_lines = pack_hint_lines(hints, usize::from(area.width));
    if app.nav.tracking_disabled() {
        hint_lines.push("  section tracking unavailable".to_string());
    }
    let footer_height = u16::try_from(hint_lines.len()).unwrap_or(1).max(1);
    let layout = AppLayout::new(area, footer_height);

    let header = Header::new(&app.portfolio, layout.tier, &app.theme);
    frame.render_widget(&header, layout.header);

    app.nav_area = layout.nav;
    if let Some(nav_area) = layout.nav {
        let nav = NavList::new(app.active_section(), &app.theme);
        frame.render_widget(&nav, nav_area);
    }

    app.main_area = Some(layout.main);
    app.resize(layout.main.width, layout.main.height);
    app.ensure_layout();
    Paragraph::new(app.visible_lines().to_vec()).render(layout.main, frame.buffer_mut());

    let colors = &app.theme.colors;
    let footer_style = Style::default().fg(colors.footer_fg()).bg(colors.footer_bg());
    let footer_lines: Vec<Line> = hint_lines.into_iter().map(Line::from).collect();
    frame.render_widget(Paragraph::new(footer_lines).style(footer_style), layout.footer);
}
