//! TUI Views
//!
//! Catalog screen (header, quick-filter bar, sidebar, tool list) and the
//! modal for the open tool, one layout per session phase.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::catalog::{Category, InputWidget, Tool};
use crate::filter::{Selection, Tag};
use crate::session::{ResultPayload, Session};

use super::app::App;
use super::colors;

/// Shown when the selection matches nothing
pub const EMPTY_STATE: &str = "No matching tools found.";
pub const RESET_HINT: &str = "View all tools";

/// Render the whole screen
pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_tag_bar(&app.state.selection, frame, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(20)])
        .split(chunks[2]);
    render_sidebar(&app.state.selection, frame, body[0]);
    render_tool_list(app, frame, body[1]);
    render_footer(app, frame, chunks[3]);

    if let Some(session) = app.controller().session() {
        render_session(app, session, frame, centered_rect(70, 70, frame.area()));
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let visible = app.visible_tools().len();
    let line = Line::from(vec![
        Span::styled(" dochub ", Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD)),
        Span::styled("│ ", Style::default().fg(colors::DIM)),
        Span::raw(format!("{} of {} tools", visible, app.catalog().len())),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Quick-filter bar: All followed by each tag label
fn tag_bar_line(selection: &Selection) -> Line<'static> {
    let active = selection.tag();
    let mut spans = Vec::new();
    let entries = std::iter::once((None, "All")).chain(Tag::ALL.iter().map(|t| (Some(*t), t.label())));
    for (tag, label) in entries {
        let style = if tag == active {
            Style::default().fg(colors::ACTIVE).add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(colors::DIM)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_tag_bar(selection: &Selection, frame: &mut Frame, area: Rect) {
    let bar = Paragraph::new(tag_bar_line(selection))
        .block(Block::default().borders(Borders::ALL).title(" Quick filter (Tab) "));
    frame.render_widget(bar, area);
}

fn render_sidebar(selection: &Selection, frame: &mut Frame, area: Rect) {
    let entries = std::iter::once((None, "All Tools")).chain(Category::SIDEBAR.iter().map(|c| (Some(*c), c.label())));
    let items: Vec<ListItem> = entries
        .map(|(category, label)| {
            let style = if category == selection.category() {
                Style::default().fg(colors::ACTIVE).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Category (c) "));
    frame.render_widget(list, area);
}

fn tool_item(tool: &Tool) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(Span::styled(tool.title.clone(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(format!("  {}", tool.description), Style::default().fg(colors::DIM))),
    ])
}

fn render_tool_list(app: &App, frame: &mut Frame, area: Rect) {
    let tools = app.visible_tools();
    let block = Block::default().borders(Borders::ALL).title(" Tools ");

    if tools.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(EMPTY_STATE),
            Line::from(vec![
                Span::styled("a", Style::default().fg(colors::KEYBIND)),
                Span::raw(format!(" {}", RESET_HINT)),
            ]),
        ])
        .style(Style::default().fg(colors::DIM))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = tools.iter().map(|t| tool_item(t)).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(colors::SELECTED).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(app.state.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn key_hints(app: &App) -> &'static str {
    match app.controller().session() {
        None => "↑↓ move  Tab tag  c category  a all  Enter open  q quit",
        Some(s) => match (s.phase(), s.input_widget()) {
            (crate::session::Phase::Input, InputWidget::FileDrop) => {
                "type a path, Enter attach  Enter (empty) / Ctrl-D process  Esc close"
            }
            (crate::session::Phase::Input, InputWidget::MultiLine) => "Ctrl-D process  Esc close",
            (crate::session::Phase::Input, InputWidget::SingleLine) => "Enter / Ctrl-D process  Esc close",
            (crate::session::Phase::Processing, _) => "Esc close",
            (crate::session::Phase::Result, _) => "r process another  y copy  Enter close",
        },
    }
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let line = match &app.state.status {
        Some(status) => Line::from(Span::styled(status.clone(), Style::default().fg(colors::NOTICE))),
        None => Line::from(Span::styled(key_hints(app), Style::default().fg(colors::KEYBIND))),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Rectangle of `percent_x` x `percent_y` centered in `area`
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_session(app: &App, session: &Session, frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    let tool = session.tool();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::HEADER))
        .title(format!(" {} ", tool.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(inner);
    let description = Paragraph::new(tool.description.as_str())
        .style(Style::default().fg(colors::DIM))
        .wrap(Wrap { trim: true });
    frame.render_widget(description, chunks[0]);

    match session.phase() {
        crate::session::Phase::Input => render_input(app, session, frame, chunks[1]),
        crate::session::Phase::Processing => render_processing(app, frame, chunks[1]),
        crate::session::Phase::Result => {
            if let Some(payload) = session.result() {
                render_result(payload, frame, chunks[1]);
            }
        }
    }
}

fn action_button(session: &Session) -> Line<'static> {
    let label = format!("[ {} ]", session.tool().action_label());
    match session.action_blocker() {
        None => Line::from(Span::styled(
            label,
            Style::default().fg(colors::ENABLED).add_modifier(Modifier::BOLD),
        )),
        Some(reason) => Line::from(vec![
            Span::styled(label, Style::default().fg(colors::DIM)),
            Span::styled(format!("  ({})", reason), Style::default().fg(colors::DIM)),
        ]),
    }
}

fn render_input(app: &App, session: &Session, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let buffer = app.state.input.content();

    match session.input_widget() {
        InputWidget::FileDrop => {
            let mut lines = vec![match session.uploaded_file() {
                Some(file) => Line::from(vec![
                    Span::styled(file.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled(format!("  {} bytes", file.size_bytes), Style::default().fg(colors::DIM)),
                ]),
                None => Line::from(Span::styled("No file selected", Style::default().fg(colors::DIM))),
            }];
            if let Some(hint) = session.tool().accepts_hint() {
                lines.push(Line::from(Span::styled(hint, Style::default().fg(colors::DIM))));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(vec![Span::raw("Path: "), Span::raw(buffer.to_string())]));
            let drop = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Upload file "));
            frame.render_widget(drop, chunks[0]);
        }
        InputWidget::MultiLine => {
            let editor = Paragraph::new(buffer.to_string())
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(" Text "));
            frame.render_widget(editor, chunks[0]);
        }
        InputWidget::SingleLine => {
            let field = Paragraph::new(buffer.to_string()).block(Block::default().borders(Borders::ALL).title(" Input "));
            frame.render_widget(field, chunks[0]);
        }
    }

    frame.render_widget(Paragraph::new(action_button(session)), chunks[1]);
}

fn render_processing(app: &App, frame: &mut Frame, area: Rect) {
    let text = Paragraph::new(Line::from(vec![
        Span::styled(app.state.spinner_frame(), Style::default().fg(colors::PROCESSING)),
        Span::raw(" Processing..."),
    ]));
    frame.render_widget(text, area);
}

fn render_result(payload: &ResultPayload, frame: &mut Frame, area: Rect) {
    match payload {
        ResultPayload::File(out) => {
            let lines = vec![
                Line::from(Span::styled(
                    "Processing Complete",
                    Style::default().fg(colors::COMPLETE).add_modifier(Modifier::BOLD),
                )),
                Line::from("Your file is ready for download"),
                Line::from(""),
                Line::from(Span::styled(
                    format!("[ Download {} ]", out.file_name()),
                    Style::default().fg(colors::ENABLED),
                )),
            ];
            frame.render_widget(Paragraph::new(lines), area);
        }
        ResultPayload::Text(text) => {
            let body = Paragraph::new(text.as_str())
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(" Result (y to copy) "));
            frame.render_widget(body, area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::session::{SessionController, SimulatedPolicy, UploadedFile};
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn app() -> App {
        let controller = SessionController::new(Arc::new(SimulatedPolicy::instant()));
        App::new(controller, Box::new(MemoryClipboard::new()))
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(app, f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_tag_bar_lists_all_labels() {
        let line = tag_bar_line(&Selection::new());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        for label in ["All", "Image to", "PDF", "DOC", "PPT", "Text to"] {
            assert!(text.contains(label), "missing {}", label);
        }
    }

    #[test]
    fn test_catalog_screen() {
        let screen = draw(&app());
        assert!(screen.contains("dochub"));
        assert!(screen.contains("23 of 23 tools"));
        assert!(screen.contains("PDF Tools"));
        assert!(screen.contains("Image to PDF"));
    }

    #[test]
    fn test_empty_state() {
        use crate::catalog::ToolCatalog;
        use std::sync::LazyLock;

        static ONLY_CALC: LazyLock<ToolCatalog> = LazyLock::new(|| {
            ToolCatalog::new(vec![Tool::new(
                "calc",
                "Calculator",
                "Adds numbers",
                Category::Utility,
                crate::catalog::InteractionType::Calculator,
            )])
        });

        let controller = SessionController::new(Arc::new(SimulatedPolicy::instant()));
        let mut app = App::with_catalog(&ONLY_CALC, controller, Box::new(MemoryClipboard::new()));
        app.state.selection.select_category(Some(Category::Pdf));
        let screen = draw(&app);
        assert!(screen.contains(EMPTY_STATE));
        assert!(screen.contains(RESET_HINT));
    }

    #[test]
    fn test_file_tool_modal() {
        let mut app = app();
        let tool = app.catalog().get("merge-pdf").unwrap().clone();
        app.controller_mut().open(tool);
        let screen = draw(&app);
        assert!(screen.contains("Upload file"));
        assert!(screen.contains("No file selected"));
        assert!(screen.contains("no file supplied"));

        app.controller_mut()
            .supply_file(UploadedFile::new("a.pdf", "/tmp/a.pdf", 3))
            .unwrap();
        let screen = draw(&app);
        assert!(screen.contains("a.pdf"));
        assert!(!screen.contains("no file supplied"));
    }

    #[tokio::test]
    async fn test_result_modal() {
        let mut app = app();
        let tool = app.catalog().get("split-pdf").unwrap().clone();
        app.controller_mut().open(tool);
        app.controller_mut()
            .supply_file(UploadedFile::new("a.pdf", "/tmp/a.pdf", 3))
            .unwrap();
        app.controller_mut().act().unwrap();
        app.controller_mut().wait_for_completion().await.unwrap();

        let screen = draw(&app);
        assert!(screen.contains("Processing Complete"));
        assert!(screen.contains("Download split_documents.zip"));
    }
}
