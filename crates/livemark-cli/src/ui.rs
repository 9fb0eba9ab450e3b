use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{app::App, preview::preview_lines};

const GUTTER_WIDTH: u16 = 6;
const ERROR_PANE_HEIGHT: u16 = 6;

pub fn ui(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(ERROR_PANE_HEIGHT),
            Constraint::Length(1),
        ])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let scroll = editor_scroll(app, columns[0]);
    let editor_area = if app.settings.show_gutter {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GUTTER_WIDTH), Constraint::Min(0)])
            .split(columns[0]);
        render_gutter(f, app, split[0], scroll);
        split[1]
    } else {
        columns[0]
    };

    render_editor(f, app, editor_area, scroll);
    render_preview(f, app, columns[1]);
    render_errors(f, app, rows[1]);
    render_help(f, app, rows[2]);
}

/// First visible editor line, chosen so the cursor stays on screen.
fn editor_scroll(app: &App, area: Rect) -> u16 {
    let (line, _) = app.editor.cursor_position();
    let visible = area.height.saturating_sub(2).max(1) as usize;
    clamp_u16(line.saturating_sub(visible - 1))
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Screen cell for the cursor inside a bordered pane, if it is visible.
fn cursor_cell(area: Rect, scroll: u16, (line, col): (usize, usize)) -> Option<(u16, u16)> {
    let x = area.x.saturating_add(1).saturating_add(clamp_u16(col));
    let y = area
        .y
        .saturating_add(1)
        .saturating_add(clamp_u16(line).saturating_sub(scroll));
    (x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1)).then_some((x, y))
}

fn render_gutter(f: &mut Frame, app: &App, area: Rect, scroll: u16) {
    let lines: Vec<Line> = app
        .gutter()
        .into_iter()
        .map(|mark| {
            let style = if mark.has_error {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(format!("{:>4}", mark.index), style))
        })
        .collect();

    let gutter = Paragraph::new(lines)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM | Borders::LEFT))
        .scroll((scroll, 0));
    f.render_widget(gutter, area);
}

fn render_editor(f: &mut Frame, app: &App, area: Rect, scroll: u16) {
    let title = if app.dirty { "Editor [+]" } else { "Editor" };
    let editor = Paragraph::new(app.editor.content())
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((scroll, 0));
    f.render_widget(editor, area);

    if let Some(cell) = cursor_cell(area, scroll, app.editor.cursor_position()) {
        f.set_cursor_position(cell);
    }
}

fn render_preview(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.render_pending() {
        "Preview (pending)"
    } else {
        "Preview"
    };
    let preview = Paragraph::new(preview_lines(&app.preview))
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(preview, area);
}

fn render_errors(f: &mut Frame, app: &App, area: Rect) {
    let messages = app.parsed.messages();
    let title = format!("Errors ({})", messages.len());
    let lines: Vec<Line> = messages
        .into_iter()
        .map(|m| Line::from(Span::styled(m, Style::default().fg(Color::Red))))
        .collect();

    let errors = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(errors, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help = Line::from(vec![
        Span::raw("Esc/Ctrl+Q: Quit | Ctrl+S: Save | Ctrl+R: Render now | "),
        Span::styled(app.status.clone(), Style::default().fg(Color::Cyan)),
    ]);
    f.render_widget(Paragraph::new(help), area);
}
