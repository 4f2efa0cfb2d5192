//! Terminal UI rendering with ratatui

use crate::menu::{Menu, MenuItemType, MenuScreen};
use crate::piece::Piece;
use crate::session::{FeedbackKind, Session, ACTIONS, FEEDBACK_CAPACITY};
use crate::settings::{Settings, VisualSettings};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Total width of the inventory screen
const SCREEN_WIDTH: u16 = 64;
/// Title(2) + queue(3) + reserve/actions(6) + log + hints(1)
const SCREEN_HEIGHT: u16 = 12 + FEEDBACK_CAPACITY as u16 + 2;

/// Render the main menu
pub fn render_menu(frame: &mut Frame, menu: &Menu) {
    let area = frame.area();
    let menu_area = center_rect(area, 44, 14);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(8)])
        .split(menu_area);

    let screen_title = match menu.screen {
        MenuScreen::Main => "PIECEKEEPER",
        MenuScreen::Settings => "SETTINGS",
        _ => "PIECEKEEPER",
    };
    let title_lines = vec![
        Line::styled(screen_title, Style::default().fg(Color::Cyan).bold()),
        Line::styled(
            "take the front piece or stash it for later",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    let title = Paragraph::new(title_lines).alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(layout[1]);
    frame.render_widget(block, layout[1]);

    let mut lines = Vec::new();
    lines.push(Line::raw("")); // Spacing

    for (i, item) in menu.items.iter().enumerate() {
        lines.push(render_menu_item(item, i == menu.selected));
        lines.push(Line::raw("")); // Spacing between items
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        controls_hint(menu),
        Style::default().fg(Color::DarkGray),
    ));

    let menu_text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(menu_text, inner);
}

/// Render a single menu item based on its type
fn render_menu_item(item: &crate::menu::MenuItem, is_selected: bool) -> Line<'static> {
    let prefix = if is_selected { "▶ " } else { "  " };

    let base_style = if is_selected {
        Style::default().fg(Color::Yellow).bold()
    } else {
        Style::default().fg(Color::White)
    };

    match &item.item_type {
        MenuItemType::Button(_) => Line::styled(format!("{}{}", prefix, item.label), base_style),
        MenuItemType::Toggle { value, .. } => {
            let value_str = if *value { "ON" } else { "OFF" };
            let value_color = if *value { Color::Green } else { Color::Red };
            Line::from(vec![
                Span::styled(format!("{}{}: ", prefix, item.label), base_style),
                Span::styled(
                    format!("< {} >", value_str),
                    Style::default().fg(value_color).bold(),
                ),
            ])
        }
        MenuItemType::Cycle {
            options, current, ..
        } => Line::from(vec![
            Span::styled(format!("{}{}: ", prefix, item.label), base_style),
            Span::styled(
                format!("< {} >", options[*current]),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        _ => Line::styled(format!("{}{}", prefix, item.label), base_style),
    }
}

/// Get the controls hint for the selected item
fn controls_hint(menu: &Menu) -> String {
    match menu.items.get(menu.selected).map(|item| &item.item_type) {
        Some(MenuItemType::Toggle { .. }) | Some(MenuItemType::Cycle { .. }) => {
            "↑↓ Select  ←→ Adjust  Esc Back".to_string()
        }
        _ => "↑↓ Select  Enter Confirm  Esc Back".to_string(),
    }
}

/// Render the inventory screen
pub fn render_inventory(frame: &mut Frame, session: &Session, settings: &Settings) {
    let area = frame.area();
    let screen_area = center_rect(area, SCREEN_WIDTH, SCREEN_HEIGHT);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),                           // Title
            Constraint::Length(3),                           // Queue
            Constraint::Length(6),                           // Reserve + actions
            Constraint::Length(FEEDBACK_CAPACITY as u16 + 2), // Feedback log
            Constraint::Length(1),                           // Hints
        ])
        .split(screen_area);

    let title = Paragraph::new(vec![Line::styled(
        "PIECE INVENTORY",
        Style::default().fg(Color::Cyan).bold(),
    )])
    .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    render_queue(frame, layout[1], session, &settings.visual);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(layout[2]);

    render_reserve(frame, middle[0], session, &settings.visual);
    render_actions(frame, middle[1], session);
    render_feedback(frame, layout[3], session);

    let hints = Paragraph::new(Line::styled(
        "↑↓ Select  Enter Run  1-3 Quick keys  0/Esc Menu",
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(hints, layout[4]);
}

/// Render the upcoming-piece queue, front first
fn render_queue(frame: &mut Frame, area: Rect, session: &Session, visual: &VisualSettings) {
    let title = format!(
        " NEXT UP {}/{} (front → back) ",
        session.inventory.queue_len(),
        session.inventory.queue_capacity()
    );
    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = Vec::new();
    for piece in session.inventory.upcoming() {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(piece_span(piece, visual));
    }
    if spans.is_empty() {
        spans.push(Span::styled("Empty", Style::default().fg(Color::DarkGray)));
    }

    let line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(line, inner);
}

/// Render the reserve stack, top first
fn render_reserve(frame: &mut Frame, area: Rect, session: &Session, visual: &VisualSettings) {
    let title = format!(
        " RESERVE {}/{} (top → base) ",
        session.inventory.reserved_len(),
        session.inventory.reserved_capacity()
    );
    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = session
        .inventory
        .reserved()
        .map(|piece| Line::from(piece_span(piece, visual)))
        .collect();
    if lines.is_empty() {
        lines.push(Line::styled("Empty", Style::default().fg(Color::DarkGray)));
    }

    let column = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(column, inner);
}

/// Render the action list with quick keys
fn render_actions(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .title(" ACTIONS ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = ACTIONS
        .iter()
        .enumerate()
        .map(|(i, (key, label))| {
            let is_selected = i == session.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let style = if is_selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!("{}{}  ", prefix, key), style),
                Span::styled(label.to_string(), style),
            ])
        })
        .collect();

    let list = Paragraph::new(lines);
    frame.render_widget(list, inner);
}

/// Render the feedback log, oldest line first
fn render_feedback(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default()
        .title(" LOG ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = session
        .feedback()
        .map(|feedback| {
            let style = match feedback.kind {
                FeedbackKind::Action => Style::default().fg(Color::Magenta).bold(),
                FeedbackKind::Notice => Style::default().fg(Color::DarkGray),
                FeedbackKind::Error => Style::default().fg(Color::Red),
            };
            Line::styled(feedback.text.clone(), style)
        })
        .collect();

    let log = Paragraph::new(lines);
    frame.render_widget(log, inner);
}

/// Build the styled token for one piece, honoring the visual settings
fn piece_span(piece: &Piece, visual: &VisualSettings) -> Span<'static> {
    let (open, close) = visual.piece_brackets();
    let text = if visual.show_ids {
        format!("{}{} {}{}", open, piece.kind.tag(), piece.id, close)
    } else {
        format!("{}{}{}", open, piece.kind.tag(), close)
    };
    Span::styled(text, Style::default().fg(piece.kind.color()))
}

/// Center a rect within another rect
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
