use crate::application::{App, Screen};
use crate::domain::Sku;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Tabs, Wrap},
    Frame,
};
use std::time::Instant;

pub fn render_ui(f: &mut Frame, app: &App, now: Instant) {
    if app.screen == Screen::Splash {
        let area = f.area();
        render_splash(f, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    match app.screen {
        Screen::Shop => render_shop(f, app, chunks[1]),
        Screen::Processing => render_processing(f, app, chunks[1], now),
        Screen::Orders => render_orders(f, app, chunks[1]),
        Screen::Cart => render_cart(f, app, chunks[1]),
        Screen::Splash => {}
    }
    render_status_bar(f, app, chunks[2]);
    render_tabs(f, app, chunks[3]);
}

fn render_splash(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Ouăle lui Bobiță!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("🛵💨  🥚🥚🥚"),
        Line::from(""),
        Line::from("La Bobiță, la ouă!"),
    ];
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let splash_area = Rect { y: area.y + top, height: area.height - top, ..area };
    let splash = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Black).bg(Color::LightYellow));
    f.render_widget(Block::default().style(Style::default().bg(Color::LightYellow)), area);
    f.render_widget(splash, splash_area);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("Ouăle lui Bobiță").style(Style::default().fg(Color::Yellow));
    f.render_widget(header, area);
}

fn render_shop(f: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<Row> = Sku::ALL
        .iter()
        .enumerate()
        .map(|(i, &sku)| {
            let style = if i == app.selected_sku {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(sku.shop_label()),
                Cell::from(format!("[-] {:>3} [+]", app.machine.quantities().get(sku))),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Min(16), Constraint::Length(12)])
        .header(Row::new(vec!["Alege cantitățile:", ""]).style(Style::default().fg(Color::Cyan)))
        .block(Block::default().borders(Borders::ALL).title("Magazin"))
        .column_spacing(2);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);
    f.render_widget(table, chunks[0]);

    let hint = Paragraph::new(vec![
        Line::from("Enter: Adaugă în coș"),
        Line::from(Span::styled(
            "Glumă: livrare în 5 minute dacă găinile cooperează!",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(hint, chunks[1]);
}

fn render_processing(f: &mut Frame, app: &App, area: Rect, now: Instant) {
    let remaining = app.processing_remaining(now);
    let lines = vec![
        Line::from(Span::styled(
            "Comanda se procesează…",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("👨‍🌾 🔨  🐔🐔"),
        Line::from(""),
        Line::from(Span::styled(
            "Bobiță zice: azi ouăm record! 🥚",
            Style::default().fg(Color::Gray),
        )),
        Line::from(format!("{:.1}s", remaining.as_secs_f32())),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn render_orders(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Status comenzi");
    if app.machine.orders().is_empty() {
        let empty = Paragraph::new("Nicio comandă încă. Plasează una din ecranul Magazin.")
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // One line per entry, wrapped to the block width
    let mut lines = Vec::new();
    for (i, order) in app.machine.orders().iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(format!("• {order}")));
    }
    let orders = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    f.render_widget(orders, area);
}

fn render_cart(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let summary = app.machine.summary();
    let summary_text = if summary.trim().is_empty() { "Coșul e gol".to_string() } else { summary };
    let summary_widget = Paragraph::new(summary_text)
        .block(Block::default().borders(Borders::ALL).title("Coș"));
    f.render_widget(summary_widget, chunks[0]);

    let phone_style = if app.editing_phone {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let phone = Paragraph::new(app.phone.as_str())
        .style(phone_style)
        .block(Block::default().borders(Borders::ALL).title("Număr telefon pentru SMS"));
    f.render_widget(phone, chunks[1]);
    if app.editing_phone {
        f.set_cursor_position((chunks[1].x + 1 + app.cursor_position as u16, chunks[1].y + 1));
    }

    let send_style = if app.can_checkout() {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let actions = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("s: Trimite SMS", send_style),
            Span::raw("   c: Golește coșul   e: editează numărul"),
        ]),
        Line::from(Span::styled(
            "Notă: se pregătește un SMS cu textul comenzii. Trimiterea cere acțiunea ta.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true });
    f.render_widget(actions, chunks[2]);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(ref status) = app.status_message {
        status.clone()
    } else if app.editing_phone {
        "Editare număr (Enter/Esc: gata)".to_string()
    } else {
        match app.screen {
            Screen::Processing => "Esc: anulează comanda".to_string(),
            _ => "Tab/1-3: schimbă ecranul | q: ieșire".to_string(),
        }
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.screen {
            Screen::Processing => Style::default().fg(Color::Yellow),
            _ if app.editing_phone => Style::default().fg(Color::Green),
            _ => Style::default(),
        });
    f.render_widget(status, area);
}

fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<&str> = Screen::TABS.iter().filter_map(|s| s.tab_label()).collect();
    let selected = Screen::TABS.iter().position(|&s| s == app.screen);
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(selected.unwrap_or(0))
        .highlight_style(if selected.is_some() {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        });
    f.render_widget(tabs, area);
}
