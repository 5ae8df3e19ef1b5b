use super::layout::{CardGrid, ScreenLayout};
use super::{truncate_str, url_host};
use crate::app::App;
use crate::gallery::Card;
use crate::theme::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let palette = app.theme.current().palette();
    let layout = ScreenLayout::new(area);

    frame.render_widget(Block::default().style(palette.base()), area);

    // ── Hero ──
    let owner = &app.portfolio.owner;
    let hero = Paragraph::new(vec![
        Line::from(Span::styled(format!(" {}", owner.name), palette.accent())),
        Line::from(Span::styled(
            format!(" {}", owner.role),
            Style::default().fg(palette.highlight),
        )),
        Line::from(Span::styled(format!(" {}", owner.tagline), palette.muted())),
    ])
    .block(
        Block::default()
            .borders(Borders::BOTTOM | Borders::TOP)
            .border_style(palette.muted()),
    );
    frame.render_widget(hero, layout.hero);

    let toggle = Paragraph::new(format!("[ {} ]", app.theme.current().icon()))
        .style(Style::default().fg(palette.highlight));
    frame.render_widget(toggle, layout.toggle);

    // ── Gallery ──
    let grid = CardGrid::new(layout.grid);
    let (scroll, count) = app
        .gallery
        .as_ref()
        .map_or((0, 0), |g| (g.scroll(), g.len()));
    let total_rows = grid.total_rows(count);
    let position = if total_rows == 0 {
        String::from(" 0 projects ")
    } else {
        format!(" row {}/{} ", scroll + 1, total_rows)
    };

    let gallery_block = Block::default()
        .borders(Borders::ALL)
        .border_style(palette.muted())
        .title(Span::styled(" Projects ", palette.accent()))
        .title_bottom(Line::from(position).alignment(Alignment::Right));
    frame.render_widget(gallery_block, layout.gallery);

    if let Some(gallery) = app.gallery.as_ref() {
        for (index, rect) in grid.card_rects(count, scroll) {
            if let Some(card) = gallery.card(index) {
                render_card(frame, rect, card, index == app.selected, &palette);
            }
        }
    }

    // ── Footer ──
    let mut contacts: Vec<Span> = Vec::new();
    for contact in &owner.contacts {
        contacts.push(Span::styled(format!(" {} ", contact.label), palette.accent()));
        contacts.push(Span::styled(contact.href.as_str(), palette.link()));
        contacts.push(Span::raw("  "));
    }
    let footer = Paragraph::new(vec![
        Line::from(contacts),
        Line::from(Span::styled(
            format!(" © {} {}. All rights reserved.", app.footer_year, owner.name),
            palette.muted(),
        )),
    ]);
    frame.render_widget(footer, layout.footer);

    // ── Status bar ──
    let key = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let status_line = Line::from(vec![
        Span::styled(" ←↑↓→", key),
        Span::raw(" Navigate  "),
        Span::styled("Enter", key),
        Span::raw(" Details  "),
        Span::styled("t", key),
        Span::raw(" Theme  "),
        Span::styled("?", key),
        Span::raw(" Help  "),
        Span::styled("q", key),
        Span::raw(" Quit  "),
        Span::styled(&app.status_msg, palette.muted()),
    ]);
    frame.render_widget(Paragraph::new(status_line), layout.status);
}

fn render_card(frame: &mut Frame, area: Rect, card: &Card, selected: bool, palette: &Palette) {
    let border_style = if selected {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        palette.muted()
    };
    let width = area.width.saturating_sub(2) as usize;

    let mut badge = vec![Span::raw(" ")];
    if let Some(tag) = card.tag() {
        badge.push(Span::styled(format!(" {} ", tag), palette.tag()));
    }

    let lines = vec![
        Line::from(Span::styled(
            truncate_str(&format!(" ▣ {}", url_host(card.image())), width),
            palette.muted(),
        )),
        Line::from(Span::styled(
            truncate_str(&format!(" {}", card.title()), width),
            Style::default().fg(palette.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::raw(truncate_str(
            &format!(" {}", card.short_description()),
            width,
        ))),
        Line::from(""),
        Line::from(badge),
    ];

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    if selected {
        block = block.style(Style::default().bg(palette.selected_bg));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
