use super::url_host;
use crate::app::App;
use crate::modal::{Action, CLOSE_LABEL, ModalLayout};
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(app: &App, frame: &mut Frame) {
    let Some(content) = app.modal.content() else {
        return;
    };
    let palette = app.theme.current().palette();
    let layout = ModalLayout::new(frame.area());

    // Dim the background page
    frame.render_widget(
        Block::default().style(Style::default().add_modifier(Modifier::DIM)),
        layout.overlay,
    );
    frame.render_widget(Clear, layout.content);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .style(palette.base())
        .title_bottom(
            Line::from(" Esc close  d demo  g github  ↑↓ scroll ").style(palette.muted()),
        );
    frame.render_widget(block, layout.content);

    let close = Paragraph::new(CLOSE_LABEL).style(Style::default().fg(palette.highlight));
    frame.render_widget(close, layout.close);

    let title = Paragraph::new(Line::from(Span::styled(&content.title, palette.accent())))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(palette.muted()),
        );
    frame.render_widget(title, layout.header);

    let image = Paragraph::new(Line::from(vec![
        Span::styled(" ▣ ", palette.muted()),
        Span::styled(url_host(&content.image), palette.muted()),
    ]));
    frame.render_widget(image, layout.image);

    let description = Paragraph::new(content.description.as_str())
        .wrap(Wrap { trim: false })
        .scroll((app.modal.body_scroll(), 0));
    frame.render_widget(description, layout.description);

    let mut tags = Vec::new();
    for tag in &content.tags {
        tags.push(Span::styled(format!(" {} ", tag), palette.tag()));
        tags.push(Span::raw(" "));
    }
    let tech = Paragraph::new(Line::from(tags)).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(palette.muted())
            .title(Span::styled(" Technologies Used: ", palette.muted())),
    );
    frame.render_widget(tech, layout.tags);

    for action in Action::ALL {
        let link = content.action(action);
        let (text, style) = match link.target() {
            Some(_) => (format!("↗ {}", action.label()), palette.link()),
            None => (format!("{} (no link yet)", action.label()), palette.muted()),
        };
        let button = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.muted()),
            );
        frame.render_widget(button, layout.action_area(action));
    }
}
