use crate::app::App;
use crate::modal::centered_rect;
use crate::theme::Theme;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn sections(theme: Theme) -> [(&'static str, Vec<(String, &'static str)>); 3] {
    let key = |k: &str| k.to_string();
    [
        (
            "Global",
            vec![
                (key("?"), "Toggle this help"),
                (key("t"), "Switch light/dark theme"),
                (key("q"), "Quit application"),
            ],
        ),
        (
            "Gallery",
            vec![
                (key("←↑↓→ / hjkl"), "Move between cards"),
                (key("PgUp/PgDn"), "Scroll the gallery"),
                (key("Enter/click"), "Open project details"),
                (format!("click [ {} ]", theme.icon()), "Switch theme"),
            ],
        ),
        (
            "Project details",
            vec![
                (key("Esc / [ x ]"), "Close"),
                (key("click outside"), "Close"),
                (key("d / g"), "Open live demo / GitHub link"),
                (key("↑/↓"), "Scroll description"),
            ],
        ),
    ]
}

pub fn render(app: &App, frame: &mut Frame) {
    let theme = app.theme.current();
    let palette = theme.palette();
    let area = centered_rect(60, 70, frame.area());

    // Clear the area behind the popup
    frame.render_widget(Clear, area);

    let mut help_text = vec![Line::from("")];
    for (section, keys) in sections(theme) {
        help_text.push(Line::from(Span::styled(
            format!("  {}", section),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )));
        for (key, what) in keys {
            help_text.push(Line::from(vec![
                Span::styled(
                    format!("    {:<15}", key),
                    Style::default().fg(palette.highlight),
                ),
                Span::raw(what),
            ]));
        }
        help_text.push(Line::from(""));
    }

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent))
                .title(" Help: Keybindings ")
                .title_bottom(Line::from(" Press any key to close ").style(palette.muted())),
        )
        .style(palette.base());

    frame.render_widget(help, area);
}
