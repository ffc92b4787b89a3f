use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use waclick_core::form::NotificationKind;

use crate::app::{App, Focus};

const FOOTER_NOTE: &str = "Local and international numbers are detected automatically";
const QR_TOO_SMALL: &str = "Enlarge the terminal to show the QR code";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let size = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(4),
        ])
        .split(size);

    render_header(frame, chunks[0], app);

    if app.form.is_result_active() {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);
        render_form(frame, body[0], app);
        render_result(frame, body[1], app);
    } else {
        render_form(frame, chunks[1], app);
    }

    render_footer(frame, chunks[2], app);

    if app.show_help {
        render_help(frame, size);
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let policy = app.form.policy();
    let title = format!(
        "Build a direct WhatsApp link  (country code +{}, local numbers {} digits)",
        policy.country_code(),
        policy.local_length()
    );
    let block = Block::default().borders(Borders::ALL).title("waclick");
    let paragraph = Paragraph::new(Line::from(title)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let mut lines = vec![
        field_line(
            "Phone (e.g. 050-1234567)",
            &app.form.phone,
            app.focus == Focus::Phone,
        ),
        Line::from(""),
        label_line("Message (optional)", app.focus == Focus::Message),
    ];
    let message_style = focus_style(app.focus == Focus::Message);
    if app.form.message.is_empty() {
        lines.push(Line::from(Span::styled("  ", message_style)));
    } else {
        for line in app.form.message.split('\n') {
            lines.push(Line::from(Span::styled(format!("  {}", line), message_style)));
        }
    }
    lines.push(Line::from(""));

    let generate_style = if app.focus == Focus::Generate {
        Style::default().fg(Color::Black).bg(Color::LightGreen)
    } else {
        Style::default().fg(Color::Green)
    };
    let reset_style = if app.focus == Focus::Reset {
        Style::default().fg(Color::Black).bg(Color::LightRed)
    } else {
        Style::default().fg(Color::Red)
    };
    lines.push(Line::from(vec![
        Span::styled("[Generate]", generate_style),
        Span::raw("  "),
        Span::styled("[Reset]", reset_style),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Link"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_result(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let Some(link) = app.form.result() else {
        return;
    };

    let block = Block::default().borders(Borders::ALL).title("Result");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // URL rows, blank, action row, blank; the QR code takes what is left.
    let width = usize::from(inner.width.max(1));
    let url_rows = link.as_str().chars().count().div_ceil(width).max(1);
    let header_rows = u16::try_from(url_rows + 3).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(header_rows), Constraint::Min(0)])
        .split(inner);

    let copy_label = if app.form.is_copied() {
        Span::styled(
            "[Copied]",
            Style::default().fg(Color::Black).bg(Color::LightGreen),
        )
    } else {
        Span::styled("[Copy ^Y]", Style::default().fg(Color::Green))
    };
    let header = vec![
        Line::from(Span::styled(
            link.as_str().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            copy_label,
            Span::raw("  "),
            Span::styled("[Share ^S]", Style::default().fg(Color::Cyan)),
            Span::raw("  "),
            Span::styled("[New link ^R]", Style::default().fg(Color::DarkGray)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(header)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    let qr_area = chunks[1];
    let qr_lines: Vec<Line> = match (&app.qr, &app.qr_error) {
        (Some(qr), _) if qr_fits(qr, qr_area) => {
            qr.lines().map(|row| Line::from(row.to_string())).collect()
        }
        (Some(_), _) => vec![Line::from(Span::styled(
            QR_TOO_SMALL,
            Style::default().fg(Color::Yellow),
        ))],
        (None, Some(err)) => vec![Line::from(Span::styled(
            format!("QR code unavailable: {}", err),
            Style::default().fg(Color::Red),
        ))],
        (None, None) => Vec::new(),
    };
    frame.render_widget(
        Paragraph::new(qr_lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        qr_area,
    );
}

/// A clipped QR code does not scan, so it is shown whole or not at all.
fn qr_fits(qr: &str, area: Rect) -> bool {
    let rows = qr.lines().count();
    let cols = qr.lines().map(|row| row.chars().count()).max().unwrap_or(0);
    rows <= usize::from(area.height) && cols <= usize::from(area.width)
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let hint = match app.focus {
        Focus::Message => "tab next  shift+tab prev  enter newline  ^Y copy  ^S share  ^R reset  F1 help  esc quit",
        _ => "tab next  shift+tab prev  enter generate  ^Y copy  ^S share  ^R reset  F1 help  esc quit",
    };

    let mut lines = vec![
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        Line::from(Span::styled(
            FOOTER_NOTE,
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if let Some(notification) = app.form.notification() {
        let color = match notification.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        };
        lines.push(Line::from(Span::styled(
            notification.message.clone(),
            Style::default().fg(color),
        )));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let modal = centered_rect(70, 60, area);
    frame.render_widget(Clear, modal);

    let text = vec![
        Line::from("Global: esc quit, Ctrl+C quit, F1 help"),
        Line::from("Form: tab/shift+tab move, enter generate (newline in message), Ctrl+U clear field, Ctrl+W delete word"),
        Line::from("Result: Ctrl+Y copy link, Ctrl+S share (opens the link), Ctrl+R new link"),
        Line::from(""),
        Line::from("Numbers starting with 0 get the country code instead of the 0."),
        Line::from("Local numbers without the 0 get the country code prepended."),
        Line::from("Anything else is used as an international number."),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn label_line(label: &str, focused: bool) -> Line<'static> {
    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if focused {
        style = style.fg(Color::Yellow);
    }
    Line::from(Span::styled(format!("{}:", label), style))
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(value.to_string(), focus_style(focused)),
    ])
}

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
