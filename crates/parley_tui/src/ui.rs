use parley_core::{timestamp_label, Message, UserDirectory};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

pub fn render(app: &App, frame: &mut Frame) {
    let [header_area, transcript_area, input_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header_area);
    render_transcript(app, frame, transcript_area);
    render_input(app, frame, input_area);
    render_footer(app, frame, footer_area);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(" parley ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(header, area);
}

fn render_transcript(app: &App, frame: &mut Frame, area: Rect) {
    let state = app.conversation.state();
    let directory = app.conversation.directory();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" Conversation ({}) ", state.messages.len()));
    let inner = block.inner(area);

    let mut lines: Vec<Line> = Vec::new();
    let mut selection_start = 0u16;
    let mut selection_rows = 0u16;
    let mut total_rows = 0u16;

    for (idx, message) in state.messages.iter().enumerate() {
        let is_selected = app.selected == Some(idx);
        let entry = message_lines(
            message,
            directory,
            is_selected,
            is_selected && app.selection_is_deletable(),
        );

        // Separator line included; counts are estimates under wrapping.
        let rows = entry
            .iter()
            .map(|line| estimated_rows(line, inner.width))
            .sum::<u16>()
            + 1;
        if is_selected {
            selection_start = total_rows;
            selection_rows = rows;
        }
        total_rows += rows;

        lines.extend(entry);
        lines.push(Line::default());
    }

    // Follow the newest message unless a selection pins the view.
    let mut scroll = total_rows.saturating_sub(inner.height);
    if app.selected.is_some() {
        if selection_start < scroll {
            scroll = selection_start;
        } else if selection_start + selection_rows > scroll + inner.height {
            scroll = (selection_start + selection_rows).saturating_sub(inner.height);
        }
    }

    let transcript = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(transcript, area);
}

/// Lines for one transcript entry: optional author label, body, meta row.
fn message_lines<'a>(
    message: &'a Message,
    directory: &'a UserDirectory,
    selected: bool,
    deletable: bool,
) -> Vec<Line<'a>> {
    let is_self = message.is_authored_by(directory.self_id());
    let alignment = if is_self {
        Alignment::Right
    } else {
        Alignment::Left
    };

    let mut lines = Vec::new();

    // The label is omitted entirely for authors the directory does not know.
    if let Some(name) = directory.display_name(&message.author) {
        let color = if is_self { Color::Cyan } else { Color::Yellow };
        lines.push(
            Line::from(Span::styled(
                name,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .alignment(alignment),
        );
    }

    let text_style = if selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };
    lines.push(Line::from(Span::styled(message.text.as_str(), text_style)).alignment(alignment));

    let mut meta = vec![Span::styled(
        timestamp_label(message.sent_at),
        Style::default().fg(Color::DarkGray),
    )];
    if deletable {
        meta.push(Span::raw(" "));
        meta.push(Span::styled("✕ Ctrl+D", Style::default().fg(Color::Red)));
    }
    lines.push(Line::from(meta).alignment(alignment));

    lines
}

/// Display rows a line occupies once wrapped to `width`.
fn estimated_rows(line: &Line, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let chars: usize = line
        .spans
        .iter()
        .map(|span| span.content.chars().count())
        .sum();
    if chars == 0 {
        1
    } else {
        ((chars - 1) / width as usize + 1) as u16
    }
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let draft = app.conversation.state().draft.as_str();

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Message ");

    // Horizontal scroll keeps the cursor visible on long drafts.
    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor_pos = app.cursor;
    let scroll_offset = if inner_width == 0 {
        0
    } else if cursor_pos >= inner_width {
        cursor_pos - inner_width + 1
    } else {
        0
    };

    let visible_text: String = draft.chars().skip(scroll_offset).take(inner_width).collect();

    let input = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::Cyan))
        .block(input_block);

    frame.render_widget(input, area);

    let cursor_x = (cursor_pos - scroll_offset) as u16;
    frame.set_cursor_position((area.x + cursor_x + 1, area.y + 1));
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let key_style = Style::default().bg(Color::DarkGray).fg(Color::White);
    let label_style = Style::default().bg(Color::Black).fg(Color::White);
    // The send hint goes inert while there is nothing to send.
    let inert_style = Style::default().bg(Color::Black).fg(Color::DarkGray);

    let draft_empty = app.conversation.state().draft.is_empty();

    let mut hints = vec![
        Span::styled(" Enter ", key_style),
        Span::styled(
            " send ",
            if draft_empty { inert_style } else { label_style },
        ),
        Span::styled(" Up/Dn ", key_style),
        Span::styled(" select ", label_style),
    ];
    if app.selection_is_deletable() {
        hints.extend(vec![
            Span::styled(" Ctrl+D ", key_style),
            Span::styled(" delete ", label_style),
        ]);
    }
    if app.selected.is_some() {
        hints.extend(vec![
            Span::styled(" Esc ", key_style),
            Span::styled(" clear ", label_style),
        ]);
    }
    hints.extend(vec![
        Span::styled(" Ctrl+C ", key_style),
        Span::styled(" quit ", label_style),
    ]);

    let footer = Paragraph::new(Line::from(hints)).style(Style::default().bg(Color::Black));
    frame.render_widget(footer, area);
}
