use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs},
    Frame,
};

use destishare_app::{AppState, DraftForm};
use destishare_types::{Category, Destination, KNOWN_CATEGORIES};

use super::state::{FormField, UiState};
use crate::views;

pub(crate) fn draw(f: &mut Frame, state: &AppState, drafts: &DraftForm, ui: &UiState) {
    let mut constraints = vec![Constraint::Length(3)]; // Header with filter tabs
    if state.form_visible {
        constraints.push(Constraint::Length(7)); // Creation form
    }
    constraints.push(Constraint::Min(0)); // Destination list
    constraints.push(Constraint::Length(2)); // Footer (status + help)

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    let mut next = 0;
    render_tabs(f, chunks[next], ui);
    next += 1;

    if state.form_visible {
        render_form(f, chunks[next], drafts, ui, state.submitting);
        next += 1;
    }

    render_list(f, chunks[next], state, ui);
    render_footer(f, chunks[next + 1], state, ui);
}

fn render_tabs(f: &mut Frame, area: Rect, ui: &UiState) {
    let mut titles = vec![Line::from("All")];
    titles.extend(KNOWN_CATEGORIES.iter().map(|category| {
        Line::from(Span::styled(
            category.name().to_string(),
            category_style(category),
        ))
    }));

    let tabs = Tabs::new(titles)
        .select(ui.filter_index)
        .highlight_style(
            Style::default()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::UNDERLINED),
        )
        .block(Block::default().borders(Borders::ALL).title(" Destinashare "));

    f.render_widget(tabs, area);
}

fn render_form(f: &mut Frame, area: Rect, drafts: &DraftForm, ui: &UiState, submitting: bool) {
    let category_value = if drafts.category.is_empty() {
        "←/→ to choose".to_string()
    } else {
        drafts.category.clone()
    };

    let lines = vec![
        form_line("Text", &drafts.text, ui.focus == FormField::Text),
        form_line("Source", &drafts.source, ui.focus == FormField::Source),
        form_line("Category", &category_value, ui.focus == FormField::Category),
        Line::from(""),
        Line::from(Span::styled(
            if submitting {
                "Uploading..."
            } else {
                "[tab] next field  [enter] add  [esc] close"
            },
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let form = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" New destination "));
    f.render_widget(form, area);
}

fn form_line<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let marker = if focused { "▌ " } else { "  " };
    let label_style = if focused {
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Yellow)
    } else {
        Style::default()
    };

    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{:<9}", label), label_style),
        Span::raw(value.to_string()),
    ])
}

fn render_list(f: &mut Frame, area: Rect, state: &AppState, ui: &UiState) {
    if state.loading {
        let loader = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(loader, area);
        return;
    }

    if state.items.is_empty() {
        f.render_widget(Paragraph::new(views::EMPTY_LIST_MESSAGE), area);
        return;
    }

    let items: Vec<ListItem> = state
        .items
        .iter()
        .map(|destination| ListItem::new(destination_line(destination, state)))
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(ui.selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn destination_line<'a>(destination: &'a Destination, state: &AppState) -> Line<'a> {
    let mut spans = vec![
        Span::styled(
            format!("#{:<5}", destination.id),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(format!(
            "👍 {:<4} 🏞️ {:<4} ❌ {:<4} ",
            destination.votes_recommended,
            destination.votes_must_visit,
            destination.votes_not_worth_it,
        )),
        Span::styled(
            format!("[{}] ", destination.category),
            category_style(&destination.category),
        ),
        Span::raw(destination.text.as_str()),
        Span::styled(
            format!(" ({})", destination.source),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if state.voting == Some(destination.id) {
        spans.push(Span::styled(
            " voting...",
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

fn render_footer(f: &mut Frame, area: Rect, state: &AppState, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    let first = match &ui.status {
        Some(status) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        None => Line::from(views::count_footer(state.items.len())),
    };
    f.render_widget(Paragraph::new(first), chunks[0]);

    let help = Line::from(vec![
        Span::styled("[q]", Style::default().fg(Color::Yellow)),
        Span::raw("uit "),
        Span::styled("[j/k]", Style::default().fg(Color::Yellow)),
        Span::raw("move "),
        Span::styled("[h/l]", Style::default().fg(Color::Yellow)),
        Span::raw("filter "),
        Span::styled("[1/2/3]", Style::default().fg(Color::Yellow)),
        Span::raw("vote "),
        Span::styled("[a]", Style::default().fg(Color::Yellow)),
        Span::raw("dd "),
        Span::styled("[r]", Style::default().fg(Color::Yellow)),
        Span::raw("efresh"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[1]);
}

fn category_style(category: &Category) -> Style {
    match category.color() {
        Some((r, g, b)) => Style::default().fg(Color::Rgb(r, g, b)),
        None => Style::default(),
    }
}
