mod input;
mod state;
mod ui;

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::{
    execute, terminal,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::runtime::Runtime;

use destishare_app::App;
use destishare_client::DestinationRepository;
use destishare_types::CategoryFilter;

use input::{FormCommand, ListCommand};
use state::UiState;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self> {
        // Enter alternate screen so we don't mess up the user's shell history
        execute!(io::stdout(), EnterAlternateScreen)?;
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restore terminal state when the view is dropped
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Interactive browse loop.
///
/// Remote calls run to completion on the runtime while the handler waits,
/// so every response lands before the next key is processed. The state
/// container still carries its fetch tickets, which keeps the reconciliation
/// rules identical for drivers that do overlap requests.
pub fn run<R: DestinationRepository>(runtime: &Runtime, mut app: App<R>) -> Result<()> {
    let mut ui = UiState::new();
    let _guard = TerminalGuard::new()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    fetch(runtime, &mut app, &mut terminal, &mut ui, CategoryFilter::All)?;

    loop {
        ui.clamp_selection(app.state().items.len());
        terminal.draw(|f| ui::draw(f, app.state(), app.drafts(), &ui))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        ui.status = None;

        if app.state().form_visible {
            match input::map_form_key(key) {
                FormCommand::Close => app.toggle_form(),
                FormCommand::Submit => {
                    runtime.block_on(app.submit());
                    if !app.state().form_visible {
                        ui.selected = 0;
                    }
                }
                FormCommand::NextField => ui.focus = ui.focus.next(),
                FormCommand::Insert(c) => ui.insert_char(app.drafts_mut(), c),
                FormCommand::Backspace => ui.backspace(app.drafts_mut()),
                FormCommand::Prev => ui.cycle_category(app.drafts_mut(), -1),
                FormCommand::Next => ui.cycle_category(app.drafts_mut(), 1),
                FormCommand::None => {}
            }
        } else {
            match input::map_list_key(key) {
                ListCommand::Quit => break,
                ListCommand::Up => ui.selected = ui.selected.saturating_sub(1),
                ListCommand::Down => ui.selected += 1,
                ListCommand::FilterPrev => {
                    ui.shift_filter(-1);
                    let filter = ui.filter();
                    fetch(runtime, &mut app, &mut terminal, &mut ui, filter)?;
                }
                ListCommand::FilterNext => {
                    ui.shift_filter(1);
                    let filter = ui.filter();
                    fetch(runtime, &mut app, &mut terminal, &mut ui, filter)?;
                }
                ListCommand::Vote(field) => {
                    if let Some(target) = app.state().items.get(ui.selected) {
                        let id = target.id;
                        runtime.block_on(app.vote(id, field));
                    }
                }
                ListCommand::OpenForm => app.toggle_form(),
                ListCommand::Refresh => {
                    let filter = ui.filter();
                    fetch(runtime, &mut app, &mut terminal, &mut ui, filter)?;
                }
                ListCommand::None => {}
            }
        }

        collect_notices(&mut app, &mut ui);
    }

    Ok(())
}

/// Issue a list fetch, drawing one frame first so the loading indicator is
/// visible while the response is awaited.
fn fetch<R: DestinationRepository>(
    runtime: &Runtime,
    app: &mut App<R>,
    terminal: &mut Term,
    ui: &mut UiState,
    filter: CategoryFilter,
) -> Result<()> {
    let ticket = app.begin_fetch(filter);
    terminal.draw(|f| ui::draw(f, app.state(), app.drafts(), ui))?;

    let result = runtime.block_on(app.repo().list(ticket.query.clone()));
    app.apply_fetch(&ticket, result);

    ui.selected = 0;
    collect_notices(app, ui);
    Ok(())
}

fn collect_notices<R: DestinationRepository>(app: &mut App<R>, ui: &mut UiState) {
    if let Some(notice) = app.drain_notices().pop() {
        ui.status = Some(notice.message);
    }
}
