use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use destishare_types::VoteField;

/// Keys recognized while the list has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    Quit,
    Up,
    Down,
    FilterPrev,
    FilterNext,
    Vote(VoteField),
    OpenForm,
    Refresh,
    None,
}

/// Keys recognized while the creation form is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    Close,
    Submit,
    NextField,
    Insert(char),
    Backspace,
    Prev,
    Next,
    None,
}

pub fn map_list_key(key: KeyEvent) -> ListCommand {
    if is_ctrl_c(key) {
        return ListCommand::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => ListCommand::Quit,
        KeyCode::Up | KeyCode::Char('k') => ListCommand::Up,
        KeyCode::Down | KeyCode::Char('j') => ListCommand::Down,
        KeyCode::Left | KeyCode::Char('h') => ListCommand::FilterPrev,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => ListCommand::FilterNext,
        KeyCode::Char('1') => ListCommand::Vote(VoteField::Recommended),
        KeyCode::Char('2') => ListCommand::Vote(VoteField::MustVisit),
        KeyCode::Char('3') => ListCommand::Vote(VoteField::NotWorthIt),
        KeyCode::Char('a') => ListCommand::OpenForm,
        KeyCode::Char('r') => ListCommand::Refresh,
        _ => ListCommand::None,
    }
}

pub fn map_form_key(key: KeyEvent) -> FormCommand {
    if is_ctrl_c(key) {
        return FormCommand::Close;
    }

    match key.code {
        KeyCode::Esc => FormCommand::Close,
        KeyCode::Enter => FormCommand::Submit,
        KeyCode::Tab => FormCommand::NextField,
        KeyCode::Backspace => FormCommand::Backspace,
        KeyCode::Left => FormCommand::Prev,
        KeyCode::Right => FormCommand::Next,
        KeyCode::Char(c) => FormCommand::Insert(c),
        _ => FormCommand::None,
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
