pub mod helpers;

use crate::app::state::App;
use cs_catalog::Category;
use crossterm::event::KeyCode;

use helpers::category_for_digit;

const PAGE: usize = 5;

/// Apply a key press. Returns the category to fetch when the key triggers one.
pub fn handle_input(app: &mut App, key: KeyCode) -> Option<Category> {
    if app.show_help {
        if matches!(key, KeyCode::Char('?' | 'q') | KeyCode::Esc) {
            app.show_help = false;
        }
        return None;
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.running = false;
            None
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next();
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(app.selected_category()),
        KeyCode::Char(digit) if digit.is_ascii_digit() => category_for_digit(digit),
        KeyCode::PageDown | KeyCode::Right => {
            app.scroll_down(PAGE);
            None
        }
        KeyCode::PageUp | KeyCode::Left => {
            app.scroll_up(PAGE);
            None
        }
        KeyCode::Home => {
            app.scroll = 0;
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_requests_the_selected_category() {
        let mut app = App::new();
        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Down);
        assert_eq!(handle_input(&mut app, KeyCode::Enter), Some(Category::Collections));
    }

    #[test]
    fn digit_triggers_directly() {
        let mut app = App::new();
        assert_eq!(handle_input(&mut app, KeyCode::Char('7')), Some(Category::Agents));
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = App::new();
        handle_input(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        assert_eq!(handle_input(&mut app, KeyCode::Enter), None);
        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn q_quits() {
        let mut app = App::new();
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }
}
