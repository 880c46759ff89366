use crate::application::{App, Screen};
use crate::domain::SmsComposer;
use crossterm::event::KeyCode;
use std::time::Instant;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(
        app: &mut App,
        key: KeyCode,
        now: Instant,
        composer: &dyn SmsComposer,
    ) {
        if app.editing_phone {
            Self::handle_phone_input(app, key);
            return;
        }

        match app.screen {
            Screen::Splash => {
                app.skip_splash();
                return;
            }
            Screen::Processing => {
                if key == KeyCode::Esc {
                    app.cancel_processing();
                }
                return;
            }
            _ => {}
        }

        match key {
            KeyCode::Tab => {
                app.next_tab();
                return;
            }
            KeyCode::BackTab => {
                app.previous_tab();
                return;
            }
            KeyCode::Char('1') => {
                app.navigate(Screen::Shop);
                return;
            }
            KeyCode::Char('2') => {
                app.navigate(Screen::Orders);
                return;
            }
            KeyCode::Char('3') => {
                app.navigate(Screen::Cart);
                return;
            }
            _ => {}
        }

        match app.screen {
            Screen::Shop => Self::handle_shop(app, key, now),
            Screen::Cart => Self::handle_cart(app, key, composer),
            Screen::Orders | Screen::Splash | Screen::Processing => {}
        }
    }

    fn handle_shop(app: &mut App, key: KeyCode, now: Instant) {
        app.status_message = None;
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous_sku(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next_sku(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => app.increment_selected(),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => app.decrement_selected(),
            KeyCode::Enter => app.add_to_cart(now),
            _ => {}
        }
    }

    fn handle_cart(app: &mut App, key: KeyCode, composer: &dyn SmsComposer) {
        match key {
            KeyCode::Char('e') | KeyCode::Enter => app.start_phone_editing(),
            KeyCode::Char('s') => {
                if app.can_checkout() {
                    app.checkout(composer);
                }
            }
            KeyCode::Char('c') => app.clear_cart(),
            _ => {}
        }
    }

    fn handle_phone_input(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => app.finish_phone_editing(),
            KeyCode::Backspace => app.delete_phone_char(),
            KeyCode::Left => app.move_phone_cursor_left(),
            KeyCode::Right => app.move_phone_cursor_right(),
            KeyCode::Home => app.cursor_position = 0,
            KeyCode::End => app.cursor_position = app.phone.chars().count(),
            KeyCode::Char(c) => app.insert_phone_char(c),
            _ => {}
        }
    }
}
