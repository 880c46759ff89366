//! Application state management for the storefront.
//!
//! This module contains the main application state, screen navigation and
//! the timed transitions (splash, order processing) of the terminal UI.

use crate::domain::{DomainError, OrderMachine, Sku, SmsComposer};
use crate::infrastructure::StoreConfig;
use std::time::{Duration, Instant};

/// Screen currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Startup splash, left automatically after the splash delay
    Splash,
    /// Quantity pickers
    Shop,
    /// Waiting for a submitted order to complete
    Processing,
    /// Order log
    Orders,
    /// Cart summary, phone number and checkout
    Cart,
}

impl Screen {
    /// Screens reachable from the bottom navigation bar, in display order.
    pub const TABS: [Screen; 3] = [Screen::Shop, Screen::Orders, Screen::Cart];

    /// Label shown in the navigation bar, or `None` for screens without a tab.
    pub fn tab_label(self) -> Option<&'static str> {
        match self {
            Screen::Shop => Some("Magazin"),
            Screen::Orders => Some("Comenzi"),
            Screen::Cart => Some("Coș"),
            Screen::Splash | Screen::Processing => None,
        }
    }
}

/// Main application state.
///
/// Owns the order state machine and everything the screens need to render.
///
/// # Examples
///
/// ```
/// use bobita::application::{App, Screen};
///
/// let app = App::default();
/// assert_eq!(app.screen, Screen::Splash);
/// assert_eq!(app.phone, "07xxxxxxxx");
/// ```
#[derive(Debug)]
pub struct App {
    /// Quantities, order log and processing state
    pub machine: OrderMachine,
    pub screen: Screen,
    /// Destination phone number for checkout
    pub phone: String,
    /// Whether the phone number field has keyboard focus
    pub editing_phone: bool,
    /// Cursor position within the phone number
    pub cursor_position: usize,
    /// Index into `Sku::ALL` of the highlighted shop row
    pub selected_sku: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    splash_until: Option<Instant>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(&StoreConfig::default(), Instant::now())
    }
}

impl App {
    /// Creates the app showing the splash screen, which ends at
    /// `now + splash_delay`.
    pub fn new(config: &StoreConfig, now: Instant) -> Self {
        Self {
            machine: OrderMachine::new(config.processing_delay()),
            screen: Screen::Splash,
            phone: config.default_phone.clone(),
            editing_phone: false,
            cursor_position: 0,
            selected_sku: 0,
            status_message: None,
            splash_until: Some(now + config.splash_delay()),
        }
    }

    /// Advances timed transitions to `now`.
    ///
    /// Leaves the splash once its delay is over and completes a pending order,
    /// which moves the user to the orders screen.
    pub fn tick(&mut self, now: Instant) {
        if let Some(until) = self.splash_until {
            if now >= until {
                self.skip_splash();
            }
        }

        if self.machine.tick(now) && self.screen == Screen::Processing {
            self.screen = Screen::Orders;
        }
    }

    /// Leaves the splash screen right away and disarms its timer.
    pub fn skip_splash(&mut self) {
        if self.screen == Screen::Splash {
            self.screen = Screen::Shop;
        }
        self.splash_until = None;
    }

    /// Switches to a navigation tab.
    ///
    /// Ignored while the splash or the processing screen is showing, and for
    /// screens that have no tab. Leaving a screen ends phone editing and
    /// clears the status message.
    ///
    /// # Arguments
    ///
    /// * `screen` - Target screen, one of [`Screen::TABS`]
    ///
    /// # Examples
    ///
    /// ```
    /// use bobita::application::{App, Screen};
    ///
    /// let mut app = App::default();
    /// app.skip_splash();
    /// app.navigate(Screen::Cart);
    /// assert_eq!(app.screen, Screen::Cart);
    ///
    /// app.navigate(Screen::Processing);
    /// assert_eq!(app.screen, Screen::Cart);
    /// ```
    pub fn navigate(&mut self, screen: Screen) {
        if matches!(self.screen, Screen::Splash | Screen::Processing) || screen.tab_label().is_none() {
            return;
        }
        self.editing_phone = false;
        self.status_message = None;
        self.screen = screen;
    }

    /// Moves to the next tab, wrapping around.
    pub fn next_tab(&mut self) {
        if let Some(pos) = Screen::TABS.iter().position(|&s| s == self.screen) {
            self.navigate(Screen::TABS[(pos + 1) % Screen::TABS.len()]);
        }
    }

    /// Moves to the previous tab, wrapping around.
    pub fn previous_tab(&mut self) {
        if let Some(pos) = Screen::TABS.iter().position(|&s| s == self.screen) {
            let len = Screen::TABS.len();
            self.navigate(Screen::TABS[(pos + len - 1) % len]);
        }
    }

    /// SKU of the highlighted shop row.
    pub fn selected_sku(&self) -> Sku {
        Sku::ALL[self.selected_sku.min(Sku::ALL.len() - 1)]
    }

    /// Moves the shop highlight down, stopping at the last row.
    pub fn select_next_sku(&mut self) {
        if self.selected_sku < Sku::ALL.len() - 1 {
            self.selected_sku += 1;
        }
    }

    /// Moves the shop highlight up, stopping at the first row.
    pub fn select_previous_sku(&mut self) {
        self.selected_sku = self.selected_sku.saturating_sub(1);
    }

    /// Adds one unit of the highlighted SKU.
    pub fn increment_selected(&mut self) {
        let sku = self.selected_sku();
        self.machine.increment(sku);
    }

    /// Removes one unit of the highlighted SKU, never going below zero.
    pub fn decrement_selected(&mut self) {
        let sku = self.selected_sku();
        self.machine.decrement(sku);
    }

    /// "Adaugă în coș": submits the cart and shows the processing screen.
    pub fn add_to_cart(&mut self, now: Instant) {
        if self.machine.submit(now) {
            self.screen = Screen::Processing;
        }
    }

    /// Abandons the pending order and goes back to the shop.
    pub fn cancel_processing(&mut self) {
        if self.machine.cancel_processing() {
            self.status_message = Some("Comanda a fost anulată".to_string());
        }
        if self.screen == Screen::Processing {
            self.screen = Screen::Shop;
        }
    }

    /// Time left on the processing screen.
    pub fn processing_remaining(&self, now: Instant) -> Duration {
        self.machine.remaining(now).unwrap_or_default()
    }

    /// "Golește coșul".
    pub fn clear_cart(&mut self) {
        self.machine.clear();
        self.status_message = Some("Coșul a fost golit".to_string());
    }

    /// Whether the checkout action is available.
    pub fn can_checkout(&self) -> bool {
        !self.machine.summary().trim().is_empty()
    }

    /// "Trimite SMS": hands the cart to the composer.
    ///
    /// The composer never reports back, so the status line only says the
    /// message was prepared, not where it ended up.
    ///
    /// # Arguments
    ///
    /// * `composer` - Collaborator that opens the message-composition surface
    pub fn checkout(&mut self, composer: &dyn SmsComposer) {
        self.editing_phone = false;
        self.status_message = Some(match self.machine.checkout(&self.phone, composer) {
            Ok(message) => format!("SMS pregătit pentru {}", message.to),
            Err(DomainError::EmptyCart) => "Coșul e gol".to_string(),
        });
    }

    /// Gives the phone number field keyboard focus.
    ///
    /// Places the cursor after the last character and clears the status
    /// message.
    pub fn start_phone_editing(&mut self) {
        self.editing_phone = true;
        self.cursor_position = self.phone.chars().count();
        self.status_message = None;
    }

    /// Releases keyboard focus from the phone number field.
    ///
    /// The number is kept as typed; no format validation is done.
    pub fn finish_phone_editing(&mut self) {
        self.editing_phone = false;
        self.cursor_position = 0;
    }

    /// Inserts a character at the cursor and moves the cursor past it.
    ///
    /// # Arguments
    ///
    /// * `c` - Character to insert; any character is accepted
    pub fn insert_phone_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.phone.insert(idx, c);
        self.cursor_position += 1;
    }

    /// Removes the character before the cursor.
    pub fn delete_phone_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        let idx = self.byte_index();
        self.phone.remove(idx);
    }

    /// Moves the phone cursor one character left.
    pub fn move_phone_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Moves the phone cursor one character right, up to the end of the number.
    pub fn move_phone_cursor_right(&mut self) {
        if self.cursor_position < self.phone.chars().count() {
            self.cursor_position += 1;
        }
    }

    fn byte_index(&self) -> usize {
        self.phone
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.phone.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SmsMessage;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingComposer {
        sent: RefCell<Vec<SmsMessage>>,
    }

    impl SmsComposer for RecordingComposer {
        fn compose(&self, message: &SmsMessage) {
            self.sent.borrow_mut().push(message.clone());
        }
    }

    fn shop_app() -> (App, Instant) {
        let start = Instant::now();
        let mut app = App::new(&StoreConfig::default(), start);
        app.skip_splash();
        (app, start)
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Splash);
        assert_eq!(app.phone, "07xxxxxxxx");
        assert!(!app.editing_phone);
        assert_eq!(app.selected_sku, 0);
        assert!(app.status_message.is_none());
        assert!(app.machine.quantities().is_empty());
        assert!(app.machine.orders().is_empty());
    }

    #[test]
    fn test_splash_ends_after_delay() {
        let start = Instant::now();
        let mut app = App::new(&StoreConfig::default(), start);

        app.tick(start + Duration::from_millis(2000));
        assert_eq!(app.screen, Screen::Splash);

        app.tick(start + Duration::from_millis(2200));
        assert_eq!(app.screen, Screen::Shop);
    }

    #[test]
    fn test_navigation_blocked_during_splash() {
        let mut app = App::default();
        app.navigate(Screen::Cart);
        assert_eq!(app.screen, Screen::Splash);
    }

    #[test]
    fn test_tab_cycling() {
        let (mut app, _) = shop_app();
        app.next_tab();
        assert_eq!(app.screen, Screen::Orders);
        app.next_tab();
        assert_eq!(app.screen, Screen::Cart);
        app.next_tab();
        assert_eq!(app.screen, Screen::Shop);
        app.previous_tab();
        assert_eq!(app.screen, Screen::Cart);
    }

    #[test]
    fn test_sku_selection_bounds() {
        let (mut app, _) = shop_app();
        app.select_previous_sku();
        assert_eq!(app.selected_sku(), Sku::Single);
        for _ in 0..10 {
            app.select_next_sku();
        }
        assert_eq!(app.selected_sku(), Sku::Carton30);
    }

    #[test]
    fn test_add_to_cart_flow() {
        let (mut app, start) = shop_app();
        app.select_next_sku();
        app.increment_selected();
        app.increment_selected();
        app.decrement_selected();

        app.add_to_cart(start);
        assert_eq!(app.screen, Screen::Processing);

        // Tabs are not reachable while processing
        app.navigate(Screen::Cart);
        assert_eq!(app.screen, Screen::Processing);

        app.tick(start + Duration::from_millis(1000));
        assert_eq!(app.screen, Screen::Processing);
        assert_eq!(app.processing_remaining(start + Duration::from_millis(1000)), Duration::from_millis(1200));

        app.tick(start + Duration::from_millis(2200));
        assert_eq!(app.screen, Screen::Orders);
        assert_eq!(
            app.machine.orders().entries(),
            ["Comanda se procesează… Găinile sunt motivate! ➜ 1 x 2 ouă"]
        );
        assert_eq!(app.machine.quantities().get(Sku::Pair), 1);
    }

    #[test]
    fn test_empty_cart_still_processes() {
        let (mut app, start) = shop_app();
        app.add_to_cart(start);
        assert_eq!(app.screen, Screen::Processing);
        app.tick(start + Duration::from_secs(5));
        assert_eq!(app.screen, Screen::Orders);
        assert!(app.machine.orders().is_empty());
    }

    #[test]
    fn test_cancel_processing_returns_to_shop() {
        let (mut app, start) = shop_app();
        app.increment_selected();
        app.add_to_cart(start);
        app.cancel_processing();
        assert_eq!(app.screen, Screen::Shop);
        app.tick(start + Duration::from_secs(5));
        assert!(app.machine.orders().is_empty());
    }

    #[test]
    fn test_checkout_uses_phone() {
        let (mut app, _) = shop_app();
        app.increment_selected();
        app.navigate(Screen::Cart);
        app.start_phone_editing();
        for _ in 0..10 {
            app.delete_phone_char();
        }
        for c in "0711222333".chars() {
            app.insert_phone_char(c);
        }
        app.finish_phone_editing();

        let composer = RecordingComposer::default();
        assert!(app.can_checkout());
        app.checkout(&composer);

        let sent = composer.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "0711222333");
        assert_eq!(sent[0].body, "Comanda ouă Bobiță: 1 x 1 ou");
        assert_eq!(app.phone, "0711222333");
        assert_eq!(app.status_message.as_deref(), Some("SMS pregătit pentru 0711222333"));
        assert_eq!(app.machine.quantities().get(Sku::Single), 1);
    }

    #[test]
    fn test_checkout_status_does_not_claim_delivery() {
        struct SilentComposer;

        impl SmsComposer for SilentComposer {
            fn compose(&self, _message: &SmsMessage) {}
        }

        let (mut app, _) = shop_app();
        app.increment_selected();
        app.checkout(&SilentComposer);

        let status = app.status_message.clone().unwrap();
        assert_eq!(status, "SMS pregătit pentru 07xxxxxxxx");
        assert!(!status.contains("clipboard"));
        assert!(!status.contains("smsto:"));
    }

    #[test]
    fn test_checkout_empty_cart_reports_status() {
        let (mut app, _) = shop_app();
        let composer = RecordingComposer::default();
        assert!(!app.can_checkout());
        app.checkout(&composer);
        assert!(composer.sent.borrow().is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Coșul e gol"));
    }

    #[test]
    fn test_clear_cart() {
        let (mut app, start) = shop_app();
        app.increment_selected();
        app.add_to_cart(start);
        app.tick(start + Duration::from_secs(3));

        app.navigate(Screen::Cart);
        app.clear_cart();
        assert!(app.machine.quantities().is_empty());
        assert_eq!(app.machine.orders().len(), 1);
    }

    #[test]
    fn test_phone_cursor_editing() {
        let (mut app, _) = shop_app();
        app.phone = "0722".to_string();
        app.start_phone_editing();
        assert_eq!(app.cursor_position, 4);

        app.move_phone_cursor_left();
        app.move_phone_cursor_left();
        app.insert_phone_char('9');
        assert_eq!(app.phone, "07922");

        app.move_phone_cursor_right();
        app.move_phone_cursor_right();
        app.move_phone_cursor_right();
        app.delete_phone_char();
        assert_eq!(app.phone, "0792");
    }
}
