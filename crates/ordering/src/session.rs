//! One guest's visit, from QR scan to leaving the menu.
//!
//! [`MenuSession`] is the entry point the QR scanner calls. It loads the menu
//! once, owns the cart store, the flow state and the order history for the
//! lifetime of the visit, and applies the effects [`transition`] asks for.

use std::fmt;

use tracing::{debug, info, instrument};

use qr_menu_core::{CartLine, CategoryFilter, Language, MenuItem, Price};

use crate::catalog::{self, LoadedMenu, MenuOrigin};
use crate::flow::{Effect, Event, FlowState, Screen, TransitionContext, transition};
use crate::order::{Clock, OrderHistory, SystemClock};
use crate::storage::KeyValueStore;
use crate::store::CartStore;
use crate::view::{self, ScreenView};

/// Settings for opening a session.
pub struct SessionOptions {
    /// Storage key to read the menu from.
    pub menu_key: String,
    /// Initial UI language.
    pub language: Language,
    /// Source of order timestamps.
    pub clock: Box<dyn Clock>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            menu_key: catalog::MENU_STORAGE_KEY.to_owned(),
            language: Language::default(),
            clock: Box::new(SystemClock),
        }
    }
}

impl fmt::Debug for SessionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionOptions")
            .field("menu_key", &self.menu_key)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

/// A single ordering session.
pub struct MenuSession {
    restaurant_id: String,
    menu: LoadedMenu,
    store: CartStore,
    flow: FlowState,
    history: OrderHistory,
    clock: Box<dyn Clock>,
    on_back: Box<dyn FnMut()>,
}

impl fmt::Debug for MenuSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuSession")
            .field("restaurant_id", &self.restaurant_id)
            .field("menu_origin", &self.menu.origin)
            .field("menu_items", &self.menu.items.len())
            .field("store", &self.store)
            .field("flow", &self.flow)
            .field("orders", &self.history.len())
            .finish_non_exhaustive()
    }
}

impl MenuSession {
    /// Start a session for `restaurant_id`.
    ///
    /// The menu is read from `storage` exactly once, here. `on_back` runs when
    /// the guest leaves the menu screen.
    ///
    /// `restaurant_id` is recorded for logging; every restaurant currently
    /// shares the menu stored under `options.menu_key`.
    #[instrument(skip_all, fields(restaurant_id = %restaurant_id.as_ref()))]
    pub fn open(
        restaurant_id: impl AsRef<str>,
        storage: &dyn KeyValueStore,
        options: SessionOptions,
        on_back: impl FnMut() + 'static,
    ) -> Self {
        let menu = catalog::load_menu(storage, &options.menu_key);
        info!(
            items = menu.items.len(),
            origin = ?menu.origin,
            language = %options.language,
            "Opened menu session"
        );
        Self::with_menu(restaurant_id, menu, options, on_back)
    }

    /// Start a session over an already-loaded menu.
    pub fn with_menu(
        restaurant_id: impl AsRef<str>,
        menu: LoadedMenu,
        options: SessionOptions,
        on_back: impl FnMut() + 'static,
    ) -> Self {
        Self {
            restaurant_id: restaurant_id.as_ref().to_owned(),
            menu,
            store: CartStore::new(options.language),
            flow: FlowState::default(),
            history: OrderHistory::new(),
            clock: options.clock,
            on_back: Box::new(on_back),
        }
    }

    /// Apply one guest action.
    ///
    /// Returns `false` if the action does not apply to the current screen, in
    /// which case nothing changed.
    #[instrument(skip(self), fields(restaurant_id = %self.restaurant_id))]
    pub fn dispatch(&mut self, event: Event) -> bool {
        let from = self.flow.screen.name();
        let ctx = TransitionContext {
            menu: &self.menu.items,
            cart: self.store.cart(),
            orders: self.history.orders(),
        };
        let next = transition(std::mem::take(&mut self.flow), event, &ctx);
        self.flow = next.state;

        if !next.handled {
            debug!(screen = from, "Event ignored");
            return false;
        }

        debug!(from, to = self.flow.screen.name(), "Screen transition");
        for effect in next.effects {
            self.apply(effect);
        }
        true
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::AddToCart { item, quantity } => self.store.add_to_cart(&item, quantity),
            Effect::UpdateLine { id, quantity } => self.store.update_cart_quantity(&id, quantity),
            Effect::RemoveLine(id) => self.store.remove_from_cart(&id),
            Effect::PlaceOrder => {
                let total = self.store.total();
                let id = self
                    .history
                    .record(self.store.cart(), total, self.clock.now());
                info!(
                    order_id = %id,
                    lines = self.store.line_count(),
                    %total,
                    "Order placed"
                );
                self.store.clear_cart();
            }
            Effect::ClearCart => self.store.clear_cart(),
            Effect::Reorder(id) => {
                if let Some(order) = self.history.find(&id) {
                    for line in &order.items {
                        self.store.add_to_cart(&line.item, line.quantity);
                    }
                    debug!(order_id = %id, lines = order.items.len(), "Re-ordered");
                }
            }
            Effect::SetLanguage(language) => self.store.set_language(language),
            Effect::Exit => {
                info!("Leaving menu");
                (self.on_back)();
            }
        }
    }

    /// Everything needed to draw the current screen.
    #[must_use]
    pub fn view(&self) -> ScreenView<'_> {
        view::build(
            &self.flow.screen,
            self.flow.category,
            &self.menu.items,
            &self.store,
            &self.history,
        )
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The identifier the QR code carried.
    #[must_use]
    pub fn restaurant_id(&self) -> &str {
        &self.restaurant_id
    }

    /// Current screen.
    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.flow.screen
    }

    /// Current category filter.
    #[must_use]
    pub const fn category(&self) -> CategoryFilter {
        self.flow.category
    }

    /// The full menu, unfiltered.
    #[must_use]
    pub fn menu(&self) -> &[MenuItem] {
        &self.menu.items
    }

    /// Where the menu came from.
    #[must_use]
    pub const fn menu_origin(&self) -> &MenuOrigin {
        &self.menu.origin
    }

    /// Cart and language state.
    #[must_use]
    pub const fn store(&self) -> &CartStore {
        &self.store
    }

    /// Current cart lines.
    #[must_use]
    pub fn cart(&self) -> &[CartLine] {
        self.store.cart()
    }

    /// Current cart total.
    #[must_use]
    pub fn cart_total(&self) -> Price {
        self.store.total()
    }

    /// Orders placed this session.
    #[must_use]
    pub const fn history(&self) -> &OrderHistory {
        &self.history
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use chrono::{DateTime, Local, TimeZone};
    use qr_menu_core::{Category, MenuItemId, OrderId, Quantity};

    use super::*;
    use crate::storage::MemoryStore;

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            Local.timestamp_millis_opt(self.0).unwrap()
        }
    }

    fn session() -> MenuSession {
        let options = SessionOptions {
            clock: Box::new(FixedClock(1_700_000_000_000)),
            ..SessionOptions::default()
        };
        MenuSession::open("demo", &MemoryStore::new(), options, || {})
    }

    fn id(s: &str) -> MenuItemId {
        MenuItemId::new(s)
    }

    /// Select `item`, bump the quantity to `n` and add it.
    fn add(session: &mut MenuSession, item: &str, n: u32) {
        assert!(session.dispatch(Event::SelectItem(id(item))));
        for _ in 1..n {
            session.dispatch(Event::IncrementQuantity);
        }
        assert!(session.dispatch(Event::ConfirmAdd));
    }

    #[test]
    fn test_opens_on_menu_with_house_menu() {
        let s = session();
        assert_eq!(s.screen(), &Screen::Menu);
        assert_eq!(s.menu_origin(), &MenuOrigin::HouseMenu);
        assert_eq!(s.restaurant_id(), "demo");
        assert!(s.cart().is_empty());
    }

    #[test]
    fn test_add_through_detail_screen() {
        let mut s = session();
        add(&mut s, "7", 2);

        assert_eq!(s.screen(), &Screen::Menu);
        assert_eq!(s.cart().len(), 1);
        assert_eq!(s.cart()[0].quantity, Quantity::new(2).unwrap());
        assert_eq!(s.cart_total(), Price::from_cents(1600));
    }

    #[test]
    fn test_pending_quantity_resets_after_add() {
        let mut s = session();
        add(&mut s, "7", 3);
        s.dispatch(Event::SelectItem(id("7")));
        match s.view() {
            ScreenView::ItemDetail(v) => {
                assert_eq!(v.quantity, Quantity::ONE);
                assert_eq!(v.line_total, Price::from_cents(800));
            }
            other => panic!("expected item detail, got {other:?}"),
        }
    }

    #[test]
    fn test_checkout_snapshots_and_clears() {
        let mut s = session();
        add(&mut s, "2", 2);
        add(&mut s, "1", 1);
        let before = s.cart().to_vec();
        let total = s.cart_total();
        assert_eq!(total, Price::from_cents(1050));

        assert!(s.dispatch(Event::OpenCart));
        assert!(s.dispatch(Event::Checkout));

        assert_eq!(s.screen(), &Screen::Confirmation);
        assert!(s.cart().is_empty());
        let order = s.history().latest().unwrap();
        assert_eq!(order.total, total);
        assert_eq!(order.items, before);
        assert_eq!(order.id, OrderId::from_timestamp_millis(1_700_000_000_000));

        match s.view() {
            ScreenView::Confirmation(v) => assert_eq!(v.order.unwrap().total, total),
            other => panic!("expected confirmation, got {other:?}"),
        }
    }

    #[test]
    fn test_order_unaffected_by_later_cart_changes() {
        let mut s = session();
        add(&mut s, "7", 2);
        s.dispatch(Event::OpenCart);
        s.dispatch(Event::Checkout);
        s.dispatch(Event::ContinueOrdering);
        add(&mut s, "7", 5);

        let order = s.history().latest().unwrap();
        assert_eq!(order.items[0].quantity, Quantity::new(2).unwrap());
        assert_eq!(order.total, Price::from_cents(1600));
    }

    #[test]
    fn test_cart_editing_on_cart_screen() {
        let mut s = session();
        add(&mut s, "7", 1);
        add(&mut s, "1", 1);
        s.dispatch(Event::OpenCart);

        assert!(s.dispatch(Event::IncrementLine(id("7"))));
        assert_eq!(s.store().line(&id("7")).unwrap().quantity.get(), 2);

        assert!(s.dispatch(Event::DecrementLine(id("1"))));
        assert!(s.store().line(&id("1")).is_none());

        assert!(s.dispatch(Event::RemoveLine(id("7"))));
        assert!(s.cart().is_empty());
        assert_eq!(s.screen(), &Screen::Cart);
        assert!(!s.dispatch(Event::Checkout));
    }

    #[test]
    fn test_reorder_adds_lines_back() {
        let mut s = session();
        add(&mut s, "7", 2);
        s.dispatch(Event::OpenCart);
        s.dispatch(Event::Checkout);
        s.dispatch(Event::ContinueOrdering);
        add(&mut s, "7", 1);

        let order_id = s.history().latest().unwrap().id.clone();
        s.dispatch(Event::OpenHistory);
        assert!(s.dispatch(Event::Reorder(order_id)));

        assert_eq!(s.screen(), &Screen::Cart);
        assert_eq!(s.store().line(&id("7")).unwrap().quantity.get(), 3);
    }

    #[test]
    fn test_exit_runs_back_callback() {
        let left = Rc::new(Cell::new(false));
        let flag = Rc::clone(&left);
        let mut s = MenuSession::open(
            "demo",
            &MemoryStore::new(),
            SessionOptions::default(),
            move || flag.set(true),
        );

        assert!(s.dispatch(Event::Exit));
        assert!(left.get());
    }

    #[test]
    fn test_language_switch_updates_views() {
        let mut s = session();
        s.dispatch(Event::SetLanguage(Language::Th));
        assert_eq!(s.store().language(), Language::Th);
        assert_eq!(s.view().language(), Language::Th);
    }

    #[test]
    fn test_menu_view_filters_by_category() {
        let mut s = session();
        s.dispatch(Event::SelectCategory(CategoryFilter::Only(Category::Coffee)));
        match s.view() {
            ScreenView::Menu(v) => {
                let ids: Vec<_> = v.items.iter().map(|i| i.id.as_str()).collect();
                assert_eq!(ids, ["1", "2", "3"]);
                assert!(!v.can_open_cart());
            }
            other => panic!("expected menu, got {other:?}"),
        }
    }

    #[test]
    fn test_stored_menu_overrides_house_menu() {
        let raw = r#"[{"id":"x","name":"Mochi","description":"Soft","price":2,"category":"pastry"}]"#;
        let storage = MemoryStore::with_entry(catalog::MENU_STORAGE_KEY, raw);
        let s = MenuSession::open("demo", &storage, SessionOptions::default(), || {});

        assert_eq!(s.menu_origin(), &MenuOrigin::Stored);
        assert_eq!(s.menu().len(), 1);
    }
}
