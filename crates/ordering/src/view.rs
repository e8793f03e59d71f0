//! Render-ready snapshots of the current screen.
//!
//! Views borrow from the session and are rebuilt on every read, so totals
//! and filtered lists always reflect the latest cart and menu.

use qr_menu_core::{
    CartLine, CategoryFilter, Language, MenuItem, Price, Quantity, filter_by_category,
};

use crate::flow::Screen;
use crate::order::{OrderHistory, OrderRecord};
use crate::store::CartStore;

/// The current screen plus everything needed to draw it.
#[derive(Debug, Clone)]
pub enum ScreenView<'a> {
    Menu(MenuView<'a>),
    ItemDetail(ItemDetailView<'a>),
    Cart(CartView<'a>),
    Confirmation(ConfirmationView<'a>),
    OrderHistory(OrderHistoryView<'a>),
}

impl ScreenView<'_> {
    /// Active UI language.
    #[must_use]
    pub const fn language(&self) -> Language {
        match self {
            Self::Menu(v) => v.language,
            Self::ItemDetail(v) => v.language,
            Self::Cart(v) => v.language,
            Self::Confirmation(v) => v.language,
            Self::OrderHistory(v) => v.language,
        }
    }
}

/// Item list under the current category filter.
#[derive(Debug, Clone)]
pub struct MenuView<'a> {
    pub language: Language,
    pub category: CategoryFilter,
    pub items: Vec<&'a MenuItem>,
    /// Distinct lines in the cart, shown on the cart badge.
    pub cart_lines: usize,
}

impl MenuView<'_> {
    /// The cart button is only offered when there is something in it.
    #[must_use]
    pub const fn can_open_cart(&self) -> bool {
        self.cart_lines > 0
    }
}

/// One item with the pending quantity.
#[derive(Debug, Clone)]
pub struct ItemDetailView<'a> {
    pub language: Language,
    pub item: &'a MenuItem,
    pub quantity: Quantity,
    /// Price of the pending quantity.
    pub line_total: Price,
}

/// Cart lines and total.
#[derive(Debug, Clone)]
pub struct CartView<'a> {
    pub language: Language,
    pub lines: &'a [CartLine],
    pub total: Price,
    /// Units across all lines.
    pub item_count: u64,
}

impl CartView<'_> {
    /// Checkout is only enabled for a non-empty cart.
    #[must_use]
    pub const fn can_checkout(&self) -> bool {
        !self.lines.is_empty()
    }
}

/// The order just placed.
#[derive(Debug, Clone)]
pub struct ConfirmationView<'a> {
    pub language: Language,
    pub order: Option<&'a OrderRecord>,
}

/// Every order placed this session, newest first.
#[derive(Debug, Clone)]
pub struct OrderHistoryView<'a> {
    pub language: Language,
    pub orders: &'a [OrderRecord],
}

/// The menu list under `category`, with the cart badge taken from `store`.
#[must_use]
pub fn menu<'a>(menu: &'a [MenuItem], category: CategoryFilter, store: &CartStore) -> MenuView<'a> {
    MenuView {
        language: store.language(),
        category,
        items: filter_by_category(menu, category).collect(),
        cart_lines: store.line_count(),
    }
}

/// Build the view for `screen`.
#[must_use]
pub fn build<'a>(
    screen: &'a Screen,
    category: CategoryFilter,
    menu: &'a [MenuItem],
    store: &'a CartStore,
    history: &'a OrderHistory,
) -> ScreenView<'a> {
    let language = store.language();
    match screen {
        Screen::Menu => ScreenView::Menu(self::menu(menu, category, store)),
        Screen::ItemDetail { item, quantity } => ScreenView::ItemDetail(ItemDetailView {
            language,
            item,
            quantity: *quantity,
            line_total: item.price.times(*quantity),
        }),
        Screen::Cart => ScreenView::Cart(CartView {
            language,
            lines: store.cart(),
            total: store.total(),
            item_count: store.item_count(),
        }),
        Screen::Confirmation => ScreenView::Confirmation(ConfirmationView {
            language,
            order: history.latest(),
        }),
        Screen::OrderHistory => ScreenView::OrderHistory(OrderHistoryView {
            language,
            orders: history.orders(),
        }),
    }
}
