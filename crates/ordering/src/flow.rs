//! The menu flow state machine.
//!
//! Screens move `menu → item-detail → cart → confirmation → order-history`
//! in response to guest [`Event`]s. [`transition`] is a pure function: it
//! returns the next [`FlowState`] and the [`Effect`]s the session must apply to
//! the cart store and order history. It never touches either itself, so the
//! whole machine is testable without a store or a UI.
//!
//! | From | Event | To | Effect |
//! |---|---|---|---|
//! | menu | `SelectItem` | item-detail (qty 1) | |
//! | menu | `OpenHistory` | order-history | |
//! | menu | `OpenCart` (cart non-empty) | cart | |
//! | menu | `SelectCategory` | menu | |
//! | menu | `Exit` | menu | `Exit` |
//! | item-detail | `Back` | menu | |
//! | item-detail | `IncrementQuantity` / `DecrementQuantity` | item-detail | |
//! | item-detail | `ConfirmAdd` | menu | `AddToCart` |
//! | cart | `Back` | menu | |
//! | cart | `IncrementLine` / `DecrementLine` | cart | `UpdateLine` |
//! | cart | `RemoveLine` | cart | `RemoveLine` |
//! | cart | `Checkout` (cart non-empty) | confirmation | `PlaceOrder` |
//! | confirmation | `ContinueOrdering` | menu | `ClearCart` |
//! | order-history | `Back` | menu | |
//! | order-history | `Reorder` (known order) | cart | `Reorder` |
//! | any | `SetLanguage` | unchanged | `SetLanguage` |
//!
//! Any other pairing is ignored: the state is returned unchanged with no
//! effects and [`Transition::handled`] is `false`.

use qr_menu_core::{
    CartLine, CategoryFilter, Language, MenuItem, MenuItemId, OrderId, Quantity,
};

use crate::order::OrderRecord;

/// The screen being shown, with any data only that screen needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// Item list with category filter.
    #[default]
    Menu,
    /// One item with a pending quantity, not yet in the cart.
    ItemDetail {
        item: MenuItem,
        quantity: Quantity,
    },
    /// Cart contents and checkout.
    Cart,
    /// The order just placed.
    Confirmation,
    /// Orders placed this session.
    OrderHistory,
}

impl Screen {
    /// Stable screen name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::ItemDetail { .. } => "item-detail",
            Self::Cart => "cart",
            Self::Confirmation => "confirmation",
            Self::OrderHistory => "order-history",
        }
    }
}

/// Controller state owned by the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlowState {
    pub screen: Screen,
    pub category: CategoryFilter,
}

/// A guest action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectItem(MenuItemId),
    SelectCategory(CategoryFilter),
    OpenCart,
    OpenHistory,
    Back,
    IncrementQuantity,
    DecrementQuantity,
    ConfirmAdd,
    IncrementLine(MenuItemId),
    DecrementLine(MenuItemId),
    RemoveLine(MenuItemId),
    Checkout,
    ContinueOrdering,
    Reorder(OrderId),
    SetLanguage(Language),
    Exit,
}

/// A change the session applies after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `CartStore::add_to_cart`.
    AddToCart { item: MenuItem, quantity: Quantity },
    /// `CartStore::update_cart_quantity`.
    UpdateLine { id: MenuItemId, quantity: i64 },
    /// `CartStore::remove_from_cart`.
    RemoveLine(MenuItemId),
    /// Snapshot the cart into the order history, then clear it.
    PlaceOrder,
    /// `CartStore::clear_cart`.
    ClearCart,
    /// Add every line of a past order back to the cart.
    Reorder(OrderId),
    /// `CartStore::set_language`.
    SetLanguage(Language),
    /// Leave the menu and hand control back to the caller.
    Exit,
}

/// Read-only data a transition may consult.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext<'a> {
    pub menu: &'a [MenuItem],
    pub cart: &'a [CartLine],
    pub orders: &'a [OrderRecord],
}

impl TransitionContext<'_> {
    fn cart_line(&self, id: &MenuItemId) -> Option<&CartLine> {
        self.cart.iter().find(|line| line.id() == id)
    }
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: FlowState,
    pub effects: Vec<Effect>,
    /// Whether the event applied to the state it was given.
    pub handled: bool,
}

impl Transition {
    fn to(state: FlowState, effects: Vec<Effect>) -> Self {
        Self {
            state,
            effects,
            handled: true,
        }
    }

    fn ignored(state: FlowState) -> Self {
        Self {
            state,
            effects: Vec::new(),
            handled: false,
        }
    }
}

/// Compute the next state for `event`.
#[must_use]
pub fn transition(state: FlowState, event: Event, ctx: &TransitionContext<'_>) -> Transition {
    let FlowState { screen, category } = state;
    let at = |screen: Screen| FlowState { screen, category };

    match (screen, event) {
        (screen, Event::SetLanguage(language)) => {
            Transition::to(at(screen), vec![Effect::SetLanguage(language)])
        }

        (Screen::Menu, Event::SelectItem(id)) => {
            match ctx.menu.iter().find(|item| item.id == id) {
                Some(item) => Transition::to(
                    at(Screen::ItemDetail {
                        item: item.clone(),
                        quantity: Quantity::ONE,
                    }),
                    Vec::new(),
                ),
                None => Transition::ignored(at(Screen::Menu)),
            }
        }
        (Screen::Menu, Event::SelectCategory(filter)) => Transition::to(
            FlowState {
                screen: Screen::Menu,
                category: filter,
            },
            Vec::new(),
        ),
        (Screen::Menu, Event::OpenHistory) => Transition::to(at(Screen::OrderHistory), Vec::new()),
        (Screen::Menu, Event::OpenCart) if !ctx.cart.is_empty() => {
            Transition::to(at(Screen::Cart), Vec::new())
        }
        (Screen::Menu, Event::Exit) => Transition::to(at(Screen::Menu), vec![Effect::Exit]),

        (Screen::ItemDetail { .. }, Event::Back) => Transition::to(at(Screen::Menu), Vec::new()),
        (Screen::ItemDetail { item, quantity }, Event::IncrementQuantity) => Transition::to(
            at(Screen::ItemDetail {
                item,
                quantity: quantity.increment(),
            }),
            Vec::new(),
        ),
        (Screen::ItemDetail { item, quantity }, Event::DecrementQuantity) => Transition::to(
            at(Screen::ItemDetail {
                item,
                quantity: quantity.decrement(),
            }),
            Vec::new(),
        ),
        (Screen::ItemDetail { item, quantity }, Event::ConfirmAdd) => Transition::to(
            at(Screen::Menu),
            vec![Effect::AddToCart { item, quantity }],
        ),

        (Screen::Cart, Event::Back) => Transition::to(at(Screen::Menu), Vec::new()),
        (Screen::Cart, Event::IncrementLine(id)) => match ctx.cart_line(&id) {
            Some(line) => {
                let quantity = i64::from(line.quantity.get()) + 1;
                Transition::to(at(Screen::Cart), vec![Effect::UpdateLine { id, quantity }])
            }
            None => Transition::ignored(at(Screen::Cart)),
        },
        (Screen::Cart, Event::DecrementLine(id)) => match ctx.cart_line(&id) {
            Some(line) => {
                let quantity = i64::from(line.quantity.get()) - 1;
                Transition::to(at(Screen::Cart), vec![Effect::UpdateLine { id, quantity }])
            }
            None => Transition::ignored(at(Screen::Cart)),
        },
        (Screen::Cart, Event::RemoveLine(id)) if ctx.cart_line(&id).is_some() => {
            Transition::to(at(Screen::Cart), vec![Effect::RemoveLine(id)])
        }
        (Screen::Cart, Event::Checkout) if !ctx.cart.is_empty() => {
            Transition::to(at(Screen::Confirmation), vec![Effect::PlaceOrder])
        }

        (Screen::Confirmation, Event::ContinueOrdering) => {
            Transition::to(at(Screen::Menu), vec![Effect::ClearCart])
        }

        (Screen::OrderHistory, Event::Back) => Transition::to(at(Screen::Menu), Vec::new()),
        (Screen::OrderHistory, Event::Reorder(id))
            if ctx.orders.iter().any(|order| order.id == id) =>
        {
            Transition::to(at(Screen::Cart), vec![Effect::Reorder(id)])
        }

        (screen, _) => Transition::ignored(at(screen)),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use qr_menu_core::{Category, Price};

    use super::*;

    fn item(id: &str, cents: u32) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            name: format!("Item {id}"),
            description: String::new(),
            price: Price::from_cents(cents),
            category: Category::Food,
            vegetarian: false,
        }
    }

    fn menu() -> Vec<MenuItem> {
        vec![item("1", 250), item("7", 800)]
    }

    fn at(screen: Screen) -> FlowState {
        FlowState {
            screen,
            category: CategoryFilter::All,
        }
    }

    fn detail(id: &str, cents: u32, n: u32) -> Screen {
        Screen::ItemDetail {
            item: item(id, cents),
            quantity: Quantity::new(n).unwrap(),
        }
    }

    fn run(state: FlowState, event: Event, cart: &[CartLine]) -> Transition {
        let menu = menu();
        let ctx = TransitionContext {
            menu: &menu,
            cart,
            orders: &[],
        };
        transition(state, event, &ctx)
    }

    fn one_line() -> Vec<CartLine> {
        vec![CartLine::new(item("7", 800), Quantity::new(2).unwrap())]
    }

    #[test]
    fn test_initial_state_is_menu() {
        assert_eq!(FlowState::default().screen, Screen::Menu);
        assert_eq!(FlowState::default().category, CategoryFilter::All);
    }

    #[test]
    fn test_select_item_opens_detail_with_quantity_one() {
        let t = run(at(Screen::Menu), Event::SelectItem(MenuItemId::new("7")), &[]);
        assert!(t.handled);
        assert_eq!(t.state.screen, detail("7", 800, 1));
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_select_unknown_item_is_ignored() {
        let t = run(at(Screen::Menu), Event::SelectItem(MenuItemId::new("99")), &[]);
        assert!(!t.handled);
        assert_eq!(t.state.screen, Screen::Menu);
    }

    #[test]
    fn test_quantity_clamped_at_one() {
        let t = run(at(detail("7", 800, 1)), Event::DecrementQuantity, &[]);
        assert_eq!(t.state.screen, detail("7", 800, 1));

        let t = run(t.state, Event::IncrementQuantity, &[]);
        let t = run(t.state, Event::IncrementQuantity, &[]);
        let t = run(t.state, Event::DecrementQuantity, &[]);
        assert_eq!(t.state.screen, detail("7", 800, 2));
    }

    #[test]
    fn test_confirm_add_returns_to_menu_with_effect() {
        let t = run(at(detail("7", 800, 3)), Event::ConfirmAdd, &[]);
        assert_eq!(t.state.screen, Screen::Menu);
        assert_eq!(
            t.effects,
            vec![Effect::AddToCart {
                item: item("7", 800),
                quantity: Quantity::new(3).unwrap(),
            }]
        );
    }

    #[test]
    fn test_back_from_detail_drops_selection() {
        let t = run(at(detail("7", 800, 3)), Event::Back, &[]);
        assert_eq!(t.state.screen, Screen::Menu);
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_open_cart_requires_lines() {
        let t = run(at(Screen::Menu), Event::OpenCart, &[]);
        assert!(!t.handled);
        assert_eq!(t.state.screen, Screen::Menu);

        let t = run(at(Screen::Menu), Event::OpenCart, &one_line());
        assert!(t.handled);
        assert_eq!(t.state.screen, Screen::Cart);
    }

    #[test]
    fn test_checkout_requires_lines() {
        let t = run(at(Screen::Cart), Event::Checkout, &[]);
        assert!(!t.handled);
        assert_eq!(t.state.screen, Screen::Cart);

        let t = run(at(Screen::Cart), Event::Checkout, &one_line());
        assert_eq!(t.state.screen, Screen::Confirmation);
        assert_eq!(t.effects, vec![Effect::PlaceOrder]);
    }

    #[test]
    fn test_continue_ordering_clears_cart() {
        let t = run(at(Screen::Confirmation), Event::ContinueOrdering, &[]);
        assert_eq!(t.state.screen, Screen::Menu);
        assert_eq!(t.effects, vec![Effect::ClearCart]);
    }

    #[test]
    fn test_history_round_trip() {
        let t = run(at(Screen::Menu), Event::OpenHistory, &[]);
        assert_eq!(t.state.screen, Screen::OrderHistory);
        let t = run(t.state, Event::Back, &[]);
        assert_eq!(t.state.screen, Screen::Menu);
    }

    #[test]
    fn test_cart_back() {
        let t = run(at(Screen::Cart), Event::Back, &one_line());
        assert_eq!(t.state.screen, Screen::Menu);
    }

    #[test]
    fn test_line_steppers_emit_updates() {
        let id = MenuItemId::new("7");
        let t = run(at(Screen::Cart), Event::IncrementLine(id.clone()), &one_line());
        assert_eq!(
            t.effects,
            vec![Effect::UpdateLine {
                id: id.clone(),
                quantity: 3
            }]
        );

        let t = run(at(Screen::Cart), Event::DecrementLine(id.clone()), &one_line());
        assert_eq!(t.effects, vec![Effect::UpdateLine { id, quantity: 1 }]);
    }

    #[test]
    fn test_line_events_for_missing_lines_are_ignored() {
        let id = MenuItemId::new("1");
        for event in [
            Event::IncrementLine(id.clone()),
            Event::DecrementLine(id.clone()),
            Event::RemoveLine(id.clone()),
        ] {
            let t = run(at(Screen::Cart), event, &one_line());
            assert!(!t.handled);
            assert!(t.effects.is_empty());
        }
    }

    #[test]
    fn test_category_filter_survives_navigation() {
        let coffee = CategoryFilter::Only(Category::Coffee);
        let t = run(at(Screen::Menu), Event::SelectCategory(coffee), &[]);
        assert_eq!(t.state.category, coffee);

        let t = run(t.state, Event::OpenHistory, &[]);
        let t = run(t.state, Event::Back, &[]);
        assert_eq!(t.state.category, coffee);
    }

    #[test]
    fn test_set_language_on_any_screen() {
        for screen in [
            Screen::Menu,
            detail("1", 250, 2),
            Screen::Cart,
            Screen::Confirmation,
            Screen::OrderHistory,
        ] {
            let t = run(at(screen.clone()), Event::SetLanguage(Language::Ja), &[]);
            assert_eq!(t.state.screen, screen);
            assert_eq!(t.effects, vec![Effect::SetLanguage(Language::Ja)]);
        }
    }

    #[test]
    fn test_exit_only_from_menu() {
        let t = run(at(Screen::Menu), Event::Exit, &[]);
        assert_eq!(t.effects, vec![Effect::Exit]);

        let t = run(at(Screen::Cart), Event::Exit, &one_line());
        assert!(!t.handled);
    }

    #[test]
    fn test_reorder_requires_known_order() {
        let t = run(
            at(Screen::OrderHistory),
            Event::Reorder(OrderId::new("ORD-1")),
            &[],
        );
        assert!(!t.handled);
        assert_eq!(t.state.screen, Screen::OrderHistory);

        let menu = menu();
        let orders = vec![OrderRecord {
            id: OrderId::new("ORD-1"),
            items: one_line(),
            total: Price::from_cents(1600),
            date: String::new(),
        }];
        let ctx = TransitionContext {
            menu: &menu,
            cart: &[],
            orders: &orders,
        };
        let t = transition(
            at(Screen::OrderHistory),
            Event::Reorder(OrderId::new("ORD-1")),
            &ctx,
        );
        assert_eq!(t.state.screen, Screen::Cart);
        assert_eq!(t.effects, vec![Effect::Reorder(OrderId::new("ORD-1"))]);
    }

    #[test]
    fn test_events_outside_their_screen_are_ignored() {
        let cases = [
            (Screen::Menu, Event::Checkout),
            (Screen::Menu, Event::ConfirmAdd),
            (Screen::Cart, Event::SelectItem(MenuItemId::new("1"))),
            (Screen::Confirmation, Event::Back),
            (Screen::OrderHistory, Event::OpenCart),
        ];
        for (screen, event) in cases {
            let t = run(at(screen.clone()), event, &one_line());
            assert!(!t.handled);
            assert_eq!(t.state.screen, screen);
            assert!(t.effects.is_empty());
        }
    }
}
