//! The cart store: cart contents plus the guest's language preference.
//!
//! A [`CartStore`] is owned by one ordering session. Its methods are the only
//! way to change the cart, and none of them can fail: adding merges into an
//! existing line, quantities that drop to zero remove the line, and unknown IDs
//! are ignored.

use tracing::trace;

use qr_menu_core::{CartLine, Language, MenuItem, MenuItemId, Price, Quantity};

/// Cart and language state for one session.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    language: Language,
    lines: Vec<CartLine>,
    revision: u64,
}

impl CartStore {
    /// Create an empty cart with the given language.
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            language,
            lines: Vec::new(),
            revision: 0,
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `quantity` units of `item`.
    ///
    /// If the cart already has a line for `item.id` its quantity grows by
    /// `quantity`; otherwise a new line is appended after the existing ones.
    pub fn add_to_cart(&mut self, item: &MenuItem, quantity: Quantity) {
        if let Some(line) = self.line_mut(&item.id) {
            line.quantity = line.quantity.merge(quantity);
        } else {
            self.lines.push(CartLine::new(item.clone(), quantity));
        }
        self.touch("add_to_cart");
    }

    /// Drop the line for `id`, if any.
    pub fn remove_from_cart(&mut self, id: &MenuItemId) {
        self.lines.retain(|line| line.id() != id);
        self.touch("remove_from_cart");
    }

    /// Set the quantity of the line for `id`.
    ///
    /// Zero or negative quantities remove the line. Unknown IDs are ignored.
    pub fn update_cart_quantity(&mut self, id: &MenuItemId, quantity: i64) {
        let Some(quantity) = Quantity::from_signed(quantity) else {
            self.remove_from_cart(id);
            return;
        };
        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;
        }
        self.touch("update_cart_quantity");
    }

    /// Empty the cart. The language is left alone.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
        self.touch("clear_cart");
    }

    /// Switch the UI language.
    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.touch("set_language");
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Cart lines in the order they were first added.
    #[must_use]
    pub fn cart(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn line(&self, id: &MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    /// Current UI language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Sum of price times quantity over every line.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Number of distinct items in the cart.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity.get())).sum()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Counter bumped by every mutation call, including calls that leave
    /// the cart unchanged. Screen changes do not bump it.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn line_mut(&mut self, id: &MenuItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.id() == id)
    }

    fn touch(&mut self, operation: &'static str) {
        self.revision += 1;
        trace!(
            operation,
            revision = self.revision,
            lines = self.lines.len(),
            "Cart store updated"
        );
    }
}
