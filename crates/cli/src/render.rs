//! Plain-text rendering of screen views.

use std::io::{self, Write};

use qr_menu_core::{Category, CategoryFilter, Language, TranslationKey as K, translate};
use qr_menu_ordering::view::{
    CartView, ConfirmationView, ItemDetailView, MenuView, OrderHistoryView,
};
use qr_menu_ordering::ScreenView;

/// Write `view` to `out`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn render(view: &ScreenView<'_>, out: &mut impl Write) -> io::Result<()> {
    match view {
        ScreenView::Menu(v) => menu(v, out),
        ScreenView::ItemDetail(v) => item_detail(v, out),
        ScreenView::Cart(v) => cart(v, out),
        ScreenView::Confirmation(v) => confirmation(v, out),
        ScreenView::OrderHistory(v) => history(v, out),
    }
}

fn heading(out: &mut impl Write, title: &str, language: Language) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "== {title} ==  [{}: {language}]",
        translate(language, K::Language)
    )
}

fn menu(v: &MenuView<'_>, out: &mut impl Write) -> io::Result<()> {
    let t = |key| translate(v.language, key);
    heading(out, t(K::Menu), v.language)?;

    let tabs: Vec<String> = std::iter::once(CategoryFilter::All)
        .chain(Category::ALL.iter().copied().map(CategoryFilter::Only))
        .map(|filter| {
            let label = t(K::for_filter(filter));
            if filter == v.category {
                format!("[{label}]")
            } else {
                label.to_string()
            }
        })
        .collect();
    writeln!(out, "{}", tabs.join(" "))?;

    if v.items.is_empty() {
        writeln!(out, "  {}", t(K::NoItemsInCategory))?;
    }
    for item in &v.items {
        let veg = if item.vegetarian {
            format!(" ({})", t(K::Vegetarian))
        } else {
            String::new()
        };
        writeln!(
            out,
            "  {:<12} {:<28} {:>8}{veg}",
            item.id.as_str(),
            item.name,
            item.price.to_string()
        )?;
    }

    if v.can_open_cart() {
        writeln!(out, "{} ({})", t(K::Cart), v.cart_lines)?;
    }
    Ok(())
}

fn item_detail(v: &ItemDetailView<'_>, out: &mut impl Write) -> io::Result<()> {
    let t = |key| translate(v.language, key);
    heading(out, &v.item.name, v.language)?;
    writeln!(out, "{}: {}", t(K::Description), v.item.description)?;
    writeln!(out, "{}: {}", t(K::Price), v.item.price)?;
    if v.item.vegetarian {
        writeln!(out, "{}", t(K::Vegetarian))?;
    }
    writeln!(out, "{}: {}", t(K::Quantity), v.quantity)?;
    writeln!(out, "{} - {}", t(K::AddToCart), v.line_total)
}

fn cart(v: &CartView<'_>, out: &mut impl Write) -> io::Result<()> {
    let t = |key| translate(v.language, key);
    heading(out, t(K::Cart), v.language)?;
    if !v.can_checkout() {
        return writeln!(out, "  {}", t(K::Empty));
    }
    for line in v.lines {
        writeln!(
            out,
            "  {:>3} x {:<12} {:<28} {:>8}",
            line.quantity.get(),
            line.item.id.as_str(),
            line.item.name,
            line.line_total().to_string()
        )?;
    }
    writeln!(out, "{}: {} ({} x)", t(K::Total), v.total, v.item_count)?;
    writeln!(out, "{}", t(K::Checkout))
}

fn confirmation(v: &ConfirmationView<'_>, out: &mut impl Write) -> io::Result<()> {
    let t = |key| translate(v.language, key);
    heading(out, t(K::OrderConfirmed), v.language)?;
    writeln!(out, "{}", t(K::SentToKitchen))?;
    if let Some(order) = v.order {
        writeln!(out, "{}: {}", t(K::OrderNumber), order.id)?;
        for line in &order.items {
            writeln!(
                out,
                "  {:>3} x {:<28} {:>8}",
                line.quantity.get(),
                line.item.name,
                line.line_total().to_string()
            )?;
        }
        writeln!(out, "{}: {}", t(K::Total), order.total)?;
    }
    writeln!(out, "{}", t(K::ContinueOrdering))
}

fn history(v: &OrderHistoryView<'_>, out: &mut impl Write) -> io::Result<()> {
    let t = |key| translate(v.language, key);
    heading(out, t(K::OrderHistory), v.language)?;
    if v.orders.is_empty() {
        return writeln!(out, "  {}", t(K::Empty));
    }
    for order in v.orders {
        writeln!(
            out,
            "{}  {}  {}: {} ({} x)",
            order.id,
            order.date,
            t(K::Total),
            order.total,
            order.item_count()
        )?;
        for line in &order.items {
            writeln!(out, "  {:>3} x {}", line.quantity.get(), line.item.name)?;
        }
        writeln!(out, "  {} ({})", t(K::Reorder), order.id)?;
    }
    Ok(())
}
