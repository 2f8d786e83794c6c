//! Text rendering of builder state changes.

use std::fmt;
use std::io::{self, Write};

use brgrr_builder::display::{
    EMPTY_FAVORITES, EMPTY_HISTORY, describe, favorite_title, history_title, toppings_text,
};
use brgrr_builder::{Catalog, CheckoutSummary, Configuration, Favorite, OrderRecord, RenderHooks};
use brgrr_core::{BaseId, Breakdown, GUEST_USERNAME, ToppingId, Username};

/// Draws every hook as plain lines on `out`.
///
/// Hooks cannot fail, so the first write error is kept and reported by
/// [`TerminalRenderer::finish`].
pub struct TerminalRenderer<W> {
    out: W,
    catalog: Catalog,
    error: Option<io::Error>,
}

impl<W: Write> TerminalRenderer<W> {
    pub const fn new(out: W, catalog: Catalog) -> Self {
        Self {
            out,
            catalog,
            error: None,
        }
    }

    /// Write one line, remembering the first failure.
    pub fn line(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            self.error = Some(e);
        }
    }

    /// Flush and return the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> RenderHooks for TerminalRenderer<W> {
    fn base_changed(&mut self, base: &BaseId) {
        let label = self.catalog.base_label(base).to_string();
        self.line(format_args!("Bun: {label}"));
    }

    fn topping_toggled(&mut self, topping: &ToppingId, selected: bool) {
        let label = self.catalog.topping_label(topping).to_string();
        let sign = if selected { '+' } else { '-' };
        self.line(format_args!("{sign} {label}"));
    }

    fn favorite_applied(&mut self, favorite: &Favorite) {
        let text = describe(&self.catalog, &favorite.base, &favorite.toppings);
        self.line(format_args!("Loaded {text}"));
    }

    fn price_updated(&mut self, breakdown: &Breakdown, _configuration: &Configuration) {
        self.line(format_args!(
            "Subtotal {} | Tax {} | Total {}",
            breakdown.subtotal, breakdown.tax, breakdown.total
        ));
    }

    fn favorites_changed(&mut self, favorites: &[Favorite]) {
        if favorites.is_empty() {
            self.line(format_args!("{EMPTY_FAVORITES}"));
            return;
        }
        self.line(format_args!("Favorites:"));
        for (i, favorite) in favorites.iter().enumerate() {
            let text = describe(&self.catalog, &favorite.base, &favorite.toppings);
            let title = favorite_title(favorite, i);
            self.line(format_args!(
                "  {}. {title}: {text} ({})",
                i + 1,
                favorite.price.total
            ));
        }
    }

    fn checkout_opened(&mut self, summary: &CheckoutSummary) {
        self.line(format_args!("Your order"));
        self.line(format_args!("  Bun:      {}", summary.base_label));
        self.line(format_args!("  Toppings: {}", summary.toppings_text()));
        self.line(format_args!("  Subtotal: {}", summary.price.subtotal));
        self.line(format_args!("  Tax (5%): {}", summary.price.tax));
        self.line(format_args!("  Total:    {}", summary.price.total));
        self.line(format_args!("Type 'confirm' to order or 'cancel' to keep editing."));
    }

    fn checkout_closed(&mut self) {
        self.line(format_args!("Back to your burger."));
    }

    fn order_confirmed(&mut self, order: &OrderRecord) {
        let base = self.catalog.base_label(&order.base).to_string();
        let toppings = toppings_text(&self.catalog, &order.toppings);
        self.line(format_args!(
            "Order placed for {}: {base} with {toppings}, total {}",
            order.username, order.price.total
        ));
    }

    fn history_changed(&mut self, history: &[OrderRecord]) {
        if history.is_empty() {
            self.line(format_args!("{EMPTY_HISTORY}"));
            return;
        }
        self.line(format_args!("Order history:"));
        for order in history {
            let text = describe(&self.catalog, &order.base, &order.toppings);
            self.line(format_args!(
                "  {}: {text} ({})",
                history_title(order),
                order.price.total
            ));
        }
    }

    fn logged_in(&mut self, username: &Username) {
        self.line(format_args!("Logged in as {username}"));
    }

    fn logged_out(&mut self) {
        self.line(format_args!("Ordering as {GUEST_USERNAME}"));
    }

    fn validation_error(&mut self, message: &str) {
        self.line(format_args!("! {message}"));
    }
}
