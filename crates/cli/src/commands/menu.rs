//! Print the catalog.

use std::io::Write;

use brgrr_builder::Catalog;
use brgrr_builder::display::topping_option;

/// Write the buns and toppings with their prices.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn print(catalog: &Catalog, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Buns:")?;
    for base in catalog.bases() {
        writeln!(out, "  {:<12} {} ({})", base.id.as_str(), base.label, base.price)?;
    }
    writeln!(out, "Toppings:")?;
    for topping in catalog.toppings() {
        writeln!(out, "  {:<12} {}", topping.id.as_str(), topping_option(topping))?;
    }
    Ok(())
}
