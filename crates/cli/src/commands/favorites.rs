//! Inspect and clear saved favorites outside the shell.

use std::io::Write;

use brgrr_builder::display::{EMPTY_FAVORITES, describe, favorite_title};
use brgrr_builder::{
    BuilderConfig, Catalog, FileStorage, KeyValueStorage, MemoryStorage, PersistenceStore,
};
use tracing::info;

fn open(config: &BuilderConfig) -> PersistenceStore<FileStorage, MemoryStorage> {
    PersistenceStore::new(FileStorage::new(config.data_dir.clone()), MemoryStorage::new())
}

/// Write every saved favorite with its total.
///
/// # Errors
///
/// Returns an error if the favorites file exists but cannot be parsed, or if
/// `out` cannot be written.
pub fn list(
    config: &BuilderConfig,
    catalog: &Catalog,
    out: &mut impl Write,
) -> brgrr_builder::Result<()> {
    list_from(&mut open(config), catalog, out)
}

fn list_from<L: KeyValueStorage, S: KeyValueStorage>(
    store: &mut PersistenceStore<L, S>,
    catalog: &Catalog,
    out: &mut impl Write,
) -> brgrr_builder::Result<()> {
    let favorites = store.favorites().try_load()?;
    if favorites.is_empty() {
        writeln!(out, "{EMPTY_FAVORITES}")?;
        return Ok(());
    }

    for (i, favorite) in favorites.iter().enumerate() {
        writeln!(
            out,
            "{}. {}: {} ({})",
            i + 1,
            favorite_title(favorite, i),
            describe(catalog, &favorite.base, &favorite.toppings),
            favorite.price.total
        )?;
    }
    Ok(())
}

/// Delete all saved favorites.
///
/// # Errors
///
/// Returns an error if the favorites file cannot be removed.
pub fn clear(config: &BuilderConfig) -> brgrr_builder::Result<()> {
    open(config).favorites().clear()?;
    info!(dir = %config.data_dir.display(), "Favorites cleared");
    Ok(())
}
