//! Search command: phantom-job fuzzy lookup.

use anyhow::Result;
use jobswitch_core::{CatalogKind, resolve_fuzzy};

use crate::context::Context;
use crate::theme::Theme;

/// Fuzzy-search the phantom-job catalog and print the winner.
pub(crate) fn run_search(ctx: &Context, query: &str) -> Result<()> {
    let catalog = ctx.catalog(CatalogKind::PhantomJob)?;
    let found = resolve_fuzzy(&catalog, query)?;
    let entry = found.entry;

    println!(
        "\n{}",
        Theme::header(entry.name_alt().unwrap_or(&entry.name))
    );
    println!("{}", Theme::field("Id", entry.id));
    println!("{}", Theme::field("Name", &entry.name));
    println!("{}", Theme::field("Tier", found.tier));
    println!("{}", Theme::field("Score", found.score));
    println!();
    Ok(())
}
