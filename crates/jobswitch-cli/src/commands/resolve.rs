//! Resolve command: exact class/job lookup.

use anyhow::Result;
use jobswitch_core::{CatalogKind, resolve_exact};

use crate::context::Context;
use crate::theme::Theme;

/// Resolve a typed class/job command and print the entry it names.
pub(crate) fn run_resolve(ctx: &Context, command: &str) -> Result<()> {
    let settings = ctx.settings()?;
    let catalog = ctx.catalog(CatalogKind::ClassJob)?;
    let entry = resolve_exact(&catalog, &settings.affixes, command)?;

    println!("\n{}", Theme::header(&entry.name));
    println!("{}", Theme::field("Id", entry.id));
    println!("{}", Theme::field("Acronym", entry.acronym().unwrap_or("-")));
    if let Some(alt) = entry.name_alt() {
        println!("{}", Theme::field("Alt name", alt));
    }
    println!();
    Ok(())
}
