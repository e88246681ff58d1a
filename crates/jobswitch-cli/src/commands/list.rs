//! Commands command: list what would be registered.

use anyhow::Result;
use jobswitch_core::{CatalogKind, load_catalog};
use jobswitch_plugin::{CommandTarget, derive_registrations};

use crate::context::Context;
use crate::theme::Theme;

/// Print every command the current settings and catalogs would register.
pub(crate) fn run_commands(ctx: &Context) -> Result<()> {
    let settings = ctx.settings()?;
    let source = ctx.source();
    let class_jobs = load_catalog(&source, CatalogKind::ClassJob);
    let phantom_jobs = load_catalog(&source, CatalogKind::PhantomJob);

    let mut registrations =
        derive_registrations(&settings, class_jobs.as_ref(), phantom_jobs.as_ref());
    registrations.sort_by(|a, b| a.command.cmp(&b.command));

    println!("\n{}", Theme::header("Registered commands"));
    println!("{}", Theme::separator());
    if registrations.is_empty() {
        println!("{}", Theme::warning("No commands would be registered"));
    }
    for registration in &registrations {
        let target = match registration.target {
            CommandTarget::ClassJob(id) => format!("class/job {id}"),
            CommandTarget::PhantomSearch => "phantom search".to_string(),
        };
        println!(
            "  {:<14} {:<16} {}",
            Theme::command(&registration.command),
            Theme::dimmed(&target),
            registration.help
        );
    }
    println!("{}", Theme::separator());
    println!(
        "{}",
        Theme::info(&format!("{} commands", registrations.len()))
    );
    Ok(())
}
