//! Dispatch command: run the full handler against the simulated host.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, bail};
use jobswitch_plugin::{HostServices, JobSwitcher, Switched};

use crate::context::Context;
use crate::sim::{SimAction, SimHost, SimState};
use crate::theme::Theme;

/// Register commands in a simulated host and route one invocation.
pub(crate) fn run_dispatch(
    ctx: &Context,
    state: Option<&Path>,
    command: &str,
    args: &[String],
) -> Result<()> {
    let state = match state {
        Some(path) => SimState::load(path)?,
        None => SimState::default(),
    };
    let host = Arc::new(SimHost::new(state));
    let services = HostServices::new(host.clone(), host.clone(), host.clone());
    let switcher = JobSwitcher::new(ctx.settings()?, services, &ctx.source());

    if !switcher.registry().contains(command) {
        bail!("{command} is not a registered command");
    }

    let Some(switched) = switcher.on_command(command, &args.join(" ")) else {
        bail!("{command} failed");
    };

    // the handler already printed its chat line through the sim host
    match switched {
        Switched::ClassJob { slot, .. } => {
            println!("{}", Theme::field("Gearset", slot.index.saturating_add(1)));
            println!("{}", Theme::field("Item level", slot.item_level));
        },
        Switched::PhantomJob { tier, score, .. } => {
            println!("{}", Theme::field("Match", tier));
            println!("{}", Theme::field("Score", score));
        },
    }
    for action in host.actions() {
        let line = match action {
            SimAction::Equipped(index) => format!("equip_loadout({index})"),
            SimAction::Selected(id) => format!("select_catalog_entry({id})"),
        };
        println!("{}", Theme::dimmed(&line));
    }
    Ok(())
}
