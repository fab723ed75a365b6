use anyhow::Result;
use dialoguer::Confirm;
use eventdesk_core::EventId;
use eventdesk_core::list::EventList;
use eventdesk_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::tui;

pub async fn run(store: &dyn EventStore, id: EventId, force: bool) -> Result<()> {
    let mut list = EventList::new();

    let spinner = tui::create_spinner("Loading events");
    list.load(store).await;
    spinner.finish_and_clear();

    if let Some(error) = list.error() {
        anyhow::bail!("{error}");
    }

    let Some(event) = list.get(id) else {
        anyhow::bail!("Event {id} not found");
    };
    println!("{}", event.render());

    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Delete this event?")
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    list.select(id);
    if !list.delete_selected(store).await {
        anyhow::bail!("{}", list.error().unwrap_or("Event not deleted"));
    }

    println!("{}", "Deleted".red());
    Ok(())
}
