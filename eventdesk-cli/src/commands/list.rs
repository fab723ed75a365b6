use anyhow::Result;
use eventdesk_core::list::EventList;
use eventdesk_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::tui;

pub async fn run(store: &dyn EventStore, json: bool) -> Result<()> {
    let mut list = EventList::new();

    let spinner = tui::create_spinner("Loading events");
    list.load(store).await;
    spinner.finish_and_clear();

    if let Some(error) = list.error() {
        anyhow::bail!("{error}");
    }

    let events = list.sorted();

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in events {
        println!("{}", event.render());
    }

    Ok(())
}
