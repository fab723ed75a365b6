use anyhow::{Result, bail};
use eventdesk_core::EventId;
use eventdesk_core::error::EventDeskError;
use eventdesk_core::store::EventStore;

use crate::render::render_detail;

pub async fn run(store: &dyn EventStore, id: EventId, json: bool) -> Result<()> {
    let event = match store.get_by_id(id).await {
        Ok(event) => event,
        Err(err) => bail!("{}", fetch_failure(id, &err)),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&event)?);
    } else {
        println!("{}", render_detail(&event));
    }

    Ok(())
}

fn fetch_failure(id: EventId, err: &EventDeskError) -> String {
    match err {
        EventDeskError::NotFound(_) => format!("Event #{id} not found."),
        _ => format!("Error fetching event: {err}"),
    }
}
