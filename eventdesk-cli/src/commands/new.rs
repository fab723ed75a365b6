use anyhow::Result;
use chrono::Local;
use eventdesk_core::editor::EventEditor;
use eventdesk_core::store::EventStore;

use crate::commands::form::{self, EventFields};

pub async fn run(store: &dyn EventStore, fields: EventFields) -> Result<()> {
    let mut editor = EventEditor::create(Local::now());
    fields.apply(&mut editor);

    form::save(&mut editor, store).await?;
    Ok(())
}
