use anyhow::Result;
use eventdesk_core::EventId;
use eventdesk_core::editor::{EditorState, EventEditor};
use eventdesk_core::store::EventStore;

use crate::commands::form::{self, EventFields};
use crate::utils::tui;

pub async fn run(store: &dyn EventStore, id: EventId, fields: EventFields) -> Result<()> {
    if fields.is_empty() {
        anyhow::bail!("Nothing to change. Pass at least one field, e.g. --name \"New name\"");
    }

    let mut editor = EventEditor::edit(id);

    let spinner = tui::create_spinner("Loading event");
    editor.load(store).await;
    spinner.finish_and_clear();

    if let EditorState::Error(message) = editor.state() {
        anyhow::bail!("{message}");
    }

    fields.apply(&mut editor);
    form::save(&mut editor, store).await?;
    Ok(())
}
