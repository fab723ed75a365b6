//! Interactive session.
//!
//! A small route loop over the three views. The list and editor
//! controllers ask a `RouteRecorder` to navigate; the loop follows.

use anyhow::Result;
use chrono::Local;
use dialoguer::{Confirm, Input, Select};
use eventdesk_core::EventId;
use eventdesk_core::editor::{EditorState, EventEditor, SubmitOutcome};
use eventdesk_core::list::EventList;
use eventdesk_core::navigation::{Navigator, Route, RouteRecorder};
use eventdesk_core::palette::Color;
use eventdesk_core::store::EventStore;
use eventdesk_core::validate::Field;
use owo_colors::OwoColorize;

use crate::render::{Render, render_errors, render_form_line, render_row};
use crate::utils::tui;

pub async fn run(store: &dyn EventStore) -> Result<()> {
    let mut nav = RouteRecorder::default();
    let mut list = EventList::new();

    let spinner = tui::create_spinner("Loading events");
    list.load(store).await;
    spinner.finish_and_clear();

    let mut route = Route::List;
    loop {
        match route {
            Route::List => {
                if !list_view(&mut list, store, &mut nav).await? {
                    list.deactivate();
                    return Ok(());
                }
            }
            Route::Create => {
                let mut editor = EventEditor::create(Local::now());
                editor_view(&mut editor, &mut list, store, &mut nav).await?;
            }
            Route::Edit(id) => {
                let mut editor = EventEditor::edit(id);
                editor_view(&mut editor, &mut list, store, &mut nav).await?;
            }
        }

        route = nav.take().unwrap_or(Route::List);
    }
}

enum ListAction {
    Event(EventId),
    New,
    Delete,
    Refresh,
    Quit,
}

/// One round of the list view. Returns false when the user quits.
async fn list_view(list: &mut EventList, store: &dyn EventStore, nav: &mut RouteRecorder) -> Result<bool> {
    loop {
        if let Some(error) = list.error() {
            println!("{}", error.red());
            list.clear_error();
        }

        let mut actions = Vec::new();
        let mut items = Vec::new();

        for event in list.sorted() {
            items.push(render_row(event, list.selected() == Some(event.id)));
            actions.push(ListAction::Event(event.id));
        }
        if items.is_empty() {
            println!("{}", "No events yet".dimmed());
        }

        items.push("+ Add event".to_string());
        actions.push(ListAction::New);
        if let Some(id) = list.selected() {
            items.push(format!("- Delete selected (#{id})"));
            actions.push(ListAction::Delete);
        }
        items.push("Refresh".to_string());
        actions.push(ListAction::Refresh);
        items.push("Quit".to_string());
        actions.push(ListAction::Quit);

        let choice = Select::new()
            .with_prompt("Upcoming events")
            .items(&items)
            .default(0)
            .interact_opt()?;

        let Some(action) = choice.and_then(|i| actions.into_iter().nth(i)) else {
            return Ok(false);
        };

        match action {
            ListAction::Event(id) => {
                let picked = Select::new()
                    .with_prompt(format!("Event #{id}"))
                    .items(&["Toggle selection", "Edit", "Back"])
                    .default(0)
                    .interact_opt()?;

                match picked {
                    Some(0) => list.select(id),
                    Some(1) => {
                        list.open(id, nav);
                        return Ok(true);
                    }
                    _ => {}
                }
            }
            ListAction::New => {
                list.create(nav);
                return Ok(true);
            }
            ListAction::Delete => {
                let confirmed = Confirm::new()
                    .with_prompt("Delete the selected event?")
                    .default(false)
                    .interact()?;
                if confirmed {
                    let spinner = tui::create_spinner("Deleting event");
                    list.delete_selected(store).await;
                    spinner.finish_and_clear();
                }
            }
            ListAction::Refresh => {
                let spinner = tui::create_spinner("Loading events");
                list.load(store).await;
                spinner.finish_and_clear();
            }
            ListAction::Quit => return Ok(false),
        }
    }
}

enum FormAction {
    Field(Field),
    ToggleActive,
    Save,
    Cancel,
}

/// The create/edit form. Leaves a route in `nav` when done.
async fn editor_view(
    editor: &mut EventEditor,
    list: &mut EventList,
    store: &dyn EventStore,
    nav: &mut RouteRecorder,
) -> Result<()> {
    if editor.state() == &EditorState::Loading {
        let spinner = tui::create_spinner("Loading event");
        editor.load(store).await;
        spinner.finish_and_clear();
    }

    if let EditorState::Error(message) = editor.state() {
        println!("{}", message.red());
        nav.to_list();
        return Ok(());
    }

    let title = match editor.id() {
        Some(id) => format!("Edit event #{id}"),
        None => "Add event".to_string(),
    };

    loop {
        if let Some(error) = editor.error() {
            println!("{}", error.red());
        }

        let visible = editor.visible_errors();
        let mut items = Vec::new();
        let mut actions = Vec::new();

        for field in Field::ALL {
            let value = field.get(editor.draft());
            items.push(render_form_line(field, value, visible.message(field)));
            actions.push(FormAction::Field(field));
        }
        let active = if editor.draft().is_active { "yes" } else { "no" };
        items.push(format!(" {:<12} {}", "Active", active));
        actions.push(FormAction::ToggleActive);
        items.push(if editor.is_create() { "Create" } else { "Save" }.to_string());
        actions.push(FormAction::Save);
        items.push("Cancel".to_string());
        actions.push(FormAction::Cancel);

        let choice = Select::new()
            .with_prompt(&title)
            .items(&items)
            .default(0)
            .interact_opt()?;

        let action = match choice.and_then(|i| actions.into_iter().nth(i)) {
            Some(action) => action,
            None => FormAction::Cancel,
        };

        match action {
            FormAction::Field(Field::Color) => {
                let current = Color::ALL
                    .iter()
                    .position(|c| c.as_str() == editor.draft().color)
                    .unwrap_or(0);
                let swatches: Vec<String> = Color::ALL.iter().map(|c| c.render()).collect();
                let picked = Select::new()
                    .with_prompt("Color")
                    .items(&swatches)
                    .default(current)
                    .interact_opt()?;
                match picked {
                    Some(i) => editor.set_color(Color::ALL[i]),
                    None => editor.blur(Field::Color),
                }
            }
            FormAction::Field(field) => {
                let value: String = Input::new()
                    .with_prompt(field.label())
                    .with_initial_text(field.get(editor.draft()))
                    .allow_empty(true)
                    .interact_text()?;
                editor.set_field(field, value);
            }
            FormAction::ToggleActive => {
                let active = editor.draft().is_active;
                editor.set_active(!active);
            }
            FormAction::Save => {
                let spinner = tui::create_spinner("Saving event");
                let outcome = editor.submit(store, nav).await;
                spinner.finish_and_clear();

                match outcome {
                    SubmitOutcome::Saved(event) => {
                        println!("{} {}", "Saved".green(), event.render());
                        list.apply_saved(event);
                        return Ok(());
                    }
                    SubmitOutcome::Invalid(report) => {
                        println!("{}", render_errors(&report));
                    }
                    SubmitOutcome::Failed(_) => {}
                    SubmitOutcome::NotReady | SubmitOutcome::Stale => {
                        nav.to_list();
                        return Ok(());
                    }
                }
            }
            FormAction::Cancel => {
                editor.cancel(nav);
                return Ok(());
            }
        }
    }
}
