//! Field flags shared by `new` and `edit`, and the save step behind both.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use eventdesk_core::Event;
use eventdesk_core::editor::{EventEditor, SubmitOutcome};
use eventdesk_core::error::EventDeskError;
use eventdesk_core::navigation::RouteRecorder;
use eventdesk_core::palette::Color;
use eventdesk_core::store::EventStore;
use eventdesk_core::validate::Field;
use owo_colors::OwoColorize;

use crate::render::{Render, render_errors};
use crate::utils::tui;

#[derive(Args, Debug, Default)]
pub struct EventFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub company: Option<String>,

    /// One of the palette colors (see `eventdesk colors`)
    #[arg(long)]
    pub color: Option<Color>,

    /// e.g. "+1 (555) 123-4567"; pass "" to clear
    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,

    /// Date (YYYY-MM-DD), defaults to today for new events
    #[arg(long, value_parser = parse_date)]
    pub date: Option<String>,

    /// Time (HH:MM), defaults to now for new events
    #[arg(long, value_parser = parse_time)]
    pub time: Option<String>,

    /// Mark the event active or inactive
    #[arg(long)]
    pub active: Option<bool>,
}

fn parse_date(s: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.format("%Y-%m-%d").to_string())
        .map_err(|_| format!("Invalid date '{s}', expected YYYY-MM-DD"))
}

fn parse_time(s: &str) -> Result<String, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| format!("Invalid time '{s}', expected HH:MM"))
}

impl EventFields {
    pub fn is_empty(&self) -> bool {
        self.text_fields().iter().all(|(_, value)| value.is_none())
            && self.color.is_none()
            && self.active.is_none()
    }

    fn text_fields(&self) -> [(Field, Option<&String>); 9] {
        [
            (Field::Name, self.name.as_ref()),
            (Field::Description, self.description.as_ref()),
            (Field::Company, self.company.as_ref()),
            (Field::Phone, self.phone.as_ref()),
            (Field::Email, self.email.as_ref()),
            (Field::Address, self.address.as_ref()),
            (Field::Image, self.image.as_ref()),
            (Field::Date, self.date.as_ref()),
            (Field::Time, self.time.as_ref()),
        ]
    }

    /// Apply every given flag to the editor's draft
    pub fn apply(&self, editor: &mut EventEditor) {
        for (field, value) in self.text_fields() {
            if let Some(value) = value {
                editor.set_field(field, value.as_str());
            }
        }
        if let Some(color) = self.color {
            editor.set_color(color);
        }
        if let Some(active) = self.active {
            editor.set_active(active);
        }
    }
}

/// Submit the editor and report the outcome
pub async fn save(editor: &mut EventEditor, store: &dyn EventStore) -> Result<Event> {
    let creating = editor.is_create();
    let spinner = tui::create_spinner(if creating { "Creating event" } else { "Saving event" });
    let outcome = editor.submit(store, &mut RouteRecorder::default()).await;
    spinner.finish_and_clear();

    match outcome {
        SubmitOutcome::Saved(event) => {
            let verb = if creating { "Created" } else { "Saved" };
            println!("{} {}", verb.green(), event.render());
            Ok(event)
        }
        SubmitOutcome::Invalid(report) => {
            eprintln!("{}", render_errors(&report));
            Err(EventDeskError::Validation(report).into())
        }
        SubmitOutcome::Failed(err) => {
            anyhow::bail!("{} ({err})", editor.error().unwrap_or("Error saving event."))
        }
        SubmitOutcome::NotReady | SubmitOutcome::Stale => {
            anyhow::bail!("Event editor is not ready")
        }
    }
}
