//! TUI rendering for eventdesk types.
//!
//! Extension traits that add colored terminal rendering to eventdesk-core
//! types using owo_colors.

use eventdesk_core::Event;
use eventdesk_core::palette::Color;
use eventdesk_core::validate::{Field, ValidationReport};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Approximate terminal color for each palette entry
fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Red => (255, 0, 0),
        Color::Green => (0, 128, 0),
        Color::Blue => (0, 0, 255),
        Color::Yellow => (255, 255, 0),
        Color::Orange => (255, 165, 0),
        Color::Purple => (128, 0, 128),
        Color::Pink => (255, 192, 203),
        Color::Brown => (165, 42, 42),
        Color::Black => (0, 0, 0),
        Color::White => (255, 255, 255),
        Color::Gray => (128, 128, 128),
        Color::Cyan => (0, 255, 255),
        Color::Magenta => (255, 0, 255),
        Color::Lime => (0, 255, 0),
        Color::Teal => (0, 128, 128),
        Color::Navy => (0, 0, 128),
        Color::Olive => (128, 128, 0),
        Color::Maroon => (128, 0, 0),
    }
}

impl Render for Color {
    fn render(&self) -> String {
        let (r, g, b) = rgb(*self);
        format!("{} {}", "●".truecolor(r, g, b), self)
    }
}

/// The colored dot in front of an event. Colors outside the palette get a
/// hollow dot.
fn swatch(color: &str) -> String {
    match color.parse::<Color>() {
        Ok(color) => {
            let (r, g, b) = rgb(color);
            "●".truecolor(r, g, b).to_string()
        }
        Err(_) => "○".dimmed().to_string(),
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let data = &self.data;
        let when = format!("{} {}", data.date, data.time);
        let mut line = format!("{} {} {}", swatch(&data.color), data.company.bold(), data.name);
        if !data.description.is_empty() {
            line.push_str(&format!(": {}", data.description.italic()));
        }
        format!("{} {} {}", line, when.trim().dimmed(), format!("#{}", self.id).dimmed())
    }
}

/// One line of the list view, marked when selected
pub fn render_row(event: &Event, selected: bool) -> String {
    if selected {
        format!("{} {}", "▶".green(), event.render())
    } else {
        format!("  {}", event.render())
    }
}

/// Every field of an event, one per line
pub fn render_detail(event: &Event) -> String {
    let data = &event.data;
    let mut lines = vec![format!("{} {}", swatch(&data.color), data.name.bold())];

    let rows = [
        ("Id", event.id.to_string()),
        ("Company", data.company.clone()),
        ("Description", data.description.clone()),
        ("Date", data.date.clone()),
        ("Time", data.time.clone()),
        ("Color", data.color.clone()),
        ("Phone", data.phone.clone()),
        ("Email", data.email.clone()),
        ("Address", data.address.clone()),
        ("Image", data.image.clone()),
        ("Active", if data.is_active { "yes" } else { "no" }.to_string()),
        ("Created", data.created_on.clone()),
    ];

    for (label, value) in rows {
        if !value.is_empty() {
            lines.push(format!("   {:<12} {}", label.dimmed(), value));
        }
    }

    lines.join("\n")
}

/// Validation messages, one per invalid field
pub fn render_errors(report: &ValidationReport) -> String {
    report
        .fields()
        .filter_map(|field| report.message(field))
        .map(|message| format!("   {}", message.red()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A form line: label, current value and the error to show, if any
pub fn render_form_line(field: Field, value: &str, error: Option<&str>) -> String {
    let marker = if field.is_required() { "*" } else { " " };
    let value = match field {
        Field::Color if !value.is_empty() => format!("{} {}", swatch(value), value),
        _ => value.to_string(),
    };
    let mut line = format!("{}{:<12} {}", marker, field.label(), value);
    if let Some(error) = error {
        line.push_str(&format!("  {}", error.red()));
    }
    line
}

#[cfg(test)]
mod tests {
    use eventdesk_core::EventData;

    use super::*;

    fn event(description: &str) -> Event {
        Event {
            id: 7,
            data: EventData {
                name: "Launch".into(),
                description: description.into(),
                company: "Acme".into(),
                color: "blue".into(),
                ..EventData::default()
            },
        }
    }

    #[test]
    fn row_shows_name_company_and_description() {
        let row = render_row(&event("Product launch"), false);
        assert!(row.contains("Launch"));
        assert!(row.contains("Acme"));
        assert!(row.contains("Product launch"));
        assert!(row.contains("#7"));
    }

    #[test]
    fn row_without_description_has_no_separator() {
        let row = event("").render();
        assert!(!row.contains(": "));
    }
}
