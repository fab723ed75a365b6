//! Draft validation.
//!
//! `validate` is pure: it looks at every field of a draft and reports the
//! invalid ones. Whether an error is shown is a separate concern, see
//! `ValidationReport::masked`.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::event::EventData;
use crate::palette::Color;

/// Optional `+` and country code, optional parenthesized area code,
/// then `NNN-NNNN` with an optional hyphen. ASCII digits and whitespace
/// only.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^\+?(\d{1,3})?[\s-]?\(?\d{3}\)?[\s-]?\d{3}-?\d{4}$").expect("valid phone regex")
});

/// An editable event field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Description,
    Company,
    Color,
    Phone,
    Email,
    Address,
    Image,
    Date,
    Time,
}

impl Field {
    /// Fields that must be non-empty before a draft can be saved.
    pub const REQUIRED: [Field; 4] = [Field::Name, Field::Description, Field::Company, Field::Color];

    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Description,
        Field::Company,
        Field::Color,
        Field::Phone,
        Field::Email,
        Field::Address,
        Field::Image,
        Field::Date,
        Field::Time,
    ];

    pub fn is_required(&self) -> bool {
        Field::REQUIRED.contains(self)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Description => "Description",
            Field::Company => "Company",
            Field::Color => "Color",
            Field::Phone => "Phone",
            Field::Email => "Email",
            Field::Address => "Address",
            Field::Image => "Image URL",
            Field::Date => "Date",
            Field::Time => "Time",
        }
    }

    pub fn get<'a>(&self, data: &'a EventData) -> &'a str {
        match self {
            Field::Name => &data.name,
            Field::Description => &data.description,
            Field::Company => &data.company,
            Field::Color => &data.color,
            Field::Phone => &data.phone,
            Field::Email => &data.email,
            Field::Address => &data.address,
            Field::Image => &data.image,
            Field::Date => &data.date,
            Field::Time => &data.time,
        }
    }

    pub fn get_mut<'a>(&self, data: &'a mut EventData) -> &'a mut String {
        match self {
            Field::Name => &mut data.name,
            Field::Description => &mut data.description,
            Field::Company => &mut data.company,
            Field::Color => &mut data.color,
            Field::Phone => &mut data.phone,
            Field::Email => &mut data.email,
            Field::Address => &mut data.address,
            Field::Image => &mut data.image,
            Field::Date => &mut data.date,
            Field::Time => &mut data.time,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The set of fields a draft currently fails on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    invalid: BTreeSet<Field>,
    unknown_color: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    pub fn is_invalid(&self, field: Field) -> bool {
        self.invalid.contains(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.invalid.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.invalid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Keep only errors for the given fields (the touched ones when
    /// deciding what to display).
    pub fn masked(&self, shown: &BTreeSet<Field>) -> ValidationReport {
        ValidationReport {
            invalid: self.invalid.intersection(shown).copied().collect(),
            unknown_color: self.unknown_color && shown.contains(&Field::Color),
        }
    }

    /// The message shown next to an invalid field.
    pub fn message(&self, field: Field) -> Option<&'static str> {
        if !self.is_invalid(field) {
            return None;
        }
        Some(match field {
            Field::Color if self.unknown_color => "Unknown color",
            Field::Phone => "Invalid phone format (ex. '+X (XXX) XXX-XXXX')",
            Field::Name => "Name is required",
            Field::Description => "Description is required",
            Field::Company => "Company is required",
            Field::Color => "Color is required",
            _ => "Invalid value",
        })
    }

    fn flag(&mut self, field: Field) {
        self.invalid.insert(field);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<_> = self.fields().filter_map(|field| self.message(field)).collect();
        f.write_str(&messages.join(", "))
    }
}

/// Whether `phone` matches the phone pattern. Empty is not a match;
/// callers treat an empty phone as "not given".
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Check every field of a draft, ignoring whether it has been touched.
pub fn validate(draft: &EventData) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in [Field::Name, Field::Description, Field::Company] {
        if field.get(draft).is_empty() {
            report.flag(field);
        }
    }

    if draft.color.is_empty() {
        report.flag(Field::Color);
    } else if !Color::is_member(&draft.color) {
        report.flag(Field::Color);
        report.unknown_color = true;
    }

    if !draft.phone.is_empty() && !is_valid_phone(&draft.phone) {
        report.flag(Field::Phone);
    }

    report
}
