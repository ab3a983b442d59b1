//! Contact form validation and simulated submission.
//!
//! Each field moves between `Untouched`, `Invalid` and `Valid`:
//!
//! ```text
//!            blur(ok)            input(ok)
//! Untouched ─────────► Valid ◄───────────── Invalid
//!     │                  │                     ▲
//!     └──── blur(err) ───┴───── blur(err) ─────┘
//! ```
//!
//! Typing never flags a field; it can only clear an existing error.
//! Submission validates every field present on the page regardless of prior
//! state.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Element id of the input.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    /// Element id of the matching error display.
    pub fn error_id(&self) -> &'static str {
        match self {
            Field::Name => "name-error",
            Field::Email => "email-error",
            Field::Subject => "subject-error",
            Field::Message => "message-error",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    /// Minimum trimmed length, in UTF-16 code units.
    pub fn min_len(&self) -> usize {
        match self {
            Field::Name => 2,
            Field::Email => 1,
            Field::Subject => 5,
            Field::Message => 10,
        }
    }

    fn index(&self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Subject => 2,
            Field::Message => 3,
        }
    }
}

/// Why a field's content was rejected. Display text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(Field),

    #[error("{} must be at least {} characters", .field.label(), .min)]
    TooShort { field: Field, min: usize },

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Validate trimmed field content.
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required(field));
    }

    match field {
        Field::Email => {
            if !EMAIL_RE.is_match(value) {
                return Err(FieldError::InvalidEmail);
            }
        }
        Field::Name | Field::Subject | Field::Message => {
            let min = field.min_len();
            // UTF-16 code units, as the browser counts `value.length`
            if value.encode_utf16().count() < min {
                return Err(FieldError::TooShort { field, min });
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Invalid(FieldError),
    Valid,
}

impl FieldStatus {
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldStatus::Invalid(_))
    }

    /// Message for the error display, empty when there is none.
    pub fn message(&self) -> String {
        match self {
            FieldStatus::Invalid(err) => err.to_string(),
            _ => String::new(),
        }
    }

    /// Inline border colour for the input.
    pub fn border_color(&self) -> &'static str {
        match self {
            FieldStatus::Invalid(_) => "var(--color-error)",
            _ => "var(--color-border)",
        }
    }

    fn from_result(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => FieldStatus::Valid,
            Err(err) => FieldStatus::Invalid(err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldState {
    pub value: String,
    pub status: FieldStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// Submit control disabled, waiting on the simulated round-trip.
    Pending,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field valid; the simulated send has begun.
    Started,
    /// At least one field invalid; focus belongs on `first_invalid`.
    Rejected { first_invalid: Field },
    /// A submission is already pending.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: [FieldState; 4],
    /// Fields present on the page, in focus order. Absent ones are never validated.
    present: Vec<Field>,
    pub submit: SubmitStatus,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new(Field::ALL)
    }
}

impl ContactForm {
    pub fn new(present: impl IntoIterator<Item = Field>) -> Self {
        let mut present: Vec<Field> = present.into_iter().collect();
        present.sort_by_key(Field::index);
        present.dedup();
        Self {
            fields: Default::default(),
            present,
            submit: SubmitStatus::Idle,
        }
    }

    pub fn present(&self) -> &[Field] {
        &self.present
    }

    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[field.index()]
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        &mut self.fields[field.index()]
    }

    /// Keystroke: record the text and clear an existing error once it is fixed.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        let state = self.field_mut(field);
        state.value = value.into();
        if state.status.is_invalid() && validate_field(field, &state.value).is_ok() {
            state.status = FieldStatus::Valid;
        }
    }

    /// Focus left the field: validate its current text unconditionally.
    pub fn blur(&mut self, field: Field, value: impl Into<String>) {
        let state = self.field_mut(field);
        state.value = value.into();
        state.status = FieldStatus::from_result(validate_field(field, &state.value));
    }

    /// Validate every present field against `values` (the text the page holds
    /// right now). Fields missing from `values` keep their last recorded text.
    pub fn submit(&mut self, values: Vec<(Field, String)>) -> SubmitOutcome {
        if self.submit == SubmitStatus::Pending {
            tracing::debug!("submit ignored, already pending");
            return SubmitOutcome::Ignored;
        }

        for (field, value) in values {
            self.field_mut(field).value = value;
        }
        for field in self.present.clone() {
            let value = self.field(field).value.clone();
            self.blur(field, value);
        }

        match self
            .present
            .iter()
            .copied()
            .find(|f| self.field(*f).status.is_invalid())
        {
            Some(first_invalid) => {
                tracing::debug!(field = first_invalid.id(), "submit rejected");
                SubmitOutcome::Rejected { first_invalid }
            }
            None => {
                self.submit = SubmitStatus::Pending;
                tracing::info!("contact form submitted");
                SubmitOutcome::Started
            }
        }
    }

    /// Simulated send finished: clear every field and error, re-enable submit.
    pub fn complete(&mut self) {
        self.fields = Default::default();
        self.submit = SubmitStatus::Idle;
    }

    pub fn is_pending(&self) -> bool {
        self.submit == SubmitStatus::Pending
    }
}
