//! Contact form state.

use super::validation::{Field, Validity, is_valid_email, is_valid_password};

/// Acknowledgment shown after an accepted submission.
pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Form submitted successfully! In a real application, this would be sent to a server.";

/// Visual validity tag plus the message rendered next to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoration {
    /// Field tagged valid.
    Valid(&'static str),
    /// Field tagged invalid.
    Invalid(&'static str),
}

impl Decoration {
    /// Returns whether the field is tagged valid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Message rendered next to the field.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Valid(message) | Self::Invalid(message) => message,
        }
    }
}

impl From<Validity> for Decoration {
    fn from(validity: Validity) -> Self {
        if validity.valid {
            Self::Valid(validity.message)
        } else {
            Self::Invalid(validity.message)
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields passed; the form was cleared.
    Accepted,
    /// At least one field failed; nothing was cleared.
    Rejected {
        /// Failing fields in submission order.
        failed: Vec<Field>,
    },
}

impl SubmitOutcome {
    /// Returns whether the submission went through.
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

#[derive(Debug, Clone, Default)]
struct FieldState {
    text: String,
    decoration: Option<Decoration>,
}

/// Text and decoration of the four contact form fields.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: [FieldState; 4],
}

impl ContactForm {
    /// Creates an empty, undecorated form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of `field`.
    #[must_use]
    pub fn text(&self, field: Field) -> &str {
        &self.fields[field.index()].text
    }

    /// Current decoration of `field`, if it has been evaluated.
    #[must_use]
    pub fn decoration(&self, field: Field) -> Option<&Decoration> {
        self.fields[field.index()].decoration.as_ref()
    }

    /// Replaces the text of `field` and re-evaluates it.
    pub fn input(&mut self, field: Field, text: impl Into<String>) -> Validity {
        let state = &mut self.fields[field.index()];
        state.text = text.into();
        let validity = field.validate(&state.text);
        state.decoration = Some(validity.clone().into());
        validity
    }

    /// Re-checks every field in submission order.
    ///
    /// Failing fields get their summary message; passing fields keep whatever
    /// decoration they already had. If every field passes, all text and
    /// decorations are cleared.
    pub fn submit(&mut self) -> SubmitOutcome {
        let mut failed = Vec::new();
        for field in Field::ALL {
            if !self.passes_submit_check(field) {
                self.fields[field.index()].decoration =
                    Some(Decoration::Invalid(field.submit_failure_message()));
                failed.push(field);
            }
        }

        if failed.is_empty() {
            self.reset();
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected { failed }
        }
    }

    /// Clears all text and decorations.
    pub fn reset(&mut self) {
        self.fields = Default::default();
    }

    fn passes_submit_check(&self, field: Field) -> bool {
        let text = self.text(field);
        match field {
            Field::Email => is_valid_email(text),
            Field::Password => is_valid_password(text),
            Field::Name | Field::Message => field.validate(text).valid,
        }
    }
}
