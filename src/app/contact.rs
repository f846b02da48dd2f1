//! Contact form validator and simulated submitter.
//!
//! A field validates on blur. Once it is invalid it also re-validates on
//! every input, so the error disappears as soon as the value is fixed,
//! without flashing errors at someone still typing their first attempt.
//!
//! Submitting validates all three fields. A valid form goes to
//! [`SubmitState::Sending`] for a fixed delay and then always succeeds; there
//! is no transport, no retry and no failure branch.

use super::modes::{FieldState, SubmitState};
use crate::domain::{ContactSubmission, FieldName, FormField, ValidationResult};

/// Label shown on the submit control while a submission is in flight.
pub const SENDING_LABEL: &str = "Sending...";

/// Notification shown when a submit attempt has invalid fields.
pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors below";

/// A field together with its validation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSlot {
    pub field: FormField,
    pub state: FieldState,
}

impl FieldSlot {
    fn new(name: FieldName) -> Self {
        Self {
            field: FormField::new(name),
            state: FieldState::Untouched,
        }
    }

    fn validate(&mut self) -> ValidationResult {
        let result = self.field.revalidate();
        self.state = if result.is_valid {
            FieldState::Valid
        } else {
            FieldState::Invalid
        };
        result
    }

    fn reset(&mut self) {
        self.field.reset();
        self.state = FieldState::Untouched;
    }
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the listed fields show errors.
    Rejected(Vec<ValidationResult>),
    /// The submission is in flight.
    Accepted(ContactSubmission),
    /// A previous submission is still in flight; nothing happened.
    Busy,
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    slots: [FieldSlot; 3],
    pub submit: SubmitState,
    submit_label: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new("Send Message")
    }
}

impl ContactForm {
    /// Creates an empty form whose submit control normally reads `submit_label`.
    #[must_use]
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self {
            slots: FieldName::ALL.map(FieldSlot::new),
            submit: SubmitState::Idle,
            submit_label: submit_label.into(),
        }
    }

    pub fn set_submit_label(&mut self, label: impl Into<String>) {
        self.submit_label = label.into();
    }

    /// The submit control's current label.
    #[must_use]
    pub fn submit_label(&self) -> &str {
        match self.submit {
            SubmitState::Idle => &self.submit_label,
            SubmitState::Sending(_) => SENDING_LABEL,
        }
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self.submit, SubmitState::Sending(_))
    }

    #[must_use]
    pub fn slot(&self, name: FieldName) -> &FieldSlot {
        &self.slots[Self::index(name)]
    }

    pub fn slots(&self) -> impl Iterator<Item = &FieldSlot> {
        self.slots.iter()
    }

    /// Handles focus leaving a field holding `value`.
    pub fn on_blur(&mut self, name: FieldName, value: &str) -> ValidationResult {
        let slot = self.slot_mut(name);
        value.clone_into(&mut slot.field.raw_value);
        let result = slot.validate();
        tracing::debug!(field = %name, valid = result.is_valid, "field validated on blur");
        result
    }

    /// Handles an edit leaving `value` in a field.
    ///
    /// Only re-validates a field that is currently invalid.
    pub fn on_input(&mut self, name: FieldName, value: &str) -> Option<ValidationResult> {
        let slot = self.slot_mut(name);
        value.clone_into(&mut slot.field.raw_value);
        if slot.state != FieldState::Invalid {
            return None;
        }
        let result = slot.validate();
        tracing::trace!(field = %name, valid = result.is_valid, "field re-validated on input");
        Some(result)
    }

    /// Handles a submit attempt with the form's current values.
    pub fn on_submit(&mut self, name: &str, email: &str, message: &str) -> SubmitOutcome {
        if self.is_sending() {
            tracing::debug!("submission already in flight");
            return SubmitOutcome::Busy;
        }

        for (slot, value) in self.slots.iter_mut().zip([name, email, message]) {
            value.clone_into(&mut slot.field.raw_value);
            slot.field.error_message = None;
        }

        let failures: Vec<ValidationResult> = self
            .slots
            .iter_mut()
            .map(FieldSlot::validate)
            .filter(|r| !r.is_valid)
            .collect();

        if !failures.is_empty() {
            tracing::debug!(failures = failures.len(), "submission rejected");
            return SubmitOutcome::Rejected(failures);
        }

        let submission = ContactSubmission::from_raw(name, email, message);
        tracing::debug!(name = %submission.name, "submission accepted");
        self.submit = SubmitState::Sending(submission.clone());
        SubmitOutcome::Accepted(submission)
    }

    /// Finishes the in-flight submission, resetting every field.
    ///
    /// Returns the submission, or `None` if nothing was in flight.
    pub fn complete(&mut self) -> Option<ContactSubmission> {
        let SubmitState::Sending(submission) = std::mem::take(&mut self.submit) else {
            return None;
        };
        for slot in &mut self.slots {
            slot.reset();
        }
        Some(submission)
    }

    fn slot_mut(&mut self, name: FieldName) -> &mut FieldSlot {
        &mut self.slots[Self::index(name)]
    }

    const fn index(name: FieldName) -> usize {
        match name {
            FieldName::Name => 0,
            FieldName::Email => 1,
            FieldName::Message => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{EMAIL_ERROR, NAME_ERROR};

    #[test]
    fn input_before_failure_does_not_validate() {
        let mut form = ContactForm::default();
        assert_eq!(form.on_input(FieldName::Name, "A"), None);
        assert_eq!(form.slot(FieldName::Name).state, FieldState::Untouched);
        assert_eq!(form.slot(FieldName::Name).field.error_message, None);
    }

    #[test]
    fn input_after_failure_validates_live() {
        let mut form = ContactForm::default();
        assert!(!form.on_blur(FieldName::Email, "ada@").is_valid);
        assert_eq!(
            form.slot(FieldName::Email).field.error_message.as_deref(),
            Some(EMAIL_ERROR)
        );

        let result = form.on_input(FieldName::Email, "ada@example.com").unwrap();
        assert!(result.is_valid);
        assert_eq!(form.slot(FieldName::Email).state, FieldState::Valid);

        assert_eq!(form.on_input(FieldName::Email, "ada@"), None);
        assert_eq!(form.slot(FieldName::Email).state, FieldState::Valid);
    }

    #[test]
    fn rejected_submit_marks_each_failure() {
        let mut form = ContactForm::default();
        let SubmitOutcome::Rejected(failures) = form.on_submit("A", "bad", "short") else {
            panic!("expected rejection");
        };
        assert_eq!(failures.len(), 3);
        assert!(!form.is_sending());
        assert_eq!(form.submit_label(), "Send Message");
        for slot in form.slots() {
            assert_eq!(slot.state, FieldState::Invalid);
        }
    }

    #[test]
    fn partial_failure_clears_previous_errors() {
        let mut form = ContactForm::default();
        form.on_submit("A", "bad", "short");
        form.on_submit("Ada", "bad", "This message is long enough");

        assert_eq!(form.slot(FieldName::Name).field.error_message, None);
        assert_eq!(form.slot(FieldName::Message).field.error_message, None);
        assert_eq!(
            form.slot(FieldName::Email).field.error_message.as_deref(),
            Some(EMAIL_ERROR)
        );
    }

    #[test]
    fn accepted_submit_sends_then_resets() {
        let mut form = ContactForm::new("Send");
        let outcome = form.on_submit(" Ada ", "ada@example.com", "Hello, this is a test message.");
        assert!(matches!(outcome, SubmitOutcome::Accepted(ref s) if s.name == "Ada"));
        assert!(form.is_sending());
        assert_eq!(form.submit_label(), SENDING_LABEL);
        assert_eq!(form.on_submit("Ada", "ada@example.com", "again and again"), SubmitOutcome::Busy);

        let done = form.complete().unwrap();
        assert_eq!(done.email, "ada@example.com");
        assert_eq!(form.submit_label(), "Send");
        for slot in form.slots() {
            assert!(slot.field.raw_value.is_empty());
            assert_eq!(slot.state, FieldState::Untouched);
        }
        assert_eq!(form.complete(), None);
    }

    #[test]
    fn blur_reports_name_message() {
        let mut form = ContactForm::default();
        let result = form.on_blur(FieldName::Name, " ");
        assert_eq!(result.message, Some(NAME_ERROR));
    }
}
