//! Password field visibility toggle.

use std::collections::HashMap;

/// Identifier of the password field every fresh [`Form`] carries.
pub const PASSWORD_FIELD_ID: &str = "password";

/// Display mode of a password-style input. There is no third state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Masked,
    PlainText,
}

impl Visibility {
    /// Pure flip; applying it twice restores the original state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Masked => Self::PlainText,
            Self::PlainText => Self::Masked,
        }
    }

    /// The HTML input `type` attribute value for this mode.
    #[must_use]
    pub const fn as_input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::PlainText => "text",
        }
    }
}

/// A set of named password-style fields.
///
/// Toggling a field that does not exist is a silent no-op surfaced as
/// `None`, so callers that consider absence a bug can escalate it
/// themselves.
#[derive(Debug, Default)]
pub struct Form {
    fields: HashMap<String, Visibility>,
}

impl Form {
    /// A form with the single, masked `"password"` field.
    #[must_use]
    pub fn new() -> Self {
        let mut form = Self::default();
        form.add_field(PASSWORD_FIELD_ID);
        form
    }

    pub fn add_field(&mut self, id: &str) {
        self.fields.entry(id.to_string()).or_default();
    }

    /// Flip the named field, returning its new visibility, or `None` when
    /// the field is absent (no other field is touched).
    pub fn toggle(&mut self, id: &str) -> Option<Visibility> {
        let visibility = self.fields.get_mut(id)?;
        *visibility = visibility.toggled();
        Some(*visibility)
    }

    #[must_use]
    pub fn visibility(&self, id: &str) -> Option<Visibility> {
        self.fields.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_is_a_pure_flip() {
        assert_eq!(Visibility::Masked.toggled(), Visibility::PlainText);
        assert_eq!(Visibility::PlainText.toggled(), Visibility::Masked);
    }

    #[test]
    fn test_double_toggle_restores_initial_state() {
        for initial in [Visibility::Masked, Visibility::PlainText] {
            assert_eq!(initial.toggled().toggled(), initial);
        }
    }

    #[test]
    fn test_input_type_mapping() {
        assert_eq!(Visibility::Masked.as_input_type(), "password");
        assert_eq!(Visibility::PlainText.as_input_type(), "text");
    }

    #[test]
    fn test_form_starts_masked() {
        let form = Form::new();
        assert_eq!(form.visibility(PASSWORD_FIELD_ID), Some(Visibility::Masked));
    }

    #[test]
    fn test_form_toggle_round_trip() {
        let mut form = Form::new();
        assert_eq!(
            form.toggle(PASSWORD_FIELD_ID),
            Some(Visibility::PlainText)
        );
        assert_eq!(form.toggle(PASSWORD_FIELD_ID), Some(Visibility::Masked));
        assert_eq!(form.visibility(PASSWORD_FIELD_ID), Some(Visibility::Masked));
    }

    #[test]
    fn test_toggle_absent_field_is_a_no_op() {
        let mut form = Form::new();
        assert_eq!(form.toggle("totp"), None);
        // The existing field keeps its state.
        assert_eq!(form.visibility(PASSWORD_FIELD_ID), Some(Visibility::Masked));
    }

    #[test]
    fn test_toggle_on_empty_form() {
        let mut form = Form::default();
        assert_eq!(form.toggle(PASSWORD_FIELD_ID), None);
    }

    #[test]
    fn test_add_field_keeps_existing_state() {
        let mut form = Form::new();
        form.toggle(PASSWORD_FIELD_ID);
        form.add_field(PASSWORD_FIELD_ID);
        assert_eq!(
            form.visibility(PASSWORD_FIELD_ID),
            Some(Visibility::PlainText)
        );
    }
}
