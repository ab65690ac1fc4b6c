//! Text input fields with an inline validation message.

use crate::validation::ValidationError;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    pub value: String,
    pub error: Option<ValidationError>,
    /// Maximum number of characters accepted.
    pub max_len: Option<usize>,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..Self::default()
        }
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Self::default()
        }
    }

    /// Appends a character. Editing clears a stale error.
    pub fn push(&mut self, c: char) {
        if self.max_len.is_some_and(|max| self.value.chars().count() >= max) {
            return;
        }
        self.value.push(c);
        self.error = None;
    }

    /// Removes the last character.
    ///
    /// Returns `true` if a character was removed.
    pub fn pop(&mut self) -> bool {
        self.error = None;
        self.value.pop().is_some()
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Runs `validate` over the current value, recording any error on the field.
    pub fn check<T>(
        &mut self,
        validate: impl FnOnce(&str) -> Result<T, ValidationError>,
    ) -> Option<T> {
        match validate(&self.value) {
            Ok(v) => {
                self.error = None;
                Some(v)
            }
            Err(e) => {
                self.error = Some(e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation;

    #[test]
    fn test_push_and_pop() {
        let mut field = TextField::new();
        field.push('4');
        field.push('2');
        assert_eq!(field.value, "42");
        assert!(field.pop());
        assert_eq!(field.value, "4");
        assert!(field.pop());
        assert!(!field.pop());
    }

    #[test]
    fn test_max_len() {
        let mut field = TextField::with_max_len(2);
        for c in "123".chars() {
            field.push(c);
        }
        assert_eq!(field.value, "12");
    }

    #[test]
    fn test_check_records_and_clears_error() {
        let mut field = TextField::with_value("555-1234");
        assert!(field.check(validation::phone).is_none());
        assert_eq!(field.error, Some(ValidationError::Phone));

        field.push('9');
        assert!(!field.has_error());
    }

    #[test]
    fn test_check_returns_parsed_value() {
        let mut field = TextField::with_value("10.50");
        let amount = field.check(validation::amount).unwrap();
        assert_eq!(amount.cents(), 1_050);
        assert!(!field.has_error());
    }
}
