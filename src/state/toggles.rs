//! Labeled on/off switches used by the settings and security pages.

use crate::state::list::ListCursor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub label: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

impl Toggle {
    pub fn new(label: &'static str, description: &'static str, enabled: bool) -> Self {
        Self {
            label,
            description,
            enabled,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToggleList {
    pub items: Vec<Toggle>,
    pub cursor: ListCursor,
}

impl ToggleList {
    pub fn new(items: Vec<Toggle>) -> Self {
        Self {
            items,
            cursor: ListCursor::new(),
        }
    }

    /// Flips switch `index` and returns its new value.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let item = self.items.get_mut(index)?;
        item.enabled = !item.enabled;
        tracing::info!(setting = item.label, enabled = item.enabled, "toggled");
        Some(item.enabled)
    }

    pub fn toggle_selected(&mut self) -> Option<&Toggle> {
        let idx = self.cursor.selected;
        self.toggle(idx)?;
        self.items.get(idx)
    }

    pub fn is_enabled(&self, label: &str) -> Option<bool> {
        self.items.iter().find(|t| t.label == label).map(|t| t.enabled)
    }

    pub fn navigate_down(&mut self) -> bool {
        self.cursor.navigate_down(self.items.len())
    }
}

pub fn notification_toggles() -> ToggleList {
    ToggleList::new(vec![
        Toggle::new("Email notifications", "Receipts and weekly summaries by email", true),
        Toggle::new("SMS alerts", "Text messages for large or failed payments", false),
        Toggle::new("Push notifications", "Alerts on the Penny mobile app", true),
        Toggle::new("Payment alerts", "Notify when a bill payment is processed", true),
        Toggle::new("Weekly digest", "Monday cash-flow digest", false),
    ])
}

pub fn security_toggles() -> ToggleList {
    ToggleList::new(vec![
        Toggle::new("Two-factor authentication", "Require a code at every sign-in", true),
        Toggle::new("Biometric login", "Face ID / fingerprint on mobile", false),
        Toggle::new("Login alerts", "Email me when a new device signs in", true),
        Toggle::new("Transaction PIN", "Ask for a PIN before sending money", false),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_restores_value() {
        let mut list = notification_toggles();
        for idx in 0..list.items.len() {
            let original = list.items[idx].enabled;
            list.toggle(idx);
            assert_ne!(list.items[idx].enabled, original);
            list.toggle(idx);
            assert_eq!(list.items[idx].enabled, original);
        }
    }

    #[test]
    fn test_toggle_selected_follows_cursor() {
        let mut list = security_toggles();
        list.navigate_down();
        let toggled = list.toggle_selected().unwrap();
        assert_eq!(toggled.label, "Biometric login");
        assert!(toggled.enabled);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut list = ToggleList::default();
        assert!(list.toggle(3).is_none());
        assert!(list.toggle_selected().is_none());
    }

    #[test]
    fn test_is_enabled_by_label() {
        let list = notification_toggles();
        assert_eq!(list.is_enabled("SMS alerts"), Some(false));
        assert_eq!(list.is_enabled("Missing"), None);
    }
}
