//! Status enums shared by the fixture records and their display mapping.
//!
//! Every status is a closed enum implementing [`StatusStyle`]. The label and
//! tone for each variant live in one exhaustive `match`, and the palette maps
//! tones to colors in one place (see [`crate::theme::Palette::tone`]), so a new
//! variant fails to compile until it is given a presentation.

/// Semantic color family of a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Warning,
    Negative,
    Info,
    Neutral,
}

/// Display mapping for a status enum.
pub trait StatusStyle: Copy {
    fn label(self) -> &'static str;
    fn tone(self) -> Tone;

    /// Single-glyph marker drawn before the label.
    fn symbol(self) -> &'static str {
        match self.tone() {
            Tone::Positive => SUCCESS,
            Tone::Warning => PROGRESS,
            Tone::Negative => ERROR,
            Tone::Info => INFO,
            Tone::Neutral => "•",
        }
    }
}

/// Lifecycle of a bill payment or money movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    Scheduled,
    Paid,
    Pending,
    Failed,
    Completed,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 5] = [
        PaymentStatus::Scheduled,
        PaymentStatus::Paid,
        PaymentStatus::Pending,
        PaymentStatus::Failed,
        PaymentStatus::Completed,
    ];
}

impl StatusStyle for PaymentStatus {
    fn label(self) -> &'static str {
        match self {
            PaymentStatus::Scheduled => "Scheduled",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Failed => "Failed",
            PaymentStatus::Completed => "Completed",
        }
    }

    fn tone(self) -> Tone {
        match self {
            PaymentStatus::Scheduled => Tone::Info,
            PaymentStatus::Paid | PaymentStatus::Completed => Tone::Positive,
            PaymentStatus::Pending => Tone::Warning,
            PaymentStatus::Failed => Tone::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Viewed,
    Paid,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 5] = [
        InvoiceStatus::Draft,
        InvoiceStatus::Sent,
        InvoiceStatus::Viewed,
        InvoiceStatus::Paid,
        InvoiceStatus::Overdue,
    ];

    /// Whether the invoice still counts toward receivables.
    pub fn is_open(self) -> bool {
        !matches!(self, InvoiceStatus::Paid | InvoiceStatus::Draft)
    }
}

impl StatusStyle for InvoiceStatus {
    fn label(self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Sent => "Sent",
            InvoiceStatus::Viewed => "Viewed",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
        }
    }

    fn tone(self) -> Tone {
        match self {
            InvoiceStatus::Draft => Tone::Neutral,
            InvoiceStatus::Sent | InvoiceStatus::Viewed => Tone::Info,
            InvoiceStatus::Paid => Tone::Positive,
            InvoiceStatus::Overdue => Tone::Negative,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationStatus {
    Connected,
    Disconnected,
    Syncing,
    Error,
}

impl StatusStyle for IntegrationStatus {
    fn label(self) -> &'static str {
        match self {
            IntegrationStatus::Connected => "Connected",
            IntegrationStatus::Disconnected => "Not connected",
            IntegrationStatus::Syncing => "Syncing",
            IntegrationStatus::Error => "Needs attention",
        }
    }

    fn tone(self) -> Tone {
        match self {
            IntegrationStatus::Connected => Tone::Positive,
            IntegrationStatus::Disconnected => Tone::Neutral,
            IntegrationStatus::Syncing => Tone::Warning,
            IntegrationStatus::Error => Tone::Negative,
        }
    }
}

/// Success indicator (✓)
pub const SUCCESS: &str = "✓";

/// Error indicator (✗)
pub const ERROR: &str = "✗";

/// Progress/loading indicator (⟳)
pub const PROGRESS: &str = "⟳";

/// Information indicator (ℹ)
pub const INFO: &str = "ℹ";

/// Formats a status-bar success message
pub fn success(msg: &str) -> String {
    format!("{} {}", SUCCESS, msg)
}

/// Formats a status-bar error message
pub fn error(msg: &str) -> String {
    format!("{} {}", ERROR, msg)
}

/// Formats a status-bar progress message
pub fn progress(msg: &str) -> String {
    format!("{} {}...", PROGRESS, msg)
}

/// Formats a status-bar info message
pub fn info(msg: &str) -> String {
    format!("{} {}", INFO, msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_status_labels_are_distinct() {
        let mut labels: Vec<&str> = PaymentStatus::ALL.iter().map(|s| s.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), PaymentStatus::ALL.len());
    }

    #[test]
    fn test_failed_payment_is_negative() {
        assert_eq!(PaymentStatus::Failed.tone(), Tone::Negative);
        assert_eq!(PaymentStatus::Failed.symbol(), ERROR);
    }

    #[test]
    fn test_open_invoices() {
        assert!(InvoiceStatus::Overdue.is_open());
        assert!(InvoiceStatus::Sent.is_open());
        assert!(!InvoiceStatus::Paid.is_open());
        assert!(!InvoiceStatus::Draft.is_open());
    }

    #[test]
    fn test_message_helpers() {
        assert_eq!(success("Saved"), "✓ Saved");
        assert_eq!(error("Failed"), "✗ Failed");
        assert_eq!(progress("Sending"), "⟳ Sending...");
        assert_eq!(info("Note"), "ℹ Note");
    }
}
