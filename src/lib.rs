// Library for testable modules
pub mod app;
pub mod async_task;
pub mod config;
pub mod data;
pub mod faq;
pub mod key_handler;
pub mod logging;
pub mod pages;
pub mod render_context;
pub mod router;
pub mod screen;
pub mod state;
pub mod status;
pub mod theme;
pub mod ui_utils;
pub mod validation;

// Re-export main types used in tests and benches
pub use data::{Amount, BillPayment, FakeStore, Invoice, Transaction};
pub use router::{NavRequest, PageId, Router};
pub use status::{IntegrationStatus, InvoiceStatus, PaymentStatus, StatusStyle};
pub use theme::{Palette, ThemeMode, ThemeStore};
