//! Page state modules for the Penny TUI.
//!
//! Each page keeps its interactive state in a plain struct here, separate from
//! rendering, so the filtering, validation and task bookkeeping can be unit
//! tested without a terminal.
//!
//! # Architecture
//!
//! ```text
//! pages::*Page
//! ├── InvoicesState       - Status tabs, search, selection
//! ├── CustomersState      - Search and selection
//! ├── BillPayState        - Status tabs, modal flags, scheduling task
//! │   ├── BillerSearchState
//! │   └── PaymentSetupState
//! ├── CrossBorderState    - Quote form and transfer history
//! ├── TransfersState      - P2P / A2A forms and history
//! ├── IntegrationsState   - Connections and running syncs
//! ├── AskPennyState       - Chat transcript and pending reply
//! ├── SecurityState       - Security switches and sessions
//! └── ToggleList          - Settings switches
//! ```

pub mod ask_penny;
pub mod bill_pay;
pub mod biller_search;
pub mod cross_border;
pub mod customers;
pub mod form;
pub mod integrations;
pub mod invoices;
pub mod list;
pub mod payment_setup;
pub mod security;
pub mod toggles;
pub mod transfers;

pub use ask_penny::AskPennyState;
pub use bill_pay::BillPayState;
pub use biller_search::BillerSearchState;
pub use cross_border::CrossBorderState;
pub use customers::CustomersState;
pub use integrations::IntegrationsState;
pub use invoices::InvoicesState;
pub use payment_setup::PaymentSetupState;
pub use security::SecurityState;
pub use toggles::ToggleList;
pub use transfers::TransfersState;
