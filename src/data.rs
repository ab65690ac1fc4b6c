use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::status::{IntegrationStatus, InvoiceStatus, PaymentStatus};

/// Money in integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_cents(cents: i64) -> Self {
        Amount(cents)
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Amount(dollars * 100)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Share of this amount in basis points, rounded to the nearest cent.
    pub fn basis_points(self, bps: i64) -> Amount {
        Amount((self.0 * bps + 5_000) / 10_000)
    }

    /// Converts at `rate` units of the target currency per unit of this one.
    pub fn convert(self, rate: f64) -> Amount {
        Amount((self.0 as f64 * rate).round() as i64)
    }

    /// Plain two-decimal rendering without symbol or grouping, e.g. `1234.50`.
    pub fn plain(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, Add::add)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs = self.0.unsigned_abs();
        let dollars = (abs / 100).to_string();
        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, ch) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, grouped, abs % 100)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: Amount,
}

impl LineItem {
    pub fn total(&self) -> Amount {
        Amount::from_cents(self.unit_price.cents() * i64::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceEvent {
    pub date: NaiveDate,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: Uuid,
    pub number: String,
    pub customer: String,
    pub issued: NaiveDate,
    pub due: NaiveDate,
    pub status: InvoiceStatus,
    pub items: Vec<LineItem>,
    pub activity: Vec<InvoiceEvent>,
}

impl Invoice {
    pub fn amount(&self) -> Amount {
        self.items.iter().map(LineItem::total).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Biller {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub account_hint: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethodKind {
    Ach,
    Card,
    Wire,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMethod {
    pub label: String,
    pub kind: PaymentMethodKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillPayment {
    pub id: Uuid,
    pub biller: String,
    pub amount: Amount,
    pub due_date: NaiveDate,
    pub method: String,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    P2P,
    A2A,
}

impl TransferKind {
    pub fn label(self) -> &'static str {
        match self {
            TransferKind::P2P => "P2P",
            TransferKind::A2A => "A2A",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransferKind,
    pub counterparty: String,
    pub amount: Amount,
    pub note: String,
    pub created: NaiveDateTime,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Inr,
    Mxn,
    Cad,
    Jpy,
}

impl Currency {
    /// Destinations offered by the cross-border form, in display order.
    pub const DESTINATIONS: [Currency; 6] = [
        Currency::Eur,
        Currency::Gbp,
        Currency::Inr,
        Currency::Mxn,
        Currency::Cad,
        Currency::Jpy,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Inr => "INR",
            Currency::Mxn => "MXN",
            Currency::Cad => "CAD",
            Currency::Jpy => "JPY",
        }
    }

    pub fn country(self) -> &'static str {
        match self {
            Currency::Usd => "United States",
            Currency::Eur => "Eurozone",
            Currency::Gbp => "United Kingdom",
            Currency::Inr => "India",
            Currency::Mxn => "Mexico",
            Currency::Cad => "Canada",
            Currency::Jpy => "Japan",
        }
    }

    /// Units of this currency per US dollar.
    pub fn usd_rate(self) -> f64 {
        match self {
            Currency::Usd => 1.0,
            Currency::Eur => 0.92,
            Currency::Gbp => 0.79,
            Currency::Inr => 83.12,
            Currency::Mxn => 17.05,
            Currency::Cad => 1.36,
            Currency::Jpy => 149.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrossBorderTransfer {
    pub id: Uuid,
    pub recipient: String,
    pub currency: Currency,
    pub send_amount: Amount,
    pub fee: Amount,
    pub receive_amount: Amount,
    pub created: NaiveDateTime,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Integration {
    pub name: String,
    pub category: String,
    pub description: String,
    pub status: IntegrationStatus,
    pub last_synced: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    ProfitAndLoss,
    CashFlow,
    ArAging,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::ProfitAndLoss,
        ReportKind::CashFlow,
        ReportKind::ArAging,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::ProfitAndLoss => "Profit & Loss",
            ReportKind::CashFlow => "Cash Flow",
            ReportKind::ArAging => "AR Aging",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: &'static str,
    pub current: Amount,
    pub previous: Amount,
}

impl ReportRow {
    /// Change from `previous` to `current` in percent, `None` when there is no base.
    pub fn change_percent(&self) -> Option<f64> {
        if self.previous.cents() == 0 {
            return None;
        }
        let delta = (self.current.cents() - self.previous.cents()) as f64;
        Some(delta / self.previous.cents().abs() as f64 * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: Uuid,
    pub device: String,
    pub location: String,
    pub last_active: String,
    pub current: bool,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap_or_default()
}

fn item(description: &str, quantity: u32, dollars: i64) -> LineItem {
    LineItem {
        description: description.into(),
        quantity,
        unit_price: Amount::from_dollars(dollars),
    }
}

fn event(d: NaiveDate, description: &str) -> InvoiceEvent {
    InvoiceEvent {
        date: d,
        description: description.into(),
    }
}

/// In-memory fixture data backing every page.
#[derive(Debug, Clone, Default)]
pub struct FakeStore {
    pub invoices: Vec<Invoice>,
    pub customers: Vec<Customer>,
    pub bill_payments: Vec<BillPayment>,
    pub billers: Vec<Biller>,
    pub payment_methods: Vec<PaymentMethod>,
    pub transactions: Vec<Transaction>,
    pub transfers: Vec<CrossBorderTransfer>,
    pub integrations: Vec<Integration>,
    pub sessions: Vec<Session>,
    pub cash_balance: Amount,
    /// Net cash flow per month, oldest first, in whole dollars.
    pub cash_flow: Vec<u64>,
}

impl FakeStore {
    pub fn new() -> Self {
        let customers = vec![
            customer("Acme Corporation", "Acme Corp", "billing@acme.example", "+1 (415) 555-0142"),
            customer("Globex LLC", "Globex", "ap@globex.example", "+1 (212) 555-0199"),
            customer("Initech", "Initech Inc.", "finance@initech.example", "+1 (512) 555-0108"),
            customer(
                "Umbrella Health",
                "Umbrella Group",
                "payables@umbrella.example",
                "+1 (617) 555-0175",
            ),
            customer(
                "Stark Studio",
                "Stark Creative",
                "hello@starkstudio.example",
                "+1 (310) 555-0123",
            ),
        ];

        let invoices = vec![
            Invoice {
                id: Uuid::new_v4(),
                number: "INV-1042".into(),
                customer: "Acme Corporation".into(),
                issued: date(2026, 9, 1),
                due: date(2026, 10, 1),
                status: InvoiceStatus::Overdue,
                items: vec![item("Platform subscription", 1, 4_800), item("Onboarding", 6, 150)],
                activity: vec![
                    event(date(2026, 9, 1), "Invoice created"),
                    event(date(2026, 9, 1), "Sent to billing@acme.example"),
                    event(date(2026, 9, 3), "Viewed by customer"),
                    event(date(2026, 10, 2), "Marked overdue"),
                    event(date(2026, 10, 5), "Reminder sent"),
                ],
            },
            Invoice {
                id: Uuid::new_v4(),
                number: "INV-1043".into(),
                customer: "Globex LLC".into(),
                issued: date(2026, 9, 10),
                due: date(2026, 10, 10),
                status: InvoiceStatus::Paid,
                items: vec![item("Consulting hours", 32, 175)],
                activity: vec![
                    event(date(2026, 9, 10), "Invoice created"),
                    event(date(2026, 9, 10), "Sent to ap@globex.example"),
                    event(date(2026, 9, 22), "Payment received via ACH"),
                ],
            },
            Invoice {
                id: Uuid::new_v4(),
                number: "INV-1044".into(),
                customer: "Initech".into(),
                issued: date(2026, 9, 18),
                due: date(2026, 10, 18),
                status: InvoiceStatus::Viewed,
                items: vec![item("Annual license", 1, 12_000), item("Priority support", 1, 2_400)],
                activity: vec![
                    event(date(2026, 9, 18), "Invoice created"),
                    event(date(2026, 9, 18), "Sent to finance@initech.example"),
                    event(date(2026, 9, 25), "Viewed by customer"),
                ],
            },
            Invoice {
                id: Uuid::new_v4(),
                number: "INV-1045".into(),
                customer: "Umbrella Health".into(),
                issued: date(2026, 10, 2),
                due: date(2026, 11, 1),
                status: InvoiceStatus::Sent,
                items: vec![item("Data migration", 1, 6_500), item("Training seats", 20, 90)],
                activity: vec![
                    event(date(2026, 10, 2), "Invoice created"),
                    event(date(2026, 10, 2), "Sent to payables@umbrella.example"),
                ],
            },
            Invoice {
                id: Uuid::new_v4(),
                number: "INV-1046".into(),
                customer: "Stark Studio".into(),
                issued: date(2026, 10, 9),
                due: date(2026, 11, 8),
                status: InvoiceStatus::Draft,
                items: vec![item("Brand refresh", 1, 3_200)],
                activity: vec![event(date(2026, 10, 9), "Draft saved")],
            },
            Invoice {
                id: Uuid::new_v4(),
                number: "INV-1047".into(),
                customer: "Acme Corporation".into(),
                issued: date(2026, 10, 12),
                due: date(2026, 11, 11),
                status: InvoiceStatus::Sent,
                items: vec![item("Usage overage", 1_200, 2)],
                activity: vec![
                    event(date(2026, 10, 12), "Invoice created"),
                    event(date(2026, 10, 12), "Sent to billing@acme.example"),
                ],
            },
        ];

        let billers = vec![
            biller("Pacific Gas & Electric", "Utilities", "••2291"),
            biller("Comcast Business", "Internet", "••7710"),
            biller("WeWork", "Rent", "••0042"),
            biller("Amazon Web Services", "Cloud", "••5583"),
            biller("Gusto", "Payroll", "••1120"),
            biller("State Farm", "Insurance", "••6604"),
            biller("Verizon Wireless", "Telecom", "••3391"),
            biller("Staples", "Office Supplies", "••8450"),
        ];

        let payment_methods = vec![
            PaymentMethod {
                label: "Operating Checking ••4521".into(),
                kind: PaymentMethodKind::Ach,
            },
            PaymentMethod {
                label: "Business Visa ••8890".into(),
                kind: PaymentMethodKind::Card,
            },
            PaymentMethod {
                label: "Reserve Account ••1307 (wire)".into(),
                kind: PaymentMethodKind::Wire,
            },
        ];

        let bill_payments = vec![
            bill(
                "Pacific Gas & Electric",
                842_17,
                date(2026, 10, 20),
                "Operating Checking ••4521",
                PaymentStatus::Scheduled,
            ),
            bill(
                "Comcast Business",
                249_99,
                date(2026, 10, 22),
                "Business Visa ••8890",
                PaymentStatus::Scheduled,
            ),
            bill(
                "WeWork",
                6_500_00,
                date(2026, 10, 1),
                "Operating Checking ••4521",
                PaymentStatus::Paid,
            ),
            bill(
                "Amazon Web Services",
                3_184_52,
                date(2026, 10, 15),
                "Business Visa ••8890",
                PaymentStatus::Pending,
            ),
            bill(
                "Gusto",
                48_210_00,
                date(2026, 10, 15),
                "Reserve Account ••1307 (wire)",
                PaymentStatus::Paid,
            ),
            bill(
                "State Farm",
                1_120_00,
                date(2026, 10, 8),
                "Operating Checking ••4521",
                PaymentStatus::Failed,
            ),
            bill(
                "Verizon Wireless",
                318_40,
                date(2026, 10, 28),
                "Business Visa ••8890",
                PaymentStatus::Scheduled,
            ),
        ];

        let transactions = vec![
            transaction(
                TransferKind::P2P,
                "+1 (415) 555-0187",
                45_00,
                "Team lunch",
                datetime(2026, 10, 14, 12, 30),
            ),
            transaction(
                TransferKind::A2A,
                "Chase ••9921",
                2_500_00,
                "Reserve top-up",
                datetime(2026, 10, 13, 9, 5),
            ),
            transaction(
                TransferKind::P2P,
                "+1 (646) 555-0134",
                120_00,
                "Contractor tip",
                datetime(2026, 10, 11, 17, 45),
            ),
            transaction(
                TransferKind::A2A,
                "Wells Fargo ••3310",
                10_000_00,
                "Payroll funding",
                datetime(2026, 10, 9, 8, 0),
            ),
        ];

        let transfers = vec![
            CrossBorderTransfer {
                id: Uuid::new_v4(),
                recipient: "Lena Fischer".into(),
                currency: Currency::Eur,
                send_amount: Amount::from_dollars(1_500),
                fee: Amount::from_dollars(15),
                receive_amount: Amount::from_dollars(1_485).convert(Currency::Eur.usd_rate()),
                created: datetime(2026, 10, 10, 14, 20),
                status: PaymentStatus::Completed,
            },
            CrossBorderTransfer {
                id: Uuid::new_v4(),
                recipient: "Arjun Mehta".into(),
                currency: Currency::Inr,
                send_amount: Amount::from_dollars(800),
                fee: Amount::from_dollars(8),
                receive_amount: Amount::from_dollars(792).convert(Currency::Inr.usd_rate()),
                created: datetime(2026, 10, 12, 10, 0),
                status: PaymentStatus::Pending,
            },
        ];

        let integrations = vec![
            integration(
                "QuickBooks Online",
                "Accounting",
                "Sync invoices, bills and chart of accounts",
                IntegrationStatus::Connected,
                Some(datetime(2026, 10, 15, 23, 0)),
            ),
            integration(
                "Xero",
                "Accounting",
                "Two-way ledger sync",
                IntegrationStatus::Disconnected,
                None,
            ),
            integration(
                "Stripe",
                "Payments",
                "Import card payouts and fees",
                IntegrationStatus::Connected,
                Some(datetime(2026, 10, 16, 6, 30)),
            ),
            integration(
                "Plaid",
                "Banking",
                "Link external bank accounts",
                IntegrationStatus::Error,
                Some(datetime(2026, 10, 2, 11, 15)),
            ),
            integration(
                "Salesforce",
                "CRM",
                "Create invoices from closed deals",
                IntegrationStatus::Disconnected,
                None,
            ),
            integration(
                "Shopify",
                "Commerce",
                "Reconcile store orders",
                IntegrationStatus::Connected,
                Some(datetime(2026, 10, 16, 4, 45)),
            ),
        ];

        let sessions = vec![
            session("MacBook Pro · Chrome", "San Francisco, US", "Active now", true),
            session("iPhone 15 · Penny app", "San Francisco, US", "2 hours ago", false),
            session("Windows PC · Edge", "Austin, US", "3 days ago", false),
        ];

        Self {
            invoices,
            customers,
            bill_payments,
            billers,
            payment_methods,
            transactions,
            transfers,
            integrations,
            sessions,
            cash_balance: Amount::from_cents(184_326_45),
            cash_flow: vec![
                42_000, 38_500, 45_200, 51_000, 47_800, 53_400, 49_900, 56_100, 58_700, 54_300,
                61_200, 64_800,
            ],
        }
    }

    pub fn invoices_for<'a>(&'a self, customer: &'a str) -> impl Iterator<Item = &'a Invoice> + 'a {
        self.invoices.iter().filter(move |i| i.customer == customer)
    }

    /// Total of invoices still awaiting payment.
    pub fn receivables(&self) -> Amount {
        self.invoices
            .iter()
            .filter(|i| i.status.is_open())
            .map(Invoice::amount)
            .sum()
    }

    pub fn overdue_count(&self) -> usize {
        self.invoices
            .iter()
            .filter(|i| i.status == InvoiceStatus::Overdue)
            .count()
    }

    pub fn scheduled_bills(&self) -> Amount {
        self.bill_payments
            .iter()
            .filter(|b| b.status == PaymentStatus::Scheduled)
            .map(|b| b.amount)
            .sum()
    }

    pub fn report(&self, kind: ReportKind) -> Vec<ReportRow> {
        let row = |label, current: i64, previous: i64| ReportRow {
            label,
            current: Amount::from_dollars(current),
            previous: Amount::from_dollars(previous),
        };
        match kind {
            ReportKind::ProfitAndLoss => vec![
                row("Revenue", 248_600, 231_900),
                row("Cost of revenue", 61_300, 58_800),
                row("Gross profit", 187_300, 173_100),
                row("Operating expenses", 132_450, 128_900),
                row("Net income", 54_850, 44_200),
            ],
            ReportKind::CashFlow => vec![
                row("Cash from operations", 71_200, 63_400),
                row("Cash from investing", -18_000, -6_500),
                row("Cash from financing", 0, 25_000),
                row("Net change in cash", 53_200, 81_900),
                row("Ending cash", 184_326, 131_126),
            ],
            ReportKind::ArAging => vec![
                row("Current", 31_380, 28_400),
                row("1–30 days", 5_700, 9_150),
                row("31–60 days", 0, 2_300),
                row("61–90 days", 0, 0),
                row("Over 90 days", 0, 1_200),
            ],
        }
    }
}

fn customer(name: &str, company: &str, email: &str, phone: &str) -> Customer {
    Customer {
        id: Uuid::new_v4(),
        name: name.into(),
        company: company.into(),
        email: email.into(),
        phone: phone.into(),
    }
}

fn biller(name: &str, category: &str, account_hint: &str) -> Biller {
    Biller {
        id: Uuid::new_v4(),
        name: name.into(),
        category: category.into(),
        account_hint: account_hint.into(),
    }
}

fn bill(
    biller: &str,
    cents: i64,
    due_date: NaiveDate,
    method: &str,
    status: PaymentStatus,
) -> BillPayment {
    BillPayment {
        id: Uuid::new_v4(),
        biller: biller.into(),
        amount: Amount::from_cents(cents),
        due_date,
        method: method.into(),
        status,
    }
}

fn transaction(
    kind: TransferKind,
    counterparty: &str,
    cents: i64,
    note: &str,
    created: NaiveDateTime,
) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        kind,
        counterparty: counterparty.into(),
        amount: Amount::from_cents(cents),
        note: note.into(),
        created,
        status: PaymentStatus::Completed,
    }
}

fn integration(
    name: &str,
    category: &str,
    description: &str,
    status: IntegrationStatus,
    last_synced: Option<NaiveDateTime>,
) -> Integration {
    Integration {
        name: name.into(),
        category: category.into(),
        description: description.into(),
        status,
        last_synced,
    }
}

fn session(device: &str, location: &str, last_active: &str, current: bool) -> Session {
    Session {
        id: Uuid::new_v4(),
        device: device.into(),
        location: location.into(),
        last_active: last_active.into(),
        current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_display_groups_thousands() {
        assert_eq!(Amount::from_cents(123_456_78).to_string(), "$123,456.78");
        assert_eq!(Amount::from_cents(5).to_string(), "$0.05");
        assert_eq!(Amount::from_cents(-1_000_00).to_string(), "-$1,000.00");
    }

    #[test]
    fn test_amount_plain() {
        assert_eq!(Amount::from_cents(2_500).plain(), "25.00");
    }

    #[test]
    fn test_basis_points_rounds() {
        assert_eq!(Amount::from_dollars(100).basis_points(100), Amount::from_dollars(1));
        assert_eq!(Amount::from_cents(250).basis_points(100), Amount::from_cents(3));
    }

    #[test]
    fn test_invoice_amount_sums_items() {
        let store = FakeStore::new();
        let inv = &store.invoices[0];
        assert_eq!(inv.amount(), Amount::from_dollars(4_800 + 6 * 150));
    }

    #[test]
    fn test_receivables_skip_paid_and_draft() {
        let store = FakeStore::new();
        let expected: Amount = store
            .invoices
            .iter()
            .filter(|i| !matches!(i.status, InvoiceStatus::Paid | InvoiceStatus::Draft))
            .map(Invoice::amount)
            .sum();
        assert_eq!(store.receivables(), expected);
        assert!(store.receivables().is_positive());
    }

    #[test]
    fn test_invoices_for_customer() {
        let store = FakeStore::new();
        assert_eq!(store.invoices_for("Acme Corporation").count(), 2);
        assert_eq!(store.invoices_for("Nobody").count(), 0);
    }

    #[test]
    fn test_report_change_percent() {
        let row = ReportRow {
            label: "Revenue",
            current: Amount::from_dollars(110),
            previous: Amount::from_dollars(100),
        };
        let change = row.change_percent().unwrap();
        assert!((change - 10.0).abs() < f64::EPSILON);

        let zero = ReportRow {
            label: "None",
            current: Amount::from_dollars(5),
            previous: Amount::ZERO,
        };
        assert!(zero.change_percent().is_none());
    }
}
