use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use penny::data::{Currency, LineItem};
use penny::state::bill_pay::filter_payments;
use penny::state::cross_border::quote;
use penny::state::InvoicesState;
use penny::{faq, validation, Amount, BillPayment, FakeStore, Invoice, InvoiceStatus, PaymentStatus};
use uuid::Uuid;

/// Create N bill payments cycling through every status
fn create_payments(count: usize) -> Vec<BillPayment> {
    let due = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
    (0..count)
        .map(|i| BillPayment {
            id: Uuid::new_v4(),
            biller: format!("Biller {}", i),
            amount: Amount::from_cents(1_000 + i as i64),
            due_date: due,
            method: "Operating ••4821".to_string(),
            status: PaymentStatus::ALL[i % PaymentStatus::ALL.len()],
        })
        .collect()
}

/// Create N invoices with a couple of line items each
fn create_invoices(count: usize) -> Vec<Invoice> {
    let issued = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    (0..count)
        .map(|i| Invoice {
            id: Uuid::new_v4(),
            number: format!("INV-{}", 2000 + i),
            customer: format!("Customer {}", i % 50),
            issued,
            due: issued,
            status: InvoiceStatus::ALL[i % InvoiceStatus::ALL.len()],
            items: vec![
                LineItem {
                    description: "Consulting".to_string(),
                    quantity: 3,
                    unit_price: Amount::from_dollars(150),
                },
                LineItem {
                    description: "Hosting".to_string(),
                    quantity: 1,
                    unit_price: Amount::from_dollars(40),
                },
            ],
            activity: Vec::new(),
        })
        .collect()
}

/// Benchmark the bill pay status filter
fn bench_filter_payments(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_payments");

    for count in [10, 100, 1000].iter() {
        let payments = create_payments(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| filter_payments(black_box(&payments), Some(PaymentStatus::Scheduled)).len());
        });
    }

    group.finish();
}

/// Benchmark invoice tab counts with an active search
fn bench_invoice_tabs(c: &mut Criterion) {
    let mut group = c.benchmark_group("invoice_tab_labels");

    for count in [10, 100, 1000].iter() {
        let mut state = InvoicesState::new(create_invoices(*count));
        for ch in "customer 1".chars() {
            state.push_search(ch);
        }
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| black_box(state.tab_labels()));
        });
    }

    group.finish();
}

/// Benchmark the assistant keyword lookup
fn bench_faq_answer(c: &mut Criterion) {
    let questions = [
        "How do I schedule a bill payment?",
        "what are the fees for international transfers",
        "something completely unrelated",
    ];

    c.bench_function("faq_answer", |b| {
        b.iter(|| {
            for q in &questions {
                black_box(faq::answer(black_box(q)));
            }
        });
    });
}

/// Benchmark parsing user text and pricing a transfer
fn bench_quote(c: &mut Criterion) {
    c.bench_function("parse_and_quote", |b| {
        b.iter(|| {
            let send = validation::amount(black_box("$12,500.75")).unwrap_or(Amount::ZERO);
            black_box(quote(send, Currency::Inr))
        });
    });
}

/// Benchmark building the fixture store
fn bench_fake_store(c: &mut Criterion) {
    c.bench_function("fake_store_new", |b| {
        b.iter(|| black_box(FakeStore::new()).receivables());
    });
}

criterion_group!(
    benches,
    bench_filter_payments,
    bench_invoice_tabs,
    bench_faq_answer,
    bench_quote,
    bench_fake_store
);
criterion_main!(benches);
