//! Canned knowledge base behind the Ask Penny assistant.
//!
//! Questions are answered by keyword overlap: every entry scores one point per
//! keyword found as whole words in the lowercased question, and the
//! best-scoring entry wins. Ties go to the earlier entry.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub keywords: &'static [&'static str],
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FALLBACK_ANSWER: &str =
    "I'm not sure about that one yet. Try asking about invoices, bill pay, \
     transfers, cross-border payments, integrations, reports or security.";

pub const KNOWLEDGE_BASE: &[FaqEntry] = &[
    FaqEntry {
        keywords: &["invoice", "invoices", "bill customer", "overdue", "reminder"],
        question: "How do I follow up on an overdue invoice?",
        answer: "Open Invoices, switch to the Overdue tab and press Enter on the invoice to see \
                 its activity. Reminders are logged there alongside views and payments.",
    },
    FaqEntry {
        keywords: &["bill", "biller", "pay", "schedule", "utility"],
        question: "How do I schedule a bill payment?",
        answer: "Go to Bill Pay and press n. Search for the biller, enter the amount and date, \
                 pick a payment method and press Enter. The payment appears under Scheduled.",
    },
    FaqEntry {
        keywords: &["p2p", "phone", "friend", "send money", "a2a", "routing", "account"],
        question: "What's the difference between P2P and A2A?",
        answer: "P2P sends money to a phone number. A2A moves funds between bank accounts using \
                 a 9-digit routing number and an 8 to 12 digit account number.",
    },
    FaqEntry {
        keywords: &["international", "cross-border", "fx", "exchange", "currency", "wire"],
        question: "What does an international transfer cost?",
        answer: "Cross-border transfers cost 1% of the amount with a $2.99 minimum. The quote \
                 shows the rate, the fee and what the recipient gets before you send.",
    },
    FaqEntry {
        keywords: &["quickbooks", "xero", "integration", "sync", "connect", "stripe", "accounting"],
        question: "How do I sync my accounting software?",
        answer: "Open Integrations, select the app and press Enter to connect it. Press s on a \
                 connected app to run a sync now.",
    },
    FaqEntry {
        keywords: &["report", "profit", "loss", "cash flow", "aging"],
        question: "Where can I see profit and loss?",
        answer: "Reporting has Profit & Loss, Cash Flow and AR Aging tabs comparing this period \
                 with the previous one.",
    },
    FaqEntry {
        keywords: &["security", "2fa", "two-factor", "password", "session", "login"],
        question: "How do I turn on two-factor authentication?",
        answer: "Open Security and toggle Two-factor authentication. You can also review and \
                 revoke active sessions there.",
    },
    FaqEntry {
        keywords: &["cash", "balance", "runway", "revenue", "kpi"],
        question: "What's my current cash position?",
        answer: "The Dashboard shows your cash balance, outstanding receivables and scheduled \
                 bills, plus a twelve-month cash-flow trend.",
    },
];

/// Lowercases `question` into space-separated words with a space on each end,
/// so `" sync "` never matches inside `" async "`.
fn normalize(question: &str) -> String {
    let words: Vec<String> = question
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '-'))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    format!(" {} ", words.join(" "))
}

fn score(entry: &FaqEntry, question: &str) -> usize {
    entry
        .keywords
        .iter()
        .filter(|k| question.contains(&format!(" {} ", k)))
        .count()
}

/// Best matching entry for `question`, if any keyword matches.
pub fn best_match(question: &str) -> Option<&'static FaqEntry> {
    let question = normalize(question);
    let mut best: Option<(&'static FaqEntry, usize)> = None;
    for entry in KNOWLEDGE_BASE {
        let s = score(entry, &question);
        if s > 0 && best.is_none_or(|(_, top)| s > top) {
            best = Some((entry, s));
        }
    }
    best.map(|(entry, _)| entry)
}

pub fn answer(question: &str) -> &'static str {
    best_match(question).map_or(FALLBACK_ANSWER, |e| e.answer)
}

/// Questions offered as one-key suggestions.
pub fn suggestions() -> impl Iterator<Item = &'static str> {
    KNOWLEDGE_BASE.iter().map(|e| e.question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_by_keyword() {
        let entry = best_match("How much is an international wire?").unwrap();
        assert!(entry.answer.contains("1%"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(answer("QUICKBOOKS sync failing").contains("Integrations"));
    }

    #[test]
    fn test_more_keywords_wins() {
        let entry = best_match("send money by phone to a friend").unwrap();
        assert_eq!(entry.question, "What's the difference between P2P and A2A?");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(answer("what's the weather"), FALLBACK_ANSWER);
    }

    #[test]
    fn test_every_suggestion_answers_itself() {
        for question in suggestions() {
            assert_eq!(best_match(question).map(|e| e.question), Some(question));
        }
    }

    #[test]
    fn test_keywords_match_whole_words_only() {
        // "account" must not match inside "accounting"
        let entry = best_match("How do I sync my accounting software?").unwrap();
        assert!(entry.answer.contains("Integrations"));
        assert_eq!(answer("my accountant asked"), FALLBACK_ANSWER);
    }

    #[test]
    fn test_multi_word_keyword() {
        let entry = best_match("Show me the Cash Flow, please").unwrap();
        assert_eq!(entry.question, "Where can I see profit and loss?");
    }
}
