//! Ask Penny assistant state.

use std::time::Duration;

use crate::async_task::{spawn_delayed, take_ready, PendingTask};
use crate::faq;
use crate::state::form::TextField;
use crate::state::list::ListCursor;

pub const GREETING: &str =
    "Hi, I'm Penny. Ask me anything about invoices, payments or your cash position.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Penny,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

#[derive(Debug)]
pub struct AskPennyState {
    pub messages: Vec<ChatMessage>,
    pub input: TextField,
    pub suggestions: Vec<&'static str>,
    pub suggestion_cursor: ListCursor,
    pub pending: Option<PendingTask<&'static str>>,
    delay: Duration,
}

impl AskPennyState {
    pub fn new(delay: Duration) -> Self {
        Self {
            messages: vec![ChatMessage {
                speaker: Speaker::Penny,
                text: GREETING.to_string(),
            }],
            input: TextField::with_max_len(200),
            suggestions: faq::suggestions().collect(),
            suggestion_cursor: ListCursor::new(),
            pending: None,
            delay,
        }
    }

    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    pub fn selected_suggestion(&self) -> Option<&'static str> {
        self.suggestions.get(self.suggestion_cursor.selected).copied()
    }

    /// Sends the typed question, or the highlighted suggestion when the input is empty.
    ///
    /// Returns `false` when there is nothing to send or an answer is still pending.
    pub fn ask(&mut self) -> bool {
        if self.is_thinking() {
            return false;
        }
        let question = if self.input.is_blank() {
            match self.selected_suggestion() {
                Some(s) => s.to_string(),
                None => return false,
            }
        } else {
            self.input.value.trim().to_string()
        };
        self.input.clear();

        tracing::debug!(%question, "assistant question");
        let lookup = question.clone();
        self.messages.push(ChatMessage {
            speaker: Speaker::User,
            text: question,
        });
        let reply = move || faq::answer(&lookup);
        self.pending = Some(spawn_delayed("assistant reply", self.delay, reply));
        true
    }

    pub fn tick(&mut self) -> Option<&ChatMessage> {
        let answer = take_ready(&mut self.pending)?;
        self.messages.push(ChatMessage {
            speaker: Speaker::Penny,
            text: answer.to_string(),
        });
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Instant;

    fn wait(s: &mut AskPennyState) {
        let start = Instant::now();
        while s.is_thinking() && start.elapsed() < Duration::from_secs(2) {
            s.tick();
            thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_starts_with_greeting() {
        let s = AskPennyState::new(Duration::ZERO);
        assert_eq!(s.messages.len(), 1);
        assert_eq!(s.messages[0].speaker, Speaker::Penny);
    }

    #[test]
    fn test_typed_question_gets_answer_after_delay() {
        let mut s = AskPennyState::new(Duration::from_millis(5));
        for c in "How do I pay a utility bill?".chars() {
            s.input.push(c);
        }
        assert!(s.ask());
        assert!(s.input.value.is_empty());
        assert_eq!(s.messages.len(), 2);
        wait(&mut s);
        assert_eq!(s.messages.len(), 3);
        assert_eq!(s.messages[2].speaker, Speaker::Penny);
        assert!(s.messages[2].text.contains("Bill Pay"));
    }

    #[test]
    fn test_empty_input_uses_suggestion() {
        let mut s = AskPennyState::new(Duration::from_secs(5));
        s.suggestion_cursor.navigate_down(s.suggestions.len());
        assert!(s.ask());
        assert_eq!(s.messages[1].text, s.suggestions[1]);
    }

    #[test]
    fn test_no_second_question_while_thinking() {
        let mut s = AskPennyState::new(Duration::from_secs(5));
        assert!(s.ask());
        assert!(!s.ask());
        assert_eq!(s.messages.len(), 2);
    }
}
