//! Biller search modal state.

use crate::data::Biller;
use crate::state::form::TextField;
use crate::state::list::ListCursor;

#[derive(Debug, Clone, Default)]
pub struct BillerSearchState {
    pub billers: Vec<Biller>,
    pub query: TextField,
    pub cursor: ListCursor,
}

impl BillerSearchState {
    pub fn new(billers: Vec<Biller>) -> Self {
        Self {
            billers,
            query: TextField::with_max_len(40),
            cursor: ListCursor::new(),
        }
    }

    /// Clears the query and selection; called on every open.
    pub fn reset(&mut self) {
        self.query.clear();
        self.cursor.reset();
    }

    pub fn filtered(&self) -> Vec<&Biller> {
        let query = self.query.value.trim().to_lowercase();
        self.billers
            .iter()
            .filter(|b| {
                query.is_empty()
                    || b.name.to_lowercase().contains(&query)
                    || b.category.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn selected(&self) -> Option<&Biller> {
        self.filtered().get(self.cursor.selected).copied()
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.cursor.reset();
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.cursor.reset();
    }

    pub fn navigate_down(&mut self) -> bool {
        let len = self.filtered().len();
        self.cursor.navigate_down(len)
    }
}
