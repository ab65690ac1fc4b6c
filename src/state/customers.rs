//! Customers page state.

use crate::data::Customer;
use crate::state::form::TextField;
use crate::state::list::ListCursor;

#[derive(Debug, Clone, Default)]
pub struct CustomersState {
    pub customers: Vec<Customer>,
    pub query: TextField,
    pub cursor: ListCursor,
}

impl CustomersState {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers,
            query: TextField::with_max_len(40),
            cursor: ListCursor::new(),
        }
    }

    /// Customers whose name, company or email contains the query.
    pub fn filtered(&self) -> Vec<&Customer> {
        let query = self.query.value.trim().to_lowercase();
        self.customers
            .iter()
            .filter(|c| {
                query.is_empty()
                    || c.name.to_lowercase().contains(&query)
                    || c.company.to_lowercase().contains(&query)
                    || c.email.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn selected(&self) -> Option<&Customer> {
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
