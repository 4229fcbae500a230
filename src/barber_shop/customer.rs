//! A customer is a single-shot admission request: it checks in once and never
//! retries. Its status is kept in a shared cell so the arrival driver and the
//! tests can observe the outcome after the fact.

use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerStatus {
    Pending,
    Waiting,
    Serving,
    Served,
    Rejected,
}

#[derive(Debug, Clone)]
pub struct Customer {
    id: usize,
    status: Arc<Mutex<CustomerStatus>>,
}

impl Customer {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            status: Arc::new(Mutex::new(CustomerStatus::Pending)),
        }
    }

    pub fn get_id(&self) -> usize {
        self.id
    }

    pub fn get_status(&self) -> CustomerStatus {
        *self.status.lock().unwrap()
    }

    // Transitions are owned by the waiting room and the barber; the cell is a
    // leaf lock, never held while taking another one.
    pub(crate) fn set_status(&self, status: CustomerStatus) {
        *self.status.lock().unwrap() = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_starts_pending() {
        let customer = Customer::new(7);
        assert_eq!(customer.get_id(), 7);
        assert_eq!(customer.get_status(), CustomerStatus::Pending);
    }

    #[test]
    fn test_clones_share_the_same_status_cell() {
        let customer = Customer::new(0);
        let record = customer.clone();
        customer.set_status(CustomerStatus::Waiting);
        assert_eq!(record.get_status(), CustomerStatus::Waiting);
    }
}
