//! This module contains the `WaitingRoom` monitor.
//!
//! It owns the FIFO queue of waiting customers and the closed flag, all under
//! a single mutex paired with a single condvar. Customers check in without
//! ever blocking (a full room turns them away on the spot), the barber blocks
//! in `fetch_next` until there is work or the shop has closed, and `close`
//! lets the queue drain while `cancel` sends everyone still waiting home.

use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};

use tracing::info;

use super::customer::{Customer, CustomerStatus};

#[derive(Debug)]
pub enum CheckIn {
    Accepted { chairs_left: usize },
    Rejected,
}

#[derive(Debug)]
pub enum FetchOutcome {
    Serve(Customer),
    Stop,
}

#[derive(Debug)]
struct RoomState {
    queue: VecDeque<Customer>,
    closed: bool,
}

#[derive(Debug)]
pub struct WaitingRoom {
    capacity: usize,
    state: Mutex<RoomState>,
    customer_arrived: Condvar,
}

impl WaitingRoom {
    /// `capacity` is the number of waiting chairs, excluding the barber
    /// chair itself. Callers validate that it is at least 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(RoomState {
                queue: VecDeque::with_capacity(capacity),
                closed: false,
            }),
            customer_arrived: Condvar::new(),
        }
    }

    /// Never blocks. A customer finding the shop closed or every chair taken
    /// is rejected immediately and does not come back.
    pub fn check_in(&self, customer: Customer) -> CheckIn {
        let mut state = self.state.lock().unwrap();
        if state.closed {
            info!(
                "[WaitingRoom] Shop is closed. Customer {} leaves.",
                customer.get_id()
            );
            customer.set_status(CustomerStatus::Rejected);
            return CheckIn::Rejected;
        }
        if state.queue.len() == self.capacity {
            info!(
                "[WaitingRoom] No available chairs. Customer {} leaves.",
                customer.get_id()
            );
            customer.set_status(CustomerStatus::Rejected);
            return CheckIn::Rejected;
        }

        customer.set_status(CustomerStatus::Waiting);
        let id = customer.get_id();
        state.queue.push_back(customer);
        let chairs_left = self.capacity - state.queue.len();
        info!(
            "[WaitingRoom] Customer {} is waiting. Available chairs: {}",
            id, chairs_left
        );
        // One accepted customer wakes the one barber. Signalled while the
        // lock is held, so the wakeup cannot be lost.
        self.customer_arrived.notify_one();
        CheckIn::Accepted { chairs_left }
    }

    /// Blocks while the queue is empty and the shop is still open. Returns
    /// `Stop` once the shop is closed and the queue has drained; every call
    /// after that returns `Stop` as well.
    pub fn fetch_next(&self) -> FetchOutcome {
        let mut state = self.state.lock().unwrap();
        if state.queue.is_empty() && !state.closed {
            info!("[Barber] No customers around. Going to sleep.");
            state = self
                .customer_arrived
                .wait_while(state, |state| state.queue.is_empty() && !state.closed)
                .unwrap();
            info!("[Barber] Waking up.");
        }
        match state.queue.pop_front() {
            Some(customer) => {
                customer.set_status(CustomerStatus::Serving);
                FetchOutcome::Serve(customer)
            }
            None => FetchOutcome::Stop,
        }
    }

    /// Closes the shop for new arrivals. Customers already waiting are still
    /// served. Idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock().unwrap();
        if !state.closed {
            state.closed = true;
            info!("[WaitingRoom] Shop is closing. No new customers will be admitted.");
        }
        self.customer_arrived.notify_all();
    }

    /// Hard shutdown: closes the shop and sends everyone still waiting home
    /// as `Rejected`. A customer already in the barber chair is unaffected;
    /// the barber finishes that cut before observing the shutdown.
    pub fn cancel(&self) {
        let mut state = self.state.lock().unwrap();
        state.closed = true;
        for customer in state.queue.drain(..) {
            info!(
                "[WaitingRoom] Shutting down. Customer {} is sent away.",
                customer.get_id()
            );
            customer.set_status(CustomerStatus::Rejected);
        }
        self.customer_arrived.notify_all();
    }

    pub fn get_capacity(&self) -> usize {
        self.capacity
    }

    pub fn get_available_chairs(&self) -> usize {
        let state = self.state.lock().unwrap();
        self.capacity - state.queue.len()
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().unwrap().closed
    }
}
