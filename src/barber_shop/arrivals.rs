//! This module contains the `ArrivalDriver`.
//!
//! It produces the day's customers: one short-lived thread per arrival, a
//! bounded-random pause between arrivals, and exactly one `close()` on the
//! waiting room once the last customer has come through the door.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::{thread_rng, Rng};
use tracing::{info, warn};

use super::customer::Customer;
use super::waiting_room::WaitingRoom;

#[derive(Debug)]
pub struct ArrivalDriver {
    room: Arc<WaitingRoom>,
    total_customers: usize,
    arrival_min: Duration,
    arrival_max: Duration,
}

impl ArrivalDriver {
    pub fn new(
        room: Arc<WaitingRoom>,
        total_customers: usize,
        arrival_min: Duration,
        arrival_max: Duration,
    ) -> Self {
        Self {
            room,
            total_customers,
            arrival_min,
            arrival_max,
        }
    }

    /// Spawns every arrival, joins them, closes the room, and returns the
    /// customer records so the caller can account for every outcome.
    pub fn run(&self) -> Vec<Customer> {
        let mut records = Vec::with_capacity(self.total_customers);
        let mut arrival_handles = Vec::with_capacity(self.total_customers);

        for id in 0..self.total_customers {
            let customer = Customer::new(id);
            records.push(customer.clone());

            let room = self.room.clone();
            arrival_handles.push(thread::spawn(move || {
                info!("[Customer {}] Enters the shop.", customer.get_id());
                room.check_in(customer);
            }));

            if id + 1 < self.total_customers {
                thread::sleep(self.next_arrival_gap());
            }
        }

        for handle in arrival_handles {
            if handle.join().is_err() {
                warn!("[ArrivalDriver] A customer thread panicked before checking in.");
            }
        }

        info!("[ArrivalDriver] No more customers will arrive today.");
        self.room.close();
        records
    }

    fn next_arrival_gap(&self) -> Duration {
        let min = self.arrival_min.as_millis() as u64;
        let max = self.arrival_max.as_millis() as u64;
        Duration::from_millis(thread_rng().gen_range(min..=max))
    }
}
