//! This module contains the `Barber`, the single worker of the shop.
//!
//! Its loop fetches the next waiting customer (sleeping in the waiting room
//! when there is none), cuts for the configured duration without holding the
//! room lock, and reports the customer as served. The loop ends when the room
//! says no more work will ever arrive.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use tracing::info;

use super::config::ServicePolicy;
use super::customer::CustomerStatus;
use super::waiting_room::{FetchOutcome, WaitingRoom};

#[derive(Debug)]
pub struct Barber {
    room: Arc<WaitingRoom>,
    cut_policy: ServicePolicy,
    busy: Arc<AtomicBool>,
}

impl Barber {
    pub fn new(room: Arc<WaitingRoom>, cut_policy: ServicePolicy) -> Self {
        info!("[Barber] Entered the shop.");
        Self {
            room,
            cut_policy,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// True exactly while a cut is in progress. Observability only, plays no
    /// part in the synchronization.
    pub fn get_busy_handle(&self) -> Arc<AtomicBool> {
        self.busy.clone()
    }

    pub fn run(&self) {
        let mut customers_served = 0;
        loop {
            match self.room.fetch_next() {
                FetchOutcome::Serve(customer) => {
                    self.busy.store(true, Ordering::Relaxed);
                    info!(
                        "[Barber] Cutting Customer {}'s hair. Available chairs: {}",
                        customer.get_id(),
                        self.room.get_available_chairs()
                    );
                    thread::sleep(self.cut_policy.next_duration());
                    customer.set_status(CustomerStatus::Served);
                    self.busy.store(false, Ordering::Relaxed);
                    info!(
                        "[Barber] Finished cutting Customer {}'s hair.",
                        customer.get_id()
                    );
                    customers_served += 1;
                }
                FetchOutcome::Stop => {
                    info!(
                        "[Barber] Shop is closed and nobody is waiting. Served {} customers. Leaving.",
                        customers_served
                    );
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use crate::barber_shop::customer::Customer;
    use crate::barber_shop::waiting_room::CheckIn;

    fn wait_for_status(customer: &Customer, expected: CustomerStatus) {
        for _ in 0..200 {
            if customer.get_status() == expected {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!(
            "customer {} never reached {:?}",
            customer.get_id(),
            expected
        );
    }

    #[test]
    fn test_barber_serves_sequential_customers_instantly() {
        let room = Arc::new(WaitingRoom::new(1));
        let barber = Barber::new(room.clone(), ServicePolicy::Fixed(Duration::ZERO));
        let barber_handle = thread::spawn(move || barber.run());

        let mut records = Vec::new();
        for id in 0..5 {
            let customer = Customer::new(id);
            records.push(customer.clone());
            assert!(matches!(
                room.check_in(customer),
                CheckIn::Accepted { .. }
            ));
            // Each customer is fully processed before the next one arrives.
            wait_for_status(&records[id], CustomerStatus::Served);
        }

        room.close();
        barber_handle.join().unwrap();
        assert!(records
            .iter()
            .all(|customer| customer.get_status() == CustomerStatus::Served));
    }

    #[test]
    fn test_barber_drains_a_closed_room_before_leaving() {
        let room = Arc::new(WaitingRoom::new(3));
        let records: Vec<Customer> = (0..3).map(Customer::new).collect();
        for customer in &records {
            room.check_in(customer.clone());
        }
        room.close();

        let barber = Barber::new(room.clone(), ServicePolicy::Fixed(Duration::ZERO));
        barber.run();

        assert_eq!(room.get_available_chairs(), 3);
        assert!(records
            .iter()
            .all(|customer| customer.get_status() == CustomerStatus::Served));
    }

    #[test]
    fn test_cancel_lets_the_current_cut_finish() {
        let room = Arc::new(WaitingRoom::new(2));
        let in_chair = Customer::new(0);
        let waiting = Customer::new(1);
        room.check_in(in_chair.clone());
        room.check_in(waiting.clone());

        let barber = Barber::new(room.clone(), ServicePolicy::Fixed(Duration::from_millis(150)));
        let busy = barber.get_busy_handle();
        let barber_handle = thread::spawn(move || barber.run());

        wait_for_status(&in_chair, CustomerStatus::Serving);
        for _ in 0..200 {
            if busy.load(Ordering::Relaxed) {
                break;
            }
            thread::sleep(Duration::from_millis(1));
        }
        assert!(busy.load(Ordering::Relaxed));

        room.cancel();
        barber_handle.join().unwrap();
        assert_eq!(in_chair.get_status(), CustomerStatus::Served);
        assert_eq!(waiting.get_status(), CustomerStatus::Rejected);
        assert!(!busy.load(Ordering::Relaxed));
    }
}
