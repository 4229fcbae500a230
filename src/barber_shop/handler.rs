//! This module contains the logic for running a full day of the shop.
//! It builds the waiting room, spawns the barber thread and the arrival
//! driver, joins everything once the room has closed and drained, and
//! accounts for every customer's outcome.

use std::sync::Arc;
use std::thread;

use tracing::{error, info};

use crate::BarberShopError;

use super::{
    arrivals::ArrivalDriver,
    barber::Barber,
    config::ShopConfig,
    customer::{Customer, CustomerStatus},
    waiting_room::WaitingRoom,
};

#[derive(Debug, PartialEq, Eq)]
pub struct ShopSummary {
    pub served: usize,
    pub rejected: usize,
}

pub fn start(config: ShopConfig) -> Result<ShopSummary, BarberShopError> {
    let room = Arc::new(WaitingRoom::new(config.waiting_chairs));

    let barber = Barber::new(room.clone(), config.cut_policy.clone());
    let barber_handle = thread::spawn(move || barber.run());

    let driver = ArrivalDriver::new(
        room,
        config.total_customers,
        config.arrival_min,
        config.arrival_max,
    );
    let driver_handle = thread::spawn(move || driver.run());

    let records = driver_handle.join().map_err(|_| {
        BarberShopError::SystemError("Error joining arrival driver thread.".to_string())
    })?;
    barber_handle
        .join()
        .map_err(|_| BarberShopError::SystemError("Error joining barber thread.".to_string()))?;

    summarize(&records)
}

fn summarize(records: &[Customer]) -> Result<ShopSummary, BarberShopError> {
    let mut served = 0;
    let mut rejected = 0;
    for customer in records {
        match customer.get_status() {
            CustomerStatus::Served => served += 1,
            CustomerStatus::Rejected => rejected += 1,
            status => {
                error!(
                    "[BarberShop] Customer {} ended the day as {:?}.",
                    customer.get_id(),
                    status
                );
                return Err(BarberShopError::SystemError(format!(
                    "Customer {} ended the day in non-terminal state {:?}.",
                    customer.get_id(),
                    status
                )));
            }
        }
    }
    info!(
        "[BarberShop] Closing the day: {} customers served, {} walked away.",
        served, rejected
    );
    Ok(ShopSummary { served, rejected })
}
