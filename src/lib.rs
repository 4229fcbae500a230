//! Ferris Barber Shop is a simulation of the classic sleeping barber problem:
//! a single barber serves customers one at a time while a fixed row of waiting
//! chairs absorbs arrivals, and a customer who finds every chair taken walks
//! away immediately.
//!
//! The simulation runs one long-lived thread for the barber, one for the
//! arrival driver, and a short-lived thread per arriving customer. All of them
//! coordinate exclusively through the waiting room monitor; there is no other
//! shared mutable state.

pub mod barber_shop;

use std::{error::Error, fmt, time::Duration};

use tracing::{error, info, warn};

use barber_shop::config::{parse_millis_bounds, ServicePolicy, ShopConfig};
use barber_shop::constants::{
    DEFAULT_ARRIVAL_MAX_MS, DEFAULT_ARRIVAL_MIN_MS, DEFAULT_CUT_DURATION_MS,
    DEFAULT_TOTAL_CUSTOMERS, DEFAULT_WAITING_CHAIRS,
};
use barber_shop::handler;

#[derive(Debug)]
pub enum BarberShopError {
    ArgsParsingError(String),
    SystemError(String),
}

impl fmt::Display for BarberShopError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
impl Error for BarberShopError {}

fn init_logger() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::TRACE)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn parse_args() -> Result<ShopConfig, BarberShopError> {
    let mut args: Vec<String> = std::env::args().collect();
    args.remove(0);

    let mut waiting_chairs = DEFAULT_WAITING_CHAIRS;
    let mut total_customers = DEFAULT_TOTAL_CUSTOMERS;
    let mut cut_policy = ServicePolicy::Fixed(Duration::from_millis(DEFAULT_CUT_DURATION_MS));
    let mut arrival_bounds = (
        Duration::from_millis(DEFAULT_ARRIVAL_MIN_MS),
        Duration::from_millis(DEFAULT_ARRIVAL_MAX_MS),
    );

    if args.is_empty() {
        info!("[BarberShop] No arguments provided, using defaults: \n[WAITING CHAIRS: {}]  [CUSTOMERS: {}]  [CUT MS: {}]  [ARRIVAL MS: {}:{}]",
            DEFAULT_WAITING_CHAIRS, DEFAULT_TOTAL_CUSTOMERS, DEFAULT_CUT_DURATION_MS, DEFAULT_ARRIVAL_MIN_MS, DEFAULT_ARRIVAL_MAX_MS);
        return Ok(ShopConfig {
            waiting_chairs,
            total_customers,
            cut_policy,
            arrival_min: arrival_bounds.0,
            arrival_max: arrival_bounds.1,
        });
    }

    if args.len() % 2 != 0 {
        error!("[BarberShop] Invalid arguments");
        warn!("Usage: cargo run -- -c <waiting_chairs> -n <total_customers> -t <cut_ms|min_ms:max_ms> -a <min_ms:max_ms>");
        return Err(BarberShopError::ArgsParsingError(String::from(
            "Invalid argument.",
        )));
    }

    for arg in args.chunks_exact(2) {
        if arg[0] == "-c" {
            info!("[BarberShop] Waiting chairs given: {}", arg[1].to_owned());
            waiting_chairs = arg[1].parse::<usize>().map_err(|err| {
                error!("[BarberShop] Invalid number of waiting chairs: {}", err);
                BarberShopError::ArgsParsingError(String::from("Invalid number of waiting chairs"))
            })?;
            if waiting_chairs == 0 {
                error!(
                    "[BarberShop] Invalid number of waiting chairs: {}",
                    waiting_chairs
                );
                return Err(BarberShopError::ArgsParsingError(String::from(
                    "Invalid number of waiting chairs",
                )));
            }
        } else if arg[0] == "-n" {
            info!("[BarberShop] Total customers given: {}", arg[1].to_owned());
            total_customers = arg[1].parse::<usize>().map_err(|err| {
                error!("[BarberShop] Invalid number of customers: {}", err);
                BarberShopError::ArgsParsingError(String::from("Invalid number of customers"))
            })?;
        } else if arg[0] == "-t" {
            info!("[BarberShop] Cut duration given: {}", arg[1].to_owned());
            cut_policy = ServicePolicy::parse(&arg[1]).map_err(|err| {
                error!("[BarberShop] Invalid cut duration: {}", err);
                BarberShopError::ArgsParsingError(err)
            })?;
        } else if arg[0] == "-a" {
            info!("[BarberShop] Arrival bounds given: {}", arg[1].to_owned());
            arrival_bounds = parse_millis_bounds(&arg[1]).map_err(|err| {
                error!("[BarberShop] Invalid arrival bounds: {}", err);
                BarberShopError::ArgsParsingError(err)
            })?;
        } else {
            error!("[BarberShop] Invalid argument: {}", arg[0].to_owned());
            warn!(
                "Usage: cargo run -- -c <waiting_chairs> -n <total_customers> -t <cut_ms|min_ms:max_ms> -a <min_ms:max_ms>"
            );
            return Err(BarberShopError::ArgsParsingError(String::from(
                "Invalid argument.",
            )));
        }
    }

    Ok(ShopConfig {
        waiting_chairs,
        total_customers,
        cut_policy,
        arrival_min: arrival_bounds.0,
        arrival_max: arrival_bounds.1,
    })
}

pub fn run() -> Result<(), BarberShopError> {
    init_logger();
    let config = parse_args()?;
    handler::start(config)?;
    Ok(())
}
