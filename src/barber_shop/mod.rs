pub mod arrivals;
pub mod barber;
pub mod config;
pub mod constants;
pub mod customer;
pub mod handler;
pub mod waiting_room;
