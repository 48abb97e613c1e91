pub mod cli;
pub mod commands;
pub mod error;
pub mod input;
pub mod ledger;
pub mod output;
pub mod telemetry;

pub use error::{Error, Result};
pub use ledger::{
    Denial, Event, Outcome, ParkingLedger, Parked, RateSchedule, Receipt, Report, process_events,
};
