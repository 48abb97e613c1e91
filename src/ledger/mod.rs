//! Occupancy tracking and billing for a capacity-bounded garage
//!
//! A run is a strict left-to-right fold over the event log. Every event
//! either changes the occupancy (an enter, or an exit that produces a
//! receipt) or is denied and recorded as a [`Denial`]. Nothing in a run
//! can fail as a whole.

mod event;
mod fee;
mod report;

pub use event::{Denial, DenialKind, Event, EventKind, Minute};
pub use fee::{MINUTES_PER_HOUR, RateSchedule};
pub use report::{Parked, Receipt, Report, Summary};

use std::collections::HashMap;
use tracing::{debug, info};

/// Result of applying a single event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Entered,
    Exited(Receipt),
    Denied(Denial),
}

/// Mutable state of one run
#[derive(Debug, Clone)]
pub struct ParkingLedger {
    capacity: usize,
    rates: RateSchedule,
    /// plate -> entry minute
    inside: HashMap<String, Minute>,
    revenue: u64,
    receipts: Vec<Receipt>,
    errors: Vec<Denial>,
}

impl ParkingLedger {
    pub fn new(capacity: usize, rates: RateSchedule) -> Self {
        ParkingLedger {
            capacity,
            rates,
            inside: HashMap::new(),
            revenue: 0,
            receipts: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn rates(&self) -> RateSchedule {
        self.rates
    }

    /// Number of vehicles currently inside
    pub fn occupancy(&self) -> usize {
        self.inside.len()
    }

    pub fn is_inside(&self, plate: &str) -> bool {
        self.inside.contains_key(plate)
    }

    pub fn revenue(&self) -> u64 {
        self.revenue
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    pub fn errors(&self) -> &[Denial] {
        &self.errors
    }

    /// Apply one event
    pub fn apply(&mut self, event: Event) -> Outcome {
        debug!(
            kind = %event.kind(),
            plate = event.plate(),
            timestamp = event.timestamp(),
            "event"
        );
        let outcome = match event {
            Event::Enter { plate, timestamp } => self.enter(plate, timestamp),
            Event::Exit { plate, timestamp } => self.exit(plate, timestamp),
        };

        match &outcome {
            Outcome::Entered => {}
            Outcome::Exited(receipt) => {
                debug!(
                    plate = %receipt.plate,
                    minutes = receipt.minutes,
                    fee = receipt.fee,
                    "exit billed"
                );
                self.revenue = self.revenue.saturating_add(receipt.fee);
                self.receipts.push(receipt.clone());
            }
            Outcome::Denied(denial) => {
                debug!(kind = denial.kind().as_str(), "{denial}");
                self.errors.push(denial.clone());
            }
        }

        outcome
    }

    fn enter(&mut self, plate: String, timestamp: Minute) -> Outcome {
        // Capacity is checked before duplicates
        if self.inside.len() >= self.capacity {
            return Outcome::Denied(Denial::CapacityFull { plate, timestamp });
        }
        if self.inside.contains_key(&plate) {
            return Outcome::Denied(Denial::AlreadyInside { plate, timestamp });
        }

        debug!(plate = %plate, timestamp, "entered");
        self.inside.insert(plate, timestamp);
        Outcome::Entered
    }

    fn exit(&mut self, plate: String, timestamp: Minute) -> Outcome {
        let Some(&since) = self.inside.get(&plate) else {
            return Outcome::Denied(Denial::NotInside { plate, timestamp });
        };
        if timestamp < since {
            return Outcome::Denied(Denial::BeforeEntry {
                plate,
                timestamp,
                since,
            });
        }

        self.inside.remove(&plate);
        let minutes = timestamp.abs_diff(since);
        Outcome::Exited(Receipt {
            fee: self.rates.fee_for(minutes),
            plate,
            minutes,
            exited_at: timestamp,
        })
    }

    /// Finish the run
    pub fn into_report(self) -> Report {
        Report {
            receipts: self.receipts,
            revenue: self.revenue,
            inside: self
                .inside
                .into_iter()
                .map(|(plate, since)| (plate, Parked { since }))
                .collect(),
            errors: self.errors,
        }
    }
}

/// Process a full event log against a fresh ledger
pub fn process_events<I>(capacity: usize, rates: RateSchedule, events: I) -> Report
where
    I: IntoIterator<Item = Event>,
{
    let mut ledger = ParkingLedger::new(capacity, rates);
    for event in events {
        ledger.apply(event);
    }

    let report = ledger.into_report();
    info!(
        receipts = report.receipts.len(),
        revenue = report.revenue,
        inside = report.inside.len(),
        errors = report.errors.len(),
        "ledger closed"
    );
    report
}
