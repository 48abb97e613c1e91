use super::event::{Denial, DenialKind, Minute};
use serde::Serialize;
use std::collections::BTreeMap;

/// Billing record for one completed stay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub plate: String,
    pub minutes: u64,
    pub fee: u64,
    pub exited_at: Minute,
}

/// A vehicle still inside when the log ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Parked {
    pub since: Minute,
}

/// Outcome of a run. `errors` keeps log order and serializes as message strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub receipts: Vec<Receipt>,
    pub revenue: u64,
    /// Sorted by plate so that output is reproducible
    pub inside: BTreeMap<String, Parked>,
    pub errors: Vec<Denial>,
}

/// Counts shown in the report header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub events: usize,
    pub receipts: usize,
    pub paid: usize,
    pub still_inside: usize,
    pub revenue: u64,
    pub denials: Vec<(DenialKind, usize)>,
}

impl Summary {
    pub fn denied(&self) -> usize {
        self.denials.iter().map(|(_, n)| n).sum()
    }
}

impl Report {
    pub fn summary(&self) -> Summary {
        let denials = DenialKind::ALL
            .into_iter()
            .map(|kind| (kind, self.denial_count(kind)))
            .filter(|(_, n)| *n > 0)
            .collect::<Vec<_>>();
        let denied = self.errors.len();

        // Every event either enters, exits (one receipt) or is denied.
        let exits = self.receipts.len();
        let enters = exits + self.inside.len();

        Summary {
            events: enters + exits + denied,
            receipts: exits,
            paid: self.receipts.iter().filter(|r| r.fee > 0).count(),
            still_inside: self.inside.len(),
            revenue: self.revenue,
            denials,
        }
    }

    /// Number of rejected events of one kind
    pub fn denial_count(&self, kind: DenialKind) -> usize {
        self.errors.iter().filter(|d| d.kind() == kind).count()
    }
}
