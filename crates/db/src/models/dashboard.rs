//! View-ready dashboard projection of an event.

use serde::Serialize;

use crate::models::car::Car;
use crate::models::member::Member;

/// A car together with its riders and derived seat count.
#[derive(Debug, Clone, Serialize)]
pub struct CarWithMembers {
    #[serde(flatten)]
    pub car: Car,
    /// `max(0, capacity - riders)`, absent when capacity is unlimited.
    pub available_spots: Option<i64>,
    pub members: Vec<Member>,
}

/// The aggregated projection rendered by the event dashboard.
///
/// Cars are in display order (regular cars, then occupied motorcycles,
/// then empty ones; creation order within each group). Counts and the
/// ordering are recomputed on every read.
#[derive(Debug, Clone, Serialize)]
pub struct EventDashboard {
    pub cars: Vec<CarWithMembers>,
    pub unassigned_members: Vec<Member>,
    pub car_count: usize,
    pub motorcycle_count: usize,
}
