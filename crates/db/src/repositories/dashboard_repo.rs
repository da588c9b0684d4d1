//! Assembles the view-ready dashboard projection for an event.

use std::collections::HashMap;

use sqlx::PgPool;

use carpool_core::cars::available_spots;
use carpool_core::dashboard::{categorize, display_order, vehicle_counts};
use carpool_core::types::DbId;

use crate::models::dashboard::{CarWithMembers, EventDashboard};
use crate::models::member::Member;
use crate::repositories::{CarRepo, MemberRepo};

/// Builds the dashboard projection.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Aggregate an event's cars (with riders and derived seat counts),
    /// unassigned roster, display ordering, and category counts.
    pub async fn event_dashboard(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<EventDashboard, sqlx::Error> {
        let cars = CarRepo::list_by_event(pool, event_id).await?;
        let members = MemberRepo::list_by_event(pool, event_id).await?;

        let mut riders: HashMap<DbId, Vec<Member>> = HashMap::new();
        let mut unassigned_members = Vec::new();
        for member in members {
            match member.car_id {
                Some(car_id) => riders.entry(car_id).or_default().push(member),
                None => unassigned_members.push(member),
            }
        }

        let loaded: Vec<CarWithMembers> = cars
            .into_iter()
            .map(|car| {
                let members = riders.remove(&car.id).unwrap_or_default();
                let available_spots = available_spots(car.capacity, members.len() as i64);
                CarWithMembers {
                    car,
                    available_spots,
                    members,
                }
            })
            .collect();

        let categories: Vec<_> = loaded
            .iter()
            .map(|c| categorize(c.car.car_name.as_deref(), c.members.len()))
            .collect();
        let counts = vehicle_counts(&categories);

        // Reorder the loaded cars per the display policy; `loaded` and
        // `categories` share indexing, so place each car at its slot.
        let order = display_order(&categories);
        let mut slots: Vec<Option<CarWithMembers>> = loaded.into_iter().map(Some).collect();
        let cars = order
            .into_iter()
            .filter_map(|i| slots[i].take())
            .collect();

        Ok(EventDashboard {
            cars,
            unassigned_members,
            car_count: counts.car_count,
            motorcycle_count: counts.motorcycle_count,
        })
    }
}
