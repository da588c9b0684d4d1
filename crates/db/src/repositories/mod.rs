//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Lookups of cars and
//! members are always scoped to an event: an id that exists under a
//! different event resolves to `None`.

pub mod car_repo;
pub mod dashboard_repo;
pub mod event_repo;
pub mod member_repo;

pub use car_repo::CarRepo;
pub use dashboard_repo::DashboardRepo;
pub use event_repo::EventRepo;
pub use member_repo::MemberRepo;
