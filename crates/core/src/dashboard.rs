//! Dashboard display policy: car categorization, ordering, and counts.
//!
//! A car whose label is "motorcycle" (case-insensitive) is displayed in a
//! separate section, with occupied motorcycles ahead of empty ones. This
//! is a display convention recomputed from the live label and member count
//! on every read; nothing is stored.

/// The label that marks a car as a motorcycle.
pub const MOTORCYCLE_LABEL: &str = "motorcycle";

/// Display category of a car. The discriminant is the sort key: regular
/// cars first, then motorcycles with riders, then empty motorcycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CarCategory {
    Car = 0,
    MotorcycleWithRiders = 1,
    EmptyMotorcycle = 2,
}

/// Whether a car label names a motorcycle.
pub fn is_motorcycle(car_name: Option<&str>) -> bool {
    car_name.is_some_and(|name| name.eq_ignore_ascii_case(MOTORCYCLE_LABEL))
}

/// Classify a car from its label and current member count.
pub fn categorize(car_name: Option<&str>, member_count: usize) -> CarCategory {
    if !is_motorcycle(car_name) {
        CarCategory::Car
    } else if member_count > 0 {
        CarCategory::MotorcycleWithRiders
    } else {
        CarCategory::EmptyMotorcycle
    }
}

/// Display counts for an event's vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VehicleCounts {
    /// Number of regular cars.
    pub car_count: usize,
    /// Number of motorcycles, occupied or not.
    pub motorcycle_count: usize,
}

/// Tally categories into display counts.
pub fn vehicle_counts(categories: &[CarCategory]) -> VehicleCounts {
    let mut counts = VehicleCounts::default();
    for category in categories {
        match category {
            CarCategory::Car => counts.car_count += 1,
            CarCategory::MotorcycleWithRiders | CarCategory::EmptyMotorcycle => {
                counts.motorcycle_count += 1
            }
        }
    }
    counts
}

/// Order a car list for display: stable three-way sort by category, ties
/// kept in the input (creation) order. Returns indices into the input.
pub fn display_order(categories: &[CarCategory]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..categories.len()).collect();
    order.sort_by_key(|&i| categories[i]);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_match_is_case_insensitive() {
        assert!(is_motorcycle(Some("Motorcycle")));
        assert!(is_motorcycle(Some("MOTORCYCLE")));
        assert!(!is_motorcycle(Some("Motorcycle ")));
        assert!(!is_motorcycle(Some("Sedan")));
        assert!(!is_motorcycle(None));
    }

    #[test]
    fn categorize_regular_car() {
        assert_eq!(categorize(Some("Sedan"), 0), CarCategory::Car);
        assert_eq!(categorize(None, 3), CarCategory::Car);
        assert_eq!(categorize(Some(""), 0), CarCategory::Car);
    }

    #[test]
    fn categorize_motorcycles_by_occupancy() {
        assert_eq!(
            categorize(Some("motorcycle"), 1),
            CarCategory::MotorcycleWithRiders
        );
        assert_eq!(categorize(Some("motorcycle"), 0), CarCategory::EmptyMotorcycle);
    }

    #[test]
    fn ordering_matches_display_policy() {
        // A(Sedan), B(Motorcycle, empty), C(Motorcycle, 1 rider), D(no label)
        let categories = vec![
            categorize(Some("Sedan"), 0),
            categorize(Some("Motorcycle"), 0),
            categorize(Some("Motorcycle"), 1),
            categorize(Some(""), 0),
        ];
        // Expected display order: A, D, C, B.
        assert_eq!(display_order(&categories), vec![0, 3, 2, 1]);

        let counts = vehicle_counts(&categories);
        assert_eq!(counts.car_count, 2);
        assert_eq!(counts.motorcycle_count, 2);
    }

    #[test]
    fn sort_is_stable_within_category() {
        let categories = vec![
            CarCategory::EmptyMotorcycle,
            CarCategory::Car,
            CarCategory::Car,
            CarCategory::EmptyMotorcycle,
        ];
        assert_eq!(display_order(&categories), vec![1, 2, 0, 3]);
    }

    #[test]
    fn counts_empty_input() {
        assert_eq!(vehicle_counts(&[]), VehicleCounts::default());
    }
}
