//! Built-in reference fleet.

use super::{FleetBuilder, FleetConfig};
use crate::core::{Category, Vehicle};

fn bus(id: &str, label: &str, status: &str, last_service: &str, notes: &str) -> Vehicle {
    Vehicle::new(id, label, status)
        .with_last_service(last_service)
        .with_notes(notes)
}

impl FleetConfig {
    /// Six facilities with their bay sets and initial buses.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fleetboard::config::FleetConfig;
    ///
    /// let config = FleetConfig::reference();
    /// assert_eq!(config.facilities.len(), 6);
    /// assert_eq!(config.facilities[0].bays, vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn reference() -> Self {
        use Category::*;

        FleetBuilder::new()
            .facility("Miller BRT", "Miller BRT", vec![1, 2, 3, 4, 5])
            .facility("Miller SE", "Miller SE", vec![1, 2, 3])
            .facility("MOB1", "MOB1", vec![1, 2, 3, 4])
            .facility("MOB2", "MOB2", vec![1, 2])
            .facility("TOK North", "TOK North", vec![1, 2, 3])
            .facility("TOK West", "TOK West", vec![1, 2, 3, 4, 5, 6])
            // Miller BRT
            .vehicle(
                "Miller BRT",
                Maintenance,
                bus("bus-101", "Bus 101", "Under Repair", "2024-01-15", "Engine maintenance").with_bay(1),
            )
            .vehicle(
                "Miller BRT",
                Maintenance,
                bus("bus-102", "Bus 102", "Scheduled Maintenance", "2024-01-10", "Regular checkup").with_bay(2),
            )
            .vehicle(
                "Miller BRT",
                Maintenance,
                bus("bus-112", "Bus 112", "Inspection", "2024-01-09", "Safety check").with_bay(3),
            )
            .vehicle("Miller BRT", Storage, bus("bus-103", "Bus 103", "--", "--", "--"))
            .vehicle(
                "Miller BRT",
                Storage,
                bus("bus-111", "Bus 111", "Stored", "2023-12-22", "Lot A row 2"),
            )
            .vehicle("Miller BRT", InService, bus("bus-104", "Bus 104", "--", "--", "--"))
            .vehicle(
                "Miller BRT",
                LongTerm,
                bus("bus-113", "Bus 113", "Long-term Repair", "2023-11-20", "Awaiting parts").with_bay(4),
            )
            .vehicle(
                "Miller BRT",
                OutOfService,
                bus("bus-114", "Bus 114", "Decommissioned", "2023-10-01", "Do not dispatch"),
            )
            // Miller SE
            .vehicle(
                "Miller SE",
                Maintenance,
                bus("bus-105", "Bus 105", "Waiting Parts", "2024-01-05", "Brake replacement needed").with_bay(1),
            )
            .vehicle("Miller SE", Storage, bus("bus-115", "Bus 115", "Stored", "--", "--"))
            .vehicle("Miller SE", InService, bus("bus-106", "Bus 106", "--", "--", "--"))
            // MOB1
            .vehicle(
                "MOB1",
                Storage,
                bus("bus-107", "Bus 107", "Stored", "2023-12-22", "Lot B row 3"),
            )
            .vehicle(
                "MOB1",
                InService,
                bus("bus-108", "Bus 108", "On route", "2024-01-03", "Running normal"),
            )
            .vehicle(
                "MOB1",
                InService,
                bus("bus-116", "Bus 116", "On route", "2024-01-02", "Normal"),
            )
            // MOB2
            .vehicle("MOB2", Storage, bus("bus-109", "Bus 109", "--", "--", "--"))
            .vehicle(
                "MOB2",
                LongTerm,
                bus("bus-110", "Bus 110", "Body repair", "2023-11-20", "Waiting for parts").with_bay(1),
            )
            // TOK North
            .vehicle(
                "TOK North",
                Maintenance,
                bus("bus-201", "Bus 201", "Oil leak inspection", "2024-01-12", "Check engine area").with_bay(1),
            )
            .vehicle("TOK North", Storage, bus("bus-202", "Bus 202", "Stored", "--", "--"))
            // TOK West
            .vehicle(
                "TOK West",
                Maintenance,
                bus("bus-203", "Bus 203", "Brake replacement", "2024-01-08", "Front pads low").with_bay(1),
            )
            .vehicle(
                "TOK West",
                InService,
                bus("bus-204", "Bus 204", "Standby", "2024-01-06", "Ready for dispatch"),
            )
            .vehicle(
                "TOK West",
                LongTerm,
                bus("bus-205", "Bus 205", "Body repair", "2023-11-20", "Waiting for parts").with_bay(2),
            )
            .vehicle(
                "TOK West",
                OutOfService,
                bus("bus-206", "Bus 206", "Decommissioned", "2023-10-01", "Do not dispatch"),
            )
            .into_config()
    }
}
