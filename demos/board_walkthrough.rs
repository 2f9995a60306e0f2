//! Board Walkthrough
//!
//! This example drives the reference fleet the way the board screens do:
//! dragging a bus into maintenance (with and without a bay), searching the
//! all-facilities view, and saving an edit sheet.
//!
//! Run with: RUST_LOG=fleetboard=debug cargo run --example board_walkthrough

use fleetboard::config::FleetConfig;
use fleetboard::core::{Category, FacilityId, VehiclePatch};
use fleetboard::engine::{EditRequest, FleetError, MoveRequest};
use fleetboard::query::{search, status_breakdown};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Board Walkthrough ===\n");

    let mut store = FleetConfig::reference().into_store()?;
    let miller_se = FacilityId::new("Miller SE");

    // Step 1: drop a stored bus on the maintenance column without a bay
    println!("Step 1: Drag Bus 115 into Maintenance");
    let gesture = MoveRequest::new(
        miller_se.clone(),
        Category::Storage,
        Category::Maintenance,
        "bus-115",
    )
    .at(0);

    match store.move_vehicle(gesture.clone()) {
        Err(FleetError::Rejected(rejection)) => {
            println!("  Rejected: {} ({})", rejection, rejection.reason());
        }
        other => println!("  Unexpected: {other:?}"),
    }

    // Step 2: ask for a bay from the free ones and retry
    let free = store.available_bays(&miller_se, Some("bus-115"))?;
    println!("\nStep 2: Free bays at {}: {:?}", miller_se, free);
    if let Some(&bay) = free.first() {
        let outcome = store.move_vehicle(gesture.bay(i64::from(bay)))?;
        println!("  Moved: {outcome:?}");
    }

    // Step 3: search across every facility
    println!("\nStep 3: Search 'bay 1' across all facilities");
    let merged = store.merged_board(&store.facility_ids())?;
    for hit in search(&merged, "bay 1") {
        println!(
            "  {} at {} in {}",
            hit.vehicle.label,
            hit.facility,
            hit.category.label()
        );
    }

    // Step 4: save an edit sheet that also changes category
    println!("\nStep 4: Send Bus 105 back into service");
    let edit = EditRequest::new(
        miller_se.clone(),
        Category::Maintenance,
        Category::InService,
        "bus-105",
        VehiclePatch::new().notes("Brakes replaced"),
    );
    store.apply_edit(edit)?;

    let board = store.board(&miller_se)?;
    for segment in status_breakdown(board) {
        println!("  {:<22} {:>2} ({}%)", segment.label, segment.count, segment.pct);
    }

    println!("\n=== Walkthrough Complete ===");
    Ok(())
}
