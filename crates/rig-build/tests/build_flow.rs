//! End-to-end flows: selection, filtering, quoting and saved builds.

use rig_build::prelude::*;

fn part(id: &str, slot: SlotKind, name: &str, cents: i64) -> Part {
    Part::new(id, slot, name, "Brand", Money::new(cents, Currency::USD))
}

fn showroom_catalog() -> InMemoryCatalog {
    InMemoryCatalog::with_parts(vec![
        part("cpu-7600", SlotKind::Cpu, "Ryzen 5 7600", 5_000_000).with_socket("AM5"),
        part("cpu-13600", SlotKind::Cpu, "Core i5-13600K", 5_500_000).with_socket("LGA1700"),
        part("mb-b650", SlotKind::Motherboard, "B650 Tomahawk", 3_000_000)
            .with_socket("AM5")
            .with_ram_type("DDR5"),
        part("mb-z790", SlotKind::Motherboard, "Z790 Aorus", 4_000_000)
            .with_socket("LGA1700")
            .with_ram_type("DDR5"),
        part("ram-ddr5", SlotKind::Ram, "Vengeance 32GB DDR5", 2_000_000).with_ram_type("DDR5"),
        part("ram-ddr4", SlotKind::Ram, "Vengeance 16GB DDR4", 1_000_000).with_ram_type("DDR4"),
        part("gpu-4070", SlotKind::Gpu, "RTX 4070", 15_000_000),
        part("cool-uni", SlotKind::Cooling, "Hyper 212", 800_000).with_socket("Universal"),
        part("cool-lga", SlotKind::Cooling, "NH-U12A LGA", 1_500_000).with_socket("LGA1700"),
    ])
}

fn find(catalog: &InMemoryCatalog, id: &str) -> Part {
    catalog.find(&PartId::new(id)).expect("part in catalog")
}

#[test]
fn am5_cpu_narrows_motherboards_and_clearing_does_not_cascade() {
    let catalog = showroom_catalog();
    let mut build = BuildState::new();

    // Locked until a CPU is chosen.
    assert!(is_locked(SlotKind::Motherboard, &build));
    assert!(candidates(SlotKind::Motherboard, &catalog.parts(), &build).is_empty());

    build.select(SlotKind::Cpu, find(&catalog, "cpu-7600"));
    let boards = candidates(SlotKind::Motherboard, &catalog.parts(), &build);
    let board_ids: Vec<&str> = boards.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(board_ids, vec!["mb-b650"]); // LGA1700 board excluded

    build.select(SlotKind::Motherboard, boards[0].clone());

    // Clearing the CPU leaves the chosen AM5 board in place.
    build.clear(SlotKind::Cpu);
    assert_eq!(
        build.get(SlotKind::Motherboard).map(|p| p.id.as_str()),
        Some("mb-b650")
    );
}

#[test]
fn ram_unlocks_with_motherboard_and_follows_its_memory_type() {
    let catalog = showroom_catalog();
    let mut build = BuildState::new();

    assert!(is_locked(SlotKind::Ram, &build));

    build.select(SlotKind::Cpu, find(&catalog, "cpu-13600"));
    assert!(is_locked(SlotKind::Ram, &build)); // CPU alone is not enough

    build.select(SlotKind::Motherboard, find(&catalog, "mb-z790"));
    let ram = candidates(SlotKind::Ram, &catalog.parts(), &build);
    let ram_ids: Vec<&str> = ram.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ram_ids, vec!["ram-ddr5"]);
}

#[test]
fn universal_cooler_survives_every_socket() {
    let catalog = showroom_catalog();
    let mut build = BuildState::new();

    // No socket known: every cooler offered.
    let all = candidates(SlotKind::Cooling, &catalog.parts(), &build);
    assert_eq!(all.len(), 2);

    build.select(SlotKind::Cpu, find(&catalog, "cpu-7600")); // AM5
    let am5 = candidates(SlotKind::Cooling, &catalog.parts(), &build);
    let am5_ids: Vec<&str> = am5.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(am5_ids, vec!["cool-uni"]);

    // Motherboard socket takes precedence over the CPU's.
    build.select(SlotKind::Motherboard, find(&catalog, "mb-z790")); // LGA1700
    let lga = candidates(SlotKind::Cooling, &catalog.parts(), &build);
    let lga_ids: Vec<&str> = lga.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(lga_ids, vec!["cool-uni", "cool-lga"]);
}

#[test]
fn two_part_build_totals_and_projects_in_canonical_order() {
    let catalog = showroom_catalog();
    let mut build = BuildState::new();

    // GPU first, CPU second: projection order must not follow
    // selection order.
    build.select(SlotKind::Gpu, find(&catalog, "gpu-4070")); // 150,000.00
    build.select(SlotKind::Cpu, find(&catalog, "cpu-7600")); // 50,000.00

    assert_eq!(build.total().amount_cents, 20_000_000);

    let quote = Quote::project(&build).unwrap();
    assert_eq!(quote.line_count(), 2);
    let slots: Vec<SlotKind> = quote.lines.iter().map(|l| l.slot).collect();
    assert_eq!(slots, vec![SlotKind::Cpu, SlotKind::Gpu]);
    assert_eq!(quote.total, build.total());
}

#[test]
fn empty_build_yields_nothing_to_quote() {
    let build = BuildState::new();
    assert!(matches!(Quote::project(&build), Err(BuildError::EmptyBuild)));
}

#[test]
fn candidates_track_catalog_refresh_between_calls() {
    let mut catalog = showroom_catalog();
    let mut build = BuildState::new();
    build.select(SlotKind::Cpu, find(&catalog, "cpu-7600"));

    assert_eq!(candidates(SlotKind::Motherboard, &catalog.parts(), &build).len(), 1);

    // The feed drops the AM5 board; the next call reflects it.
    catalog.remove(&PartId::new("mb-b650"));
    assert!(candidates(SlotKind::Motherboard, &catalog.parts(), &build).is_empty());
}

#[test]
fn saved_build_round_trips_and_keeps_its_frozen_total() {
    let mut catalog = showroom_catalog();
    let owner = OwnerId::new("user-1");
    let mut build = BuildState::new();
    build.select(SlotKind::Cpu, find(&catalog, "cpu-7600"));
    build.select(SlotKind::Gpu, find(&catalog, "gpu-4070"));

    let mut store = InMemoryBuildStore::new();
    let record = SavedBuildRecord::from_state(&build, "Gaming rig", owner.clone());
    let frozen_total = record.total_price;
    store.save(record).unwrap();

    // Catalog prices change after the save; the record must not move.
    let mut drifted = catalog.parts();
    for part in &mut drifted {
        part.price = Money::new(1, Currency::USD);
    }
    catalog.replace(drifted);

    let loaded = store.load(&owner, "Gaming rig").unwrap();
    assert_eq!(loaded.total_price, frozen_total);

    let mut restored = BuildState::new();
    restored.replace_all(loaded.into_slots());
    assert_eq!(restored, build);
    assert_eq!(restored.total(), frozen_total);
}

#[test]
fn loading_a_stale_record_carries_dropped_parts_forward() {
    let mut catalog = showroom_catalog();
    let owner = OwnerId::new("user-1");
    let mut build = BuildState::new();
    build.select(SlotKind::Cpu, find(&catalog, "cpu-7600"));

    let record = SavedBuildRecord::from_state(&build, "Old rig", owner);

    // The part disappears from the live catalog before the load.
    catalog.remove(&PartId::new("cpu-7600"));

    let mut restored = BuildState::new();
    restored.replace_all(record.into_slots());
    assert_eq!(restored.get(SlotKind::Cpu).map(|p| p.id.as_str()), Some("cpu-7600"));
}
