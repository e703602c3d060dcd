use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use super::*;
use crate::models::{LayoutCell, Reservation, ReservationStatus, TablePlacement};
use crate::types::TimeBlock;

fn placement(id: &str, x: i32, y: i32, capacity: u32) -> TablePlacement {
    TablePlacement::new(id, x, y, capacity)
}

fn at(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, hour, min, 0).unwrap()
}

fn reservation(table_id: &str, start: DateTime<Utc>, end: DateTime<Utc>, status: ReservationStatus) -> Reservation {
    Reservation {
        reservation_id: format!("res-{table_id}"),
        table_id: table_id.to_string(),
        user_id: "user-1".to_string(),
        restaurant_id: "rest-1".to_string(),
        start_time: start,
        end_time: end,
        status,
    }
}

fn window(start: DateTime<Utc>, end: DateTime<Utc>) -> TimeWindow {
    TimeWindow::new(start, end).unwrap()
}

// ── Grid builder ────────────────────────────────────────────────────

#[test]
fn grid_is_always_size_by_size() {
    let grid = FloorGrid::build(&[placement("A", 3, 4, 2)], DEFAULT_GRID_SIZE, &HashSet::new());
    assert_eq!(grid.size(), 10);
    assert_eq!(grid.rows().len(), 10);
    assert!(grid.rows().iter().all(|row| row.len() == 10));
}

#[test]
fn one_table_cell_per_valid_placement() {
    let placements = vec![
        placement("A", 0, 0, 4),
        placement("B", 1, 0, 2),
        placement("C", 9, 9, 6),
    ];
    let grid = FloorGrid::build(&placements, DEFAULT_GRID_SIZE, &HashSet::new());
    assert_eq!(grid.table_count(), 3);
}

#[test]
fn spec_example_positions_seats_and_numbers() {
    // A at (x:0, y:0) and B at (x:1, y:0) land on cells (0,0) and (0,1)
    // [row, col] with seats 4 and 2, numbered 1 and 2 in scan order.
    let placements = vec![placement("A", 0, 0, 4), placement("B", 1, 0, 2)];
    let grid = FloorGrid::build(&placements, DEFAULT_GRID_SIZE, &HashSet::new());

    let a = grid.cell(0, 0).unwrap();
    assert!(a.is_table);
    assert_eq!(a.seats, 4);
    assert_eq!(a.number, Some(1));

    let b = grid.cell(0, 1).unwrap();
    assert!(b.is_table);
    assert_eq!(b.seats, 2);
    assert_eq!(b.number, Some(2));
}

#[test]
fn numbering_follows_grid_position_not_input_order() {
    // B comes first in the input but sits on a later row, so it gets
    // the higher display number.
    let placements = vec![placement("B", 0, 5, 2), placement("A", 0, 0, 4)];
    let grid = FloorGrid::build(&placements, DEFAULT_GRID_SIZE, &HashSet::new());

    assert_eq!(grid.cell(0, 0).unwrap().number, Some(1));
    assert_eq!(grid.cell(5, 0).unwrap().number, Some(2));
}

#[test]
fn out_of_range_placements_are_dropped() {
    let placements = vec![
        placement("A", 0, 0, 4),
        placement("neg", -1, 0, 2),
        placement("far-x", 10, 0, 2),
        placement("far-y", 0, 10, 2),
    ];
    let grid = FloorGrid::build(&placements, DEFAULT_GRID_SIZE, &HashSet::new());
    assert_eq!(grid.table_count(), 1);
    assert!(grid.cell(0, 0).unwrap().is_table);
}

#[test]
fn empty_placements_yield_empty_grid() {
    let grid = FloorGrid::build(&[], DEFAULT_GRID_SIZE, &HashSet::new());
    assert_eq!(grid.table_count(), 0);
    assert!(grid.rows().iter().flatten().all(|cell| !cell.is_table));
}

#[test]
fn duplicate_coordinates_last_write_wins() {
    let placements = vec![placement("first", 2, 2, 4), placement("second", 2, 2, 8)];
    let grid = FloorGrid::build(&placements, DEFAULT_GRID_SIZE, &HashSet::new());
    let cell = grid.cell(2, 2).unwrap();
    assert_eq!(cell.seats, 8);
    assert_eq!(cell.table_id.as_deref(), Some("second"));
    assert_eq!(grid.table_count(), 1);
}

#[test]
fn reserved_flag_marks_matching_tables() {
    let placements = vec![placement("A", 0, 0, 4), placement("B", 1, 0, 2)];
    let reserved: HashSet<String> = ["A".to_string()].into();
    let grid = FloorGrid::build(&placements, DEFAULT_GRID_SIZE, &reserved);

    assert!(grid.cell(0, 0).unwrap().reserved);
    assert!(!grid.cell(0, 1).unwrap().reserved);
}

#[test]
fn layout_round_trip_preserves_tables() {
    let mut placements = vec![placement("A", 0, 0, 4), placement("B", 3, 7, 2)];
    placements[1].available = false;
    let grid = FloorGrid::build(&placements, DEFAULT_GRID_SIZE, &HashSet::new());

    let layout = grid.to_layout();
    assert_eq!(layout.len(), 10);
    assert!(layout[0][0].is_table);
    assert_eq!(layout[0][0].capacity, 4);
    assert!(!layout[7][3].is_available);

    let rebuilt = FloorGrid::placements_from_layout(&layout, DEFAULT_GRID_SIZE);
    assert_eq!(rebuilt.len(), 2);
    let b = rebuilt
        .iter()
        .find(|p| p.position_x == 3 && p.position_y == 7)
        .unwrap();
    assert_eq!(b.capacity, 2);
    assert!(!b.available);
    // Fresh identities per table cell
    assert_ne!(rebuilt[0].table_id, rebuilt[1].table_id);
}

#[test]
fn oversized_layout_rows_are_clipped() {
    let mut layout = vec![
        vec![
            LayoutCell {
                is_table: true,
                capacity: 2,
                is_available: true
            };
            12
        ];
        12
    ];
    layout[11][11].capacity = 9;
    let placements = FloorGrid::placements_from_layout(&layout, DEFAULT_GRID_SIZE);
    assert_eq!(placements.len(), 100);
    assert!(placements.iter().all(|p| p.position_x < 10 && p.position_y < 10));
}

// ── Availability filter ─────────────────────────────────────────────

#[test]
fn accepted_overlap_blocks_table() {
    // Reservation 18:00-19:30, candidate 18:30-20:00 -> conflict.
    let res = reservation("A", at(18, 0), at(19, 30), ReservationStatus::Accepted);
    let unavailable = reserved_table_ids(&[res], window(at(18, 30), at(20, 0)));
    assert!(unavailable.contains("A"));
}

#[test]
fn touching_boundary_does_not_conflict() {
    // Reservation 18:00-19:30, candidate 19:30-21:00 -> table free.
    let res = reservation("A", at(18, 0), at(19, 30), ReservationStatus::Accepted);
    let unavailable = reserved_table_ids(&[res], window(at(19, 30), at(21, 0)));
    assert!(unavailable.is_empty());

    // Same for the other edge: candidate ends when the reservation starts.
    let res = reservation("A", at(19, 30), at(21, 0), ReservationStatus::Accepted);
    let unavailable = reserved_table_ids(&[res], window(at(18, 0), at(19, 30)));
    assert!(unavailable.is_empty());
}

#[test]
fn pending_and_rejected_never_block() {
    for status in [ReservationStatus::Pending, ReservationStatus::Rejected] {
        let res = reservation("A", at(18, 0), at(19, 30), status);
        let unavailable = reserved_table_ids(&[res], window(at(18, 30), at(20, 0)));
        assert!(unavailable.is_empty(), "{status} must not block");
    }
}

#[test]
fn empty_history_yields_empty_set() {
    assert!(reserved_table_ids(&[], window(at(18, 0), at(20, 0))).is_empty());
}

#[test]
fn multiple_reservations_collect_all_conflicts() {
    let history = vec![
        reservation("A", at(18, 0), at(19, 30), ReservationStatus::Accepted),
        reservation("B", at(19, 0), at(20, 30), ReservationStatus::Accepted),
        reservation("C", at(21, 0), at(22, 0), ReservationStatus::Accepted),
        reservation("D", at(18, 0), at(22, 0), ReservationStatus::Pending),
    ];
    let unavailable = reserved_table_ids(&history, window(at(18, 30), at(20, 0)));
    assert_eq!(
        unavailable,
        ["A".to_string(), "B".to_string()].into_iter().collect()
    );
}

#[test]
fn window_rejects_inverted_bounds() {
    assert!(TimeWindow::new(at(20, 0), at(18, 0)).is_err());
    assert!(TimeWindow::new(at(18, 0), at(18, 0)).is_err());
}

// ── Time blocks ─────────────────────────────────────────────────────

#[test]
fn time_block_maps_to_concrete_window() {
    let block = TimeBlock::new(
        "6:30 PM - 8:00 PM",
        NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
    );
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let w = block.window_on(date);
    assert_eq!(w.start, at(18, 30));
    assert_eq!(w.end, at(20, 0));
}

#[test]
fn overnight_block_ends_next_day() {
    let block = TimeBlock::new(
        "late",
        NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(1, 0, 0).unwrap(),
    );
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let w = block.window_on(date);
    assert!(w.start < w.end);
    assert_eq!(w.end, Utc.with_ymd_and_hms(2024, 1, 2, 1, 0, 0).unwrap());
}
