//! Weekly schedule domain logic.
//!
//! The schedule is a sparse list of [`ScheduleSlot`] records, while the UI
//! renders a dense grid of every day × half-hour label. Each grid cell
//! resolves its slot independently through [`find_slot`], which keeps the
//! sparse list the single source of truth.

use log::{info, warn};
use shared::{is_known_time_label, DayOfWeek, Notification, ScheduleSlot, SlotStatus, TIME_SLOTS};
use std::collections::HashMap;
use thiserror::Error;

/// Data-integrity problems detected when a schedule is loaded
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    #[error("Slots {first_id} and {second_id} both start on {day} at {start_time}")]
    DuplicateSlot {
        day: DayOfWeek,
        start_time: String,
        first_id: String,
        second_id: String,
    },
    #[error("Slot {slot_id} uses unknown time label '{label}'")]
    UnknownTimeLabel { slot_id: String, label: String },
}

/// Resolve the slot occupying a (day, time) cell.
///
/// `day` is compared case-insensitively with the slot's day name; `time` must
/// equal the slot's start label exactly. The first match in iteration order
/// wins.
pub fn find_slot<'a>(schedule: &'a [ScheduleSlot], day: &str, time: &str) -> Option<&'a ScheduleSlot> {
    schedule
        .iter()
        .find(|slot| slot.start_time == time && slot.day.name().eq_ignore_ascii_case(day))
}

/// One cell of the weekly grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridCell<'a> {
    pub day: DayOfWeek,
    pub time: &'static str,
    pub slot: Option<&'a ScheduleSlot>,
}

/// One row of the weekly grid: a time label and a cell per day
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow<'a> {
    pub time: &'static str,
    pub cells: Vec<GridCell<'a>>,
}

/// Schedule service that handles slot lookup and grid layout
#[derive(Debug, Clone, Default)]
pub struct ScheduleService;

impl ScheduleService {
    pub fn new() -> Self {
        Self
    }

    /// Build the dense grid (time labels × days) for a schedule snapshot
    pub fn week_grid<'a>(&self, schedule: &'a [ScheduleSlot]) -> Vec<GridRow<'a>> {
        TIME_SLOTS
            .iter()
            .map(|&time| GridRow {
                time,
                cells: DayOfWeek::ALL
                    .iter()
                    .map(|&day| GridCell {
                        day,
                        time,
                        slot: find_slot(schedule, day.name(), time),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Reject schedules that would make the grid ambiguous or unrenderable.
    ///
    /// Two slots sharing (day, start time) are reported instead of letting
    /// [`find_slot`] silently pick the first one.
    pub fn check_integrity(&self, schedule: &[ScheduleSlot]) -> Result<(), ScheduleError> {
        let mut seen: HashMap<(DayOfWeek, &str), &str> = HashMap::new();

        for slot in schedule {
            for label in [&slot.start_time, &slot.end_time] {
                if !is_known_time_label(label) {
                    warn!("🚨 Slot {} has unknown time label '{}'", slot.id, label);
                    return Err(ScheduleError::UnknownTimeLabel {
                        slot_id: slot.id.clone(),
                        label: label.clone(),
                    });
                }
            }

            if let Some(first_id) = seen.insert((slot.day, slot.start_time.as_str()), slot.id.as_str()) {
                warn!("🚨 Duplicate slot on {} at {}", slot.day, slot.start_time);
                return Err(ScheduleError::DuplicateSlot {
                    day: slot.day,
                    start_time: slot.start_time.clone(),
                    first_id: first_id.to_string(),
                    second_id: slot.id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Number of slots per status, in legend order
    pub fn status_counts(&self, schedule: &[ScheduleSlot]) -> Vec<(SlotStatus, usize)> {
        SlotStatus::ALL
            .iter()
            .map(|&status| (status, schedule.iter().filter(|slot| slot.status == status).count()))
            .collect()
    }

    /// Notification raised when an occupied cell is clicked
    pub fn slot_click_notification(&self, slot: &ScheduleSlot) -> Notification {
        info!("📅 Slot {} clicked ({} {})", slot.id, slot.day, slot.start_time);
        Notification::info(
            "Schedule Slot",
            format!(
                "Clicked on {} at {} - Status: {}",
                slot.day, slot.start_time, slot.status
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(id: &str, day: DayOfWeek, start: &str, end: &str, status: SlotStatus) -> ScheduleSlot {
        ScheduleSlot {
            id: id.to_string(),
            day,
            start_time: start.to_string(),
            end_time: end.to_string(),
            status,
            subject: None,
        }
    }

    fn sample_schedule() -> Vec<ScheduleSlot> {
        vec![
            ScheduleSlot {
                subject: Some("Vocal Jazz".to_string()),
                ..slot("1", DayOfWeek::Tuesday, "3pm", "4pm", SlotStatus::Available)
            },
            slot("2", DayOfWeek::Wednesday, "2:30pm", "4pm", SlotStatus::Available),
            slot("3", DayOfWeek::Thursday, "1pm", "5pm", SlotStatus::Booked),
            slot("5", DayOfWeek::Saturday, "10am", "2pm", SlotStatus::Unavailable),
        ]
    }

    #[test]
    fn test_find_slot_single_slot_scenario() {
        let schedule = vec![ScheduleSlot {
            subject: Some("Vocal Jazz".to_string()),
            ..slot("1", DayOfWeek::Tuesday, "3pm", "4pm", SlotStatus::Available)
        }];

        let found = find_slot(&schedule, "Tuesday", "3pm").expect("Slot should be found");
        assert_eq!(found, &schedule[0]);
        assert!(find_slot(&schedule, "Tuesday", "4pm").is_none());
    }

    #[test]
    fn test_find_slot_day_is_case_insensitive() {
        let schedule = sample_schedule();
        assert_eq!(find_slot(&schedule, "tuesday", "3pm").map(|s| s.id.as_str()), Some("1"));
        assert_eq!(find_slot(&schedule, "THURSDAY", "1pm").map(|s| s.id.as_str()), Some("3"));
    }

    #[test]
    fn test_find_slot_time_is_exact() {
        let schedule = sample_schedule();
        assert!(find_slot(&schedule, "Tuesday", "3:00pm").is_none());
        assert!(find_slot(&schedule, "Tuesday", "3PM").is_none());
        assert!(find_slot(&schedule, "Tuesday", " 3pm").is_none());
    }

    #[test]
    fn test_find_slot_returns_every_slot_at_its_own_key() {
        let schedule = sample_schedule();
        for expected in &schedule {
            let found = find_slot(&schedule, expected.day.name(), &expected.start_time);
            assert_eq!(found, Some(expected));

            let lowercase_day = expected.day.name().to_lowercase();
            assert_eq!(find_slot(&schedule, &lowercase_day, &expected.start_time), Some(expected));
        }
    }

    #[test]
    fn test_find_slot_absent_for_unoccupied_cells() {
        let schedule = sample_schedule();
        for day in DayOfWeek::ALL {
            for time in TIME_SLOTS {
                let occupied = schedule.iter().any(|s| s.day == day && s.start_time == time);
                if !occupied {
                    assert!(find_slot(&schedule, day.name(), time).is_none());
                }
            }
        }
    }

    #[test]
    fn test_find_slot_first_match_wins() {
        let schedule = vec![
            slot("a", DayOfWeek::Monday, "9am", "10am", SlotStatus::Booked),
            slot("b", DayOfWeek::Monday, "9am", "11am", SlotStatus::Available),
        ];
        assert_eq!(find_slot(&schedule, "monday", "9am").map(|s| s.id.as_str()), Some("a"));
    }

    #[test]
    fn test_week_grid_dimensions_and_cells() {
        let service = ScheduleService::new();
        let schedule = sample_schedule();
        let grid = service.week_grid(&schedule);

        assert_eq!(grid.len(), TIME_SLOTS.len());
        assert!(grid.iter().all(|row| row.cells.len() == 7));

        let occupied: Vec<&str> = grid
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter_map(|cell| cell.slot.map(|s| s.id.as_str()))
            .collect();
        assert_eq!(occupied.len(), schedule.len());

        let three_pm = grid.iter().find(|row| row.time == "3pm").unwrap();
        assert_eq!(three_pm.cells[1].day, DayOfWeek::Tuesday);
        assert_eq!(three_pm.cells[1].slot.map(|s| s.id.as_str()), Some("1"));
    }

    #[test]
    fn test_check_integrity_rejects_duplicates() {
        let service = ScheduleService::new();
        let schedule = vec![
            slot("a", DayOfWeek::Monday, "9am", "10am", SlotStatus::Booked),
            slot("b", DayOfWeek::Monday, "9am", "11am", SlotStatus::Available),
        ];

        let error = service.check_integrity(&schedule).unwrap_err();
        assert_eq!(
            error,
            ScheduleError::DuplicateSlot {
                day: DayOfWeek::Monday,
                start_time: "9am".to_string(),
                first_id: "a".to_string(),
                second_id: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_check_integrity_rejects_unknown_labels() {
        let service = ScheduleService::new();
        let schedule = vec![slot("a", DayOfWeek::Monday, "9:00am", "10am", SlotStatus::Booked)];

        assert!(matches!(
            service.check_integrity(&schedule),
            Err(ScheduleError::UnknownTimeLabel { .. })
        ));
    }

    #[test]
    fn test_check_integrity_accepts_sample() {
        let service = ScheduleService::new();
        assert!(service.check_integrity(&sample_schedule()).is_ok());
    }

    #[test]
    fn test_status_counts() {
        let service = ScheduleService::new();
        let counts = service.status_counts(&sample_schedule());
        assert_eq!(
            counts,
            vec![
                (SlotStatus::Available, 2),
                (SlotStatus::Booked, 1),
                (SlotStatus::Unavailable, 1),
            ]
        );
    }

    #[test]
    fn test_slot_click_notification() {
        let service = ScheduleService::new();
        let schedule = sample_schedule();
        let notification = service.slot_click_notification(&schedule[0]);
        assert_eq!(notification.title, "Schedule Slot");
        assert_eq!(notification.description, "Clicked on Tuesday at 3pm - Status: available");
        assert!(!notification.is_destructive());
    }
}
