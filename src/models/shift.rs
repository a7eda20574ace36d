//! Shift definitions and the per-weekday shift plan.
//!
//! ATM work is structured into labeled shifts with wall-clock windows;
//! SysAid has no shift table (the weekly span is implicit). The canonical
//! plan runs two shifts on weekdays, four on Saturday, and three on Sunday.

use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::TaskKind;

/// One shift slot within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Kind assigned to this slot.
    pub kind: TaskKind,
    /// Display label, unique within a day.
    pub label: String,
    /// Wall-clock start.
    pub start: NaiveTime,
    /// Wall-clock end.
    pub end: NaiveTime,
    /// How many distinct members the slot needs.
    pub required_count: u32,
}

impl Shift {
    /// Creates a single-member shift.
    pub fn new(kind: TaskKind, label: impl Into<String>, start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            kind,
            label: label.into(),
            start,
            end,
            required_count: 1,
        }
    }

    /// Sets the required member count.
    pub fn with_required_count(mut self, count: u32) -> Self {
        self.required_count = count;
        self
    }
}

/// Mapping from weekday to the ordered shifts scheduled that day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayShiftPlan {
    /// Shift lists indexed by `Weekday::num_days_from_monday()`.
    days: [Vec<Shift>; 7],
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid wall clock time")
}

fn morning(label: &str) -> Shift {
    Shift::new(TaskKind::AtmMorning, label, t(6, 0), t(8, 30))
}

fn midnight(label: &str) -> Shift {
    Shift::new(TaskKind::AtmMidnight, label, t(8, 30), t(22, 0))
}

impl DayShiftPlan {
    /// Creates an empty plan (no shifts on any day).
    pub fn empty() -> Self {
        Self {
            days: Default::default(),
        }
    }

    /// The canonical operations plan.
    ///
    /// | Weekday | Shifts |
    /// |---------|--------|
    /// | Mon-Fri | Morning, Mid/Night |
    /// | Sat | Morning, Mid/Night-1..3 |
    /// | Sun | Morning-1, Morning-2, Night |
    pub fn canonical() -> Self {
        let weekday = vec![morning("Morning"), midnight("Mid/Night")];
        let saturday = vec![
            morning("Morning"),
            midnight("Mid/Night-1"),
            midnight("Mid/Night-2"),
            midnight("Mid/Night-3"),
        ];
        let sunday = vec![
            morning("Morning-1"),
            morning("Morning-2"),
            Shift::new(TaskKind::AtmMidnight, "Night", t(14, 30), t(22, 0)),
        ];

        let mut plan = Self::empty();
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ] {
            plan = plan.with_shifts(day, weekday.clone());
        }
        plan.with_shifts(Weekday::Sat, saturday)
            .with_shifts(Weekday::Sun, sunday)
    }

    /// Replaces the shifts for one weekday.
    pub fn with_shifts(mut self, day: Weekday, shifts: Vec<Shift>) -> Self {
        self.days[day.num_days_from_monday() as usize] = shifts;
        self
    }

    /// Ordered shifts for a weekday.
    pub fn shifts_for(&self, day: Weekday) -> &[Shift] {
        &self.days[day.num_days_from_monday() as usize]
    }

    /// Total slots across one week (sum of required counts).
    pub fn weekly_slot_count(&self) -> u32 {
        self.days
            .iter()
            .flat_map(|shifts| shifts.iter())
            .map(|s| s.required_count)
            .sum()
    }
}

impl Default for DayShiftPlan {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_weekday_shifts() {
        let plan = DayShiftPlan::canonical();
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ] {
            let shifts = plan.shifts_for(day);
            assert_eq!(shifts.len(), 2);
            assert_eq!(shifts[0].kind, TaskKind::AtmMorning);
            assert_eq!(shifts[0].label, "Morning");
            assert_eq!(shifts[1].kind, TaskKind::AtmMidnight);
            assert_eq!(shifts[1].label, "Mid/Night");
        }
    }

    #[test]
    fn test_canonical_saturday() {
        let plan = DayShiftPlan::canonical();
        let shifts = plan.shifts_for(Weekday::Sat);
        assert_eq!(shifts.len(), 4);
        assert_eq!(shifts[0].kind, TaskKind::AtmMorning);
        let labels: Vec<_> = shifts[1..].iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Mid/Night-1", "Mid/Night-2", "Mid/Night-3"]);
        assert!(shifts[1..].iter().all(|s| s.kind == TaskKind::AtmMidnight));
    }

    #[test]
    fn test_canonical_sunday() {
        let plan = DayShiftPlan::canonical();
        let shifts = plan.shifts_for(Weekday::Sun);
        assert_eq!(shifts.len(), 3);
        assert_eq!(shifts[0].label, "Morning-1");
        assert_eq!(shifts[1].label, "Morning-2");
        assert_eq!(shifts[2].label, "Night");
        assert_eq!(shifts[2].kind, TaskKind::AtmMidnight);
    }

    #[test]
    fn test_weekly_slot_count() {
        // 2*5 weekday slots + 4 Saturday + 3 Sunday = 17
        assert_eq!(DayShiftPlan::canonical().weekly_slot_count(), 17);
    }

    #[test]
    fn test_required_count_builder() {
        let s = morning("Morning").with_required_count(2);
        assert_eq!(s.required_count, 2);
    }

    #[test]
    fn test_empty_plan() {
        let plan = DayShiftPlan::empty();
        assert!(plan.shifts_for(Weekday::Mon).is_empty());
        assert_eq!(plan.weekly_slot_count(), 0);
    }
}
