//! Scheduling configuration.
//!
//! A frozen [`SchedulingConfig`] value is handed to the assembler at
//! generation time. There is no global configuration state; loading from
//! files or environment is a collaborator concern.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::time::{add_days, WeekdaySet};

/// How a rest day is derived from a B-shift date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestDayPolicy {
    /// The calendar day after the B-shift.
    #[default]
    NextDay,
    /// Company policy variant: Friday rests the following Monday,
    /// Saturday and Sunday B-shifts produce no rest day.
    SkipWeekend,
}

impl RestDayPolicy {
    /// Returns the rest day earned by a B-shift on `date`, if any.
    pub fn rest_day_for(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            RestDayPolicy::NextDay => Some(add_days(date, 1)),
            RestDayPolicy::SkipWeekend => match date.weekday() {
                Weekday::Sat | Weekday::Sun => None,
                Weekday::Fri => Some(add_days(date, 3)),
                _ => Some(add_days(date, 1)),
            },
        }
    }
}

/// Tunable scheduling rules and parameters.
///
/// Values are read-only during a generation. Defaults match the canonical
/// roster policy: 90-day fairness window, rest rule on, 2-day B-shift
/// cooldown, Mon..Sat weekly span with Mon..Fri office presence required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingConfig {
    /// IANA timezone naming the civil day; resolved by collaborators.
    pub timezone: String,
    /// Rolling window (days) for fairness counts.
    pub fairness_window_days: u32,
    /// Whether a B-shift earns a rest day.
    pub atm_rest_rule_enabled: bool,
    /// Minimum gap (days) between successive B-shifts for one member.
    pub atm_b_cooldown_days: u32,
    /// How rest days are derived from B-shift dates.
    pub rest_day_policy: RestDayPolicy,
    /// Days of the week covered by a weekly SysAid assignment.
    pub sysaid_week_days: WeekdaySet,
    /// Office days a member must have to hold a SysAid role.
    pub sysaid_required_office_days: WeekdaySet,
    /// Fairness aggressiveness (1..=5) used when a request does not set one.
    pub default_aggressiveness: u8,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            timezone: "Africa/Addis_Ababa".to_string(),
            fairness_window_days: 90,
            atm_rest_rule_enabled: true,
            atm_b_cooldown_days: 2,
            rest_day_policy: RestDayPolicy::NextDay,
            sysaid_week_days: WeekdaySet::MON_SAT,
            sysaid_required_office_days: WeekdaySet::MON_FRI,
            default_aggressiveness: 1,
        }
    }
}

impl SchedulingConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fairness window length.
    pub fn with_fairness_window_days(mut self, days: u32) -> Self {
        self.fairness_window_days = days;
        self
    }

    /// Enables or disables the rest rule.
    pub fn with_rest_rule(mut self, enabled: bool) -> Self {
        self.atm_rest_rule_enabled = enabled;
        self
    }

    /// Sets the B-shift cooldown.
    pub fn with_cooldown_days(mut self, days: u32) -> Self {
        self.atm_b_cooldown_days = days;
        self
    }

    /// Sets the rest day policy.
    pub fn with_rest_day_policy(mut self, policy: RestDayPolicy) -> Self {
        self.rest_day_policy = policy;
        self
    }

    /// Sets the weekly SysAid span.
    pub fn with_sysaid_week_days(mut self, days: WeekdaySet) -> Self {
        self.sysaid_week_days = days;
        self
    }

    /// Sets the office days required of SysAid assignees.
    pub fn with_sysaid_required_office_days(mut self, days: WeekdaySet) -> Self {
        self.sysaid_required_office_days = days;
        self
    }

    /// Sets the default fairness aggressiveness.
    pub fn with_default_aggressiveness(mut self, level: u8) -> Self {
        self.default_aggressiveness = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = SchedulingConfig::default();
        assert_eq!(config.fairness_window_days, 90);
        assert!(config.atm_rest_rule_enabled);
        assert_eq!(config.atm_b_cooldown_days, 2);
        assert_eq!(config.rest_day_policy, RestDayPolicy::NextDay);
        assert_eq!(config.sysaid_week_days, WeekdaySet::MON_SAT);
        assert_eq!(config.sysaid_required_office_days, WeekdaySet::MON_FRI);
        assert_eq!(config.default_aggressiveness, 1);
    }

    #[test]
    fn test_next_day_policy() {
        let policy = RestDayPolicy::NextDay;
        // Friday 2025-01-10 rests Saturday; Saturday rests Sunday
        assert_eq!(policy.rest_day_for(d(2025, 1, 10)), Some(d(2025, 1, 11)));
        assert_eq!(policy.rest_day_for(d(2025, 1, 11)), Some(d(2025, 1, 12)));
    }

    #[test]
    fn test_skip_weekend_policy() {
        let policy = RestDayPolicy::SkipWeekend;
        // Thursday rests Friday
        assert_eq!(policy.rest_day_for(d(2025, 1, 9)), Some(d(2025, 1, 10)));
        // Friday rests the following Monday
        assert_eq!(policy.rest_day_for(d(2025, 1, 10)), Some(d(2025, 1, 13)));
        // Saturday and Sunday earn no rest day
        assert_eq!(policy.rest_day_for(d(2025, 1, 11)), None);
        assert_eq!(policy.rest_day_for(d(2025, 1, 12)), None);
    }

    #[test]
    fn test_builder() {
        let config = SchedulingConfig::new()
            .with_fairness_window_days(30)
            .with_rest_rule(false)
            .with_cooldown_days(3)
            .with_default_aggressiveness(4);
        assert_eq!(config.fairness_window_days, 30);
        assert!(!config.atm_rest_rule_enabled);
        assert_eq!(config.atm_b_cooldown_days, 3);
        assert_eq!(config.default_aggressiveness, 4);
    }
}
