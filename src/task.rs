use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown priority \"{0}\" (expected High, Medium, or Low)")]
pub struct ParsePriorityError(pub String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(ParsePriorityError(s.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid time \"{0}\" (expected zero-padded 24h HH:MM)")]
pub struct ClockError(pub String);

/// Checks that `value` is a real clock time written as zero-padded 24h
/// "HH:MM". Times are stored as strings and ordered lexically, which only
/// matches clock order when every value has this exact width.
pub fn validate_clock(value: &str) -> Result<(), ClockError> {
    if value.len() != 5 || value.as_bytes()[2] != b':' {
        return Err(ClockError(value.to_string()));
    }
    NaiveTime::parse_from_str(value, "%H:%M")
        .map(|_| ())
        .map_err(|_| ClockError(value.to_string()))
}

/// One scheduled task within the day. `start` and `end` are "HH:MM" strings;
/// the half-open interval [start, end) is what conflict checks operate on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub start: String,
    pub end: String,
    pub priority: Priority,
    pub completed: bool,
}

impl Task {
    pub fn new(
        description: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            description: description.into(),
            start: start.into(),
            end: end.into(),
            priority,
            completed: false,
        }
    }

    /// Half-open interval intersection under lexical comparison, with an
    /// extra equal-start clause so zero-length intervals still collide.
    pub fn overlaps(&self, other: &Task) -> bool {
        self.start == other.start || (self.start < other.end && self.end > other.start)
    }

    /// Overwrites every field except the completion flag.
    pub fn edit(
        &mut self,
        description: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        priority: Priority,
    ) {
        self.description = description.into();
        self.start = start.into();
        self.end = end.into();
        self.priority = priority;
    }

    /// Console listing line, e.g. `09:00 - 10:00: Stretch [High] (Completed)`.
    pub fn display_line(&self) -> String {
        let status = if self.completed { " (Completed)" } else { "" };
        format!(
            "{} - {}: {} [{}]{}",
            self.start, self.end, self.description, self.priority, status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("MEDIUM".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!(" low ".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn validate_clock_requires_zero_padding() {
        assert!(validate_clock("09:05").is_ok());
        assert!(validate_clock("23:59").is_ok());
        assert!(validate_clock("9:05").is_err());
        assert!(validate_clock("24:00").is_err());
        assert!(validate_clock("12:60").is_err());
        assert!(validate_clock("noon").is_err());
    }

    #[test]
    fn overlap_is_half_open() {
        let a = Task::new("A", "09:00", "10:00", Priority::High);
        let touching = Task::new("B", "10:00", "11:00", Priority::Low);
        let inside = Task::new("C", "09:30", "09:45", Priority::Low);
        assert!(!a.overlaps(&touching));
        assert!(!touching.overlaps(&a));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }

    #[test]
    fn equal_starts_always_conflict() {
        let a = Task::new("A", "09:00", "09:00", Priority::High);
        let b = Task::new("B", "09:00", "09:30", Priority::Low);
        assert!(a.overlaps(&b));
    }
}
