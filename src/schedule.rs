use thiserror::Error;
use tracing::{info, warn};

use crate::task::{Priority, Task};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("task conflicts with an existing task \"{with}\"")]
    Conflict { with: String },
    #[error("no task found with description \"{description}\"")]
    NotFound { description: String },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// In-memory store for one day's tasks. The collection is kept sorted by
/// start time ascending after every insert or edit, and inserts are rejected
/// when they overlap an existing task.
///
/// Descriptions are the lookup key but uniqueness is not enforced; every
/// lookup acts on the first match in current sorted order.
#[derive(Debug, Default)]
pub struct Schedule {
    tasks: Vec<Task>,
}

impl Schedule {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Adds `task` unless it overlaps an existing one. Only the first
    /// conflicting task (in sorted order) is reported.
    pub fn add_task(&mut self, task: Task) -> ScheduleResult<()> {
        if let Some(existing) = self.tasks.iter().find(|t| task.overlaps(t)) {
            warn!(
                task = %task.description,
                conflicts_with = %existing.description,
                "task conflict detected"
            );
            return Err(ScheduleError::Conflict {
                with: existing.description.clone(),
            });
        }
        info!(task = %task.description, "task added");
        self.tasks.push(task);
        self.sort_by_start();
        Ok(())
    }

    /// Overwrites all fields of the first task matching `target`, then
    /// re-sorts. The new interval is not checked for overlap against other
    /// tasks; an edit can introduce a conflict that an add would reject.
    pub fn edit_task(
        &mut self,
        target: &str,
        description: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
        priority: Priority,
    ) -> ScheduleResult<()> {
        let Some(task) = self.find_mut(target) else {
            warn!(task = target, "edit failed, task not found");
            return Err(ScheduleError::NotFound {
                description: target.to_string(),
            });
        };
        task.edit(description, start, end, priority);
        info!(task = %task.description, "task edited");
        self.sort_by_start();
        Ok(())
    }

    /// Marks the first task matching `description` as completed. Ordering is
    /// unaffected.
    pub fn complete_task(&mut self, description: &str) -> ScheduleResult<()> {
        let Some(task) = self.find_mut(description) else {
            warn!(task = description, "completion failed, task not found");
            return Err(ScheduleError::NotFound {
                description: description.to_string(),
            });
        };
        task.completed = true;
        info!(task = description, "task completed");
        Ok(())
    }

    /// Removes exactly the first task matching `description`.
    pub fn remove_task(&mut self, description: &str) -> ScheduleResult<()> {
        let Some(idx) = self.tasks.iter().position(|t| t.description == description) else {
            warn!(task = description, "removal failed, task not found");
            return Err(ScheduleError::NotFound {
                description: description.to_string(),
            });
        };
        self.tasks.remove(idx);
        info!(task = description, "task removed");
        Ok(())
    }

    /// All tasks in start-time order. An empty slice means nothing is
    /// scheduled.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks with the given priority, in start-time order.
    pub fn tasks_by_priority(&self, priority: Priority) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.priority == priority).collect()
    }

    fn find_mut(&mut self, description: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.description == description)
    }

    fn sort_by_start(&mut self) {
        // Stable sort: equal start times keep their relative order.
        self.tasks.sort_by(|a, b| a.start.cmp(&b.start));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(desc: &str, start: &str, end: &str) -> Task {
        Task::new(desc, start, end, Priority::Medium)
    }

    #[test]
    fn add_keeps_tasks_sorted_by_start() {
        let mut schedule = Schedule::new();
        schedule.add_task(task("Late", "14:00", "15:00")).unwrap();
        schedule.add_task(task("Early", "06:00", "07:00")).unwrap();
        schedule.add_task(task("Mid", "10:00", "11:00")).unwrap();

        let order: Vec<&str> = schedule.tasks().iter().map(|t| t.description.as_str()).collect();
        assert_eq!(order, vec!["Early", "Mid", "Late"]);
    }

    #[test]
    fn conflicting_add_names_first_offender_and_changes_nothing() {
        let mut schedule = Schedule::new();
        schedule.add_task(task("Breakfast", "07:00", "08:00")).unwrap();
        schedule.add_task(task("Workout", "08:00", "09:00")).unwrap();

        let err = schedule.add_task(task("Call", "07:30", "08:30")).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::Conflict {
                with: "Breakfast".to_string()
            }
        );
        assert_eq!(schedule.tasks().len(), 2);
    }

    #[test]
    fn edit_skips_overlap_check() {
        let mut schedule = Schedule::new();
        schedule.add_task(task("A", "09:00", "10:00")).unwrap();
        schedule.add_task(task("B", "11:00", "12:00")).unwrap();

        // Moving B on top of A is accepted; edits are not re-validated.
        schedule
            .edit_task("B", "B", "09:30", "10:30", Priority::Medium)
            .unwrap();
        assert_eq!(schedule.tasks()[1].description, "B");
        assert_eq!(schedule.tasks()[1].start, "09:30");
    }
}
