//! # Query Engine
//!
//! Pure filter and sort transforms over the task collection. Nothing here
//! allocates tasks; results are vectors of borrows in display order.
//!
//! Both sorts are stable (`slice::sort_by`), so tasks with equal keys keep
//! their insertion order in either direction.

use std::cmp::Ordering;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::task::{Task, TaskStatus};

/// Status filter applied to the list. `All` bypasses `filter_by_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    Todo,
    InProgress,
    Done,
}

impl Filter {
    /// Display cycle used by the filter key.
    pub const CYCLE: [Filter; 4] = [Filter::All, Filter::Todo, Filter::InProgress, Filter::Done];

    pub fn next(self) -> Self {
        let index = Self::CYCLE.iter().position(|f| *f == self).unwrap_or(0);
        Self::CYCLE[(index + 1) % Self::CYCLE.len()]
    }

    /// The status this filter selects, `None` for `All`.
    pub fn status(self) -> Option<TaskStatus> {
        match self {
            Filter::All => None,
            Filter::Todo => Some(TaskStatus::Todo),
            Filter::InProgress => Some(TaskStatus::InProgress),
            Filter::Done => Some(TaskStatus::Done),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Todo => "Todo",
            Filter::InProgress => "In Progress",
            Filter::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Created,
    DueDate,
}

impl SortKey {
    pub fn toggle(self) -> Self {
        match self {
            SortKey::Created => SortKey::DueDate,
            SortKey::DueDate => SortKey::Created,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Created => "Created",
            SortKey::DueDate => "Due Date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Tasks whose status equals `status`, in their original relative order.
pub fn filter_by_status(tasks: &[Task], status: TaskStatus) -> Vec<&Task> {
    tasks.iter().filter(|task| task.status == status).collect()
}

/// Orders by `created_at`; `Asc` puts the earliest first.
pub fn sort_by_created<'a>(tasks: &[&'a Task], order: SortOrder) -> Vec<&'a Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| order.apply(a.created_at.cmp(&b.created_at)));
    sorted
}

/// Orders dated tasks by `due_date`. Undated tasks always come last,
/// whichever direction `order` points.
pub fn sort_by_due_date<'a>(tasks: &[&'a Task], order: SortOrder) -> Vec<&'a Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| match (a.due_date, b.due_date) {
        (Some(left), Some(right)) => order.apply(left.cmp(&right)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}

/// The visible list: filter (unless `All`), then sort.
pub fn visible_tasks(tasks: &[Task], filter: Filter, key: SortKey, order: SortOrder) -> Vec<&Task> {
    let filtered = match filter.status() {
        Some(status) => filter_by_status(tasks, status),
        None => tasks.iter().collect(),
    };
    match key {
        SortKey::Created => sort_by_created(&filtered, order),
        SortKey::DueDate => sort_by_due_date(&filtered, order),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{task_at, task_due};

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn test_filter_by_status_keeps_order_and_matches() {
        let mut tasks = vec![task_at("a", 0), task_at("b", 1), task_at("c", 2), task_at("d", 3)];
        tasks[1].status = TaskStatus::Done;
        tasks[3].status = TaskStatus::Done;

        let done = filter_by_status(&tasks, TaskStatus::Done);
        assert_eq!(titles(&done), vec!["b", "d"]);
        assert!(done.iter().all(|t| t.status == TaskStatus::Done));

        let todo = filter_by_status(&tasks, TaskStatus::Todo);
        assert_eq!(titles(&todo), vec!["a", "c"]);
        assert!(filter_by_status(&tasks, TaskStatus::InProgress).is_empty());
    }

    #[test]
    fn test_sort_by_created_both_directions() {
        let tasks = vec![task_at("mid", 50), task_at("early", 10), task_at("late", 90)];
        let refs: Vec<&Task> = tasks.iter().collect();

        assert_eq!(
            titles(&sort_by_created(&refs, SortOrder::Asc)),
            vec!["early", "mid", "late"]
        );
        assert_eq!(
            titles(&sort_by_created(&refs, SortOrder::Desc)),
            vec!["late", "mid", "early"]
        );
    }

    #[test]
    fn test_sort_by_created_is_stable() {
        let tasks = vec![task_at("first", 5), task_at("second", 5), task_at("third", 5)];
        let refs: Vec<&Task> = tasks.iter().collect();

        assert_eq!(
            titles(&sort_by_created(&refs, SortOrder::Asc)),
            vec!["first", "second", "third"]
        );
        assert_eq!(
            titles(&sort_by_created(&refs, SortOrder::Desc)),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn test_sort_by_due_date_undated_last_in_both_orders() {
        let tasks = vec![
            task_due("none-1", None),
            task_due("jan", Some((2024, 1, 15))),
            task_due("none-2", None),
            task_due("mar", Some((2024, 3, 1))),
            task_due("feb", Some((2024, 2, 10))),
        ];
        let refs: Vec<&Task> = tasks.iter().collect();

        assert_eq!(
            titles(&sort_by_due_date(&refs, SortOrder::Asc)),
            vec!["jan", "feb", "mar", "none-1", "none-2"]
        );
        assert_eq!(
            titles(&sort_by_due_date(&refs, SortOrder::Desc)),
            vec!["mar", "feb", "jan", "none-1", "none-2"]
        );
    }

    #[test]
    fn test_sort_by_due_date_single_dated_and_undated() {
        let tasks = vec![task_due("undated", None), task_due("dated", Some((2024, 1, 15)))];
        let refs: Vec<&Task> = tasks.iter().collect();

        assert_eq!(titles(&sort_by_due_date(&refs, SortOrder::Asc)), vec!["dated", "undated"]);
        assert_eq!(titles(&sort_by_due_date(&refs, SortOrder::Desc)), vec!["dated", "undated"]);
    }

    #[test]
    fn test_sort_by_due_date_is_stable() {
        let tasks = vec![
            task_due("x", Some((2024, 5, 5))),
            task_due("y", Some((2024, 5, 5))),
            task_due("z", Some((2024, 5, 5))),
        ];
        let refs: Vec<&Task> = tasks.iter().collect();
        assert_eq!(titles(&sort_by_due_date(&refs, SortOrder::Desc)), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_visible_tasks_filters_then_sorts() {
        let mut tasks = vec![task_at("old", 0), task_at("new", 100), task_at("gone", 50)];
        tasks[2].status = TaskStatus::Done;

        let visible = visible_tasks(&tasks, Filter::Todo, SortKey::Created, SortOrder::Desc);
        assert_eq!(titles(&visible), vec!["new", "old"]);

        let all = visible_tasks(&tasks, Filter::All, SortKey::Created, SortOrder::Asc);
        assert_eq!(titles(&all), vec!["old", "gone", "new"]);
    }

    #[test]
    fn test_filter_cycle_wraps() {
        assert_eq!(Filter::All.next(), Filter::Todo);
        assert_eq!(Filter::Todo.next(), Filter::InProgress);
        assert_eq!(Filter::InProgress.next(), Filter::Done);
        assert_eq!(Filter::Done.next(), Filter::All);
    }
}
