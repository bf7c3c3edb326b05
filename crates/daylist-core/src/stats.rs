use crate::task::Task;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|task| task.completed).count(),
        }
    }

    /// `"<completed> of <total> tasks completed"`, or nothing for an empty list.
    pub fn line(self) -> String {
        if self.total == 0 {
            return String::new();
        }
        format!("{} of {} tasks completed", self.completed, self.total)
    }
}

pub fn stats_line(tasks: &[Task]) -> String {
    TaskStats::from_tasks(tasks).line()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskId;

    fn task(id: u64, completed: bool) -> Task {
        let mut task = Task::new(TaskId::from_millis(id), format!("task {id}"), String::new());
        task.completed = completed;
        task
    }

    #[test]
    fn empty_list_has_no_stats_line() {
        assert_eq!(stats_line(&[]), "");
    }

    #[test]
    fn counts_completed_tasks() {
        let tasks = vec![task(1, false), task(2, true), task(3, false)];
        assert_eq!(TaskStats::from_tasks(&tasks), TaskStats { total: 3, completed: 1 });
        assert_eq!(stats_line(&tasks), "1 of 3 tasks completed");
    }

    #[test]
    fn singular_count_keeps_plural_wording() {
        assert_eq!(stats_line(&[task(1, true)]), "1 of 1 tasks completed");
    }
}
