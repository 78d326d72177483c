use chrono::Local;

/// Time logged against a task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskEntry {
    pub id: i32,
    pub task_id: i32,
    pub duration_min: i64,
    pub created_at: String, // ⇔ task_entries.created_at (TEXT, ISO8601)
}

impl TaskEntry {
    pub fn new(task_id: i32, duration_min: i64) -> Self {
        Self {
            id: 0,
            task_id,
            duration_min,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
