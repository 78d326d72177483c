use chrono::Local;

/// Time logged directly against a project, outside any task.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectEntry {
    pub id: i32,
    pub project_id: i32,
    pub duration_min: i64,
    pub billable: bool,     // ⇔ project_entries.billable (INTEGER 0/1)
    pub created_at: String, // ⇔ project_entries.created_at (TEXT, ISO8601)
}

impl ProjectEntry {
    pub fn new(project_id: i32, duration_min: i64, billable: bool) -> Self {
        Self {
            id: 0,
            project_id,
            duration_min,
            billable,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
