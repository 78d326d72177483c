use chrono::Local;

/// A unit of work inside a project, classified by status and type.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i32,
    pub project_id: i32,       // ⇔ tasks.project_id (FK → projects.id)
    pub name: String,
    pub description: String,
    pub estimated_min: i64,
    pub status_id: i32,        // ⇔ tasks.status_id (FK → task_statuses.id)
    pub type_id: i32,          // ⇔ tasks.type_id (FK → task_types.id)
    pub created_at: String,    // ⇔ tasks.created_at (TEXT, ISO8601)
}

impl Task {
    pub fn new(
        project_id: i32,
        name: &str,
        description: &str,
        estimated_min: i64,
        status_id: i32,
        type_id: i32,
    ) -> Self {
        Self {
            id: 0,
            project_id,
            name: name.to_string(),
            description: description.to_string(),
            estimated_min,
            status_id,
            type_id,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
