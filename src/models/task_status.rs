/// Lookup row: the workflow state a task is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStatus {
    pub id: i32,
    pub label: String,
}
