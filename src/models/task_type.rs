/// Lookup row: the kind of work a task represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskType {
    pub id: i32,
    pub label: String,
}
