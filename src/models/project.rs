use chrono::{Local, NaiveDate};

/// A billable unit of work for a client.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i32,
    pub client_id: i32,        // ⇔ projects.client_id (FK → clients.id)
    pub name: String,
    pub description: String,
    pub estimated_min: i64,    // ⇔ projects.estimated_min (whole minutes)
    pub hourly_rate: f64,
    pub fixed_price: f64,
    pub created_at: String,    // ⇔ projects.created_at (TEXT, ISO8601)
    pub deadline: NaiveDate,   // ⇔ projects.deadline (TEXT "YYYY-MM-DD")
}

impl Project {
    /// High-level constructor for projects created from the CLI.
    /// Stamps `created_at = now()` and leaves `id = 0` for the store.
    pub fn new(
        client_id: i32,
        name: &str,
        description: &str,
        estimated_min: i64,
        hourly_rate: f64,
        fixed_price: f64,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id: 0,
            client_id,
            name: name.to_string(),
            description: description.to_string(),
            estimated_min,
            hourly_rate,
            fixed_price,
            created_at: Local::now().to_rfc3339(),
            deadline,
        }
    }

    pub fn deadline_str(&self) -> String {
        self.deadline.format("%Y-%m-%d").to_string()
    }
}
