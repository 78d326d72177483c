pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod table;

// Re-exported for the callers that only need duration rendering.
pub use formatting::mins2readable;
