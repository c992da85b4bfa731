pub mod careers;
pub mod projects;
