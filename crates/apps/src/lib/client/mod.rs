pub mod dashboard;
pub mod drafts;
pub mod queries;
