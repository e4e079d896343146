pub mod cases;
pub mod catalog;
pub mod milestones;
pub mod projects;
