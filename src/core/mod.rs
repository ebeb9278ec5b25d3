pub mod form;
pub mod groups;
pub mod recurrence;
pub mod task;
pub mod week;
