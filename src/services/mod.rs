pub mod queue;
pub mod uploads;
pub mod worker;
