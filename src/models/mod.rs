pub mod outcome;
pub mod queue;
pub mod record;
