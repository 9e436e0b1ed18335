pub mod assignment_writer;
pub mod usage_writer;
