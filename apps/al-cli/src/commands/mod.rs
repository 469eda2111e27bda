pub mod check;
pub mod log;
pub mod read;
pub mod scan;
