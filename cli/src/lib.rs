pub mod driver;
pub mod report;
pub mod scan;
