pub mod extract;
pub mod fetch;
pub mod map;
pub mod report;
