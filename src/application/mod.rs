pub mod journal;
pub mod quote;
pub mod report;
pub mod statistics;
pub mod trade;
