// Library for tests to access modules

pub mod aggregator;
pub mod config;
pub mod error;
pub mod live;
pub mod models;
pub mod parser;
pub mod present;
pub mod series;
pub mod sysinfo_repo;
pub mod units;
pub mod vnstat_repo;
