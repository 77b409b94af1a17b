pub mod cli;
pub mod config;
pub mod ingest;
pub mod report;
pub mod room;
pub mod shell;
