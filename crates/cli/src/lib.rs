//! `catalog` command-line front end.

pub mod report;
