//! Archaudit - pre-submission architecture audit for app bundles.

pub mod auditor;
pub mod inspector;
pub mod parsers;
pub mod scanner;
pub mod symbols;
