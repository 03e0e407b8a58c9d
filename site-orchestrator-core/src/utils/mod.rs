//! Utility functions

pub mod subdomain;
