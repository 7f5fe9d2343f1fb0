//! Route handlers

pub mod root;
