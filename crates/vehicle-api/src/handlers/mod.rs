//! HTTP request handlers

pub mod vehicle;
