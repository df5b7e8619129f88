//! Command handlers

pub mod calendar;
pub mod config;
pub mod entry;
pub mod home;
pub mod mood;
