// Service module exports

pub mod calendar;
pub mod database;
pub mod event;
pub mod filter;
pub mod label;
pub mod session;
pub mod settings;
pub mod storage;
