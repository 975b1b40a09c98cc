// Month Planner library
// Month grid, event store and label filtering behind a headless session

pub mod models;
pub mod services;
pub mod utils;
