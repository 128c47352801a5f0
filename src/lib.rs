pub mod action;
pub mod app;
pub mod config;
pub mod event;
pub mod format;
pub mod logging;
pub mod presentation;
pub mod stats;
pub mod ui;
pub mod usage;
