//! Core application logic: state management, event handling, and run scheduling.

pub mod action;
pub mod event;
pub mod handler;
pub mod scheduler;
pub mod state;
