//! Task management service with inferred priorities and work timers.
//!
//! This crate provides:
//! - A short-text intent classifier trained on example utterances
//! - Priority resolution with a confidence-gated medium default
//! - A per-task work-timer state machine with start/stop semantics
//! - Task orchestration over a pluggable storage trait
//! - An axum HTTP server exposing the service

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod classifier;
pub mod config;
pub mod entities;
pub mod errors;
pub mod priority;
pub mod server;
pub mod service;
pub mod storage;
pub mod timer;

pub use classifier::{
    default_training_set, Classification, Intent, IntentClassifier, TrainingExample,
};
pub use config::Config;
pub use entities::{Task, TaskPriority};
pub use errors::{TaskError, TaskResult};
pub use priority::PriorityResolver;
pub use server::{build_router, AppState};
pub use service::{StopOutcome, TaskService};
pub use storage::{MemoryStorage, Storage};
pub use timer::{TimerState, WorkTimer};
