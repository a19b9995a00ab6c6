//! MindMyMoney - terminal-based personal expense tracker
//!
//! Records expenditures, credit cards and income typed into a line-oriented
//! shell, and breaks spending down by category for a day, month or year.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, records)
//! - `parser`: Flag tokenizer, field validators and date grammar
//! - `storage`: In-memory record lists
//! - `services`: Add / update / delete over a record list
//! - `reports`: Spending breakdown by category
//! - `display`: Terminal formatting
//! - `cli`: Command dispatch and the shell
//!
//! # Example
//!
//! ```rust
//! use mindmymoney::cli::execute_line;
//! use mindmymoney::config::Settings;
//! use mindmymoney::storage::Storage;
//!
//! let settings = Settings::default();
//! let mut storage = Storage::new();
//! execute_line("add /pm cash /c Food /d porridge /a 5 /t 01/04/2022", &mut storage, &settings).unwrap();
//! assert_eq!(storage.expenditures.len(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod parser;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
