//! Daycare ledger - record keeping for a small childcare business
//!
//! This library provides the core functionality of the `daycare` command:
//! income and expense tracking with receipt attachments, child enrollment
//! and employee records, daily attendance for both, and the financial
//! reports built on top of the ledger.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, profiles, attendance, etc.)
//! - `storage`: SQLite storage layer
//! - `services`: Business logic layer
//! - `reports`: Profit and loss, balance sheet, cash flow and tax summary
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use daycare::config::{paths::DaycarePaths, settings::Settings};
//! use daycare::storage::Storage;
//!
//! let paths = DaycarePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{DaycareError, DaycareResult};
