//! PrintLens Core - printing-step records for job-tracking dashboards
//!
//! This crate fetches printing-step records from the job-tracking REST API,
//! normalizes their heterogeneous shapes into one record type, and computes
//! summary statistics over them. The implementation prioritizes:
//!
//! 1. **No record loss** - every raw step item yields exactly one record
//! 2. **Logging** - every fetch logged with its request id
//! 3. **Testability** - storage and transport are injected
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `extraction` - JSON path lookup and ordered fallback chains
//! - `models` - Printing records, summary, API envelope
//! - `normalization` - Raw step item to printing record
//! - `aggregation` - Summary statistics
//! - `retrieval` - API client and HTTP transport
//! - `storage` - Key-value storage and the job notification queue
//! - `logging` - Structured logging with request context
//! - `config` - Client configuration
//! - `error` - Error types

pub mod aggregation;
pub mod config;
pub mod error;
pub mod extraction;
pub mod logging;
pub mod models;
pub mod normalization;
pub mod retrieval;
pub mod storage;

pub use aggregation::summarize;
pub use config::ClientConfig;
pub use error::{RetrievalError, RetrievalResult, StoreError, StoreResult};
pub use logging::init_logger;
pub use models::{PrintingRecord, PrintingStatus, PrintingSummary};
pub use normalization::{normalize_step_record, normalize_step_records, NormalizeContext};
pub use retrieval::{HttpTransport, PrintingDetailsClient, ReqwestTransport, TransportResponse};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore, NotificationQueue};
