//! Service layer for studymate
//!
//! Centralizes the submit pipeline and history access between the HTTP/CLI
//! surfaces and the storage/completion crates.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod caller;
mod error;
mod history_service;
mod history_view;
mod request;
mod sequencer;
mod study_service;
#[cfg(test)]
mod test_support;

pub use caller::Caller;
pub use error::ServiceError;
pub use history_service::HistoryService;
pub use history_view::HistoryView;
pub use request::{StudyRequest, StudyResponse};
pub use sequencer::{SubmissionSequencer, SubmissionTicket};
pub use study_service::StudyService;
