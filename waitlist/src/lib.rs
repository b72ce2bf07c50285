//! # dharalink-waitlist
//!
//! Everything the DharaLink landing page needs to turn a half-typed waitlist
//! form into a row in the spreadsheet webhook, minus the browser.
//!
//! There is no `web-sys` here: the landing crate supplies the browser
//! through the [`Transport`] trait and a [`ClientContext`].
//!
//! ## Quick Start
//!
//! ```rust
//! use dharalink_waitlist::{Field, WaitlistForm, validate_form};
//!
//! let mut form = WaitlistForm::default();
//! form.set(Field::FullName, "Asha Rao");
//! form.set(Field::Email, "not-an-email");
//! form.set(Field::State, "Telangana");
//!
//! let errors = validate_form(&form);
//! assert_eq!(errors.get(Field::Email), Some("Please enter a valid email address"));
//! ```
//!
//! ## Architecture
//!
//! - [`form`] - the fields and the in-progress form record
//! - [`validate`] - form-level checks and the four submission rules
//! - [`submission`] - the normalized JSON payload and webhook reply
//! - [`submit`] - the [`Transport`] seam and the two-mode submit flow
//! - [`error`] - error types and user-facing message classification
//! - [`status`] - the idle/loading/success/error flag the view renders
//! - [`config`] - webhook endpoint and default copy
//!
//! Developed by The DharaLink Team (c)2025

pub mod config;
pub mod error;
pub mod form;
pub mod status;
pub mod submission;
pub mod submit;
pub mod validate;

pub use config::WaitlistConfig;
pub use error::{SubmitError, TransportError, ValidationError, classify_message};
pub use form::{Field, WaitlistForm};
pub use status::SubmitStatus;
pub use submission::{ClientContext, Submission, SubmitOutcome, WebhookReply};
pub use submit::{FetchMode, Transport, TransportReply, submit};
pub use validate::{FieldErrors, check_submission, parse_number, validate_form};
