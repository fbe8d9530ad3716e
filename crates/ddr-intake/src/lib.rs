//! Lead-capture intake for the DDR governance testing program.
//!
//! [`intake`] is the server side: it validates an application, renders the
//! notification e-mail, and hands it to the e-mail provider. [`form`] is the
//! applicant side: field state plus the idle/submitting/success/error cycle
//! that drives one request to the endpoint.

pub mod config;
pub mod error;
pub mod form;
pub mod intake;
pub mod telemetry;
