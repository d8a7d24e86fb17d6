//! Typed screenboard documents and a gateway to the Datadog screenboard API.
//!
//! Boards are built from [`domain`] widgets, mapped to the wire format by
//! [`infrastructure::json_mapper`] and stored remotely through any
//! [`application::screenboard_repository::ScreenboardRepository`], of which
//! [`infrastructure::datadog_gateway::DataDogScreenboardGateway`] is the HTTP
//! implementation.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{Error, Result};
