//! Generative API client: prompt + optional output schema in, text out.
//!
//! The client owns retry/backoff for rate-limited calls, response
//! validation (safety rejections, empty candidates), and an explicit
//! degraded mode when no API credential is configured.

mod client;
mod retry;
mod schema;

pub use client::{
    GenClient, GenConfig, GenError, GenMode, Generated, Generator, HttpTransport, RawResponse,
    Transport,
};
pub use retry::RetryPolicy;
pub use schema::Schema;
