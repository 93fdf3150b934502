//! # genloop
//!
//! Retry-until-valid execution engine for LLM content generation.
//!
//! An unreliable, non-deterministic producer (typically a language-model
//! call) is invoked repeatedly until its output passes a strict validator,
//! with bounded attempts and exponential backoff between failures. The
//! engine's core guarantee: no fallback or synthesized default content is
//! ever returned as if it were valid. The outcome is either a
//! validator-accepted candidate or a terminal error carrying the full
//! diagnostic report.
//!
//! The engine knows nothing about prompts, transports, or what is being
//! generated. It consumes two functional contracts: an argument-less
//! asynchronous producer, and a synchronous pure validator mapping a
//! candidate to a [`outcome::ValidationOutcome`]. Validators for common
//! shapes ship in [`validate`] (placeholder/length scanning over arbitrary
//! nested content) and [`schema`] (JSON Schema).
//!
//! ## Example
//!
//! ```no_run
//! use genloop::prelude::*;
//! use serde_json::{json, Value};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let policy = RetryPolicy::default().with_max_attempts(3);
//!
//! let premise = retry_with_validation(
//!     || async {
//!         // Call your model here; parse failures are retryable.
//!         let raw = r#"{ "premise": "A lighthouse keeper finds a tide that remembers" }"#;
//!         let value: Value = serde_json::from_str(raw)?;
//!         Ok(value)
//!     },
//!     |value: &Value| validate_required_fields(value, &["premise"]),
//!     &policy,
//!     "episode_premise",
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod error;
pub mod observer;
pub mod outcome;
pub mod patterns;
pub mod policy;
pub mod schema;
pub mod validate;

/// Commonly used types and functions.
pub mod prelude {
    pub use crate::engine::{retry_with_validation, with_retry_validation, RetryEngine};
    pub use crate::error::{ProducerError, RetryError};
    pub use crate::observer::{AttemptObserver, NoOpObserver, TracingObserver};
    pub use crate::outcome::ValidationOutcome;
    pub use crate::policy::RetryPolicy;
    pub use crate::schema::schema_validator;
    pub use crate::validate::{
        validate_content, validate_name_list, validate_required_fields, NameCategory,
    };
}
