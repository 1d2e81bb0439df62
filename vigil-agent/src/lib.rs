//! Vigil Agent
//!
//! An idle agent for PostgreSQL: wakes on a fixed interval, runs a set of
//! watch queries, and hands each decoded row to a caller-supplied action.
//!
//! Architecture:
//! - Configuration: intervals, parallelism, and connection settings from
//!   the environment or builder methods
//! - Database: pool construction with capped-backoff connect retry
//! - Watches: a query paired with a per-row action, generic over any
//!   `sqlx::FromRow` row type
//! - Poller: the interval loop that runs all watches each cycle and routes
//!   failures to an error hook
//!
//! Query failures never stop the loop; they are reported through the error
//! hook and the agent tries again on the next tick.

pub mod config;
pub mod db;
pub mod error;
pub mod poller;
pub mod watch;

pub use config::AgentConfig;
pub use error::{AgentError, Result};
pub use poller::IdleAgent;
pub use watch::{TypedWatch, Watch};
