//! Client-side abstraction over the interop platform's RPC primitives.
//!
//! The platform itself — transport, framing, delivery — is a black box that
//! exposes exactly two primitives to this SDK:
//!
//! - **invoke**: call a named remote method with a JSON argument object and
//!   get back its `returned` object.
//! - **register**: register a named callback endpoint the platform invokes
//!   later with a JSON payload.
//!
//! Both are modeled by the [`InteropApi`] trait; concrete bindings to a
//! running platform implement it, and tests substitute in-memory fakes.
//!
//! On top of `register` sits the part with an actual contract: the platform
//! supports only a limited number of named endpoints, so every subscription
//! of a service shares one endpoint and the [`CallbackRouter`] fans inbound
//! notifications back out to the right local handler by correlation
//! identifier.

pub mod api;
pub mod error;
pub mod router;

pub use api::{EndpointHandler, InteropApi, Invocation};
pub use error::{InteropError, Result};
pub use router::{CallbackHandler, CallbackRouter};
