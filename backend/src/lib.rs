//! Conference stay backend library.
//!
//! An authenticated HTTP API exposing hotel and room listings to users who
//! hold a paid, in-person conference ticket. The access-eligibility policy
//! lives in [`domain`]; transport and storage details stay behind the
//! inbound and outbound adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

pub use doc::ApiDoc;
pub use middleware::Trace;
