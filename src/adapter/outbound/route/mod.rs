//! Drive time adapters.
//!
//! [`GoogleDistanceMatrix`] asks Google for a traffic-aware estimate;
//! [`FixedRoute`] answers with a configured constant when no maps
//! credential is available.

pub mod fixed;
pub mod google;

pub use fixed::FixedRoute;
pub use google::GoogleDistanceMatrix;

use crate::error::{Error, LookupError};

fn unresolvable(reason: impl Into<String>) -> Error {
    Error::Lookup(LookupError::RouteUnresolvable {
        reason: reason.into(),
    })
}
