//! Pickup planning use case.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{Airport, EstimationResult, FlightNumber};
use crate::error::Result;

/// Raw caller input. Validation happens inside the planner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickupRequest {
    pub flight: String,
    pub address: String,
    pub airport_busy: String,
    pub holiday: String,
    pub checked_bags: String,
}

/// Outcome of one successful planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupPlan {
    pub flight: FlightNumber,
    pub airport: Airport,
    pub estimate: EstimationResult,
}

/// Turns a pickup request into a recommended departure time.
#[async_trait]
pub trait PlanPickup: Send + Sync {
    /// # Errors
    ///
    /// Input problems are reported before any provider is contacted. Provider
    /// failures and timeouts fail the whole request; no partial plan is
    /// returned.
    async fn plan(&self, request: PickupRequest) -> Result<PickupPlan>;
}
