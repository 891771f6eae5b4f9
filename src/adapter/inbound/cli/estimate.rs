//! Handler for `curbside estimate`.

use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::http::response::LeaveTimeResponse;
use crate::error::Result;
use crate::infrastructure::config::{Config, Credentials};
use crate::infrastructure::factory::build_planner;
use crate::port::{PickupRequest, PlanPickup};

/// Build a planner from `config` and print one estimate.
pub async fn execute(config: &Config, credentials: &Credentials, request: PickupRequest) -> Result<()> {
    let planner = build_planner(config, credentials)?;
    execute_with(&planner, request).await
}

/// Print one estimate produced by `planner`.
pub async fn execute_with(planner: &dyn PlanPickup, request: PickupRequest) -> Result<()> {
    let pb = output::spinner(&format!("Looking up {}", request.flight.trim()));
    let plan = match planner.plan(request).await {
        Ok(plan) => plan,
        Err(e) => {
            output::spinner_fail(&pb, &e.detail());
            return Err(e);
        }
    };
    output::spinner_success(
        &pb,
        &format!("{} lands at {}", plan.flight, plan.airport.label()),
    );

    let response = LeaveTimeResponse::from(&plan);
    if output::is_json() {
        output::json_output(serde_json::to_value(&response)?);
        return Ok(());
    }

    let details = &response.details;
    output::section("When to leave");
    output::field("Leave at", output::highlight(&details.display.leave_time));
    output::field("Arrival", &details.display.arrival_time);
    output::field("Curbside", &details.display.airport_exit_time);
    output::field("Drive", format!("{} min", details.drive_time_minutes));
    output::field("Buffer", format!("{} min", details.buffer_minutes));
    output::field("Timezone", output::muted(&details.airport.timezone));
    if details.is_past {
        output::warning("That time has already passed. Leave as soon as you can.");
    }
    Ok(())
}
