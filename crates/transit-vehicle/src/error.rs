use thiserror::Error;

use transit_core::{RouteId, VehicleId};

#[derive(Debug, Error)]
pub enum VehicleError {
    #[error("route {0} not found in fleet")]
    UnknownRoute(RouteId),

    #[error("vehicle {0} not found in fleet")]
    UnknownVehicle(VehicleId),
}

pub type VehicleResult<T> = Result<T, VehicleError>;
