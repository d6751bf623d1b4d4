//! Simulation engine: owned state, limit evaluation, event insertion, and
//! the top-level trip driver.

/// Mandatory interruption routines (break, fuel, rest, restart).
pub mod events;
/// Driving-limit computation and binding-rule selection.
pub mod limits;
/// Top-level `plan` entry point and per-leg driving loop.
pub mod driver;
/// The single midnight-aware segment recording primitive.
pub mod recorder;
/// Owned simulation state.
pub mod state;

pub use driver::plan;

/// Maximum driving hours in one shift.
pub const MAX_DRIVING_PER_SHIFT: f64 = 11.0;
/// Maximum wall-clock hours from shift start until driving must end.
pub const MAX_DUTY_WINDOW: f64 = 14.0;
/// Maximum consecutive driving hours before a 30-minute break is required.
pub const DRIVING_BEFORE_BREAK: f64 = 8.0;
/// Duration of the mandatory break.
pub const BREAK_DURATION: f64 = 0.5;
/// Duration of the mandatory consolidated off-duty rest.
pub const REST_DURATION: f64 = 10.0;
/// Maximum on-duty hours in the rolling 8-day cycle.
pub const MAX_CYCLE_HOURS: f64 = 70.0;
/// Duration of the cycle restart.
pub const CYCLE_RESTART_DURATION: f64 = 34.0;
/// Distance between mandatory fuel stops.
pub const FUEL_INTERVAL_MILES: f64 = 1000.0;
/// Duration of a fuel stop.
pub const FUEL_STOP_DURATION: f64 = 0.5;
/// Duration of on-duty pickup/dropoff work.
pub const PICKUP_DROPOFF_DURATION: f64 = 1.0;
/// Duration of a pre-trip inspection.
pub const PRETRIP_INSPECTION_DURATION: f64 = 0.5;
/// Hour of day the first shift begins.
pub const SHIFT_START_HOUR: f64 = 6.0;
/// Average road speed used for mile/time back-projection.
pub const AVG_SPEED_MPH: f64 = 65.0;
/// Tolerance below which a remaining allowance is treated as zero.
pub const EPSILON: f64 = 0.01;
/// Soft guard on the main driving loop to catch runaway simulations.
pub const MAX_ITERATIONS: usize = 10_000;
