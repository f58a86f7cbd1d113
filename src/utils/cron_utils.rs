//! Cron expression helpers.
//!
//! Schedules use the seconds-resolution form (`sec min hour dom month dow`)
//! accepted by the job scheduler.

use cron::Schedule;
use std::str::FromStr;

/// Checks that `expression` parses as a six or seven field cron schedule
pub fn validate_cron_expression(expression: &str) -> Result<(), String> {
	Schedule::from_str(expression)
		.map(|_| ())
		.map_err(|e| format!("Invalid cron expression '{}': {}", expression, e))
}
