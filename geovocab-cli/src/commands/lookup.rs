//! Store-backed lookup commands.
//!
//! Each command builds the service through [`CliRunner`], runs one
//! operation and prints the response envelope.

use geovocab::service::HealthReport;

use crate::commands::common::{finish, print_json};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Print the three words for a coordinate.
pub fn run_words(runner: &CliRunner, lat: &str, lon: &str) -> Result<(), CliError> {
    runner.log_startup("words");
    let service = runner.create_service()?;
    finish(service.words_for_coordinates(lat, lon))
}

/// Print the coordinate for a phrase.
pub fn run_locate(runner: &CliRunner, phrase: &str) -> Result<(), CliError> {
    runner.log_startup("locate");
    let service = runner.create_service()?;
    finish(service.location_for_words(phrase))
}

/// Register a premium phrase.
pub fn run_premium(runner: &CliRunner, geohash: &str, phrase: &str) -> Result<(), CliError> {
    runner.log_startup("premium");
    let service = runner.create_service()?;
    finish(service.register_premium(geohash, phrase))
}

/// Print the word for one segment.
pub fn run_segment(runner: &CliRunner, segment: &str) -> Result<(), CliError> {
    runner.log_startup("segment");
    let service = runner.create_service()?;
    finish(service.find_segment(segment))
}

/// Print one page of segment mappings.
pub fn run_list(runner: &CliRunner, page: usize, per_page: Option<usize>) -> Result<(), CliError> {
    runner.log_startup("list");
    let service = runner.create_service()?;
    finish(service.list_segments(page, per_page))
}

/// Print the health report.
///
/// A dictionary that cannot be loaded is reported as unhealthy rather than
/// as a startup error.
pub fn run_health(runner: &CliRunner) -> Result<(), CliError> {
    runner.log_startup("health");
    let report = match runner.create_service() {
        Ok(service) => service.health(),
        Err(e) => {
            print_json(&HealthReport::unavailable(e.to_string()))?;
            return Err(e);
        }
    };

    print_json(&report)?;
    if report.is_healthy() {
        Ok(())
    } else {
        Err(CliError::RequestFailed {
            status: 503,
            message: "Service is unhealthy".to_string(),
        })
    }
}
