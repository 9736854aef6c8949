//! Orchestration for running registered health checks

use std::time::Instant;

use super::check::{CheckResult, CheckStatus, SystemCheck};

/// Results from running a health check suite
#[derive(Debug)]
pub struct HealthCheckReport {
    /// Individual check results with their system names
    pub results: Vec<(String, CheckResult)>,
    /// Total number of checks run
    pub total: usize,
    /// Number of passing checks
    pub passed: usize,
    /// Number of checks with warnings
    pub warned: usize,
    /// Number of failing checks
    pub failed: usize,
}

impl HealthCheckReport {
    /// Returns true if all checks passed (no failures)
    pub fn is_healthy(&self) -> bool {
        self.failed == 0
    }

    /// Returns true if there are any warnings
    pub fn has_warnings(&self) -> bool {
        self.warned > 0
    }

    /// Returns the appropriate exit code for this report
    /// 0 = all pass, 1 = any fail, 2 = any warn (but no fail)
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 {
            1
        } else if self.warned > 0 {
            2
        } else {
            0
        }
    }
}

/// Collects checks, runs them in registration order, and tallies results
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl HealthCheckRunner {
    /// Creates a new runner with no checks
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Adds a check to the runner
    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Runs all registered checks and returns a report
    pub fn run(self) -> HealthCheckReport {
        let results: Vec<(String, CheckResult)> = self
            .checks
            .into_iter()
            .map(|check| {
                let name = check.name().to_string();
                let start = Instant::now();
                let result = check.check().with_duration(start.elapsed());
                (name, result)
            })
            .collect();

        let count = |status: CheckStatus| {
            results
                .iter()
                .filter(|(_, r)| r.status == status)
                .count()
        };

        HealthCheckReport {
            total: results.len(),
            passed: count(CheckStatus::Pass),
            warned: count(CheckStatus::Warn),
            failed: count(CheckStatus::Fail),
            results,
        }
    }
}

impl Default for HealthCheckRunner {
    fn default() -> Self {
        Self::new()
    }
}
