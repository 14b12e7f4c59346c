//! Workload Driver
//!
//! Synthetic employee workload that exercises a cache and reports fault rates.
//!
//! # Phases
//! 1. Mixed: insert a new employee, read a random earlier one, overwrite a random earlier one
//! 2. Reads: read random employees from the whole key range
//! 3. Resized: remove a batch, reset stats, resize, then run the mixed phase with removals

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::backing::BackingStore;
use crate::cache::Cacheable;
use crate::config::Config;
use crate::error::Result;
use crate::report::StatsReport;
use crate::shared::SharedCache;

/// Keys removed between the read phase and the resized phase
pub const REMOVAL_BATCH: usize = 30;

/// Upper bound (exclusive) of generated salaries
const MAX_SALARY: u32 = 200_000;

// == Employee ==
/// Workload item keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub name: String,
    pub annual_salary: u32,
}

impl Employee {
    pub fn new(name: impl Into<String>, annual_salary: u32) -> Self {
        Self {
            name: name.into(),
            annual_salary,
        }
    }
}

impl Cacheable for Employee {
    type Key = String;

    fn key(&self) -> String {
        self.name.clone()
    }
}

/// Name of the `index`-th employee.
pub fn employee_name(index: usize) -> String {
    format!("name{}", index)
}

// == Summary ==
/// Fault rates observed at the end of each phase, plus the final report.
#[derive(Debug, Clone, Serialize)]
pub struct WorkloadSummary {
    pub mixed_fault_rate_percent: f64,
    pub read_fault_rate_percent: f64,
    pub resized_fault_rate_percent: f64,
    pub removed: usize,
    pub report: StatsReport,
}

// == Driver ==
/// Runs the three workload phases against `cache`.
pub async fn run_workload<S>(
    config: &Config,
    cache: &SharedCache<Employee, S>,
) -> Result<WorkloadSummary>
where
    S: BackingStore<Employee>,
{
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(rounds = config.rounds, capacity = config.capacity, "Starting mixed phase");
    cache.set_capacity(config.capacity).await;
    let mixed = mixed_phase(cache, config.rounds, &mut rng, false).await?;
    info!(fault_rate = mixed.fault_rate, "Mixed phase complete");

    let resident = cache.keys().await;
    info!(count = resident.len(), keys = ?resident, "Resident keys");

    for _ in 0..config.rounds {
        let name = employee_name(rng.gen_range(0..config.rounds.max(1)));
        if let Some(employee) = cache.get(&name).await? {
            debug!(name = %employee.name, salary = employee.annual_salary, "Read employee");
        }
        let fault_rate = cache.fault_rate_percent().await;
        debug!(fault_rate, "Read round");
    }
    let read_fault_rate = cache.fault_rate_percent().await;
    info!(fault_rate = read_fault_rate, "Read phase complete");

    let mut removed = 0;
    for i in 0..REMOVAL_BATCH {
        let name = employee_name(rng.gen_range(0..i.max(1)));
        if cache.remove(&name).await?.is_some() {
            removed += 1;
        }
    }
    cache.reset_stats().await;
    cache.set_capacity(config.resized_capacity).await;
    info!(removed, capacity = config.resized_capacity, "Starting resized phase");

    let resized = mixed_phase(cache, config.rounds, &mut rng, true).await?;
    removed += resized.removed;
    info!(fault_rate = resized.fault_rate, "Resized phase complete");

    let report = cache.with_cache(|c| StatsReport::from_cache(&*c)).await;
    Ok(WorkloadSummary {
        mixed_fault_rate_percent: mixed.fault_rate,
        read_fault_rate_percent: read_fault_rate,
        resized_fault_rate_percent: resized.fault_rate,
        removed,
        report,
    })
}

struct PhaseOutcome {
    fault_rate: f64,
    removed: usize,
}

async fn mixed_phase<S>(
    cache: &SharedCache<Employee, S>,
    rounds: usize,
    rng: &mut StdRng,
    with_removals: bool,
) -> Result<PhaseOutcome>
where
    S: BackingStore<Employee>,
{
    let mut removed = 0;

    for i in 0..rounds {
        cache
            .put(Employee::new(employee_name(i), rng.gen_range(0..MAX_SALARY)))
            .await?;

        let name = employee_name(rng.gen_range(0..i.max(1)));
        if let Some(employee) = cache.get(&name).await? {
            debug!(name = %employee.name, salary = employee.annual_salary, "Read employee");
        }

        let name = employee_name(rng.gen_range(0..i.max(1)));
        cache
            .put(Employee::new(name, rng.gen_range(0..MAX_SALARY)))
            .await?;

        if with_removals {
            let name = employee_name(rng.gen_range(0..i.max(1)));
            if cache.remove(&name).await?.is_some() {
                removed += 1;
            }
        }

        let fault_rate = cache.fault_rate_percent().await;
        debug!(round = i, fault_rate, "Mixed round");
    }

    Ok(PhaseOutcome {
        fault_rate: cache.fault_rate_percent().await,
        removed,
    })
}
