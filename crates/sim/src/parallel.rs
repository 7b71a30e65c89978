// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel simulation.
use log::debug;
use rand::prelude::*;
use std::{panic, thread};

use crate::{EquityReport, SimError, Simulation};

impl Simulation {
    /// Runs `trials` trials split between `num_tasks` parallel tasks.
    ///
    /// Each task uses its own random generator seeded from `seed` and keeps
    /// its own report, the reports are merged when all tasks are done.
    ///
    /// Panics if `num_tasks` is zero.
    pub fn par_run(&self, num_tasks: usize, trials: u64, seed: u64) -> Result<EquityReport, SimError> {
        assert!(num_tasks > 0);

        let mut seeder = StdRng::seed_from_u64(seed);
        let seeds = (0..num_tasks).map(|_| seeder.random()).collect::<Vec<u64>>();

        let tasks = num_tasks as u64;
        let trials_per_task = trials / tasks;
        let extra_trials = trials % tasks;

        let reports = thread::scope(|s| {
            let handles = seeds
                .into_iter()
                .enumerate()
                .map(|(task_id, seed)| {
                    let task_trials = trials_per_task + u64::from((task_id as u64) < extra_trials);
                    s.spawn(move || {
                        let mut rng = SmallRng::seed_from_u64(seed);
                        let report = self.run(task_trials, &mut rng);
                        debug!("Task {task_id} completed {task_trials} trials");
                        report
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .collect::<Vec<_>>()
        });

        let mut report = EquityReport::new(self.hands().len());
        for task_report in reports {
            report.merge(task_report?);
        }

        Ok(report)
    }
}
