use crate::config::{CSFConfig, StrategyKind};
use anyhow::Result;
use cumulus::entities::CloudInstance;
use cumulus::metrics::HeuristicMeasurer;
use cumulus::place::{CornerSpaceEngine, GoldenAngleEngine, SpiralEngine};
use cumulus::search::{CloudSolution, search};
use rand::prelude::SmallRng;
use std::time::Instant;

/// Corner-Space-Fill optimizer: wraps the scale search with the configured
/// placement strategy and the built-in text measurer.
pub struct CSFOptimizer {
    pub instance: CloudInstance,
    pub config: CSFConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
}

impl CSFOptimizer {
    pub fn new(instance: CloudInstance, config: CSFConfig, rng: SmallRng) -> Self {
        Self {
            instance,
            config,
            rng,
        }
    }

    pub fn solve(self) -> Result<CloudSolution> {
        let start = Instant::now();
        let cloud_config = self.config.cloud_config();
        let opts = self.config.place_options();
        opts.validate()?;
        let measurer = HeuristicMeasurer;

        let solution = match self.config.strategy {
            StrategyKind::CornerSpace => {
                let mut strategy = CornerSpaceEngine::new(opts, self.rng);
                search(&self.instance, &cloud_config, &measurer, &mut strategy)?
            }
            StrategyKind::Spiral => {
                let mut strategy = SpiralEngine::new(opts, self.rng);
                search(&self.instance, &cloud_config, &measurer, &mut strategy)?
            }
            StrategyKind::GoldenAngle => {
                let mut strategy = GoldenAngleEngine::new(opts, self.rng);
                search(&self.instance, &cloud_config, &measurer, &mut strategy)?
            }
        };

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        log::info!("[CSF] optimization finished in {elapsed_ms:.3}ms");
        log::info!(
            "[CSF] placed {}/{} words at scale {:.2} with a coverage of {:.1}%",
            solution.layout.placements.len(),
            self.instance.n_labels(),
            solution.scale,
            solution.layout.coverage() * 100.0
        );

        Ok(solution)
    }
}
