use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use csf::config::CSFConfig;
use csf::io;
use csf::io::cli::Cli;
use csf::io::layout_to_svg::layout_to_svg;
use csf::io::output::{self, CloudOutput};
use csf::opt::CSFOptimizer;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let mut config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CSFConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    if let Some(strategy) = args.strategy {
        info!("[MAIN] strategy overridden from the command line: {strategy:?}");
        config.strategy = strategy;
    }

    info!("Successfully parsed CSFConfig: {config:?}");

    let input_file_stem = args.input_file.file_stem().unwrap().to_str().unwrap();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = io::ext_repr::import(&ext_instance, config.canvas()?)?;

    let rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let solution = CSFOptimizer::new(instance.clone(), config.clone(), rng).solve()?;

    {
        let mut ext_solution = output::export(&instance, &solution);
        output::apply_word_colors(&mut ext_solution, &ext_instance.words);

        let output = CloudOutput {
            instance: ext_instance,
            solution: ext_solution,
            config: config.clone(),
        };

        let solution_path = args.solution_folder.join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    {
        let svg_path = args.solution_folder.join(format!("sol_{input_file_stem}.svg"));
        let svg = layout_to_svg(
            &solution.layout,
            &instance,
            &config.svg_draw_options,
            &config.font_family,
        );
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    Ok(())
}
