#[cfg(test)]
mod tests {
    use std::path::Path;

    use csf::config::{CSFConfig, StrategyKind};
    use csf::io;
    use csf::io::ext_repr;
    use csf::io::output;
    use csf::opt::CSFOptimizer;
    use cumulus::util::assertions;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    #[test_case("../assets/survey.json"; "survey")]
    #[test_case("../assets/crowded.json"; "crowded")]
    #[test_case("../assets/single.json"; "single")]
    fn test_instance(instance_path: &str) {
        let config = CSFConfig::default();
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let instance = ext_repr::import(&ext_instance, config.canvas().unwrap()).unwrap();

        let solution = CSFOptimizer::new(instance.clone(), config, SmallRng::seed_from_u64(0))
            .solve()
            .unwrap();

        assert!(solution.complete, "{instance_path} should fit completely");
        assert!(assertions::placements_within_canvas(&solution.layout));
        assert!(assertions::placements_disjoint(&solution.layout));
    }

    #[test_case(StrategyKind::CornerSpace; "corner space")]
    #[test_case(StrategyKind::Spiral; "spiral")]
    #[test_case(StrategyKind::GoldenAngle; "golden angle")]
    fn strategies_produce_valid_layouts(strategy: StrategyKind) {
        let config = CSFConfig {
            strategy,
            ..CSFConfig::default()
        };
        let ext_instance = io::read_instance(Path::new("../assets/survey.json")).unwrap();
        let instance = ext_repr::import(&ext_instance, config.canvas().unwrap()).unwrap();

        let solution = CSFOptimizer::new(instance, config, SmallRng::seed_from_u64(7))
            .solve()
            .unwrap();

        assert!(solution.complete);
        assert!(assertions::placements_within_canvas(&solution.layout));
        assert!(assertions::placements_disjoint(&solution.layout));
    }

    #[test]
    fn same_seed_gives_identical_output() {
        let config = CSFConfig::default();
        let ext_instance = io::read_instance(Path::new("../assets/survey.json")).unwrap();
        let instance = ext_repr::import(&ext_instance, config.canvas().unwrap()).unwrap();

        let solve = || {
            let optimizer = CSFOptimizer::new(
                instance.clone(),
                config.clone(),
                SmallRng::seed_from_u64(42),
            );
            let solution = optimizer.solve().unwrap();
            output::export(&instance, &solution)
        };

        let (a, b) = (solve(), solve());
        assert_eq!(a.scale, b.scale);
        assert_eq!(a.placements.len(), b.placements.len());
        for (pa, pb) in a.placements.iter().zip(b.placements.iter()) {
            assert_eq!(pa.word, pb.word);
            assert_eq!(pa.x, pb.x);
            assert_eq!(pa.y, pb.y);
            assert_eq!(pa.rotation_deg, pb.rotation_deg);
        }
    }

    #[test]
    fn out_of_range_vertical_bias_is_rejected() {
        let config = CSFConfig {
            vertical_bias: 1.5,
            ..CSFConfig::default()
        };
        let ext_instance = io::read_instance(Path::new("../assets/single.json")).unwrap();
        let instance = ext_repr::import(&ext_instance, config.canvas().unwrap()).unwrap();

        let result = CSFOptimizer::new(instance, config, SmallRng::seed_from_u64(0)).solve();
        assert!(result.is_err());
    }

    #[test]
    fn export_respects_explicit_word_colors() {
        let config = CSFConfig::default();
        let ext_instance = io::read_instance(Path::new("../assets/single.json")).unwrap();
        let instance = ext_repr::import(&ext_instance, config.canvas().unwrap()).unwrap();

        let solution = CSFOptimizer::new(instance.clone(), config, SmallRng::seed_from_u64(0))
            .solve()
            .unwrap();

        let mut ext_solution = output::export(&instance, &solution);
        output::apply_word_colors(&mut ext_solution, &ext_instance.words);

        assert_eq!(ext_solution.placements[0].color, "#FF5722");
    }
}
