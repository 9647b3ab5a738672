use cumulus::entities::{Canvas, CloudInstance, FontRange, Label};
use cumulus::metrics::HeuristicMeasurer;
use cumulus::place::{
    CornerSpaceEngine, GoldenAngleEngine, PlaceOptions, PlacementStrategy, SpiralEngine,
};
use cumulus::search::{CloudConfig, search};
use cumulus::util::assertions;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use test_case::test_case;

const SURVEY_WORDS: &[(&str, f32)] = &[
    ("reliability", 96.0),
    ("performance", 81.0),
    ("latency", 64.0),
    ("throughput", 52.0),
    ("caching", 41.0),
    ("sharding", 33.0),
    ("replication", 27.0),
    ("indexing", 19.0),
    ("batching", 12.0),
    ("retries", 7.0),
];

fn instance(words: &[(&str, f32)], canvas: Canvas) -> CloudInstance {
    let labels = words
        .iter()
        .enumerate()
        .map(|(i, &(text, weight))| Label::new(i, text.to_string(), weight).unwrap())
        .collect();
    CloudInstance::new(labels, canvas).unwrap()
}

fn solve(
    inst: &CloudInstance,
    strategy: &mut impl PlacementStrategy,
) -> cumulus::search::CloudSolution {
    search(inst, &CloudConfig::default(), &HeuristicMeasurer, strategy).unwrap()
}

#[test_case(0; "seed 0")]
#[test_case(7; "seed 7")]
#[test_case(42; "seed 42")]
#[test_case(1337; "seed 1337")]
fn corner_space_layouts_are_valid(seed: u64) {
    let inst = instance(SURVEY_WORDS, Canvas::new(900.0, 600.0).unwrap());
    let mut engine = CornerSpaceEngine::new(PlaceOptions::default(), SmallRng::seed_from_u64(seed));
    let sol = solve(&inst, &mut engine);

    assert!(sol.complete, "10 words must fit a 900x600 canvas");
    assert!(assertions::placements_within_canvas(&sol.layout));
    assert!(assertions::placements_disjoint(&sol.layout));
}

#[test]
fn heaviest_label_sits_at_canvas_center() {
    let canvas = Canvas::new(900.0, 600.0).unwrap();
    let inst = instance(SURVEY_WORDS, canvas);
    let mut engine = CornerSpaceEngine::new(PlaceOptions::default(), SmallRng::seed_from_u64(0));
    let sol = solve(&inst, &mut engine);

    // label 0 carries the highest weight, its box must be centered
    let p = sol.layout.placement_of(0).expect("heaviest label placed");
    let centroid = p.bbox.centroid();
    assert!((centroid.x() - canvas.center().x()).abs() < 1e-3);
    assert!((centroid.y() - canvas.center().y()).abs() < 1e-3);
}

#[test]
fn same_seed_reproduces_the_layout() {
    let inst = instance(SURVEY_WORDS, Canvas::new(900.0, 600.0).unwrap());
    let opts = PlaceOptions::default();

    let run = |seed: u64| {
        let mut engine = CornerSpaceEngine::new(opts, SmallRng::seed_from_u64(seed));
        solve(&inst, &mut engine)
    };

    let (a, b) = (run(99), run(99));
    assert_eq!(a.scale, b.scale);
    assert_eq!(a.layout.placements.len(), b.layout.placements.len());
    for id in 0..inst.n_labels() {
        let (pa, pb) = (
            a.layout.placement_of(id).unwrap(),
            b.layout.placement_of(id).unwrap(),
        );
        assert_eq!(pa.bbox, pb.bbox);
        assert_eq!(pa.rotation, pb.rotation);
    }
}

#[test]
fn empty_instance_yields_complete_empty_layout() {
    let inst = instance(&[], Canvas::new(400.0, 300.0).unwrap());
    let mut engine = CornerSpaceEngine::new(PlaceOptions::default(), SmallRng::seed_from_u64(0));
    let sol = solve(&inst, &mut engine);

    assert!(sol.complete);
    assert!(sol.layout.is_empty());
    assert_eq!(sol.scale, 1.0);
}

#[test]
fn single_label_is_placed_at_full_scale() {
    let inst = instance(&[("monolith", 5.0)], Canvas::new(900.0, 600.0).unwrap());
    let mut engine = CornerSpaceEngine::new(PlaceOptions::default(), SmallRng::seed_from_u64(3));
    let sol = solve(&inst, &mut engine);

    assert!(sol.complete);
    assert_eq!(sol.scale, 1.0);
    assert_eq!(sol.layout.placements.len(), 1);
}

#[test]
fn crowded_canvas_forces_a_smaller_scale() {
    // 10 words on a canvas too small for full-size fonts
    let inst = instance(SURVEY_WORDS, Canvas::new(320.0, 240.0).unwrap());
    let mut engine = CornerSpaceEngine::new(PlaceOptions::default(), SmallRng::seed_from_u64(0));
    let sol = solve(&inst, &mut engine);

    if sol.complete {
        assert!(sol.scale < 1.0, "full scale cannot fit this canvas");
        assert!(assertions::placements_within_canvas(&sol.layout));
        assert!(assertions::placements_disjoint(&sol.layout));
    } else {
        // even the failed attempt must report the floor of the search
        assert!(sol.scale <= CloudConfig::default().min_scale + 1e-3);
    }
}

#[test]
fn oversized_word_exhausts_the_search() {
    let inst = instance(
        &[("incompressible", 1.0)],
        Canvas::new(10.0, 10.0).unwrap(),
    );
    let mut engine = CornerSpaceEngine::new(PlaceOptions::default(), SmallRng::seed_from_u64(0));
    let sol = solve(&inst, &mut engine);

    assert!(!sol.complete);
    assert!(sol.layout.is_empty());
}

#[test]
fn zero_extent_font_config_is_rejected() {
    // a zero minimum font with zero padding measures equal-weight labels at 0x0
    let inst = instance(
        &[("ghost", 1.0), ("blank", 1.0)],
        Canvas::new(900.0, 600.0).unwrap(),
    );
    let config = CloudConfig {
        font_range: FontRange::new(0.0, 84.0).unwrap(),
        padding: 0.0,
        ..CloudConfig::default()
    };
    let mut engine = CornerSpaceEngine::new(PlaceOptions::default(), SmallRng::seed_from_u64(0));
    assert!(search(&inst, &config, &HeuristicMeasurer, &mut engine).is_err());
}

#[test]
fn vertical_rotation_can_be_disabled() {
    let opts = PlaceOptions {
        vertical_enabled: false,
        vertical_bias: 1.0,
    };
    let inst = instance(SURVEY_WORDS, Canvas::new(900.0, 600.0).unwrap());
    let mut engine = CornerSpaceEngine::new(opts, SmallRng::seed_from_u64(5));
    let sol = solve(&inst, &mut engine);

    assert!(sol.complete);
    for p in sol.layout.placements.values() {
        assert_eq!(p.rotation.degrees(), 0);
    }
}

#[test_case(1; "seed 1")]
#[test_case(21; "seed 21")]
fn spiral_layouts_are_valid(seed: u64) {
    let inst = instance(SURVEY_WORDS, Canvas::new(900.0, 600.0).unwrap());
    let mut engine = SpiralEngine::new(PlaceOptions::default(), SmallRng::seed_from_u64(seed));
    let sol = solve(&inst, &mut engine);

    assert!(sol.complete);
    assert!(assertions::placements_within_canvas(&sol.layout));
    assert!(assertions::placements_disjoint(&sol.layout));
}

#[test_case(1; "seed 1")]
#[test_case(21; "seed 21")]
fn golden_angle_layouts_are_valid(seed: u64) {
    let inst = instance(SURVEY_WORDS, Canvas::new(900.0, 600.0).unwrap());
    let mut engine = GoldenAngleEngine::new(PlaceOptions::default(), SmallRng::seed_from_u64(seed));
    let sol = solve(&inst, &mut engine);

    assert!(sol.complete);
    assert!(assertions::placements_within_canvas(&sol.layout));
    assert!(assertions::placements_disjoint(&sol.layout));
}

#[test]
fn font_sizes_follow_the_weight_order() {
    let inst = instance(SURVEY_WORDS, Canvas::new(900.0, 600.0).unwrap());
    let mut engine = CornerSpaceEngine::new(PlaceOptions::default(), SmallRng::seed_from_u64(11));
    let sol = solve(&inst, &mut engine);
    assert!(sol.complete);

    for ids in (0..inst.n_labels()).collect::<Vec<_>>().windows(2) {
        let (heavier, lighter) = (ids[0], ids[1]);
        let fh = sol.layout.placement_of(heavier).unwrap().font_size;
        let fl = sol.layout.placement_of(lighter).unwrap().font_size;
        assert!(
            fh >= fl,
            "label {heavier} outweighs {lighter} but got a smaller font"
        );
    }
}
