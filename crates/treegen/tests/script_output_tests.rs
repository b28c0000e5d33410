//! Tests for end-to-end script output on small, fully determined shapes

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use treegen::feasibility::{self, Feasibility};
use treegen::{Command, Error, GenConfig, Tree, generate};

fn script(config: &GenConfig, seed: u64) -> String {
    let mut out = Vec::new();
    generate(&config.clone().seed(seed), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// ==================== Feasibility ====================

#[test]
fn thousand_files_do_not_fit_width_two_depth_two() {
    let err = feasibility::validate(1000, 2, 2, 10, 62).unwrap_err();
    assert!(matches!(err, Error::Infeasible { max_files: 6, .. }));
}

#[test]
fn small_request_passes_cleanly() {
    assert_eq!(
        feasibility::validate(5, 10, 10, 5, 62).unwrap(),
        Feasibility::Ok
    );
}

#[test]
fn defaults_are_feasible() {
    assert_eq!(
        feasibility::check(&GenConfig::default()).unwrap(),
        Feasibility::Ok
    );
}

#[test]
fn unbounded_depth_is_validated_quickly() {
    let config = GenConfig::new().files(1).width(1).depth(usize::MAX);
    assert_eq!(feasibility::check(&config).unwrap(), Feasibility::Ok);

    let text = script(&config, 2);
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with("create     /"));
}

// ==================== Linear chain ====================

#[test]
fn width_one_serializes_as_chain() {
    let config = GenConfig::new().files(3).width(1).depth(5).max_name_len(1);

    for seed in 0..10 {
        let text = script(&config, seed);
        let commands: Vec<Command<'_>> = text.lines().map(|l| Command::parse(l).unwrap()).collect();
        assert_eq!(commands.len(), 4);

        let (a, b, c) = match commands[..] {
            [
                Command::CreateDir(a),
                Command::CreateDir(b),
                Command::Create(c),
                Command::Exit,
            ] => (a, b, c),
            _ => panic!("unexpected script:\n{}", text),
        };
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 4);
        assert_eq!(c.len(), 6);
        assert!(b.starts_with(a));
        assert!(c.starts_with(b));
    }
}

// ==================== Determinism ====================

#[test]
fn same_seed_same_script() {
    let config = GenConfig::new().files(300).width(5).depth(7).max_name_len(6);
    assert_eq!(script(&config, 21), script(&config, 21));
}

#[test]
fn script_matches_tree_walk() {
    let config = GenConfig::new().files(120).width(4).depth(5).max_name_len(3);
    let mut rng = StdRng::seed_from_u64(33);
    let tree = Tree::build(&config, &mut rng).unwrap();

    let mut out = Vec::new();
    let written = treegen::serialize::write_script(tree.root(), &mut out).unwrap();
    assert_eq!(written, 120);

    let text = String::from_utf8(out).unwrap();
    let stats = tree.stats();
    let dirs = text.lines().filter(|l| l.starts_with("create_dir ")).count() as u64;
    let files = text.lines().filter(|l| l.starts_with("create ")).count() as u64;
    assert_eq!(dirs, stats.directories);
    assert_eq!(files, stats.files);
    assert_eq!(dirs + files, stats.nodes);
}

// ==================== Insertion-count discipline ====================

#[test]
fn budget_counts_insertions_not_final_files() {
    // Deep, narrow trees turn many inserted files into directories; the
    // script still carries one command per insertion.
    let config = GenConfig::new()
        .files(50)
        .width(2)
        .depth(10)
        .max_name_len(2)
        .seed(5);
    let mut out = Vec::new();

    let report = generate(&config, &mut out).unwrap();
    let stats = report.tree.unwrap();
    assert_eq!(report.commands, 50);
    assert_eq!(stats.nodes, 50);
    assert!(stats.files < 50);
}

// ==================== Companion ====================

#[test]
fn companion_prints_only_acks() {
    let config = GenConfig::new().files(5).companion(true);
    assert_eq!(script(&config, 0), "ok\nok\nok\nok\nok\n");
}
