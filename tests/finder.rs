use std::path::Path;
use std::sync::Arc;

use spot_finder::engine::{
    Correction, ItemQueryOutcome, NameResolver, OutputBlock, Resolution, SpotQueryOutcome,
    VocabularyKind, resolve_item_query, resolve_spot_query, spots_with_all_items,
    spots_with_item,
};
use spot_finder::vocab::VocabularyIndex;
use spot_finder::{SpotFinder, load_vocabulary_from_file, load_vocabulary_from_json_str};

fn small() -> VocabularyIndex {
    load_vocabulary_from_json_str(r#"{"늪지": ["오드"], "기지": ["오드","안젤리카"]}"#).unwrap()
}

fn sample() -> VocabularyIndex {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/aion2_data.json");
    load_vocabulary_from_file(&path).unwrap()
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn texts(blocks: &[OutputBlock]) -> Vec<String> {
    blocks
        .iter()
        .map(|b| match b {
            OutputBlock::Title(s)
            | OutputBlock::Text(s)
            | OutputBlock::Entry(s)
            | OutputBlock::Footer(s) => s.clone(),
            OutputBlock::Field { name, value } => format!("{name}: {value}"),
        })
        .collect()
}

#[test]
fn single_item_query_lists_both_spots() {
    match resolve_item_query(&small(), "오드") {
        ItemQueryOutcome::Found { spots, .. } => assert_eq!(spots, strings(&["늪지", "기지"])),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn two_item_query_intersects() {
    match resolve_item_query(&small(), "오드, 안젤리카") {
        ItemQueryOutcome::Found { spots, .. } => assert_eq!(spots, strings(&["기지"])),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn prefix_query_is_corrected() {
    match resolve_item_query(&small(), "안젤") {
        ItemQueryOutcome::Found {
            spots, corrections, ..
        } => {
            assert_eq!(spots, strings(&["기지"]));
            assert_eq!(
                corrections,
                vec![Correction {
                    from: "안젤".to_string(),
                    to: "안젤리카".to_string(),
                }]
            );
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn unknown_item_is_unresolved() {
    assert_eq!(
        resolve_item_query(&small(), "존재하지않음"),
        ItemQueryOutcome::Unresolved(strings(&["존재하지않음"]))
    );
}

#[test]
fn near_spot_name_is_corrected() {
    match resolve_spot_query(&small(), "기") {
        SpotQueryOutcome::Found {
            spot,
            items,
            correction,
        } => {
            assert_eq!(spot, "기지");
            assert_eq!(items, strings(&["오드", "안젤리카"]));
            assert!(correction.is_some());
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn every_entry_resolves_to_itself_uncorrected() {
    let index = sample();
    for kind in [VocabularyKind::Item, VocabularyKind::Spot] {
        let resolver = NameResolver::for_vocabulary(&index, kind);
        let entries = match kind {
            VocabularyKind::Item => index.all_items(),
            VocabularyKind::Spot => index.all_spots(),
        };
        for entry in entries {
            let padded = format!("  {entry}\t");
            assert_eq!(resolver.resolve(&padded), Resolution::Exact(entry.as_str()));
        }
    }
}

#[test]
fn containment_matches_a_brute_force_check() {
    let index = sample();
    let items = index.all_items();

    for a in items {
        let expected: Vec<&str> = index
            .spots()
            .iter()
            .filter(|s| s.items.contains(a))
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(spots_with_item(&index, a), expected);

        for b in items {
            let expected: Vec<&str> = index
                .spots()
                .iter()
                .filter(|s| s.items.contains(a) && s.items.contains(b))
                .map(|s| s.name.as_str())
                .collect();
            assert_eq!(spots_with_all_items(&index, &[a.as_str(), b.as_str()]), expected);
        }
    }
}

#[test]
fn index_is_shareable_across_threads() {
    let index = Arc::new(sample());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            std::thread::spawn(move || resolve_item_query(&index, "오리하, 안젤리카"))
        })
        .collect();

    for handle in handles {
        match handle.join().unwrap() {
            ItemQueryOutcome::Found { spots, .. } => {
                assert_eq!(spots, strings(&["바람의 협곡"]))
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}

#[test]
fn console_gather_command_reports_corrections() {
    let finder = SpotFinder::new(Arc::new(sample()), "!");
    let (out, quit) = finder.step("!채집 오리하");
    assert!(!quit);

    assert_eq!(
        texts(&out.blocks),
        strings(&[
            "🌿 오리하르콘",
            "채집물이 있는 거점은 아래와 같습니다!",
            "✨ 새벽의 레기온 기지",
            "✨ 바람의 협곡",
            "입력한 이름을 이렇게 인식했어요: 오리하 → 오리하르콘",
        ])
    );
}

#[test]
fn console_spot_command_tolerates_missing_space() {
    let finder = SpotFinder::new(Arc::new(sample()), "!");
    let (out, _) = finder.step("!거점 엘룬강늪지");

    assert_eq!(out.blocks[0], OutputBlock::Title("📍 엘룬강 늪지".to_string()));
    assert_eq!(
        out.blocks.last(),
        Some(&OutputBlock::Footer(
            "입력한 이름 '엘룬강늪지' 를(을) '엘룬강 늪지' 로 인식했어요.".to_string()
        ))
    );
}

#[test]
fn console_without_arguments_shows_usage() {
    let finder = SpotFinder::new(Arc::new(sample()), "!");
    for line in ["!채집", "!채집 , ,", "!거점", "!사용법", "!도움말"] {
        let (out, _) = finder.step(line);
        assert_eq!(
            out.blocks.first(),
            Some(&OutputBlock::Title("📖 사용법 - 채집 & 거점 검색".to_string())),
            "line {line:?} should show usage"
        );
    }
}

#[test]
fn console_handles_unknown_input_and_quit() {
    let finder = SpotFinder::new(Arc::new(sample()), "!");

    let (out, quit) = finder.step("!낚시 오드");
    assert!(!quit);
    assert!(texts(&out.blocks)[0].contains("!낚시"));

    let (out, quit) = finder.step("오드");
    assert!(!quit);
    assert!(texts(&out.blocks)[0].contains("!사용법"));

    let (_, quit) = finder.step("  QUIT ");
    assert!(quit);
}
