//! Word selection against a real store: resume, repair, enrichment, exhaustion.

mod common;

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vocab_core::{CanonicalWordEntry, Definition};
use vocab_drill::db::WordRepository;
use vocab_drill::selector::{SelectError, WordSelector};

use common::fixtures::{self, remote_entry, MapEnricher};
use common::{date, TestContext};

#[test]
fn test_same_day_resumes_the_shown_word() {
    let ctx = TestContext::new(fixtures::sample_corpus());
    let selector = WordSelector::new(&ctx.repo, &ctx.corpus);
    let today = date("2025-01-15");

    let first = selector
        .pick_word(today, &mut StdRng::seed_from_u64(1))
        .unwrap();
    for seed in 2..6 {
        let again = selector
            .pick_word(today, &mut StdRng::seed_from_u64(seed))
            .unwrap();
        assert!(again.resumed);
        assert_eq!(again.key, first.key);
        assert_eq!(again.entry, first.entry);
    }
    assert_eq!(ctx.repo.used_words().unwrap().len(), 1);
}

#[test]
fn test_shown_but_unfinished_words_are_not_redrawn() {
    let ctx = TestContext::new(fixtures::sample_corpus());
    let selector = WordSelector::new(&ctx.repo, &ctx.corpus);
    let mut rng = StdRng::seed_from_u64(9);

    let monday = selector.pick_word(date("2025-01-13"), &mut rng).unwrap();
    let tuesday = selector.pick_word(date("2025-01-14"), &mut rng).unwrap();
    assert_ne!(monday.key, tuesday.key);

    assert!(matches!(
        selector.pick_word(date("2025-01-15"), &mut rng),
        Err(SelectError::PoolExhausted)
    ));
}

#[test]
fn test_enrichment_is_merged_and_stored() {
    let ctx = TestContext::new(vec![fixtures::sample_corpus().remove(0)]);
    let enricher = MapEnricher::default().with(
        "ephemeral",
        remote_entry(
            "ephemeral",
            "/ɪˈfɛm(ə)rəl/",
            &["lasting for a very short time", "living for only a day"],
        ),
    );
    let selector = WordSelector::new(&ctx.repo, &ctx.corpus).with_enricher(&enricher);

    let selected = selector
        .pick_word(date("2025-01-15"), &mut StdRng::seed_from_u64(0))
        .unwrap();
    assert_eq!(selected.entry.phonetic, "/ɪˈfɛm(ə)rəl/");
    assert_eq!(selected.entry.part_of_speech, "adjective");
    assert_eq!(selected.entry.definitions.len(), 2);
    assert_eq!(selected.entry.synonyms, vec!["short-lived".to_string()]);

    let stored = ctx.repo.get_word("ephemeral").unwrap().unwrap();
    assert_eq!(stored.decode_entry(), selected.entry);
}

#[test]
fn test_stale_entry_is_repaired_from_corpus() {
    let ctx = TestContext::new(fixtures::sample_corpus());
    let today = date("2025-01-15");
    let stale = CanonicalWordEntry {
        word: "fleeting".to_string(),
        ..Default::default()
    };
    ctx.repo.record_shown("fleeting", &stale, today).unwrap();

    let selected = WordSelector::new(&ctx.repo, &ctx.corpus)
        .pick_word(today, &mut StdRng::seed_from_u64(0))
        .unwrap();
    assert!(selected.resumed);
    assert_eq!(
        selected.entry.definitions,
        vec![Definition::new("passing swiftly, lasting a brief moment", None)]
    );

    let stored = ctx.repo.get_word("fleeting").unwrap().unwrap();
    assert!(stored.decode_entry().has_definitions());
}

#[test]
fn test_stale_entry_missing_from_corpus_is_returned_as_is() {
    let ctx = TestContext::new(fixtures::sample_corpus());
    let today = date("2025-01-15");
    let stale = CanonicalWordEntry {
        word: "obsolete".to_string(),
        phonetic: "/ˌɒbsəˈliːt/".to_string(),
        ..Default::default()
    };
    ctx.repo.record_shown("obsolete", &stale, today).unwrap();

    let selected = WordSelector::new(&ctx.repo, &ctx.corpus)
        .pick_word(today, &mut StdRng::seed_from_u64(0))
        .unwrap();
    assert_eq!(selected.key, "obsolete");
    assert_eq!(selected.entry, stale);
}

#[test]
fn test_completed_day_does_not_resume() {
    let ctx = TestContext::new(fixtures::sample_corpus());
    let selector = WordSelector::new(&ctx.repo, &ctx.corpus);
    let today = date("2025-01-15");
    let mut rng = StdRng::seed_from_u64(3);

    let first = selector.pick_word(today, &mut rng).unwrap();
    ctx.repo.record_completion(&first.key, today).unwrap();

    let next = selector.pick_word(today, &mut rng).unwrap();
    assert!(!next.resumed);
    assert_ne!(next.key, first.key);
}
