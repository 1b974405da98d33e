//! Roulette integration tests.
//!
//! The spinner draws random numbers, but its bookkeeping is strict: no
//! repeats within a round, `None` once exhausted, and the round survives a
//! reload through the injected storage.

use music_bingo::{
    effective_song_count, music_library, track_for, GameConfig, MemoryStorage, Roulette, SpinMode,
    SpinRng, Storage, DEFAULT_SONG_COUNT,
};

fn open(store: &mut MemoryStorage, song_count: u32) -> Roulette<&mut MemoryStorage> {
    Roulette::open(store, song_count, SpinRng::seeded(42))
}

#[test]
fn test_fresh_roulette() {
    let mut store = MemoryStorage::new();
    let roulette = open(&mut store, 10);
    assert_eq!(roulette.current(), None);
    assert!(roulette.played().is_empty());
    assert_eq!(roulette.remaining(), 10);
    assert!(!roulette.is_exhausted());
}

#[test]
fn test_spins_cover_every_number_exactly_once() {
    let mut store = MemoryStorage::new();
    let mut roulette = open(&mut store, 10);

    let mut seen = Vec::new();
    for _ in 0..10 {
        let n = roulette.spin().unwrap();
        assert!((1..=10).contains(&n));
        seen.push(n);
    }

    seen.sort_unstable();
    assert_eq!(seen, (1..=10).collect::<Vec<u32>>());
    assert!(roulette.is_exhausted());
    assert_eq!(roulette.spin(), None);
}

#[test]
fn test_spin_returns_the_only_unplayed_number() {
    let mut store = MemoryStorage::new();
    store.set("playedNumbers", "[1,2,3,4,5,6,8,9,10]");
    let mut roulette = open(&mut store, 10);

    assert_eq!(roulette.remaining(), 1);
    assert_eq!(roulette.spin(), Some(7));
    assert_eq!(roulette.spin(), None);
}

#[test]
fn test_round_persists_across_reopen() {
    let mut store = MemoryStorage::new();
    let mut roulette = open(&mut store, 10);
    for _ in 0..4 {
        roulette.spin();
    }
    let played = roulette.played();
    let current = roulette.current();
    drop(roulette);

    let roulette = open(&mut store, 10);
    assert_eq!(roulette.played(), played);
    assert_eq!(roulette.current(), current);
    assert_eq!(roulette.remaining(), 6);
}

#[test]
fn test_persisted_forms() {
    let mut store = MemoryStorage::new();
    let mut roulette = open(&mut store, 10);
    let n = roulette.spin().unwrap();
    drop(roulette);

    // Played numbers are a sorted JSON array; the current number a string.
    let played: Vec<u32> =
        serde_json::from_str(&store.get("playedNumbers").unwrap()).unwrap();
    assert_eq!(played, vec![n]);
    assert_eq!(store.get("currentNumber").unwrap(), n.to_string());
}

#[test]
fn test_reset_clears_round_and_storage() {
    let mut store = MemoryStorage::new();
    let mut roulette = open(&mut store, 10);
    for _ in 0..3 {
        roulette.spin();
    }

    roulette.reset();
    assert_eq!(roulette.current(), None);
    assert_eq!(roulette.remaining(), 10);
    drop(roulette);

    assert_eq!(store.get("playedNumbers"), None);
    assert_eq!(store.get("currentNumber"), None);

    // A fresh round spins again from the full pool.
    let mut roulette = open(&mut store, 10);
    assert!(roulette.spin().is_some());
}

#[test]
fn test_open_with_config() {
    let mut store = MemoryStorage::new();
    let config = GameConfig::new().with_song_count(5);
    let mut roulette = Roulette::open_with(&mut store, &config, SpinRng::seeded(42));

    assert_eq!(roulette.song_count(), 5);
    for _ in 0..5 {
        let n = roulette.spin().unwrap();
        assert!((1..=5).contains(&n));
    }
    assert_eq!(roulette.spin(), None);
}

#[test]
fn test_song_count_override_resolution() {
    let mut store = MemoryStorage::new();
    assert_eq!(
        effective_song_count(store.get("songCount").as_deref()),
        DEFAULT_SONG_COUNT
    );

    store.set("songCount", "30");
    assert_eq!(effective_song_count(store.get("songCount").as_deref()), 30);

    store.set("songCount", "500");
    assert_eq!(
        effective_song_count(store.get("songCount").as_deref()),
        DEFAULT_SONG_COUNT
    );
}

#[test]
fn test_library_and_track_fallback() {
    let library = music_library(DEFAULT_SONG_COUNT);
    assert_eq!(library.len(), DEFAULT_SONG_COUNT as usize);
    assert_eq!(track_for(&library, 41).map(|t| t.url.as_str()), Some("songs/41.mp3"));

    // Numbers past the library wrap to the first track.
    assert_eq!(track_for(&library, 99).map(|t| t.id), Some(1));
}

#[test]
fn test_spin_mode_round_trip() {
    let mut store = MemoryStorage::new();
    assert_eq!(SpinMode::load(&store), SpinMode::Manual);
    SpinMode::Auto.store(&mut store);
    assert_eq!(store.get("spinMode").unwrap(), "auto");
    assert_eq!(SpinMode::load(&store), SpinMode::Auto);
}
