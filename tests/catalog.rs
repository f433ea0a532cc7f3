use gridlife::{Catalog, Category, Engine, Pattern};

#[test]
fn builtin_catalog_covers_every_category() {
    let catalog = Catalog::builtin();
    assert!(catalog.load_errors().is_empty(), "{:?}", catalog.load_errors());
    let names: Vec<_> = catalog.patterns().iter().map(|p| p.name().as_str()).collect();
    assert_eq!(
        names,
        [
            "Block",
            "Blinker",
            "Glider",
            "Toad",
            "Beacon",
            "R-pentomino",
            "Gosper glider gun"
        ]
    );
    for category in [
        Category::StillLife,
        Category::Oscillator,
        Category::Spaceship,
        Category::Methuselah,
        Category::Gun,
    ] {
        assert!(catalog.patterns().iter().any(|p| *p.category() == category));
    }
}

#[test]
fn lookup_ignores_case() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.get("gLiDeR"), Some(&Pattern::glider()));
    assert!(catalog.get("puffer train").is_none());
}

#[test]
fn failed_sources_are_recorded_not_fatal() {
    let mut catalog = Catalog::new();
    assert!(!catalog.load("Broken", Category::StillLife, "x = 1, y = 1\no"));
    assert!(catalog.load("Dot", Category::StillLife, "x = 1, y = 1\no!"));
    assert_eq!(catalog.patterns().len(), 1);
    assert_eq!(catalog.load_errors().len(), 1);
    assert!(catalog.load_errors()[0].contains("Broken"));
}

#[test]
fn gosper_gun_emits_a_glider() {
    let catalog = Catalog::builtin();
    let gun = catalog.get("Gosper glider gun").unwrap();
    assert_eq!(gun.len(), 36);

    let mut engine = Engine::new(60, 40).unwrap();
    engine.place_pattern(gun, 1, 1);
    // The gun has period 30; each period adds one glider to the population.
    for _ in 0..30 {
        engine.step();
    }
    assert_eq!(engine.alive_count(), 36 + 5);
}

#[test]
fn r_pentomino_keeps_evolving() {
    let catalog = Catalog::builtin();
    let mut engine = Engine::new(64, 64).unwrap();
    engine.place_pattern(catalog.get("r-pentomino").unwrap(), 30, 30);
    assert_eq!(engine.alive_count(), 5);
    for _ in 0..10 {
        engine.step();
    }
    assert!(engine.alive_count() > 5);
}
