//! End-to-end properties of generated payloads: record count, identifier
//! uniqueness, timestamp spacing, names, shared fields and the written text.

use std::collections::{BTreeMap, HashSet};
use std::fs;

use petseed_core::{
    generate, timestamp, write_payload, GeneratorConfig, IdSource, OutputTarget, PetItem,
    RandomIds, SeededIds, WriteRequest,
};
use time::macros::datetime;
use time::PrimitiveDateTime;

const TABLE: &str = "pawfectmatch-development-shelter-hub-pets";

/// Deterministic identifiers: `id-0000`, `id-0001`, ...
struct SequentialIds(u32);

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("id-{:04}", self.0);
        self.0 += 1;
        id
    }
}

fn config_with_count(count: usize) -> GeneratorConfig {
    GeneratorConfig {
        count,
        ..GeneratorConfig::default()
    }
}

fn build_items(config: &GeneratorConfig, ids: &mut impl IdSource) -> Vec<PetItem> {
    let payload = generate(config, datetime!(2024-01-01 0:00:00), ids).expect("generate");
    payload.requests.into_iter().map(|r| r.put_request.item).collect()
}

fn parse_created_at(s: &str) -> PrimitiveDateTime {
    timestamp::parse_base_time(s).unwrap_or_else(|e| panic!("bad timestamp '{}': {}", s, e))
}

// ──────────────────────────────────────────────
// 1. Shape
// ──────────────────────────────────────────────

#[test]
fn record_count_matches_config() {
    for count in [0, 1, 2, 24, 100] {
        let items = build_items(&config_with_count(count), &mut SequentialIds(0));
        assert_eq!(items.len(), count);
    }
}

#[test]
fn identifiers_are_unique() {
    let items = build_items(&config_with_count(50), &mut SequentialIds(0));
    let ids: HashSet<&str> = items.iter().map(|i| i.pet_id.as_str()).collect();
    assert_eq!(ids.len(), 50);

    let items = build_items(&config_with_count(500), &mut RandomIds);
    let ids: HashSet<&str> = items.iter().map(|i| i.pet_id.as_str()).collect();
    assert_eq!(ids.len(), 500);
}

#[test]
fn timestamps_advance_one_second_per_record() {
    let items = build_items(&config_with_count(24), &mut SequentialIds(0));
    for pair in items.windows(2) {
        let a = parse_created_at(pair[0].created_at.as_str());
        let b = parse_created_at(pair[1].created_at.as_str());
        assert_eq!(b - a, time::Duration::seconds(1));
    }
    assert!(items.iter().all(|i| i.created_at.as_str().ends_with('Z')));
}

#[test]
fn names_are_prefix_plus_index() {
    let items = build_items(&config_with_count(6), &mut SequentialIds(0));
    assert_eq!(items[0].name.as_str(), "Doggo0");
    assert_eq!(items[5].name.as_str(), "Doggo5");
}

#[test]
fn shared_fields_are_identical_across_records() {
    let items = build_items(&config_with_count(24), &mut SequentialIds(0));
    for item in &items {
        assert_eq!(item.age, petseed_core::AttributeValue::N("30".to_string()));
        assert_eq!(item.breed.as_str(), "jack russell terrier");
        assert_eq!(item.description.as_str(), "<p>afwefawef</p>");
        assert_eq!(item.gender.as_str(), "Male");
        assert_eq!(item.species.as_str(), "Dog");
        assert_eq!(item.status.as_str(), "Available");
        assert_eq!(
            item.shelter_id.as_str(),
            "522e6b8b-64ed-4bf0-88c2-a44081535338"
        );
    }
}

// ──────────────────────────────────────────────
// 2. Written file
// ──────────────────────────────────────────────

#[test]
fn stock_run_end_to_end() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("pets.json");

    let payload = generate(
        &GeneratorConfig::default(),
        timestamp::parse_base_time("2024-01-01T00:00:00").unwrap(),
        &mut RandomIds,
    )
    .unwrap();
    write_payload(&payload, &OutputTarget::File(path.clone())).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let entries = value[TABLE].as_array().expect("table key holds an array");
    assert_eq!(entries.len(), 24);

    let first = &entries[0]["PutRequest"]["Item"];
    let last = &entries[23]["PutRequest"]["Item"];
    assert_eq!(first["CreatedAt"]["S"], "2024-01-01T00:00:00Z");
    assert_eq!(last["CreatedAt"]["S"], "2024-01-01T00:00:23Z");
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(
            entry["PutRequest"]["Item"]["Name"]["S"],
            format!("Doggo{}", i)
        );
    }
}

#[test]
fn written_file_round_trips_byte_for_byte() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("pets.json");

    let payload = generate(
        &config_with_count(5),
        datetime!(2024-01-01 0:00:00.5),
        &mut SeededIds::new(9),
    )
    .unwrap();
    write_payload(&payload, &OutputTarget::File(path.clone())).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let parsed: BTreeMap<String, Vec<WriteRequest>> = serde_json::from_str(&text).unwrap();
    assert_eq!(serde_json::to_string_pretty(&parsed).unwrap(), text);
    assert_eq!(parsed[TABLE].len(), 5);
}

#[test]
fn zero_records_writes_empty_table() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("empty.json");

    let payload = generate(
        &config_with_count(0),
        datetime!(2024-01-01 0:00:00),
        &mut RandomIds,
    )
    .unwrap();
    write_payload(&payload, &OutputTarget::File(path.clone())).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({ TABLE: [] }));
}

#[test]
fn same_seed_same_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let base = datetime!(2024-06-01 12:00:00);
    let mut texts = Vec::new();

    for name in ["a.json", "b.json"] {
        let path = dir.path().join(name);
        let payload = generate(&config_with_count(10), base, &mut SeededIds::new(1234)).unwrap();
        write_payload(&payload, &OutputTarget::File(path.clone())).unwrap();
        texts.push(fs::read_to_string(&path).unwrap());
    }

    assert_eq!(texts[0], texts[1]);
}

// ──────────────────────────────────────────────
// 3. Configuration files
// ──────────────────────────────────────────────

#[test]
fn empty_toml_is_the_default_config() {
    let config: GeneratorConfig = toml::from_str("").unwrap();
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let config: GeneratorConfig = toml::from_str(
        r#"
        count = 3
        table_name = "cats"

        [pet]
        name_prefix = "Kitty"
        species = "Cat"
        status = "Pending"
        "#,
    )
    .unwrap();

    assert_eq!(config.count, 3);
    assert_eq!(config.table_name, "cats");
    assert_eq!(config.pet.name_prefix, "Kitty");
    assert_eq!(config.pet.status, petseed_core::PetStatus::Pending);
    assert_eq!(config.pet.breed, "jack russell terrier");

    let items = build_items(&config, &mut SequentialIds(0));
    assert_eq!(items[2].name.as_str(), "Kitty2");
    assert_eq!(items[2].species.as_str(), "Cat");
}

#[test]
fn toml_rejects_unknown_keys_and_statuses() {
    assert!(toml::from_str::<GeneratorConfig>("colour = \"brown\"").is_err());
    assert!(toml::from_str::<GeneratorConfig>("[pet]\nstatus = \"Lost\"").is_err());
    assert!(toml::from_str::<GeneratorConfig>("[pet]\nshelter_id = \"nope\"").is_err());
}

#[test]
fn default_config_survives_toml_round_trip() {
    let text = toml::to_string(&GeneratorConfig::default()).unwrap();
    let back: GeneratorConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, GeneratorConfig::default());
}
