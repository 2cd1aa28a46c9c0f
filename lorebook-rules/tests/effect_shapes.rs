//! Serialization shape and digest checks for recorded effects, so editing
//! tools and save files keep a stable wire form.

use std::hash::Hasher;

use lorebook_rules::{Race, RaceToken, StartfeatsToken};
use serde_json::{Map, Value, json};
use twox_hash::XxHash64;

#[test]
fn recorded_effect_serializes_to_the_documented_shape() {
    let token = StartfeatsToken::new();
    let mut race = Race::new("Human");
    token.parse(&mut race, "2").unwrap();

    let added = race.bonus_additions().unwrap();
    let value = serde_json::to_value(&added[0]).unwrap();
    assert_eq!(
        value,
        json!({
            "target": "FEAT",
            "pool": "POOL",
            "magnitude": 2,
            "source_token": "STARTFEATS",
            "prerequisites": [
                {
                    "at_least": {
                        "count": 1,
                        "terms": [
                            { "minimum": { "kind": "hit_dice", "min": 1 } },
                            { "minimum": { "kind": "level", "min": 1 } },
                        ],
                    }
                }
            ],
        })
    );
}

#[test]
fn race_state_round_trips_through_json() {
    let token = StartfeatsToken::new();
    let mut race = Race::new("Elf");
    for value in ["1", "-3", "1"] {
        token.parse(&mut race, value).unwrap();
    }

    let encoded = serde_json::to_string(&race).unwrap();
    let decoded: Race = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, race);
    assert_eq!(token.unparse(&decoded), token.unparse(&race));
}

#[test]
fn effect_digest_is_deterministic_and_mutation_sensitive() {
    let token = StartfeatsToken::new();
    let mut race = Race::new("Dwarf");
    token.parse(&mut race, "2").unwrap();
    token.parse(&mut race, "-1").unwrap();

    let baseline = state_digest(&race);
    assert_eq!(baseline, state_digest(&race.clone()));

    let reloaded: Race = serde_json::from_str(&serde_json::to_string(&race).unwrap()).unwrap();
    assert_eq!(baseline, state_digest(&reloaded));

    token.parse(&mut race, "2").unwrap();
    assert_ne!(baseline, state_digest(&race));
}

fn state_digest(race: &Race) -> u64 {
    let canonical = canonicalize_value(serde_json::to_value(race).unwrap());
    snapshot_hash(serde_json::to_string(&canonical).unwrap().as_bytes())
}

fn canonicalize_value(value: Value) -> Value {
    match value {
        Value::Array(items) => {
            Value::Array(items.into_iter().map(canonicalize_value).collect::<Vec<_>>())
        }
        Value::Object(map) => {
            let mut result = Map::with_capacity(map.len());
            let mut entries: Vec<_> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (key, value) in entries {
                result.insert(key, canonicalize_value(value));
            }
            Value::Object(result)
        }
        other => other,
    }
}

fn snapshot_hash(bytes: &[u8]) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(bytes);
    hasher.finish()
}
