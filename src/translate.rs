use std::collections::HashMap;
use std::str::FromStr;

use log::*;
use serde_json::Value;

/// Key pairs of the scenario/solution schema, German original first.
const KEY_TABLE: &[(&str, &str)] = &[
    ("verkehrsplan", "scenario"),
    ("fahrwege", "routes"),
    ("fahrweg", "route"),
    ("abschnittsfolgen", "route_paths"),
    ("abschnittsfolge", "route_path"),
    ("abschnitte", "route_sections"),
    ("reihenfolge", "sequence_number"),
    ("abschnittskennzeichen_am_eingang", "route_alternative_marker_at_entry"),
    ("abschnittskennzeichen_am_ausgang", "route_alternative_marker_at_exit"),
    ("abschnittskennzeichen", "section_marker"),
    ("strafe", "penalty"),
    ("minimale_fahrzeit", "minimum_running_time"),
    ("funktionale_angebotsbeschreibungen", "service_intentions"),
    ("abschnittsvorgaben", "section_requirements"),
    ("loesung", "solution"),
    ("zugfahrten", "train_runs"),
    ("zugfahrtabschnitte", "train_run_sections"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    GerToEng,
    EngToGer,
}

impl FromStr for Direction {
    type Err = &'static str;
    fn from_str(direction: &str) -> Result<Self, Self::Err> {
        match direction {
            "GER->ENG" => Ok(Direction::GerToEng),
            "ENG->GER" => Ok(Direction::EngToGer),
            _ => Err("Could not parse translation direction."),
        }
    }
}

/// Bidirectional key lookup, built once and read-only afterwards.
pub struct TranslationTable {
    ger_to_eng: HashMap<String, String>,
    eng_to_ger: HashMap<String, String>,
}

impl TranslationTable {
    /// Table over the built-in schema keys.
    pub fn new() -> TranslationTable {
        TranslationTable::from_pairs(KEY_TABLE)
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> TranslationTable {
        let mut ger_to_eng = HashMap::new();
        let mut eng_to_ger = HashMap::new();
        for (ger, eng) in pairs.iter() {
            ger_to_eng.insert((*ger).to_string(), (*eng).to_string());
            eng_to_ger.insert((*eng).to_string(), (*ger).to_string());
        }
        TranslationTable {
            ger_to_eng,
            eng_to_ger,
        }
    }

    /// Translates a single key, leaving unknown keys as they are.
    pub fn translate_key(&self, direction: Direction, key: &str) -> String {
        let table = match direction {
            Direction::GerToEng => &self.ger_to_eng,
            Direction::EngToGer => &self.eng_to_ger,
        };
        match table.get(key) {
            Some(translated) => translated.clone(),
            None => {
                warn!("Don't know how to translate '{}'. Leaving it as is.", key);
                key.to_string()
            }
        }
    }

    /// Translates every key of a deserialized scenario or solution. The
    /// JSON value is already a tagged union, so the traversal is a
    /// structural match: objects recurse, lists recurse only when they
    /// hold objects, everything else is copied.
    pub fn translate(&self, direction: Direction, value: &Value) -> Value {
        match value {
            Value::Object(map) => {
                let mut translated = serde_json::Map::with_capacity(map.len());
                for (key, v) in map.iter() {
                    // Solver parameters are opaque and keep their keys.
                    if key == "parameters" {
                        translated.insert(key.clone(), v.clone());
                        continue;
                    }
                    let new_v = match v {
                        Value::Object(_) => self.translate(direction, v),
                        // Trivial lists like abschnittskennzeichen = ["C"]
                        // are values, not structure.
                        Value::Array(items)
                            if items.first().map_or(false, Value::is_object) =>
                        {
                            Value::Array(
                                items.iter().map(|item| self.translate(direction, item)).collect(),
                            )
                        }
                        other => other.clone(),
                    };
                    translated.insert(self.translate_key(direction, key), new_v);
                }
                Value::Object(translated)
            }
            other => other.clone(),
        }
    }
}

impl Default for TranslationTable {
    fn default() -> TranslationTable {
        TranslationTable::new()
    }
}
