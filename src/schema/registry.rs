//! Schema registry
//!
//! Immutable lookup from table file name to its registered entry.
//! Built once at startup, either from the built-in table set or
//! from a registry document (see `SchemaLoader`).

use std::collections::{BTreeSet, HashMap};

use super::types::SchemaEntry;

static NO_COLUMNS: BTreeSet<String> = BTreeSet::new();

/// Read-only mapping from file identifier to schema entry.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    entries: HashMap<String, SchemaEntry>,
    /// Files without a natural unique `name` column
    name_exempt: BTreeSet<String>,
}

impl SchemaRegistry {
    /// Creates a registry from its parts.
    pub fn new(entries: HashMap<String, SchemaEntry>, name_exempt: BTreeSet<String>) -> Self {
        Self {
            entries,
            name_exempt,
        }
    }

    /// The built-in rule table set.
    pub fn builtin() -> Self {
        const STAT_INTS: [&str; 2] = ["max_actions", "points"];
        const WEAPON_INTS: [&str; 4] = ["max_actions", "damage", "ap", "points"];
        const WEAPON_HEADER: [&str; 6] =
            ["name", "max_actions", "effect_text", "damage", "ap", "points"];

        let tables = [
            (
                "accessories.csv",
                SchemaEntry::new(["name", "type", "max_actions", "effect_text", "points"])
                    .with_int_columns(STAT_INTS),
            ),
            (
                "commands.csv",
                SchemaEntry::new(["name", "cp_cost", "effect_text", "limits"])
                    .with_int_columns(STAT_INTS),
            ),
            (
                "leader_traits.csv",
                SchemaEntry::new(["name", "effect_text"]).with_int_columns(STAT_INTS),
            ),
            (
                "mutations.csv",
                SchemaEntry::new(["name", "type", "effect_text", "points"])
                    .with_int_columns(STAT_INTS),
            ),
            (
                "psychic_powers.csv",
                SchemaEntry::new([
                    "name",
                    "power_type",
                    "max_actions",
                    "range",
                    "effect",
                    "horror_generated",
                    "points",
                ])
                .with_int_columns(STAT_INTS),
            ),
            ("rules.csv", SchemaEntry::new(["name", "step", "effect_text"])),
            (
                "warband_traits.csv",
                SchemaEntry::new(["name", "effect_text"]).with_int_columns(STAT_INTS),
            ),
            (
                "shoot.csv",
                SchemaEntry::new(WEAPON_HEADER)
                    .with_int_columns(WEAPON_INTS)
                    .with_tokens("ap", ["*"]),
            ),
            (
                "fight.csv",
                SchemaEntry::new(WEAPON_HEADER).with_int_columns(WEAPON_INTS),
            ),
        ];

        let entries = tables
            .into_iter()
            .map(|(file, entry)| (file.to_string(), entry))
            .collect();

        Self::new(entries, BTreeSet::from(["rules.csv".to_string()]))
    }

    /// Returns the full entry for a file, if registered.
    pub fn entry(&self, file_id: &str) -> Option<&SchemaEntry> {
        self.entries.get(file_id)
    }

    /// Returns the expected header, or `None` when no schema is registered.
    pub fn expected_header(&self, file_id: &str) -> Option<&[String]> {
        self.entry(file_id).map(|e| e.header.as_slice())
    }

    /// Returns the integer columns declared for a file (empty if none).
    pub fn int_columns(&self, file_id: &str) -> &BTreeSet<String> {
        self.entry(file_id)
            .map(|e| &e.int_columns)
            .unwrap_or(&NO_COLUMNS)
    }

    /// Returns the allowed tokens for a file column (empty if none).
    pub fn allowed_tokens(&self, file_id: &str, column: &str) -> &BTreeSet<String> {
        self.entry(file_id)
            .and_then(|e| e.tokens_for(column))
            .unwrap_or(&NO_COLUMNS)
    }

    /// Returns whether rows of this file must carry a non-empty `name`.
    pub fn requires_name(&self, file_id: &str) -> bool {
        !self.name_exempt.contains(file_id)
    }

    /// Returns the number of registered files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no files are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
