//! The material letter table for operation descriptors

use indexmap::IndexMap;

use super::BlockDatabase;
use crate::error::{Error, Result};

/// Fixed letter -> base-block name pattern table. The `bool` marks an exact
/// name match; everything else matches on substring.
const LETTER_PATTERNS: [(char, &str, bool); 8] = [
    ('W', "Wood Block", true),
    ('S', "Stone", false),
    ('A', "Alloy", false),
    ('M', "Metal", false),
    ('H', "Heavy", false),
    ('G', "Glass", false),
    ('R', "Rubber", false),
    ('L', "Lead", false),
];

/// Maps operation-descriptor letters to base block GUIDs.
#[derive(Debug, Clone)]
pub struct MaterialLetters {
    table: IndexMap<char, String>,
}

impl MaterialLetters {
    /// Build the table against the loaded base blocks.
    ///
    /// The first base block in load order matching each pattern wins. Every
    /// letter must resolve; a structural material missing from the database
    /// is fatal, since operations naming it could not be expressed at all.
    pub fn from_database(db: &BlockDatabase) -> Result<Self> {
        let mut table = IndexMap::new();
        for (letter, pattern, exact) in LETTER_PATTERNS {
            let found = db.base_blocks.values().find(|block| {
                if exact {
                    block.name == pattern
                } else {
                    block.name.contains(pattern)
                }
            });
            match found {
                Some(block) => {
                    table.insert(letter, block.guid.clone());
                }
                None => {
                    return Err(Error::BaseMaterialNotFound {
                        letter,
                        pattern: pattern.to_string(),
                    })
                }
            }
        }
        Ok(Self { table })
    }

    /// The base block GUID for a material letter, if the letter is known.
    #[must_use]
    pub fn lookup(&self, letter: char) -> Option<&str> {
        self.table.get(&letter).map(String::as_str)
    }
}
