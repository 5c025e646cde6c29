//! Table-name selection rules.
//!
//! Daily-quote tables are named `stk<code>`. Two shapes of warrant-generated
//! junk tables show up in the catalog, each with its own rule. The rules are
//! alternative selection modes chosen per invocation; they can overlap.

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// Which shape of table name to prune.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionRule {
    /// `stk7`, one or more ASCII digits, then a literal `U`.
    Type1,

    /// Exactly nine characters, `stk` prefix, at least one `7` after the
    /// prefix.
    #[default]
    Type2,
}

impl SelectionRule {
    /// Capitalized rule name used in console summaries.
    pub fn label(&self) -> &'static str {
        match self {
            SelectionRule::Type1 => "Type1",
            SelectionRule::Type2 => "Type2",
        }
    }

    /// Whether a catalog table name is selected for pruning.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            SelectionRule::Type1 => {
                let Some(rest) = name.strip_prefix("stk7") else {
                    return false;
                };
                let Some(digits) = rest.strip_suffix('U') else {
                    return false;
                };
                !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
            }
            SelectionRule::Type2 => {
                name.len() == 9 && name.starts_with("stk") && name[3..].contains('7')
            }
        }
    }
}

impl fmt::Display for SelectionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionRule::Type1 => write!(f, "type1"),
            SelectionRule::Type2 => write!(f, "type2"),
        }
    }
}
