//! Addon labels
//!
//! Addons travel as plain label strings (the storefront and the admin
//! editor both store `addons: [string]`). Inside Rust they are parsed into
//! [`Addon`] so pricing is a match over variants instead of prefix checks.
//! Parsing is total: anything unrecognised becomes [`Addon::Generic`].

use super::row_key::RollRef;
use crate::util::{normalize, strip_prefix_ci};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Swap fee marker, one per active swap in a set
pub const SWAP_FEE_LABEL: &str = "Zamiana w zestawie";
/// Bake the whole set
pub const BAKE_WHOLE_SET_LABEL: &str = "Zapiecz cały zestaw";
/// Older spelling still present on stored orders
pub const BAKE_WHOLE_SET_LEGACY_LABEL: &str = "Cały zestaw zapiekany";
/// Set size upgrade
pub const UPGRADE_SET_LABEL: &str = "Powiększ zestaw";

const SAUCE_PREFIX: &str = "Sos ";
const TARTAR_BASE_PREFIX: &str = "Baza tatara: ";
const BAKE_ROLL_PREFIX: &str = "Zapiecz rolkę:";
const ROLL_EXTRA_PREFIX: &str = "Dodatek do ";

/// Sauces offered on the menu
pub const SAUCES: [&str; 6] = [
    "Sos sojowy",
    "Sos słodki sojowy",
    "Sos teriyaki",
    "Sos spicy mayo",
    "Sos unagi",
    "Sos sriracha",
];

/// Garnish-type extras
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Extra {
    Tempura,
    /// Soy flake
    SoyFlake,
    Tamago,
    /// Baked fish topping
    BakedFish,
}

impl Extra {
    pub const ALL: [Extra; 4] = [Extra::Tempura, Extra::SoyFlake, Extra::Tamago, Extra::BakedFish];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Tempura => "Tempura",
            Self::SoyFlake => "Płatki sojowe",
            Self::Tamago => "Tamago",
            Self::BakedFish => "Pieczona ryba",
        }
    }

    /// Case-insensitive lookup by label
    pub fn from_label(label: &str) -> Option<Self> {
        let label = normalize(label);
        Self::ALL
            .into_iter()
            .find(|e| normalize(e.label()) == label)
    }
}

impl fmt::Display for Extra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A priced modifier attached to a line item
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Addon {
    /// Full sauce label, e.g. "Sos sojowy"; menu sauces use the menu spelling
    Sauce(String),
    SwapFee,
    /// Tartar base choice (presentation only)
    TartarBase(String),
    /// Bake the whole set; legacy spelling parses here too
    BakeWholeSet,
    /// Bake one roll of a set
    BakeRoll(RollRef),
    /// Extra added to one roll of a set; the extra name is kept verbatim
    RollExtra { row: RollRef, extra: String },
    UpgradeSet,
    /// Extra on a standalone product
    Extra(Extra),
    /// Anything else, kept verbatim
    Generic(String),
}

impl Addon {
    /// Parse a stored label. Never fails.
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        let key = normalize(trimmed);

        if key == normalize(SWAP_FEE_LABEL) {
            return Self::SwapFee;
        }
        if key == normalize(BAKE_WHOLE_SET_LABEL) || key == normalize(BAKE_WHOLE_SET_LEGACY_LABEL) {
            return Self::BakeWholeSet;
        }
        if key == normalize(UPGRADE_SET_LABEL) {
            return Self::UpgradeSet;
        }
        if let Some(extra) = Extra::from_label(trimmed) {
            return Self::Extra(extra);
        }
        if let Some(rest) = strip_prefix_ci(trimmed, BAKE_ROLL_PREFIX)
            && !rest.trim().is_empty()
        {
            return Self::BakeRoll(RollRef::parse(rest));
        }
        if let Some(rest) = strip_prefix_ci(trimmed, ROLL_EXTRA_PREFIX)
            && let Some((row, extra)) = rest.rsplit_once(':')
            && !row.trim().is_empty()
            && !extra.trim().is_empty()
        {
            return Self::RollExtra {
                row: RollRef::parse(row),
                extra: extra.trim().to_string(),
            };
        }
        if let Some(name) = strip_prefix_ci(trimmed, TARTAR_BASE_PREFIX) {
            return Self::TartarBase(name.trim().to_string());
        }
        if strip_prefix_ci(trimmed, SAUCE_PREFIX).is_some() {
            let label = SAUCES
                .into_iter()
                .find(|sauce| normalize(sauce) == key)
                .unwrap_or(trimmed);
            return Self::Sauce(label.to_string());
        }
        Self::Generic(trimmed.to_string())
    }

    /// Per-roll extra constructor
    pub fn roll_extra(row: impl Into<RollRef>, extra: Extra) -> Self {
        Self::RollExtra {
            row: row.into(),
            extra: extra.label().to_string(),
        }
    }

    /// Stored label
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Addon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sauce(label) | Self::Generic(label) => f.write_str(label),
            Self::SwapFee => f.write_str(SWAP_FEE_LABEL),
            Self::TartarBase(name) => write!(f, "{}{}", TARTAR_BASE_PREFIX, name),
            Self::BakeWholeSet => f.write_str(BAKE_WHOLE_SET_LABEL),
            Self::BakeRoll(row) => write!(f, "{} {}", BAKE_ROLL_PREFIX, row),
            Self::RollExtra { row, extra } => write!(f, "{}{}: {}", ROLL_EXTRA_PREFIX, row, extra),
            Self::UpgradeSet => f.write_str(UPGRADE_SET_LABEL),
            Self::Extra(extra) => f.write_str(extra.label()),
        }
    }
}

impl From<String> for Addon {
    fn from(label: String) -> Self {
        Self::parse(&label)
    }
}

impl From<&str> for Addon {
    fn from(label: &str) -> Self {
        Self::parse(label)
    }
}

impl From<Addon> for String {
    fn from(addon: Addon) -> Self {
        addon.to_string()
    }
}
