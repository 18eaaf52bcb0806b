//! Set size-upgrade offer parser
//!
//! Descriptions may advertise an upgrade such as
//! `"Możliwość powiększenia: 10 szt + 4 szt za 6 zł = 14 szt"`.

use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;
use tracing::debug;

// The gap after the base count may not contain digits, so an earlier
// "24 szt." in the same description cannot be taken as the base.
static UPGRADE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\d+)\s*szt\.?[^+\d]*\+\s*(\d+)\s*szt\.?\s*za\s*(\d+(?:[.,]\d+)?)\s*zł[^=]*=\s*(\d+)\s*szt",
    )
    .expect("upgrade pattern is valid")
});

/// Parsed upgrade offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpgradeOffer {
    pub base_pieces: u32,
    pub extra_pieces: u32,
    pub total_pieces: u32,
    /// Upgrade price
    pub price: Decimal,
}

/// Parse the upgrade phrase; `None` means the product offers no upgrade.
pub fn parse_upgrade_offer(description: &str) -> Option<UpgradeOffer> {
    let caps = UPGRADE_RE.captures(description)?;

    let offer = UpgradeOffer {
        base_pieces: caps[1].parse().ok()?,
        extra_pieces: caps[2].parse().ok()?,
        price: Decimal::from_str(&caps[3].replace(',', ".")).ok()?,
        total_pieces: caps[4].parse().ok()?,
    };

    if offer.base_pieces.checked_add(offer.extra_pieces) != Some(offer.total_pieces) {
        debug!(
            base = offer.base_pieces,
            extra = offer.extra_pieces,
            total = offer.total_pieces,
            "Upgrade offer piece counts do not add up"
        );
    }

    Some(offer)
}
