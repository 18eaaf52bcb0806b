//! Addon Price Table
//!
//! Maps an addon (plus, for set-level markers, the owning product) to a
//! unit price in złoty. Unknown or unparseable inputs fall back to a
//! default price instead of failing.

use crate::catalog::parse_upgrade_offer;
use rust_decimal::Decimal;
use shared::util::normalize;
use shared::{Addon, Extra, Product};
use tracing::debug;

pub const SAUCE_PRICE: Decimal = Decimal::from_parts(3, 0, 0, false, 0);
pub const SWAP_FEE_PRICE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
pub const TARTAR_BASE_PRICE: Decimal = Decimal::ZERO;
pub const BAKE_ROLL_PRICE: Decimal = Decimal::from_parts(2, 0, 0, false, 0);
/// Bake-whole-set price for sets missing from [`BAKE_SET_PRICES`]
pub const BAKE_SET_FALLBACK_PRICE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);
/// Upgrade price when the description carries no parseable offer
pub const UPGRADE_FALLBACK_PRICE: Decimal = Decimal::ONE;
/// Any label not covered above
pub const DEFAULT_ADDON_PRICE: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Bake-whole-set price by set name prefix (longest match wins)
pub const BAKE_SET_PRICES: [(&str, Decimal); 6] = [
    ("Zestaw Mini", Decimal::from_parts(4, 0, 0, false, 0)),
    ("Zestaw Klasyczny", Decimal::from_parts(5, 0, 0, false, 0)),
    ("Zestaw Maki", Decimal::from_parts(6, 0, 0, false, 0)),
    ("Zestaw Duży", Decimal::from_parts(8, 0, 0, false, 0)),
    ("Zestaw Rodzinny", Decimal::from_parts(12, 0, 0, false, 0)),
    ("Zestaw Imprezowy", Decimal::from_parts(15, 0, 0, false, 0)),
];

/// Unit price of a garnish extra
pub fn extra_price(extra: Extra) -> Decimal {
    match extra {
        Extra::Tempura | Extra::SoyFlake | Extra::Tamago => Decimal::from(4),
        Extra::BakedFish => Decimal::from(2),
    }
}

/// Unit price of `addon` on a line for `product`
pub fn addon_unit_price(addon: &Addon, product: &Product) -> Decimal {
    match addon {
        Addon::Sauce(_) => SAUCE_PRICE,
        Addon::SwapFee => SWAP_FEE_PRICE,
        Addon::TartarBase(_) => TARTAR_BASE_PRICE,
        Addon::BakeWholeSet => bake_whole_set_price(product),
        Addon::UpgradeSet => upgrade_price(product),
        Addon::BakeRoll(_) => BAKE_ROLL_PRICE,
        Addon::RollExtra { row, extra } => match Extra::from_label(extra) {
            Some(extra) => extra_price(extra),
            None => {
                debug!(
                    product_id = product.id,
                    row = %row,
                    extra = %extra,
                    "Unknown per-roll extra, using default price"
                );
                DEFAULT_ADDON_PRICE
            }
        },
        Addon::Extra(extra) => extra_price(*extra),
        Addon::Generic(label) => {
            // TODO: confirm with the restaurant whether unlisted addons should
            // really cost 4 zł or be rejected at entry
            debug!(
                product_id = product.id,
                label = %label,
                "Unlisted addon, using default price"
            );
            DEFAULT_ADDON_PRICE
        }
    }
}

/// Bake-whole-set price for a set, by longest matching name prefix
pub fn bake_whole_set_price(product: &Product) -> Decimal {
    let name = normalize(&product.name);
    BAKE_SET_PRICES
        .iter()
        .filter(|(prefix, _)| name.starts_with(&normalize(prefix)))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|(_, price)| *price)
        .unwrap_or(BAKE_SET_FALLBACK_PRICE)
}

fn upgrade_price(product: &Product) -> Decimal {
    match parse_upgrade_offer(product.description()) {
        Some(offer) => offer.price,
        None => {
            debug!(product_id = product.id, "No upgrade offer in description, using fallback price");
            UPGRADE_FALLBACK_PRICE
        }
    }
}
