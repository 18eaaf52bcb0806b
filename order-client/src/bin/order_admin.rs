//! Reprice a stored order
//!
//! Usage: `order-admin <order-id> [--apply]`
//!
//! Fetches the menu and the order, recomputes every line with the pricing
//! core and prints the breakdown. With `--apply` the recomputed order is
//! written back.

use anyhow::{Context, bail};
use order_client::{ClientConfig, OrderEditSession, logger};
use order_core::calculate_line;
use order_core::money::format_pln;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env();
    logger::init_logger(&config.log_level, config.log_json)?;

    let args: Vec<String> = std::env::args().collect();
    let Some(raw_id) = args.get(1) else {
        let program = args.first().map_or("order-admin", String::as_str);
        bail!("usage: {} <order-id> [--apply]", program);
    };
    let order_id: i64 = raw_id
        .parse()
        .with_context(|| format!("invalid order id: {}", raw_id))?;
    let apply = args.iter().skip(2).any(|a| a == "--apply");

    let client = config.build_http_client()?;
    let mut session = OrderEditSession::open(client, order_id).await?;

    for (idx, item) in session.form().items.iter().enumerate() {
        let line = calculate_line(item);
        tracing::info!(
            line = idx,
            product = %item.name,
            quantity = line.quantity,
            base = %line.base,
            addons = %line.addons_total,
            total = %line.line_total,
            "Repriced line"
        );
        println!(
            "{:>3}. {} x{}  {} + {} = {}",
            idx + 1,
            item.name,
            line.quantity,
            format_pln(line.base),
            format_pln(line.addons_total),
            format_pln(line.line_total)
        );
    }
    println!("Total: {}", format_pln(session.total()));

    if apply {
        let persisted = session.save().await?;
        println!("Saved order {} ({})", persisted.id, format_pln(persisted.total_price));
    }

    Ok(())
}
