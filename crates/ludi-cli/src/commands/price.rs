use ludi_config::GeneralConfig;
use ludi_core::{ComputedPrice, calculate_price};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PriceDisplay {
    original: String,
    #[serde(rename = "final")]
    final_price: String,
}

#[derive(Debug, Serialize)]
struct PriceResponse {
    price: ComputedPrice,
    display: PriceDisplay,
}

fn price_response(amount: f64, discount: Option<f64>, general: &GeneralConfig) -> PriceResponse {
    let price = calculate_price(amount, discount);
    PriceResponse {
        display: PriceDisplay {
            original: general.format_price(price.original),
            final_price: general.format_price(price.final_price),
        },
        price,
    }
}

/// Handle `ludi price`.
pub fn handle(
    amount: f64,
    discount: Option<f64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    output(
        &price_response(amount, discount, &ctx.config.general),
        flags.format,
    )
}
