use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// Input of a sales-price calculation, as posted by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesInput {
    pub produto: String,
    pub preco_custo: f64,
    #[serde(default)]
    pub impostos: f64,
    #[serde(default)]
    pub frete: f64,
    #[serde(default = "default_margin")]
    pub margem_desejada: f64,
}

fn default_margin() -> f64 { 20.0 }

impl SalesInput {
    /// Rejects input the markup formula cannot price.
    ///
    /// Costs are deliberately not range-checked; only the product name and
    /// the margin domain (`< 100`) are enforced.
    pub fn validate(&self) -> CoreResult<()> {
        if self.produto.trim().is_empty() {
            return Err(CoreError::ValidationError("produto must not be empty".to_string()));
        }

        if !self.margem_desejada.is_finite() || self.margem_desejada >= 100.0 {
            return Err(CoreError::ValidationError(format!(
                "margem_desejada must be below 100, got {}",
                self.margem_desejada
            )));
        }

        Ok(())
    }
}

/// Result of the markup formula, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub preco_venda: f64,
    pub lucro_bruto: f64,
    pub lucro_liquido: f64,
}

/// Applies the fixed markup: `sale = total_cost / (1 - margin/100)`.
///
/// Arithmetic is done in `Decimal` on the shortest decimal form of each
/// input, so `8.10` is exactly 8.10. Gross profit only subtracts the cost
/// price; net profit subtracts the full total cost. Only the three outputs
/// are rounded, half away from zero.
pub fn price_breakdown(input: &SalesInput) -> CoreResult<PriceBreakdown> {
    input.validate()?;

    let preco_custo = to_decimal("preco_custo", input.preco_custo)?;
    let impostos = to_decimal("impostos", input.impostos)?;
    let frete = to_decimal("frete", input.frete)?;
    let margem = to_decimal("margem_desejada", input.margem_desejada)?;

    let overflow = || CoreError::CalculationError("arithmetic overflow".to_string());

    let total_cost = preco_custo
        .checked_add(impostos)
        .and_then(|c| c.checked_add(frete))
        .ok_or_else(overflow)?;
    let margin_fraction = margem.checked_div(Decimal::ONE_HUNDRED).ok_or_else(overflow)?;
    let sale_price = total_cost
        .checked_div(Decimal::ONE - margin_fraction)
        .ok_or_else(|| {
            CoreError::CalculationError(format!(
                "cannot price total cost {} with margin {}",
                total_cost, margem
            ))
        })?;
    let gross_profit = sale_price.checked_sub(preco_custo).ok_or_else(overflow)?;
    let net_profit = sale_price.checked_sub(total_cost).ok_or_else(overflow)?;

    Ok(PriceBreakdown {
        preco_venda: round_cents(sale_price)?,
        lucro_bruto: round_cents(gross_profit)?,
        lucro_liquido: round_cents(net_profit)?,
    })
}

fn to_decimal(field: &str, value: f64) -> CoreResult<Decimal> {
    if !value.is_finite() {
        return Err(CoreError::CalculationError(format!("{} is not a finite number", field)));
    }

    // f64 Display is the shortest string that round-trips, e.g. "8.1"
    Decimal::from_str(&value.to_string())
        .map_err(|e| CoreError::CalculationError(format!("{} out of range: {}", field, e)))
}

fn round_cents(value: Decimal) -> CoreResult<f64> {
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .ok_or_else(|| CoreError::CalculationError(format!("{} does not fit in f64", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(preco_custo: f64, impostos: f64, frete: f64, margem_desejada: f64) -> SalesInput {
        SalesInput {
            produto: "Fone Bluetooth".to_string(),
            preco_custo,
            impostos,
            frete,
            margem_desejada,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let breakdown = price_breakdown(&input(50.0, 5.0, 10.0, 20.0)).unwrap();

        assert_eq!(breakdown.preco_venda, 81.25);
        assert_eq!(breakdown.lucro_bruto, 31.25);
        assert_eq!(breakdown.lucro_liquido, 16.25);
    }

    #[test]
    fn test_half_cent_rounds_away_from_zero() {
        // 8.10 / 0.8 = 10.125 exactly
        let breakdown = price_breakdown(&input(8.10, 0.0, 0.0, 20.0)).unwrap();
        assert_eq!(breakdown.preco_venda, 10.13);
        assert_eq!(breakdown.lucro_bruto, 2.03);
        assert_eq!(breakdown.lucro_liquido, 2.03);

        let breakdown = price_breakdown(&input(1.005, 0.0, 0.0, 0.0)).unwrap();
        assert_eq!(breakdown.preco_venda, 1.01);
        assert_eq!(breakdown.lucro_bruto, 0.0);
    }

    #[test]
    fn test_negative_half_cent_rounds_away_from_zero() {
        let breakdown = price_breakdown(&input(-8.10, 0.0, 0.0, 20.0)).unwrap();
        assert_eq!(breakdown.preco_venda, -10.13);
    }

    #[test]
    fn test_out_of_range_input_is_a_calculation_error() {
        let err = price_breakdown(&input(1e300, 0.0, 0.0, 20.0)).unwrap_err();
        assert!(matches!(err, CoreError::CalculationError(_)));
    }

    #[test]
    fn test_outputs_rounded_to_cents() {
        // 100 / 0.7 = 142.857142...
        let breakdown = price_breakdown(&input(100.0, 0.0, 0.0, 30.0)).unwrap();

        assert_eq!(breakdown.preco_venda, 142.86);
        assert_eq!(breakdown.lucro_bruto, 42.86);
        assert_eq!(breakdown.lucro_liquido, 42.86);
    }

    #[test]
    fn test_zero_margin_sells_at_total_cost() {
        let breakdown = price_breakdown(&input(40.0, 4.0, 6.0, 0.0)).unwrap();

        assert_eq!(breakdown.preco_venda, 50.0);
        assert_eq!(breakdown.lucro_bruto, 10.0);
        assert_eq!(breakdown.lucro_liquido, 0.0);
    }

    #[test]
    fn test_margin_of_one_hundred_is_rejected() {
        let err = price_breakdown(&input(50.0, 0.0, 0.0, 100.0)).unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));

        let err = price_breakdown(&input(50.0, 0.0, 0.0, 150.0)).unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn test_blank_product_is_rejected() {
        let mut blank = input(50.0, 0.0, 0.0, 20.0);
        blank.produto = "   ".to_string();

        assert!(matches!(price_breakdown(&blank), Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn test_negative_cost_is_not_range_checked() {
        let breakdown = price_breakdown(&input(-10.0, 0.0, 0.0, 50.0)).unwrap();
        assert_eq!(breakdown.preco_venda, -20.0);
    }

    #[test]
    fn test_defaults_when_optional_fields_missing() {
        let parsed: SalesInput =
            serde_json::from_str(r#"{"produto": "Capa", "preco_custo": 80.0}"#).unwrap();

        assert_eq!(parsed.impostos, 0.0);
        assert_eq!(parsed.frete, 0.0);
        assert_eq!(parsed.margem_desejada, 20.0);
        assert_eq!(price_breakdown(&parsed).unwrap().preco_venda, 100.0);
    }
}
