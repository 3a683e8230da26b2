use serde::{Deserialize, Serialize};

const SELLER_MARKET_BELOW_MONTHS: f64 = 4.0;
const BUYER_MARKET_ABOVE_MONTHS: f64 = 6.0;
const TREND_THRESHOLD_PCT: f64 = 2.0;

/// Seller's, buyer's, or balanced market derived from months of supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarketType {
    Seller,
    Buyer,
    Balanced,
}

impl MarketType {
    /// 4 and 6 months inclusive stay balanced; missing supply is balanced.
    pub fn from_months_of_supply(months_of_supply: Option<f64>) -> Self {
        match months_of_supply {
            Some(months) if months < SELLER_MARKET_BELOW_MONTHS => Self::Seller,
            Some(months) if months > BUYER_MARKET_ABOVE_MONTHS => Self::Buyer,
            _ => Self::Balanced,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarketType::Seller => "Seller's market",
            MarketType::Buyer => "Buyer's market",
            MarketType::Balanced => "Balanced market",
        }
    }
}

/// Direction of the year-over-year median sale price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    /// Changes within plus or minus 2 points inclusive are stable.
    pub fn from_price_yoy(price_yoy_pct: Option<f64>) -> Self {
        match price_yoy_pct {
            Some(change) if change > TREND_THRESHOLD_PCT => Self::Up,
            Some(change) if change < -TREND_THRESHOLD_PCT => Self::Down,
            _ => Self::Stable,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Up => "Prices rising",
            TrendDirection::Down => "Prices falling",
            TrendDirection::Stable => "Prices stable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn market_type_boundaries_are_exact() {
        assert_eq!(MarketType::from_months_of_supply(Some(3.9)), MarketType::Seller);
        assert_eq!(MarketType::from_months_of_supply(Some(4.0)), MarketType::Balanced);
        assert_eq!(MarketType::from_months_of_supply(Some(5.0)), MarketType::Balanced);
        assert_eq!(MarketType::from_months_of_supply(Some(6.0)), MarketType::Balanced);
        assert_eq!(MarketType::from_months_of_supply(Some(6.1)), MarketType::Buyer);
        assert_eq!(MarketType::from_months_of_supply(Some(0.0)), MarketType::Seller);
    }

    #[test]
    fn market_type_defaults_to_balanced_when_absent() {
        assert_eq!(MarketType::from_months_of_supply(None), MarketType::Balanced);
    }

    #[test]
    fn trend_direction_boundaries_are_exact() {
        assert_eq!(TrendDirection::from_price_yoy(Some(2.0)), TrendDirection::Stable);
        assert_eq!(TrendDirection::from_price_yoy(Some(2.1)), TrendDirection::Up);
        assert_eq!(TrendDirection::from_price_yoy(Some(-2.0)), TrendDirection::Stable);
        assert_eq!(TrendDirection::from_price_yoy(Some(-2.1)), TrendDirection::Down);
        assert_eq!(TrendDirection::from_price_yoy(None), TrendDirection::Stable);
    }

    #[test]
    fn classifications_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&MarketType::Seller).expect("serialize"),
            "\"seller\""
        );
        assert_eq!(
            serde_json::to_string(&TrendDirection::Stable).expect("serialize"),
            "\"stable\""
        );
    }
}
