//! Token unit scaling.
//!
//! Amounts arrive as raw integers in the token's smallest unit. The portal
//! token carries 6 decimals, so every displayed amount is the raw value
//! divided by 10^6.

/// Decimal places of the reward and stake tokens.
pub const TOKEN_DECIMALS: u32 = 6;

/// Raw units per whole token.
pub const TOKEN_SCALE: u64 = 1_000_000;

/// Unit suffix shown next to claimable rewards.
pub const REWARD_TOKEN_SYMBOL: &str = "NTX";

/// Formats a raw amount as whole tokens.
///
/// The result is exact: trailing fractional zeros are trimmed and whole
/// amounts print without a decimal point (`2_500_000` becomes `2.5`).
pub fn format_token_amount(raw: u64) -> String {
    let whole = raw / TOKEN_SCALE;
    let fraction = raw % TOKEN_SCALE;
    if fraction == 0 {
        return whole.to_string();
    }
    let digits = format!("{:0width$}", fraction, width = TOKEN_DECIMALS as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

/// Formats a raw reward with the reward token symbol.
pub fn format_reward(raw: u64) -> String {
    format!("{} {}", format_token_amount(raw), REWARD_TOKEN_SYMBOL)
}

/// Raw amounts are served either as JSON numbers or as decimal strings.
pub mod raw_amount {
    use serde::{Deserialize, Deserializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s.trim().parse().map_err(D::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_amounts() {
        assert_eq!(format_token_amount(0), "0");
        assert_eq!(format_token_amount(5_000_000), "5");
        assert_eq!(format_token_amount(1_234_000_000), "1234");
    }

    #[test]
    fn test_fractional_amounts() {
        assert_eq!(format_token_amount(2_500_000), "2.5");
        assert_eq!(format_token_amount(1), "0.000001");
        assert_eq!(format_token_amount(10_050_000), "10.05");
        assert_eq!(format_token_amount(999_999), "0.999999");
    }

    #[derive(serde::Deserialize)]
    struct Wrapped {
        #[serde(deserialize_with = "raw_amount::deserialize")]
        amount: u64,
    }

    #[test]
    fn test_raw_amount_from_string_or_number() {
        let a: Wrapped = serde_json::from_str(r#"{"amount":"42000000"}"#).unwrap();
        let b: Wrapped = serde_json::from_str(r#"{"amount":42000000}"#).unwrap();
        assert_eq!(a.amount, b.amount);
        assert!(serde_json::from_str::<Wrapped>(r#"{"amount":"-1"}"#).is_err());
    }

    #[test]
    fn test_reward_suffix() {
        assert_eq!(format_reward(12_000_000), "12 NTX");
    }
}
