use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{Result, WalletError};
use crate::types::{DepositRequest, Token, TokenInfo, TransferRequest};

/// Largest token precision `Decimal` can scale exactly.
pub const MAX_TOKEN_DECIMALS: u32 = 28;

/// Parse user-entered amount text into a positive decimal.
pub fn parse_amount(text: &str) -> Result<Decimal> {
    let amount: Decimal = text.trim().parse().map_err(|_| WalletError::InvalidAmount {
        text: text.to_string(),
        reason: "not a decimal number".into(),
    })?;
    if amount <= Decimal::ZERO {
        return Err(WalletError::InvalidAmount {
            text: text.to_string(),
            reason: "must be greater than zero".into(),
        });
    }
    Ok(amount)
}

/// Convert a decimal amount to integer minor units.
///
/// Scales by `10^decimals` and rounds half away from zero, so `1.5` at
/// 18 decimals is exactly `1_500_000_000_000_000_000`.
pub fn to_minor_units(amount: Decimal, decimals: u32) -> Result<u128> {
    let invalid = |reason: String| WalletError::InvalidAmount {
        text: amount.to_string(),
        reason,
    };

    let scale = Decimal::from_scientific(&format!("1e{decimals}"))
        .map_err(|_| invalid(format!("unsupported token precision: {decimals} decimals")))?;
    let scaled = amount
        .checked_mul(scale)
        .ok_or_else(|| invalid(format!("does not fit in {decimals} decimals")))?;
    scaled
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u128()
        .ok_or_else(|| invalid("out of range for minor units".into()))
}

/// Convert minor units back to display units.
///
/// Returns `None` if `decimals` exceeds what `Decimal` can represent;
/// callers fall back to showing the raw minor-unit value.
pub fn to_display_units(amount_minor: Decimal, decimals: u32) -> Option<Decimal> {
    let scale = Decimal::from_scientific(&format!("1e{decimals}")).ok()?;
    amount_minor.checked_div(scale).map(|d| d.normalize())
}

/// Resolve a token symbol against the advertised list into a validated [`Token`].
///
/// Symbols match exactly; the entry's `decimals` must be an integer in
/// `0..=MAX_TOKEN_DECIMALS`.
pub fn resolve_token(tokens: &[TokenInfo], symbol: &str) -> Result<Token> {
    let entry = tokens
        .iter()
        .find(|t| t.symbol == symbol)
        .ok_or_else(|| WalletError::TokenNotFound(symbol.to_string()))?;

    let invalid = |reason: String| WalletError::InvalidToken {
        symbol: symbol.to_string(),
        reason,
    };

    let decimals = match &entry.decimals {
        None => return Err(invalid("missing decimals".into())),
        Some(n) => n
            .as_u64()
            .ok_or_else(|| invalid("decimals is not a non-negative integer".into()))?,
    };
    if decimals > MAX_TOKEN_DECIMALS as u64 {
        return Err(invalid(format!("decimals out of range: {decimals}")));
    }

    Ok(Token {
        symbol: entry.symbol.clone(),
        decimals: decimals as u32,
        token_index: entry.token_index,
        contract_address: entry.contract_address.clone(),
    })
}

/// Build a deposit request from raw form inputs.
///
/// The amount text is validated first, so a malformed amount fails with
/// `InvalidAmount` regardless of the other arguments.
pub fn build_deposit_request(
    amount_text: &str,
    token: &Token,
    destination_address: &str,
) -> Result<DepositRequest> {
    let amount = parse_amount(amount_text)?;
    let destination = destination_address.trim();
    if destination.is_empty() {
        return Err(WalletError::MissingDestination);
    }
    Ok(DepositRequest {
        amount_minor_units: to_minor_units(amount, token.decimals)?,
        token: token.clone(),
        destination_address: destination.to_string(),
    })
}

/// Build a transfer request from raw form inputs; the recipient is required.
pub fn build_transfer_request(
    amount_text: &str,
    token: &Token,
    recipient_address: &str,
) -> Result<TransferRequest> {
    let amount = parse_amount(amount_text)?;
    let recipient = recipient_address.trim();
    if recipient.is_empty() {
        return Err(WalletError::MissingDestination);
    }
    Ok(TransferRequest {
        amount_minor_units: to_minor_units(amount, token.decimals)?,
        token: token.clone(),
        recipient_address: recipient.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn eth() -> Token {
        Token {
            symbol: "ETH".into(),
            decimals: 18,
            token_index: Some(0),
            contract_address: None,
        }
    }

    fn sample_tokens() -> Vec<TokenInfo> {
        vec![
            TokenInfo {
                symbol: "ETH".into(),
                token_index: Some(0),
                decimals: Some(18u64.into()),
                contract_address: None,
            },
            TokenInfo {
                symbol: "USDC".into(),
                token_index: Some(3),
                decimals: Some(6u64.into()),
                contract_address: Some("0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".into()),
            },
            TokenInfo {
                symbol: "MYSTERY".into(),
                token_index: None,
                decimals: None,
                contract_address: None,
            },
        ]
    }

    // ---- parse_amount ----

    #[test]
    fn test_parse_amount_basic() {
        assert_eq!(parse_amount("1.5").unwrap(), dec!(1.5));
        assert_eq!(parse_amount("0.001").unwrap(), dec!(0.001));
        assert_eq!(parse_amount("  42  ").unwrap(), dec!(42));
    }

    #[test]
    fn test_parse_amount_rejects_non_numeric() {
        for text in ["abc", "", "1.2.3", "one", "1e3", "0x10"] {
            let err = parse_amount(text).unwrap_err();
            assert!(
                matches!(err, WalletError::InvalidAmount { .. }),
                "{text:?} should be invalid, got {err}"
            );
        }
    }

    #[test]
    fn test_parse_amount_rejects_non_positive() {
        for text in ["0", "0.000", "-1.5", "-0"] {
            let err = parse_amount(text).unwrap_err();
            assert!(matches!(err, WalletError::InvalidAmount { .. }), "{text:?}");
        }
    }

    // ---- to_minor_units ----

    #[test]
    fn test_to_minor_units_wei_scaling() {
        assert_eq!(
            to_minor_units(dec!(1.5), 18).unwrap(),
            1_500_000_000_000_000_000u128
        );
    }

    #[test]
    fn test_to_minor_units_basic() {
        assert_eq!(to_minor_units(dec!(1.23456789), 8).unwrap(), 123_456_789);
        assert_eq!(to_minor_units(dec!(42), 6).unwrap(), 42_000_000);
        assert_eq!(to_minor_units(dec!(0), 18).unwrap(), 0);
    }

    #[test]
    fn test_to_minor_units_rounds_half_away_from_zero() {
        assert_eq!(to_minor_units(dec!(0.5), 0).unwrap(), 1);
        assert_eq!(to_minor_units(dec!(2.5), 0).unwrap(), 3);
        assert_eq!(to_minor_units(dec!(1.25), 1).unwrap(), 13);
        assert_eq!(to_minor_units(dec!(0.0000000000000000005), 18).unwrap(), 1);
    }

    #[test]
    fn test_to_minor_units_rounds_below_midpoint_down() {
        assert_eq!(to_minor_units(dec!(1.4), 0).unwrap(), 1);
        assert_eq!(to_minor_units(dec!(1.04), 1).unwrap(), 10);
        assert_eq!(to_minor_units(dec!(0.0000000000000000004), 18).unwrap(), 0);
    }

    #[test]
    fn test_to_minor_units_truncated_precision_beyond_decimals() {
        // digits beyond the token's precision round, they do not accumulate
        assert_eq!(to_minor_units(dec!(1.0000009), 6).unwrap(), 1_000_001);
        assert_eq!(to_minor_units(dec!(1.0000004), 6).unwrap(), 1_000_000);
    }

    #[test]
    fn test_to_minor_units_negative_is_out_of_range() {
        assert!(to_minor_units(dec!(-1), 2).is_err());
    }

    #[test]
    fn test_to_minor_units_overflow() {
        assert!(to_minor_units(Decimal::MAX, 18).is_err());
    }

    #[test]
    fn test_to_minor_units_unsupported_precision() {
        let err = to_minor_units(dec!(1), 40).unwrap_err();
        assert!(matches!(err, WalletError::InvalidAmount { .. }));
    }

    // ---- to_display_units ----

    #[test]
    fn test_to_display_units_inverts_scaling() {
        assert_eq!(
            to_display_units(dec!(1500000000000000000), 18).unwrap(),
            dec!(1.5)
        );
        assert_eq!(to_display_units(dec!(123456789), 8).unwrap(), dec!(1.23456789));
        assert_eq!(to_display_units(dec!(0), 18).unwrap(), dec!(0));
    }

    #[test]
    fn test_to_display_units_unsupported_precision() {
        assert!(to_display_units(dec!(1), 40).is_none());
    }

    // ---- resolve_token ----

    #[test]
    fn test_resolve_token_found() {
        let tokens = sample_tokens();
        let token = resolve_token(&tokens, "USDC").unwrap();
        assert_eq!(token.symbol, "USDC");
        assert_eq!(token.decimals, 6);
        assert_eq!(token.token_index, Some(3));
    }

    #[test]
    fn test_resolve_token_not_found() {
        let tokens = sample_tokens();
        let err = resolve_token(&tokens, "DOGE").unwrap_err();
        assert!(matches!(err, WalletError::TokenNotFound(ref s) if s == "DOGE"));
    }

    #[test]
    fn test_resolve_token_symbol_match_is_exact() {
        let tokens = sample_tokens();
        assert!(matches!(
            resolve_token(&tokens, "eth").unwrap_err(),
            WalletError::TokenNotFound(_)
        ));
    }

    #[test]
    fn test_resolve_token_missing_decimals() {
        let tokens = sample_tokens();
        let err = resolve_token(&tokens, "MYSTERY").unwrap_err();
        assert!(matches!(err, WalletError::InvalidToken { .. }), "got {err}");
    }

    #[test]
    fn test_resolve_token_negative_decimals() {
        let tokens = vec![TokenInfo {
            symbol: "BAD".into(),
            token_index: None,
            decimals: Some((-3i64).into()),
            contract_address: None,
        }];
        let err = resolve_token(&tokens, "BAD").unwrap_err();
        assert!(matches!(err, WalletError::InvalidToken { .. }));
    }

    #[test]
    fn test_resolve_token_fractional_decimals() {
        let tokens = vec![TokenInfo {
            symbol: "BAD".into(),
            token_index: None,
            decimals: serde_json::Number::from_f64(1.5),
            contract_address: None,
        }];
        let err = resolve_token(&tokens, "BAD").unwrap_err();
        assert!(matches!(err, WalletError::InvalidToken { .. }));
    }

    #[test]
    fn test_resolve_token_decimals_out_of_range() {
        let tokens = vec![TokenInfo {
            symbol: "BAD".into(),
            token_index: None,
            decimals: Some(64u64.into()),
            contract_address: None,
        }];
        let err = resolve_token(&tokens, "BAD").unwrap_err();
        assert!(matches!(err, WalletError::InvalidToken { .. }));
    }

    // ---- build_deposit_request ----

    #[test]
    fn test_build_deposit_request_happy_path() {
        let request = build_deposit_request("1.5", &eth(), "0xdeadbeef").unwrap();
        assert_eq!(request.amount_minor_units, 1_500_000_000_000_000_000u128);
        assert_eq!(request.token.symbol, "ETH");
        assert_eq!(request.destination_address, "0xdeadbeef");
    }

    #[test]
    fn test_build_deposit_request_invalid_amount_wins() {
        // a bad amount reports InvalidAmount even when the destination is also bad
        let err = build_deposit_request("abc", &eth(), "").unwrap_err();
        assert!(matches!(err, WalletError::InvalidAmount { .. }), "got {err}");
    }

    #[test]
    fn test_build_deposit_request_missing_destination() {
        for destination in ["", "   "] {
            let err = build_deposit_request("1.0", &eth(), destination).unwrap_err();
            assert!(matches!(err, WalletError::MissingDestination), "got {err}");
        }
    }

    // ---- build_transfer_request ----

    #[test]
    fn test_build_transfer_request_happy_path() {
        let request = build_transfer_request("0.25", &eth(), "0xrecipient").unwrap();
        assert_eq!(request.amount_minor_units, 250_000_000_000_000_000u128);
        assert_eq!(request.recipient_address, "0xrecipient");
    }

    #[test]
    fn test_build_transfer_request_requires_recipient() {
        let err = build_transfer_request("0.25", &eth(), " ").unwrap_err();
        assert!(matches!(err, WalletError::MissingDestination));
    }
}
