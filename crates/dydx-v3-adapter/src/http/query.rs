/*
[INPUT]:  Base request path and per-endpoint parameter structs
[OUTPUT]: Request path with a form-encoded query string
[POS]:    HTTP layer - query string construction for GET endpoints
[UPDATE]: When adding endpoint parameters or changing query encoding
*/

//! Query parameters for the public GET endpoints.
//!
//! Each struct is built per call and serialized with `serde_urlencoded`.
//! Optional fields are skipped when `None`, so absent parameters never reach
//! the wire; `Some("")` is still sent as `key=`. Field declaration order is
//! the order of the encoded pairs.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::Result;

/// Append the encoded `params` to `path`, or return `path` unchanged when no
/// parameter is present.
pub fn generate_query_path<P>(path: &str, params: &P) -> Result<String>
where
    P: Serialize + ?Sized,
{
    let query = serde_urlencoded::to_string(params)?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{query}"))
    }
}

/// GET /v3/users/exists and GET /v3/rewards/public-retroactive-mining
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EthereumAddressParams<'a> {
    pub ethereum_address: &'a str,
}

/// GET /v3/usernames
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UsernameParams<'a> {
    pub username: &'a str,
}

/// GET /v3/markets
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MarketsParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<&'a str>,
}

/// GET /v3/stats[/{market}]
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct StatsParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<&'a str>,
}

/// GET /v3/trades/{market}
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_before_or_at: Option<&'a str>,
}

/// GET /v3/historical-funding/{market}
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalFundingParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_before_or_at: Option<&'a str>,
}

/// GET /v3/fast-withdrawals
#[derive(Debug, Clone, Copy, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FastWithdrawalParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_asset: Option<&'a str>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_amount: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit_amount: Option<Decimal>,
}

/// GET /v3/candles/{market}
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CandlesParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<&'a str>,
    #[serde(rename = "fromISO", skip_serializing_if = "Option::is_none")]
    pub from_iso: Option<&'a str>,
    #[serde(rename = "toISO", skip_serializing_if = "Option::is_none")]
    pub to_iso: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
