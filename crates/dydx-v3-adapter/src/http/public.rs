/*
[INPUT]:  Market identifiers, addresses and optional query parameters
[OUTPUT]: Normalized responses (markets, orderbook, trades, candles, config)
[POS]:    HTTP layer - public endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing parameters
*/

use rust_decimal::Decimal;

use crate::http::query::{
    CandlesParams, EthereumAddressParams, FastWithdrawalParams, HistoricalFundingParams,
    MarketsParams, StatsParams, TradesParams, UsernameParams,
};
use crate::http::{DydxClient, Response, Result};
use crate::types::VerifyEmailRequest;

impl DydxClient {
    /// Check if a user exists
    ///
    /// GET /v3/users/exists?ethereumAddress={ethereum_address}
    pub async fn check_if_user_exists(&self, ethereum_address: &str) -> Result<Response> {
        let params = EthereumAddressParams { ethereum_address };
        self.get_with_params("/v3/users/exists", &params).await
    }

    /// Check if a username is taken
    ///
    /// GET /v3/usernames?username={username}
    pub async fn check_if_username_exists(&self, username: &str) -> Result<Response> {
        self.get_with_params("/v3/usernames", &UsernameParams { username })
            .await
    }

    /// Get one or all markets
    ///
    /// GET /v3/markets?market={market}
    pub async fn get_markets(&self, market: Option<&str>) -> Result<Response> {
        self.get_with_params("/v3/markets", &MarketsParams { market })
            .await
    }

    /// Get the orderbook for a market
    ///
    /// GET /v3/orderbook/{market}
    pub async fn get_orderbook(&self, market: &str) -> Result<Response> {
        self.get(&format!("/v3/orderbook/{market}")).await
    }

    /// Get day statistics for one market, or for all markets when `market` is `None`
    ///
    /// GET /v3/stats[/{market}]?days={days}
    pub async fn get_stats(&self, market: Option<&str>, days: Option<&str>) -> Result<Response> {
        let path = match market {
            Some(market) => format!("/v3/stats/{market}"),
            None => "/v3/stats".to_string(),
        };
        self.get_with_params(&path, &StatsParams { days }).await
    }

    /// Get trades for a market
    ///
    /// GET /v3/trades/{market}?startingBeforeOrAt={starting_before_or_at}
    pub async fn get_trades(
        &self,
        market: &str,
        starting_before_or_at: Option<&str>,
    ) -> Result<Response> {
        let params = TradesParams {
            starting_before_or_at,
        };
        self.get_with_params(&format!("/v3/trades/{market}"), &params)
            .await
    }

    /// Get historical funding rates for a market
    ///
    /// GET /v3/historical-funding/{market}?effectiveBeforeOrAt={effective_before_or_at}
    pub async fn get_historical_funding(
        &self,
        market: &str,
        effective_before_or_at: Option<&str>,
    ) -> Result<Response> {
        let params = HistoricalFundingParams {
            effective_before_or_at,
        };
        self.get_with_params(&format!("/v3/historical-funding/{market}"), &params)
            .await
    }

    /// Get fast withdrawal liquidity providers
    ///
    /// GET /v3/fast-withdrawals?creditAsset=&creditAmount=&debitAmount=
    pub async fn get_fast_withdrawal(
        &self,
        credit_asset: Option<&str>,
        credit_amount: Option<Decimal>,
        debit_amount: Option<Decimal>,
    ) -> Result<Response> {
        let params = FastWithdrawalParams {
            credit_asset,
            credit_amount,
            debit_amount,
        };
        self.get_with_params("/v3/fast-withdrawals", &params).await
    }

    /// Get candles for a market
    ///
    /// GET /v3/candles/{market}?resolution=&fromISO=&toISO=&limit=
    pub async fn get_candles(
        &self,
        market: &str,
        resolution: Option<&str>,
        from_iso: Option<&str>,
        to_iso: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Response> {
        let params = CandlesParams {
            resolution,
            from_iso,
            to_iso,
            limit,
        };
        self.get_with_params(&format!("/v3/candles/{market}"), &params)
            .await
    }

    /// Get API server time as ISO string and epoch seconds
    ///
    /// GET /v3/time
    pub async fn get_time(&self) -> Result<Response> {
        self.get("/v3/time").await
    }

    /// Verify an email address with the emailed token
    ///
    /// PUT /v3/emails/verify-email
    pub async fn verify_email(&self, token: &str) -> Result<Response> {
        let body = VerifyEmailRequest {
            token: token.to_string(),
        };
        self.put("emails/verify-email", &body).await
    }

    /// Get public retroactive mining rewards for an address
    ///
    /// GET /v3/rewards/public-retroactive-mining?ethereumAddress={ethereum_address}
    pub async fn get_public_retroactive_mining_rewards(
        &self,
        ethereum_address: &str,
    ) -> Result<Response> {
        let params = EthereumAddressParams { ethereum_address };
        self.get_with_params("/v3/rewards/public-retroactive-mining", &params)
            .await
    }

    /// Get global exchange configuration (fees, addresses, transfer limits)
    ///
    /// GET /v3/config
    pub async fn get_config(&self) -> Result<Response> {
        self.get("/v3/config").await
    }
}
