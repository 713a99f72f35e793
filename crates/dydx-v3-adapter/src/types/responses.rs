/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed views of common public responses
[POS]:    Data layer - optional decoding targets for Response::json
[UPDATE]: When API schema changes or new types added
*/

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// GET /v3/users/exists and GET /v3/usernames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

/// GET /v3/time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerTimeResponse {
    pub iso: DateTime<Utc>,
    pub epoch: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderbookLevel {
    pub price: Decimal,
    pub size: Decimal,
}

/// GET /v3/orderbook/{market}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderbookResponse {
    pub bids: Vec<OrderbookLevel>,
    pub asks: Vec<OrderbookLevel>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_server_time_deserialize() {
        let time: ServerTimeResponse =
            serde_json::from_str(r#"{"iso":"2021-02-02T18:35:45.000Z","epoch":1612290945.0}"#)
                .unwrap();
        assert_eq!(time.iso, Utc.with_ymd_and_hms(2021, 2, 2, 18, 35, 45).unwrap());
        assert_eq!(time.epoch, 1_612_290_945.0);
    }

    #[test]
    fn test_orderbook_levels_are_decimal_strings() {
        let book: OrderbookResponse = serde_json::from_str(
            r#"{"bids":[{"price":"29000.5","size":"0.25"}],"asks":[{"price":"29001","size":"1.5"}]}"#,
        )
        .unwrap();
        assert_eq!(book.bids[0].price, "29000.5".parse::<Decimal>().unwrap());
        assert_eq!(book.asks[0].size, "1.5".parse::<Decimal>().unwrap());
    }
}
