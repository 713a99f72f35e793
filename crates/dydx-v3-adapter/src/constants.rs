/*
[INPUT]:  dYdX v3 deployment and market identifiers
[OUTPUT]: String constants passed through to the API unchanged
[POS]:    Shared constants - hosts, markets, resolutions, stats windows
[UPDATE]: When dYdX lists new markets or hosts
*/

// ### API hosts

pub const API_HOST_MAINNET: &str = "https://api.dydx.exchange";
pub const API_HOST_ROPSTEN: &str = "https://api.stage.dydx.exchange";

// ### Markets

pub const MARKET_BTC_USD: &str = "BTC-USD";
pub const MARKET_ETH_USD: &str = "ETH-USD";
pub const MARKET_LINK_USD: &str = "LINK-USD";
pub const MARKET_AAVE_USD: &str = "AAVE-USD";
pub const MARKET_UNI_USD: &str = "UNI-USD";
pub const MARKET_SUSHI_USD: &str = "SUSHI-USD";
pub const MARKET_SOL_USD: &str = "SOL-USD";
pub const MARKET_YFI_USD: &str = "YFI-USD";
pub const MARKET_DOGE_USD: &str = "DOGE-USD";
pub const MARKET_MATIC_USD: &str = "MATIC-USD";

// ### Market statistic windows (days)

pub const MARKET_STATISTIC_DAY_ONE: &str = "1";
pub const MARKET_STATISTIC_DAY_SEVEN: &str = "7";
pub const MARKET_STATISTIC_DAY_THIRTY: &str = "30";

// ### Candle resolutions

pub const CANDLE_RESOLUTION_ONE_DAY: &str = "1DAY";
pub const CANDLE_RESOLUTION_FOUR_HOURS: &str = "4HOURS";
pub const CANDLE_RESOLUTION_ONE_HOUR: &str = "1HOUR";
pub const CANDLE_RESOLUTION_THIRTY_MINS: &str = "30MINS";
pub const CANDLE_RESOLUTION_FIFTEEN_MINS: &str = "15MINS";
pub const CANDLE_RESOLUTION_FIVE_MINS: &str = "5MINS";
pub const CANDLE_RESOLUTION_ONE_MIN: &str = "1MIN";

// ### Assets

pub const ASSET_USDC: &str = "USDC";
