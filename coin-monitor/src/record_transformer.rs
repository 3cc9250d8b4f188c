use schema::Asset;
use schema::LooseNumber;

/// An asset with every numeric field coerced to a number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoinRecord {
    pub name: String,
    pub symbol: String,
    pub rank: u32,
    pub price: f64,
    pub market_cap: f64,
    pub supply: f64,
    pub change_percent_24h: f64,
    pub volume_24h: f64,
}

impl From<Asset> for CoinRecord {
    fn from(asset: Asset) -> Self {
        Self {
            name: asset.name.unwrap_or_default(),
            symbol: asset.symbol.unwrap_or_default(),
            rank: amount(&asset.rank).trunc() as u32,
            price: amount(&asset.price_usd),
            market_cap: amount(&asset.market_cap_usd),
            supply: amount(&asset.supply),
            change_percent_24h: number(&asset.change_percent_24_hr),
            volume_24h: amount(&asset.volume_usd_24_hr),
        }
    }
}

#[derive(Default)]
pub struct RecordTransformer;

impl RecordTransformer {
    /// Keeps the assets matching `symbols` (all of them if `symbols` is empty) in source order.
    pub fn transform(&self, assets: Vec<Asset>, symbols: &[String]) -> Vec<CoinRecord> {
        let keywords: Vec<String> = symbols.iter().map(|s| s.to_lowercase()).collect();
        assets
            .into_iter()
            .filter(|asset| keywords.is_empty() || matches_any(asset, &keywords))
            .map(CoinRecord::from)
            .collect()
    }
}

fn matches_any(asset: &Asset, keywords: &[String]) -> bool {
    asset.symbol.as_deref().is_some_and(|symbol| {
        let symbol = symbol.to_lowercase();
        keywords.iter().any(|keyword| *keyword == symbol)
    })
}

fn number(field: &Option<LooseNumber>) -> f64 {
    field.as_ref().and_then(LooseNumber::to_f64).unwrap_or_default()
}

fn amount(field: &Option<LooseNumber>) -> f64 {
    number(field).max(0.0)
}
