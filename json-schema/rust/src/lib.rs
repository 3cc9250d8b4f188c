use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Body of `GET /assets`.
#[derive(Deserialize, Serialize, Debug, PartialEq, Default)]
pub struct AssetsResponse {
    pub data: Vec<Asset>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct Asset {
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub rank: Option<LooseNumber>,

    #[serde(rename = "priceUsd")]
    pub price_usd: Option<LooseNumber>,

    #[serde(rename = "marketCapUsd")]
    pub market_cap_usd: Option<LooseNumber>,

    pub supply: Option<LooseNumber>,

    #[serde(rename = "volumeUsd24Hr")]
    pub volume_usd_24_hr: Option<LooseNumber>,

    #[serde(rename = "changePercent24Hr")]
    pub change_percent_24_hr: Option<LooseNumber>,
}

/// A numeric field as sent by the API.
///
/// CoinCap encodes numbers as decimal strings, but plain JSON numbers are accepted too. Anything
/// else is kept as-is so that one odd field does not fail the whole response.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
    Other(Value),
}

impl LooseNumber {
    /// Returns the value if it is a finite number or a string holding one.
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Other(_) => None,
        };
        value.filter(|value| value.is_finite())
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_assets_response() -> anyhow::Result<()> {
        // Given
        let json = r#"
          {
            "data": [
              {
                "id": "bitcoin",
                "rank": "1",
                "symbol": "BTC",
                "name": "Bitcoin",
                "supply": "19700000.0000000000000000",
                "marketCapUsd": "1234567890123.4567",
                "volumeUsd24Hr": "9876543210.12",
                "priceUsd": "62666.0134",
                "changePercent24Hr": "-1.2345",
                "vwap24Hr": "62000.1"
              },
              {
                "symbol": "ETH",
                "rank": 2,
                "priceUsd": null,
                "changePercent24Hr": true
              }
            ],
            "timestamp": 1700000000000
          }
        "#;
        let expected_response = AssetsResponse {
            data: vec![
                Asset {
                    name: Some("Bitcoin".into()),
                    symbol: Some("BTC".into()),
                    rank: Some("1".into()),
                    price_usd: Some("62666.0134".into()),
                    market_cap_usd: Some("1234567890123.4567".into()),
                    supply: Some("19700000.0000000000000000".into()),
                    volume_usd_24_hr: Some("9876543210.12".into()),
                    change_percent_24_hr: Some("-1.2345".into()),
                },
                Asset {
                    symbol: Some("ETH".into()),
                    rank: Some(2.0.into()),
                    change_percent_24_hr: Some(LooseNumber::Other(Value::Bool(true))),
                    ..Default::default()
                },
            ],
        };

        // When
        let actual_response: AssetsResponse = serde_json::from_str(json)?;

        // Then
        assert_eq!(expected_response, actual_response);
        Ok(())
    }

    #[test]
    fn loose_number_to_f64() {
        assert_eq!(Some(1.5), LooseNumber::from(1.5).to_f64());
        assert_eq!(Some(62666.0134), LooseNumber::from(" 62666.0134 ").to_f64());
        assert_eq!(None, LooseNumber::from("abc").to_f64());
        assert_eq!(None, LooseNumber::from("").to_f64());
        assert_eq!(None, LooseNumber::from("NaN").to_f64());
        assert_eq!(None, LooseNumber::Other(Value::Bool(true)).to_f64());
    }
}
