use crate::arithmetic_renderer::ArithmeticRenderer;
use crate::record_transformer::CoinRecord;
use itertools::Itertools;
use strum::Display;
use strum::EnumIter;
use strum::IntoEnumIterator;

const NOT_AVAILABLE: &str = "NA";

#[derive(Display, EnumIter, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Rank,
    Coin,
    #[strum(to_string = "Price (USD)")]
    Price,
    #[strum(to_string = "Change 24H")]
    Change24h,
    #[strum(to_string = "Market Cap")]
    MarketCap,
    Supply,
    #[strum(to_string = "Volume 24H")]
    Volume24h,
}

impl Column {
    /// Every column in display order.
    pub fn all() -> Vec<Self> {
        Self::iter().sorted().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Plain,
    Positive,
    Negative,
    NotAvailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub tone: Tone,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }
}

pub type DisplayRow = Vec<Cell>;

#[derive(Default)]
pub struct RowRenderer {
    arithmetic_renderer: ArithmeticRenderer,
}

impl RowRenderer {
    pub fn render(&self, records: &[CoinRecord], columns: &[Column]) -> Vec<DisplayRow> {
        records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| self.render_cell(record, *column))
                    .collect()
            })
            .collect()
    }

    fn render_cell(&self, record: &CoinRecord, column: Column) -> Cell {
        let renderer = &self.arithmetic_renderer;
        match column {
            Column::Rank => Cell::plain(record.rank.to_string()),
            Column::Coin => Cell::plain(record.symbol.as_str()),
            Column::Price => Cell::plain(renderer.render_fixed(record.price, 4)),
            Column::Change24h => self.render_change(record.change_percent_24h),
            Column::MarketCap => Cell::plain(renderer.render_abbreviated(record.market_cap)),
            Column::Supply => Cell::plain(renderer.render_abbreviated(record.supply)),
            Column::Volume24h => Cell::plain(renderer.render_abbreviated(record.volume_24h)),
        }
    }

    fn render_change(&self, change: f64) -> Cell {
        if change == 0.0 || change.is_nan() {
            return Cell {
                text: NOT_AVAILABLE.into(),
                tone: Tone::NotAvailable,
            };
        }
        let rounded = self.arithmetic_renderer.render_fixed(change, 2);
        // Tone follows the printed two-decimal value.
        let tone = if rounded.parse::<f64>().is_ok_and(|value| value > 0.0) {
            Tone::Positive
        } else {
            Tone::Negative
        };
        Cell {
            text: format!("{}%", rounded),
            tone,
        }
    }
}
