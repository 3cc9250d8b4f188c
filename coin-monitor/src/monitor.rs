use crate::cli::MonitorOptions;
use crate::config::Config;
use crate::loading_indicator::Loading;
use crate::loading_indicator::LoadingIndicator;
use crate::loading_indicator::spinner;
use crate::record_transformer::RecordTransformer;
use crate::row_renderer::Column;
use crate::row_renderer::RowRenderer;
use crate::table_printer::TablePrinter;
use chrono::DateTime;
use chrono::Local;
use log::debug;
use std::io::IsTerminal;
use std::process::ExitCode;
use yansi::Paint;

#[mockall_double::double]
use crate::clock::Clock;

#[mockall_double::double]
use crate::coincap_client::CoinCapClient;

const LOADING_MESSAGE: &str = "Loading data";
pub const NO_MATCHES_MESSAGE: &str = "We are not able to find coins matching your keywords";
pub const FAILURE_MESSAGE: &str = "Coinmon is not working now. Please try again later.";

pub struct Monitor {
    options: MonitorOptions,
    source: String,
    coincap_client: CoinCapClient,
    clock: Clock,
    loading_indicator: Box<dyn LoadingIndicator>,
    record_transformer: RecordTransformer,
    row_renderer: RowRenderer,
    table_printer: TablePrinter,
}

impl Monitor {
    pub fn new(options: MonitorOptions, config: &Config, colored: bool) -> Self {
        Self {
            options,
            source: config.source_name(),
            coincap_client: CoinCapClient::new(config.api_url.clone(), config.timeout()),
            clock: Default::default(),
            loading_indicator: Box::new(spinner()),
            record_transformer: RecordTransformer,
            row_renderer: Default::default(),
            table_printer: TablePrinter { colored },
        }
    }

    pub async fn run(&self) -> Report {
        let assets = {
            let _loading = Loading::start(self.loading_indicator.as_ref(), LOADING_MESSAGE);
            self.coincap_client.assets(self.options.limit).await
        };
        let assets = match assets {
            Ok(assets) => assets,
            Err(error) => {
                debug!("Failed to fetch assets: {:?}", error);
                let message = if self.options.verbose {
                    format!("error: {:?}", error)
                } else {
                    FAILURE_MESSAGE.into()
                };
                return Report::Failed { message };
            }
        };

        let records = self
            .record_transformer
            .transform(assets, &self.options.symbols);
        if records.is_empty() {
            return Report::NoMatches;
        }

        let columns = Column::all();
        let rows = self.row_renderer.render(&records, &columns);
        Report::Table {
            source: self.source.clone(),
            fetched_at: self.clock.now(),
            table: self.table_printer.render(&columns, &rows),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Report {
    Table {
        source: String,
        fetched_at: DateTime<Local>,
        table: String,
    },
    NoMatches,
    Failed {
        message: String,
    },
}

/// Whether each output stream accepts colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorSupport {
    pub stdout: bool,
    pub stderr: bool,
}

impl ColorSupport {
    pub fn detect() -> Self {
        Self {
            stdout: std::io::stdout().is_terminal(),
            stderr: std::io::stderr().is_terminal(),
        }
    }
}

impl Report {
    pub fn print(&self, colors: ColorSupport) {
        let text = self.render(colors);
        if self.is_failure() {
            eprintln!("{}", text);
        } else {
            println!("{}", text);
        }
    }

    /// Renders the report for its stream: stderr for failures, stdout otherwise.
    fn render(&self, colors: ColorSupport) -> String {
        match self {
            Self::Table {
                source,
                fetched_at,
                table,
            } => format!("{}\n{}", attribution(source, fetched_at), table),
            Self::NoMatches => red(NO_MATCHES_MESSAGE, colors.stdout),
            Self::Failed { message } => red(message, colors.stderr),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_failure() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

fn red(text: &str, colored: bool) -> String {
    if colored {
        Paint::red(text).to_string()
    } else {
        text.to_string()
    }
}

fn attribution(source: &str, fetched_at: &DateTime<Local>) -> String {
    format!(
        "Data source from {} at {}",
        source,
        fetched_at.format("%-I:%M:%S %p")
    )
}
