// src/state.rs
use crate::config::Config;
use crate::error::Result;
use crate::io::element_table_or_default;
use crate::model::{embedded_table, ElementTable};
use crate::physics::{Analysis, PlotPoint};
use crate::utils::report;
use std::path::PathBuf;

pub struct AppState {
    pub config: Config,
    pub table: ElementTable,
    /// Last successful analysis; cleared when a lookup fails
    pub analysis: Option<Analysis>,
    /// Friendly message for the last failed submission
    pub message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            table: embedded_table().clone(),
            analysis: None,
            message: None,
        }
    }

    /// Reads settings.json and the element table it points to.
    pub fn load_config(&mut self) {
        let (cfg, msg) = Config::load();
        log::info!("{}", msg);
        self.config = cfg;
        self.reload_table();
    }

    pub fn reload_table(&mut self) {
        self.table = element_table_or_default(self.config.element_table.as_deref());
    }

    /// Swaps in a table loaded by the user. Earlier results may refer to the
    /// old table, so they are dropped.
    pub fn replace_table(&mut self, table: ElementTable, path: PathBuf) {
        self.table = table;
        self.config.element_table = Some(path);
        self.analysis = None;
        self.message = None;
    }

    /// Runs the whole pipeline for one submitted symbol.
    pub fn submit(&mut self, symbol: &str) -> Result<&Analysis> {
        match Analysis::run(symbol, &self.table) {
            Ok(analysis) => {
                self.message = None;
                Ok(self.analysis.insert(analysis))
            }
            Err(e) => {
                self.analysis = None;
                self.message = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Title and scatter points for the plot (empty when nothing is loaded)
    pub fn plot_data(&self) -> (String, Vec<PlotPoint>) {
        match &self.analysis {
            Some(a) => (a.title(), a.points()),
            None => (String::new(), Vec::new()),
        }
    }

    /// Text for the results view.
    pub fn results_text(&self) -> String {
        if let Some(msg) = &self.message {
            return msg.clone();
        }
        match &self.analysis {
            Some(a) => report::analysis_summary(a),
            None => "Enter the symbol of the element.".to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
