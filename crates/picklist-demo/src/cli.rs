use std::path::{Path, PathBuf};

use clap::Parser;
use picklist_core::{Event, HitId, Items};
use picklist_runtime::{EventOutcome, Program};
use picklist_widgets::ListView;
use serde::Serialize;
use tracing::warn;

use crate::app::App;
use crate::config::DemoConfig;
use crate::error::{DemoError, Result};
use crate::logging::init_logging;
use crate::script::Step;

#[derive(Debug, Parser)]
#[command(
    name = "picklist-demo",
    about = "Render a selectable list as HTML and replay clicks against it",
    version
)]
pub struct Cli {
    /// JSON file with an array of `{ "text": ... }` records.
    #[arg(long)]
    pub items: PathBuf,

    /// Optional TOML or JSON config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a JSON report instead of bare HTML.
    #[arg(long)]
    pub json: bool,

    /// Only log errors.
    #[arg(long, short)]
    pub quiet: bool,

    /// Steps to replay in order: `click:<row>` or `reload`.
    #[arg(value_name = "STEP")]
    pub steps: Vec<Step>,
}

/// Result of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub status: &'static str,
    pub html: String,
    pub selected: Option<usize>,
    pub items: usize,
    pub frames_rendered: u64,
    pub ignored_clicks: usize,
}

/// Install logging, run, and print the result in the format `cli` asks for.
pub fn execute(cli: Cli) -> Result<()> {
    init_logging(cli.quiet);
    let json = cli.json;
    let report = run(cli)?;
    if json {
        let encoded = serde_json::to_string_pretty(&report).map_err(DemoError::Report)?;
        println!("{encoded}");
    } else {
        println!("{}", report.html);
    }
    Ok(())
}

pub fn run(cli: Cli) -> Result<Report> {
    let config = match &cli.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    let widget = HitId::new(config.list.widget_id);
    let list = config.apply(ListView::new(load_items(&cli.items)?));
    let mut program = Program::new(App::new(list));
    let mut ignored_clicks = 0;

    for step in &cli.steps {
        match *step {
            Step::Click(row) => {
                let outcome = program.handle_event(&Event::click(widget, row as u64));
                if outcome != EventOutcome::Dispatched {
                    warn!(row, ?outcome, "click did not hit a row");
                    ignored_clicks += 1;
                }
            }
            Step::Reload => program.send(App::reload(load_items(&cli.items)?)),
        }
    }

    let model = program.model();
    Ok(Report {
        status: "ok",
        html: program.html().to_string(),
        selected: model.list().selected(),
        items: model.list().items().len(),
        frames_rendered: program.frames_rendered(),
        ignored_clicks,
    })
}

fn load_items(path: &Path) -> Result<Items> {
    let content = std::fs::read_to_string(path).map_err(|source| DemoError::ItemsIo {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| DemoError::ItemsParse {
        path: path.to_path_buf(),
        source,
    })
}
