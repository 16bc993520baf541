//! Command-line driver for checkbox groups.
//!
//! Builds a group from a JSON config and flag overrides, mounts it with a
//! two-way bound model, replays a list of clicks and reports the rendered
//! HTML together with every notification the group emitted.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use checkgroup::events::EmittedEvent;
use checkgroup::options::RawOption;
use checkgroup::{CheckboxGroup, GroupConfig, SelectionCollection, Size};
use clap::Parser;
use serde::Serialize;

/// Render a checkbox group and replay clicks against it
#[derive(Parser, Debug, Default)]
#[command(name = "checkgroup")]
#[command(about = "Render a checkbox group and replay clicks against it")]
pub struct Args {
    /// JSON config file (camelCase props, e.g. {"options": ["a", "b"]})
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Extra plain options, appended after the configured ones
    #[arg(long = "option", short = 'o')]
    pub options: Vec<String>,

    /// Render as a button group
    #[arg(long)]
    pub buttons: bool,

    /// Stack vertically
    #[arg(long)]
    pub stacked: bool,

    /// Control size (sm, md, lg)
    #[arg(long)]
    pub size: Option<Size>,

    /// Shared input name
    #[arg(long)]
    pub name: Option<String>,

    /// Mark children required (needs --name)
    #[arg(long)]
    pub required: bool,

    /// Disable every child
    #[arg(long)]
    pub disabled: bool,

    /// Validation state (true = valid, false = invalid)
    #[arg(long)]
    pub state: Option<bool>,

    /// Click the option at this index (can be specified multiple times)
    #[arg(long, short = 'k')]
    pub click: Vec<usize>,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Write debug logs to this file
    #[arg(long)]
    pub log: Option<PathBuf>,
}

/// Outcome of one run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub html: String,
    pub selection: SelectionCollection,
    pub events: Vec<EmittedEvent>,
    /// Indices whose click was ignored because the option is disabled.
    pub ignored: Vec<usize>,
}

impl Report {
    pub fn to_text(&self) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "{}", self.html)?;
        for event in &self.events {
            writeln!(out, "{} {}", event.event, serde_json::to_string(&event.payload)?)?;
        }
        for index in &self.ignored {
            writeln!(out, "ignored click on option {index}")?;
        }
        writeln!(out, "selection: {}", serde_json::to_string(&self.selection)?)?;
        Ok(out)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Build the group config from `--config` plus flag overrides.
pub fn load_config(args: &Args) -> Result<GroupConfig> {
    let mut config = match &args.config {
        Some(path) => GroupConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GroupConfig::default(),
    };

    config
        .options
        .extend(args.options.iter().map(|text| RawOption::from(text.as_str())));
    config.buttons |= args.buttons;
    config.stacked |= args.stacked;
    config.required |= args.required;
    config.disabled |= args.disabled;
    if args.size.is_some() {
        config.size = args.size;
    }
    if args.name.is_some() {
        config.name = args.name.clone();
    }
    if args.state.is_some() {
        config.state = args.state;
    }

    Ok(config)
}

/// Mount a bound group, replay clicks and collect the report.
pub fn run(args: &Args) -> Result<Report> {
    let config = load_config(args)?;

    let mut group = CheckboxGroup::new(config);
    let model = group.model();
    group.bind(model);
    group.mount();
    let emitted = group.record_events();

    let mut ignored = Vec::new();
    for &index in &args.click {
        let result = group
            .click(index)
            .with_context(|| format!("Failed to click option {index}"))?;
        if !result.is_handled() {
            log::info!("click on option {} ignored", index);
            ignored.push(index);
        }
    }

    let html = formdom::to_html(&group.render());
    log::info!("rendered {} options, {} clicks", group.options().len(), args.click.len());

    Ok(Report {
        html,
        selection: group.model_value(),
        events: emitted.all(),
        ignored,
    })
}
