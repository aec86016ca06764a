//! `shmap` - turn scraped shortcut documentation into site datasets.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error, info, warn};

use shortcut_mapper::appdata::regenerate_index;
use shortcut_mapper::config::{self, Config};
use shortcut_mapper::diagnostics::{CollectingSink, TracingSink};
use shortcut_mapper::intermediate::{IntermediateDataset, IntermediateExporter};
use shortcut_mapper::keynames::{lint_layout_templates, resolve};
use shortcut_mapper::logging::{self, LogOptions};
use shortcut_mapper::shortcuts::{parse_combo_with, ShortcutDraft};

#[derive(Parser)]
#[command(name = "shmap")]
#[command(about = "Canonicalize keyboard shortcut documentation", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  shmap export sources/blender/intermediate/blender_2.79.json\n  shmap export --all --test\n  shmap merge --output merged.json a.json b.json\n  shmap resolve '+' --explicit-numpad-keys\n  shmap parse 'Ctrl + 0 - 8'\n"
)]
struct Cli {
    /// Path to the configuration file (default: ./shmap.json, then the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export intermediate file(s) into per-platform datasets
    Export {
        /// Intermediate JSON document
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        file: Option<PathBuf>,

        /// Export every intermediate document under the sources directory
        #[arg(long)]
        all: bool,

        /// Parse and report without writing anything
        #[arg(long)]
        test: bool,

        /// Only map a token to numpad keys when it says "numpad"
        #[arg(short, long)]
        explicit_numpad_keys: bool,
    },

    /// Merge intermediate files; earlier inputs win on conflicts
    Merge {
        /// Where to write the merged document
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Intermediate documents in priority order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },

    /// Regenerate the site index from the generated datasets
    Index,

    /// Print the canonical key names a token resolves to
    Resolve {
        token: String,

        #[arg(short, long)]
        explicit_numpad_keys: bool,
    },

    /// Show how a free-text key combo is parsed and canonicalized
    Parse {
        text: String,

        #[arg(short, long)]
        explicit_numpad_keys: bool,
    },

    /// Check keyboard layout templates for unknown data-key names
    LintLayouts {
        /// Directory holding the *.html layout templates
        dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::default_config_path);
    let config = config::load_config(&config_path);
    let _guard = logging::init(&LogOptions {
        verbose: cli.verbose,
        log_file: config.get_log_file(),
    });
    debug!(config = %config_path.display(), "Starting shmap");

    match run(cli.command, &config) {
        Ok(code) => code,
        Err(e) => {
            error!(error = %format!("{e:#}"), "shmap failed");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, config: &Config) -> Result<ExitCode> {
    match command {
        Commands::Export {
            file,
            all,
            test,
            explicit_numpad_keys,
        } => {
            let explicit = explicit_numpad_keys || config.get_explicit_numpad_keys();
            let files = match file {
                Some(file) => vec![file],
                None if all => find_intermediate_files(config)?,
                None => bail!("no intermediate file given"),
            };
            export(&files, config, test, explicit)
        }
        Commands::Merge { output, inputs } => merge(&inputs, &output),
        Commands::Index => {
            let count = regenerate_index(&config.output_layout())
                .context("failed to regenerate site index")?;
            println!("{count} datasets indexed");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Resolve {
            token,
            explicit_numpad_keys,
        } => {
            let names = resolve(&token, explicit_numpad_keys);
            if names.is_empty() {
                println!("'{token}' is not a known key name");
                return Ok(ExitCode::FAILURE);
            }
            for name in names {
                println!("{name}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Parse {
            text,
            explicit_numpad_keys,
        } => parse(&text, explicit_numpad_keys),
        Commands::LintLayouts { dir } => {
            let unknown = lint_layout_templates(&dir)
                .with_context(|| format!("failed to scan layouts in {}", dir.display()))?;
            for key in &unknown {
                println!("{}:{}: unknown key name '{}'", key.template.display(), key.line, key.key);
            }
            if unknown.is_empty() {
                info!(dir = %dir.display(), "All layout keys are valid");
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn find_intermediate_files(config: &Config) -> Result<Vec<PathBuf>> {
    let pattern = config.intermediate_glob();
    let mut files: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("invalid intermediate pattern '{pattern}'"))?
        .flatten()
        .collect();
    files.sort();
    if files.is_empty() {
        warn!(pattern = %pattern, "No intermediate files found");
    }
    Ok(files)
}

fn export(files: &[PathBuf], config: &Config, test: bool, explicit: bool) -> Result<ExitCode> {
    let layout = config.output_layout();
    if !test {
        std::fs::create_dir_all(&layout.output_dir).with_context(|| {
            format!("failed to create output dir {}", layout.output_dir.display())
        })?;
    }

    let mut sink = TracingSink::new();
    let mut written = 0;
    for file in files {
        let exporter = IntermediateExporter::from_file(file, explicit)
            .with_context(|| format!("failed to load {}", file.display()))?;
        if test {
            let datasets = exporter.build(&mut sink);
            for dataset in &datasets {
                let shortcuts: usize = dataset.contexts().map(|c| c.len()).sum();
                info!(
                    app = %dataset.name,
                    os = %dataset.os,
                    shortcuts,
                    "Parsed (not written)"
                );
            }
        } else {
            written += exporter
                .export(&layout, &mut sink)
                .with_context(|| format!("failed to export {}", file.display()))?
                .len();
        }
    }

    info!(
        files = files.len(),
        written,
        warnings = sink.warnings(),
        errors = sink.errors(),
        "Export finished"
    );
    Ok(ExitCode::SUCCESS)
}

fn merge(inputs: &[PathBuf], output: &Path) -> Result<ExitCode> {
    let mut merged = IntermediateDataset::default();
    for input in inputs {
        let source = IntermediateDataset::load(input)
            .with_context(|| format!("failed to load {}", input.display()))?;
        merged.extend(&source);
    }
    merged
        .save(output)
        .with_context(|| format!("failed to save {}", output.display()))?;
    info!(
        inputs = inputs.len(),
        shortcuts = merged.shortcut_count(),
        output = %output.display(),
        "Merged intermediate files"
    );
    Ok(ExitCode::SUCCESS)
}

fn parse(text: &str, explicit: bool) -> Result<ExitCode> {
    let mut sink = CollectingSink::new();
    for candidate in parse_combo_with(text, text, &mut sink) {
        let mods = candidate.mods.join(" + ");
        println!("key: '{}'  mods: [{}]", candidate.key, mods);
        let draft = ShortcutDraft::new(text, candidate.key).with_mods(candidate.mods);
        for shortcut in draft.expand(explicit, &mut sink) {
            println!("    -> {}", shortcut.combo_key());
        }
    }
    for diagnostic in sink.diagnostics() {
        println!("{:?}: {}", diagnostic.severity(), diagnostic);
    }
    Ok(ExitCode::SUCCESS)
}
