//! One-shot subcommands
//!
//! Each subcommand seeds a model with the input text, drives it through the
//! same messages the interactive session uses, and prints the result. Toasts
//! go to the runtime's sink (stderr from the binary); results go to `out`.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};

use crate::cli::{CliArgs, Command, SearchArgs};
use crate::config::EditorConfig;
use crate::messages::{FindMsg, Msg, UiMsg};
use crate::model::{AppModel, ToastKind};
use crate::search::SearchOptions;
use super::{read_input, repl, Runtime};

/// Entry point for the binary
pub fn run_cli(args: CliArgs, config: EditorConfig) -> Result<()> {
    let command = args.command();
    tracing::debug!(?command, input = ?args.input, "starting");

    match command {
        Command::Repl => {
            let text = match &args.input {
                Some(path) => read_input(Some(path))?,
                None => String::new(),
            };
            let model = AppModel::with_text(config, &text);
            let mut runtime = Runtime::new(model, io::stdout());
            repl::run(&mut runtime, io::stdin().lock())
        }
        Command::Theme => {
            let mut runtime = Runtime::new(AppModel::new(config), io::stderr());
            run_command(&mut runtime, &Command::Theme, &mut io::stdout())
        }
        command => {
            let text = read_input(args.input.as_deref())?;
            let mut runtime = Runtime::new(AppModel::with_text(config, &text), io::stderr());
            run_command(&mut runtime, &command, &mut io::stdout())
        }
    }
}

/// Run a non-interactive subcommand against the runtime's active document
pub fn run_command<W: Write, O: Write>(
    runtime: &mut Runtime<W>,
    command: &Command,
    out: &mut O,
) -> Result<()> {
    match command {
        Command::Find {
            term,
            search,
            highlight,
        } => {
            start_search(runtime, term, *search)?;
            if *highlight {
                let markup = runtime.model.highlight().unwrap_or_else(|| {
                    crate::search::escape_html(&runtime.model.text())
                });
                writeln!(out, "{}", markup)?;
            } else {
                for m in runtime.model.find.matches() {
                    writeln!(out, "{}\t{}\t{}", m.start, m.len, m.text)?;
                }
                writeln!(out, "{}", runtime.model.find.status_label())?;
            }
        }

        Command::Replace {
            term,
            replacement,
            search,
            first,
        } => {
            start_search(runtime, term, *search)?;
            runtime.dispatch(Msg::Find(FindMsg::SetReplacement(replacement.clone())))?;
            if *first {
                runtime.dispatch(Msg::Find(FindMsg::FindNext))?;
                if runtime.model.find.current().is_some() {
                    runtime.dispatch(Msg::Find(FindMsg::ReplaceCurrent))?;
                }
            } else {
                runtime.dispatch(Msg::Find(FindMsg::ReplaceAll))?;
            }
            fail_on_error(runtime)?;
            write!(out, "{}", runtime.model.text())?;
        }

        Command::Transform { kind } => {
            runtime.dispatch(Msg::Transform(*kind))?;
            runtime.wait_for_loading()?;
            fail_on_problem(runtime)?;
            write!(out, "{}", runtime.model.text())?;
        }

        Command::Stats { word, json } => {
            if let Some(word) = word {
                runtime.dispatch(Msg::Ui(UiMsg::SetWordQuery(word.clone())))?;
            }
            let stats = runtime.model.stats();
            if *json {
                let mut value = serde_json::to_value(stats).context("Failed to encode stats")?;
                if word.is_some() {
                    value["word_occurrences"] = runtime.model.word_occurrences().into();
                }
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            } else {
                writeln!(out, "characters: {}", stats.characters)?;
                writeln!(out, "words: {}", stats.words)?;
                writeln!(out, "lines: {}", stats.lines)?;
                writeln!(out, "paragraphs: {}", stats.paragraphs)?;
                if let Some(word) = word {
                    writeln!(out, "\"{}\": {}", word, runtime.model.word_occurrences())?;
                }
            }
        }

        Command::Export { format, out_dir } => {
            runtime.set_export_dir(out_dir);
            runtime.dispatch(Msg::Export(*format))?;
            fail_on_problem(runtime)?;
        }

        Command::Theme => {
            runtime.dispatch(Msg::Ui(UiMsg::ToggleTheme))?;
            let theme = if runtime.model.ui.dark_mode { "dark" } else { "light" };
            writeln!(out, "{}", theme)?;
        }

        Command::Repl => bail!("the interactive session needs a terminal"),
    }
    Ok(())
}

/// Open the panel with `term` and the given toggles
fn start_search<W: Write>(runtime: &mut Runtime<W>, term: &str, search: SearchArgs) -> Result<()> {
    runtime.model.find.options = SearchOptions::from(search);
    runtime.dispatch(Msg::Find(FindMsg::Open))?;
    runtime.dispatch(Msg::Find(FindMsg::SetQuery(term.to_string())))?;
    fail_on_error(runtime)
}

/// Turn a trailing error toast into a failing exit status
fn fail_on_error<W: Write>(runtime: &Runtime<W>) -> Result<()> {
    match runtime.model.ui.last_toast() {
        Some(toast) if toast.kind == ToastKind::Error => bail!("{}", toast.text),
        _ => Ok(()),
    }
}

/// Like [`fail_on_error`], but warnings (nothing to work on) also fail
fn fail_on_problem<W: Write>(runtime: &Runtime<W>) -> Result<()> {
    match runtime.model.ui.last_toast() {
        Some(toast) if matches!(toast.kind, ToastKind::Error | ToastKind::Warning) => {
            bail!("{}", toast.text)
        }
        _ => Ok(()),
    }
}
