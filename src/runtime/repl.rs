//! Line-oriented interactive session
//!
//! Lines starting with `:` are commands; any other line is appended to the
//! active document as a plain edit.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::commands::Cmd;
use crate::export::ExportFormat;
use crate::messages::{DocumentMsg, FindMsg, Msg, UiMsg, WorkspaceMsg};
use crate::model::DocumentId;
use crate::transform::TransformKind;

use super::Runtime;

const HELP: &str = "\
:new              open a new document
:close N          close document N
:tab N            switch to document N
:undo / :redo     step through history
:find TERM        search the active document
:regex / :case / :word   toggle search options
:next             select the next match
:replace TEXT     replace the current match
:replace-all TEXT replace every match
:t KIND           apply a transform (e.g. :t title-case)
:export FORMAT    write manipulated_text.{txt,json,md}
:count WORD       count occurrences of WORD
:stats            show text statistics
:show             print the document (with highlights while searching)
:theme            toggle the dark theme
:quit             leave";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Send a message through the update loop
    Send(Vec<Msg>),
    /// Append a line of text to the active document
    Append(String),
    Stats,
    Show,
    Help,
    Quit,
}

/// Parse one input line. Errors carry a message for the user.
pub fn parse_line(line: &str) -> Result<ReplCommand, String> {
    let Some(command) = line.strip_prefix(':') else {
        return Ok(ReplCommand::Append(line.to_string()));
    };
    let (name, arg) = match command.split_once(' ') {
        Some((name, arg)) => (name, arg),
        None => (command, ""),
    };

    let send = |msg: Msg| Ok(ReplCommand::Send(vec![msg]));
    match name {
        "new" => send(Msg::Workspace(WorkspaceMsg::NewTab)),
        "close" => send(Msg::Workspace(WorkspaceMsg::CloseTab(parse_id(arg)?))),
        "tab" => send(Msg::Workspace(WorkspaceMsg::SwitchTab(parse_id(arg)?))),
        "undo" => send(Msg::Document(DocumentMsg::Undo)),
        "redo" => send(Msg::Document(DocumentMsg::Redo)),
        "find" => Ok(ReplCommand::Send(vec![
            Msg::Find(FindMsg::Open),
            Msg::Find(FindMsg::SetQuery(arg.to_string())),
        ])),
        "regex" => send(Msg::Find(FindMsg::ToggleRegex)),
        "case" => send(Msg::Find(FindMsg::ToggleCaseSensitive)),
        "word" => send(Msg::Find(FindMsg::ToggleWholeWord)),
        "next" => send(Msg::Find(FindMsg::FindNext)),
        "close-find" => send(Msg::Find(FindMsg::Close)),
        "replace" => Ok(ReplCommand::Send(vec![
            Msg::Find(FindMsg::SetReplacement(arg.to_string())),
            Msg::Find(FindMsg::ReplaceCurrent),
        ])),
        "replace-all" => Ok(ReplCommand::Send(vec![
            Msg::Find(FindMsg::SetReplacement(arg.to_string())),
            Msg::Find(FindMsg::ReplaceAll),
        ])),
        "t" => {
            let kind = TransformKind::from_str(arg.trim(), true)
                .map_err(|_| format!("Unknown transform: {}", arg.trim()))?;
            send(Msg::Transform(kind))
        }
        "export" => {
            let format = ExportFormat::from_str(arg.trim(), true)
                .map_err(|_| format!("Unknown export format: {}", arg.trim()))?;
            send(Msg::Export(format))
        }
        "count" => send(Msg::Ui(UiMsg::SetWordQuery(arg.to_string()))),
        "theme" => send(Msg::Ui(UiMsg::ToggleTheme)),
        "stats" => Ok(ReplCommand::Stats),
        "show" => Ok(ReplCommand::Show),
        "help" => Ok(ReplCommand::Help),
        "quit" | "q" => Ok(ReplCommand::Quit),
        other => Err(format!("Unknown command: :{} (try :help)", other)),
    }
}

fn parse_id(arg: &str) -> Result<DocumentId, String> {
    arg.trim()
        .parse()
        .map(DocumentId)
        .map_err(|_| format!("Expected a document number, got {:?}", arg.trim()))
}

/// Read lines from `input` until EOF or `:quit`
pub fn run<W: Write, R: BufRead>(runtime: &mut Runtime<W>, input: R) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        match parse_line(&line) {
            Ok(command) => execute(runtime, command)?,
            Err(message) => writeln!(runtime.out(), "{}", message)?,
        }
        if runtime.quit_requested() {
            break;
        }
        if runtime.take_redraw() {
            print_status(runtime)?;
        }
    }
    Ok(())
}

fn execute<W: Write>(runtime: &mut Runtime<W>, command: ReplCommand) -> Result<()> {
    match command {
        ReplCommand::Send(msgs) => {
            let counting = msgs
                .iter()
                .any(|m| matches!(m, Msg::Ui(UiMsg::SetWordQuery(_))));
            for msg in msgs {
                runtime.dispatch(msg)?;
            }
            runtime.wait_for_loading()?;
            if counting {
                let count = runtime.model.word_occurrences();
                writeln!(runtime.out(), "{} occurrence(s)", count)?;
            }
        }
        ReplCommand::Append(line) => {
            let mut text = runtime.model.text();
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&line);
            runtime.dispatch(Msg::Document(DocumentMsg::SetText(text)))?;
        }
        ReplCommand::Stats => {
            let stats = runtime.model.stats();
            writeln!(
                runtime.out(),
                "characters: {}  words: {}  lines: {}  paragraphs: {}",
                stats.characters,
                stats.words,
                stats.lines,
                stats.paragraphs
            )?;
        }
        ReplCommand::Show => {
            let shown = runtime
                .model
                .highlight()
                .unwrap_or_else(|| runtime.model.text());
            writeln!(runtime.out(), "{}", shown)?;
        }
        ReplCommand::Help => writeln!(runtime.out(), "{}", HELP)?,
        ReplCommand::Quit => runtime.process_cmd(Cmd::Quit)?,
    }
    Ok(())
}

/// One-line summary: tabs, history position, find state
fn print_status<W: Write>(runtime: &mut Runtime<W>) -> Result<()> {
    let model = &runtime.model;
    let tabs: Vec<String> = model
        .workspace
        .documents()
        .iter()
        .map(|doc| {
            if doc.id == model.workspace.active_id() {
                format!("*{}", doc.display_name)
            } else {
                doc.display_name.clone()
            }
        })
        .collect();
    let doc = model.document();
    let mut status = format!(
        "[{}] history {}/{}",
        tabs.join(" | "),
        doc.history_index() + 1,
        doc.history_len()
    );
    if model.find.is_open() {
        status.push_str(&format!(" | find: {}", model.find.status_label()));
    }
    if model.ui.is_loading() {
        status.push_str(" | working...");
    }
    writeln!(runtime.out(), "{}", status)?;
    Ok(())
}
