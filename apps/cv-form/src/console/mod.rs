//! Line-oriented front end. Each input line is one event, handled to
//! completion before the next line is read.

pub mod commands;

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::form::validation::validate;
use crate::form::{EditOutcome, FormController, SubmitOutcome};

pub use commands::{parse_command, Command, CommandError, HELP};

const LOADING_MESSAGE: &str = "Gerando currículo...";

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Reads commands until `quit` or end of input.
pub async fn run<R, W>(controller: &mut FormController, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Gerador de Currículo. Type 'help' for commands.")?;
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(command) => {
                if handle(controller, command, out).await? == Flow::Quit {
                    break;
                }
            }
            Err(CommandError::Empty) => {}
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }

    Ok(())
}

async fn handle<W: Write>(
    controller: &mut FormController,
    command: Command,
    out: &mut W,
) -> Result<Flow> {
    debug!(?command, "console command");

    match command {
        Command::Set { field, value } => {
            report_edit(out, controller.edit_field(field, value))?;
        }
        Command::Experience {
            index,
            field,
            value,
        } => match controller.edit_experience_field(index, field, value) {
            Ok(outcome) => report_edit(out, outcome)?,
            Err(e) => writeln!(out, "error: {e}")?,
        },
        Command::Add => {
            report_edit(out, controller.add_experience())?;
            writeln!(
                out,
                "experience entry {} added",
                controller.form().experience().len() - 1
            )?;
        }
        Command::Show => {
            writeln!(out, "{}", serde_json::to_string_pretty(controller.form())?)?;
        }
        Command::Submit => {
            if let Err(violations) = validate(controller.form()) {
                writeln!(out, "cannot submit yet:")?;
                for violation in violations {
                    writeln!(out, "  - {violation}")?;
                }
                return Ok(Flow::Continue);
            }
            writeln!(out, "{LOADING_MESSAGE}")?;
            out.flush()?;
            match controller.submit().await {
                SubmitOutcome::Downloaded(path) => writeln!(out, "saved {}", path.display())?,
                SubmitOutcome::Failed => writeln!(
                    out,
                    "submission failed: {}",
                    controller.last_error().unwrap_or("unknown error")
                )?,
                SubmitOutcome::Busy => writeln!(out, "a submission is already running")?,
            }
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn report_edit<W: Write>(out: &mut W, outcome: EditOutcome) -> Result<()> {
    if outcome == EditOutcome::Blocked {
        writeln!(out, "{LOADING_MESSAGE} (edits are disabled)")?;
    }
    Ok(())
}
