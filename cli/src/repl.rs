//! Interactive wizard loop: read a line, apply it, redraw, repeat until EOF or quit.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use cli::{render, RelationBackend, Wizard, WizardCommand, WizardError};

/// Applies one non-submit command. Returns `false` for quit.
fn apply(wizard: &mut Wizard, cmd: WizardCommand, out: &mut impl Write) -> std::io::Result<bool> {
    let result = match cmd {
        WizardCommand::Quit => return Ok(false),
        WizardCommand::Help => {
            writeln!(out, "{}", render(wizard))?;
            return Ok(true);
        }
        WizardCommand::Unknown(s) => {
            writeln!(out, "unknown command: {} (try /help)", s)?;
            return Ok(true);
        }
        WizardCommand::Add(text) => wizard.add_words(&text).map(|added| {
            if added.is_empty() {
                tracing::debug!("no new words in input");
            }
        }),
        WizardCommand::Remove(w) => wizard.remove_word(&w),
        WizardCommand::Next => wizard.continue_to_review(),
        WizardCommand::Back => wizard.back_to_input(),
        WizardCommand::Reset => wizard.reset(),
        WizardCommand::Submit => unreachable!("submit handled by run_wizard"),
    };
    report(wizard, result, out)?;
    Ok(true)
}

fn report(wizard: &Wizard, result: Result<(), WizardError>, out: &mut impl Write) -> std::io::Result<()> {
    match result {
        Ok(()) => writeln!(out, "\n{}", render(wizard)),
        Err(e) => writeln!(out, "{}", e),
    }
}

/// Runs the wizard against `backend` until EOF or `/quit`. Returns the final state.
///
/// Submitting renders the loading screen, sends exactly one request, then renders the result.
pub async fn run_wizard<R, W>(
    backend: &dyn RelationBackend,
    input: R,
    out: &mut W,
) -> Result<Wizard, Box<dyn std::error::Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut wizard = Wizard::new();
    let mut lines = input.lines();
    writeln!(out, "{}", render(&wizard))?;

    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(cmd) = cli::parse_command(&line) else {
            continue;
        };
        if cmd == WizardCommand::Submit {
            match wizard.begin_submit() {
                Ok(req) => {
                    writeln!(out, "\n{}", render(&wizard))?;
                    out.flush()?;
                    let outcome = backend.relate(&req).await;
                    let settled = wizard.settle(outcome);
                    report(&wizard, settled, out)?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            }
            continue;
        }
        if !apply(&mut wizard, cmd, out)? {
            break;
        }
    }
    Ok(wizard)
}
