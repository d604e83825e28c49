//! Line-oriented front-end: one line in, one event handled to completion.

use std::io::{self, Write};

use gemchat_ai::ChatSession;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::commands::{self, Command};
use crate::render;

/// Read lines from `input` until EOF or `/quit`, rendering to `out`.
pub async fn run<R, W>(session: &mut ChatSession, input: R, out: &mut W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match commands::parse(&line) {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", commands::HELP)?,
            Command::ListModels => render::models(out, session.configuration().model)?,
            Command::History => render::history(out, session.turns())?,
            Command::ShowConfig => render::configuration(out, session.configuration())?,
            Command::Unknown(name) => {
                writeln!(out, "Unknown command /{name}. Type /help for commands.")?
            }
            Command::Event(event) => {
                if event.is_remote() {
                    render::thinking(out)?;
                }
                let outcome = session.handle(event).await;
                render::outcome(out, &outcome)?;
            }
        }
    }

    Ok(())
}
