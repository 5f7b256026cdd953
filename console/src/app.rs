use std::io::{self, BufRead, Write};

use product_core::{CardIntent, ProductCard, ProductPage, Transport};
use tracing::debug;

use crate::command::{Command, HELP};
use crate::terminal::Terminal;

pub type ConsolePage<T, R, W> = ProductPage<T, Terminal<R, W>>;

/// Mount the page, then render it and apply one command per input line
/// until `quit` or end of input.
pub fn run<T, R, W>(page: &mut ConsolePage<T, R, W>) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
{
    page.mount();
    loop {
        let screen = page.to_string();
        page.prompter_mut().print(&screen)?;

        let Some(line) = page.prompter_mut().read_line("> ")? else {
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                page.prompter_mut().print(&format!("{message}\n"))?;
                continue;
            }
        };
        debug!(?command, "command");

        match command {
            Command::Quit => return Ok(()),
            Command::Help => page.prompter_mut().print(HELP)?,
            Command::Refresh => page.refresh(),
            Command::Add | Command::Cancel => page.cancel_edit(),
            Command::Set(field, value) => page.form_mut().set(field, value),
            Command::Submit => page.submit(),
            Command::Edit(number) => trigger(page, number, |card| card.edit())?,
            Command::Delete(number) => trigger(page, number, |card| card.delete())?,
        }
    }
}

/// Press a trigger on the card shown as `number`.
fn trigger<T, R, W, F>(page: &mut ConsolePage<T, R, W>, number: usize, press: F) -> io::Result<()>
where
    T: Transport,
    R: BufRead,
    W: Write,
    F: Fn(&ProductCard<'_>) -> CardIntent,
{
    let intent = page.card(number - 1).map(|card| press(&card));
    match intent {
        Some(intent) => page.dispatch(intent),
        None => page
            .prompter_mut()
            .print(&format!("No product #{number}.\n"))?,
    }
    Ok(())
}
