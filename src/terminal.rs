use crate::error::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use std::io;

/// Run `session`, then `restore` whatever the outcome. A session error wins
/// over a restore error.
pub fn with_restore<T, S, R>(session: S, restore: R) -> Result<T>
where
    S: FnOnce() -> Result<T>,
    R: FnOnce() -> io::Result<()>,
{
    let result = session();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

/// Undo raw mode and the alternate screen. Safe to call when the alternate
/// screen was never entered.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}
