//! Keyboard input handling and interactive loop.
//!
//! This module provides functions for mapping keyboard events to tree actions
//! and running the interactive terminal loop.

use crossterm::event::KeyEvent;

use crate::domain::value_objects::SelectionSet;
use crate::ui::theme::{icon, icons, icons_ascii};

use super::menu::{TreeAction, TreeMenu};

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Char(' ') => Some(TreeAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('a') => Some(TreeAction::SelectAll),
        KeyCode::Char('n') => Some(TreeAction::SelectNone),
        KeyCode::Char('i') => Some(TreeAction::Invert),
        KeyCode::Enter => Some(TreeAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Run the tree menu interactively.
///
/// Returns the compact selection if confirmed, `None` if quit.
pub fn run_interactive(
    menu: &mut TreeMenu,
    supports_unicode: bool,
) -> std::io::Result<Option<SelectionSet>> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };
    use std::io::{stdout, Write};

    terminal::enable_raw_mode()?;
    let mut stdout = stdout();

    let render_ui = |stdout: &mut std::io::Stdout, menu: &TreeMenu| -> std::io::Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;

        let width = terminal::size().ok().map(|(w, _)| usize::from(w));
        let separator = icon(supports_unicode, icons::SEPARATOR, icons_ascii::SEPARATOR)
            .repeat(width.unwrap_or(64).min(64));

        write!(stdout, "Checktree\r\n\r\n")?;

        let rendered = menu.render(supports_unicode, width);
        for line in rendered.lines() {
            write!(stdout, "{}\r\n", line)?;
        }

        write!(stdout, "{}\r\n", separator)?;

        let status = menu.render_status_bar(supports_unicode);
        for line in status.lines() {
            write!(stdout, "{}\r\n", line)?;
        }
        write!(stdout, "\r\n")?;

        let help = menu.render_help_bar();
        for line in help.lines() {
            write!(stdout, "{}\r\n", line)?;
        }

        stdout.flush()
    };

    execute!(stdout, cursor::Hide)?;

    let outcome = (|| -> std::io::Result<Option<SelectionSet>> {
        render_ui(&mut stdout, menu)?;
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key_to_action(key) {
                Some(TreeAction::Confirm) => return Ok(Some(menu.selections().clone())),
                Some(TreeAction::Quit) => return Ok(None),
                Some(action) => {
                    menu.handle_action(action);
                    render_ui(&mut stdout, menu)?;
                }
                None => {}
            }
        }
    })();

    // Restore the terminal even when the loop failed
    let restored = execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    );
    terminal::disable_raw_mode()?;
    restored?;

    outcome
}
