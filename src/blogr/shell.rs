//! Interactive session: one live store, so the undo window actually runs.

use crate::AppContext;
use blogr::error::Result;
use blogr::model::PostDraft;
use blogr::undo::UndoState;
use colored::*;
use std::io::{self, BufRead, Write};

pub(crate) fn run(ctx: &mut AppContext) -> Result<()> {
    println!("Interactive session. Type 'help' for commands, 'quit' to leave.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        // Surface an undo window that closed between commands.
        if ctx.api.tick() {
            println!("{}", "Undo window closed.".dimmed());
        }

        print!("{}", prompt(ctx));
        io::stdout().flush().ok();

        let line = match lines.next() {
            Some(line) => line?,
            None => break, // EOF
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (cmd, rest) = split_command(line);
        match cmd {
            "list" | "ls" => {
                let result = ctx.api.list_posts()?;
                crate::print_posts(&result.listed_posts);
                crate::print_messages(&result.messages);
            }
            "add" | "n" => {
                let title = rest.to_string();
                print!("content> ");
                io::stdout().flush().ok();
                let content = match lines.next() {
                    Some(line) => line?,
                    None => break,
                };
                let draft = PostDraft {
                    title,
                    content: content.trim().to_string(),
                    ..Default::default()
                };
                let result = ctx.api.add_blog(draft)?;
                crate::print_messages(&result.messages);
            }
            "delete" | "rm" => match rest.parse::<usize>() {
                Ok(position) if position >= 1 => {
                    let result = ctx.api.delete_blog_by_index(position - 1)?;
                    crate::print_messages(&result.messages);
                }
                _ => println!("Usage: delete <position>  (1-based, see 'list')"),
            },
            "undo" | "u" => {
                let result = ctx.api.undo_delete()?;
                crate::print_messages(&result.messages);
            }
            "view" | "v" => {
                let id = if rest.is_empty() { None } else { Some(rest) };
                let result = ctx.api.render_post(id)?;
                crate::print_messages(&result.messages);
                if let Some(html) = result.html {
                    println!("{}", html);
                }
            }
            "publish" | "p" => {
                crate::handle_publish(ctx, None)?;
            }
            "help" | "h" | "?" => print_help(),
            "quit" | "exit" | "q" => break,
            other => println!("Unknown command: {} (try 'help')", other),
        }
    }

    Ok(())
}

/// Shows the seconds left to undo while a deletion is pending.
fn prompt(ctx: &AppContext) -> String {
    match ctx.api.undo_state() {
        UndoState::Pending { remaining_ms } => {
            format!("blogr (undo {}s)> ", (remaining_ms as u64).div_ceil(1000))
        }
        UndoState::Idle => "blogr> ".to_string(),
    }
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list               show all posts");
    println!("  add <title>        add a post (prompts for content)");
    println!("  delete <position>  delete a post; undoable for a few seconds");
    println!("  undo               restore the last deleted post");
    println!("  view <id>          print the rendered single-post page");
    println!("  publish            write the listing page to disk");
    println!("  quit               leave the session");
}
