//! Numbered-menu interactive session.

use super::console::{ConsoleError, ConsoleResult, TaskConsole};
use crate::task::domain::TaskId;
use mockable::Clock;
use std::io::{self, BufRead, Write};

const MENU: &str = "\n=== TODO APP MENU ===\n\
1. Add task\n\
2. List tasks\n\
3. Complete task\n\
4. Update task\n\
5. Delete task\n\
6. Exit\n\
=====================";

const INVALID_ID_HINT: &str = "Please enter a valid task ID (number).";
const EMPTY_TITLE_HINT: &str = "Task title cannot be empty.";
const GOODBYE: &str = "Goodbye!";

/// Runs the interactive menu until the user exits or input ends.
///
/// Validation and persistence errors are reported and the session carries
/// on.
///
/// # Errors
///
/// Returns [`ConsoleError::Output`] when reading input or writing output
/// fails.
pub fn run_menu<C, O, E, R>(
    console: &mut TaskConsole<'_, C, O, E>,
    mut input: R,
) -> Result<(), ConsoleError>
where
    C: Clock,
    O: Write,
    E: Write,
    R: BufRead,
{
    loop {
        console.say(MENU)?;
        let Some(choice) = ask(console, &mut input, "Enter your choice (1-6): ")? else {
            console.say(GOODBYE)?;
            return Ok(());
        };

        let result = match choice.as_str() {
            "1" => add_task(console, &mut input)?,
            "2" => Some(console.list()),
            "3" => with_task_id(console, &mut input, "Enter task ID to complete: ")?
                .map(|id| console.complete(id)),
            "4" => update_task(console, &mut input)?,
            "5" => with_task_id(console, &mut input, "Enter task ID to delete: ")?
                .map(|id| console.delete(id)),
            "6" => {
                console.say(GOODBYE)?;
                return Ok(());
            }
            _ => {
                console.say("Invalid choice. Please enter a number between 1 and 6.")?;
                None
            }
        };

        if let Some(Err(err)) = result {
            if !err.is_recoverable() {
                return Err(err);
            }
            console.report_error(&err)?;
        }
    }
}

/// Prompts and reads one trimmed line; `None` at end of input.
fn ask<C, O, E, R>(
    console: &mut TaskConsole<'_, C, O, E>,
    input: &mut R,
    prompt: &str,
) -> io::Result<Option<String>>
where
    C: Clock,
    O: Write,
    E: Write,
    R: BufRead,
{
    console.prompt(prompt)?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn with_task_id<C, O, E, R>(
    console: &mut TaskConsole<'_, C, O, E>,
    input: &mut R,
    prompt: &str,
) -> io::Result<Option<TaskId>>
where
    C: Clock,
    O: Write,
    E: Write,
    R: BufRead,
{
    let answer = ask(console, input, prompt)?.unwrap_or_default();
    match answer.parse::<TaskId>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            console.say(INVALID_ID_HINT)?;
            Ok(None)
        }
    }
}

fn add_task<C, O, E, R>(
    console: &mut TaskConsole<'_, C, O, E>,
    input: &mut R,
) -> io::Result<Option<ConsoleResult>>
where
    C: Clock,
    O: Write,
    E: Write,
    R: BufRead,
{
    let title = ask(console, input, "Enter task title: ")?.unwrap_or_default();
    if title.is_empty() {
        console.say(EMPTY_TITLE_HINT)?;
        return Ok(None);
    }
    Ok(Some(console.add(&title, None)))
}

fn update_task<C, O, E, R>(
    console: &mut TaskConsole<'_, C, O, E>,
    input: &mut R,
) -> io::Result<Option<ConsoleResult>>
where
    C: Clock,
    O: Write,
    E: Write,
    R: BufRead,
{
    let Some(id) = with_task_id(console, input, "Enter task ID to update: ")? else {
        return Ok(None);
    };
    let title = ask(console, input, "Enter new title: ")?.unwrap_or_default();
    if title.is_empty() {
        console.say(EMPTY_TITLE_HINT)?;
        return Ok(None);
    }
    Ok(Some(console.update(id, Some(&title), None)))
}
