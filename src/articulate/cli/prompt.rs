use articulate::error::Result;
use articulate::model::{Draft, Field};
use articulate::validate::{missing_fields, CATEGORY_INPUT};
use console::{style, Term};
use std::io::{self, BufRead, IsTerminal, Write};

pub const CLEAR_PROMPT: &str =
    "Are you sure you want to clear all cards? This action cannot be undone. [y/N] ";

/// Field prompts only make sense with a person at both ends.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && Term::stdout().is_term()
}

/// Asks for every input the draft is still missing, in form order.
pub fn fill_missing(draft: &mut Draft) -> Result<()> {
    let term = Term::stdout();
    fill_missing_with(draft, |label| {
        term.write_str(&format!("{}: ", style(label).bold()))?;
        Ok(term.read_line()?)
    })
}

fn fill_missing_with<F>(draft: &mut Draft, mut ask: F) -> Result<()>
where
    F: FnMut(&str) -> Result<String>,
{
    for name in missing_fields(draft) {
        if name == CATEGORY_INPUT {
            let hint = Field::ALL.map(|f| f.name()).join("/");
            draft.category = Some(ask(&format!("Category ({})", hint))?);
            continue;
        }
        if let Ok(field) = name.parse::<Field>() {
            let label = capitalize(name);
            draft.set(field, ask(&label)?);
        }
    }
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Reads one answer from stdin. End of input counts as "no".
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(is_yes(&input))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
