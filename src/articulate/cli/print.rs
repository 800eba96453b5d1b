use articulate::api::MessageLevel;
use articulate::config::{ArticulateConfig, KEY_EXPORT_DIR};
use articulate::export::field_color;
use articulate::model::Card;
use articulate::notify::Notice;
use articulate::render::{render_card, CardView, FieldView, EMPTY_LIST_TEXT};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 60;
const INDENT: &str = "    ";

/// Errors go to stderr, everything else to stdout.
pub(super) fn print_notices<'a>(notices: impl Iterator<Item = &'a Notice>) {
    for notice in notices {
        match notice.level {
            MessageLevel::Info => println!("{}", notice.content.dimmed()),
            MessageLevel::Success => println!("{}", notice.content.green()),
            MessageLevel::Warning => println!("{}", notice.content.yellow()),
            MessageLevel::Error => eprintln!("{}", notice.content.red()),
        }
    }
}

pub(super) fn print_cards(cards: &[CardView]) {
    if cards.is_empty() {
        println!("{}", EMPTY_LIST_TEXT.dimmed());
        return;
    }

    for (i, view) in cards.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_card(view);
    }
}

/// Shows a freshly added card under the index it now has.
pub(super) fn print_added(index: usize, card: &Card) {
    print_card(&render_card(index, card));
}

fn print_card(view: &CardView) {
    println!(
        "{} {}",
        format!("{}.", view.index).yellow(),
        format!("#{}", view.id).dimmed()
    );
    for fv in &view.fields {
        println!("{}{} {}", INDENT, letter_box(fv), field_text(fv));
    }
}

fn letter_box(fv: &FieldView) -> String {
    let color = field_color(fv.field);
    format!(" {} ", fv.letter)
        .white()
        .bold()
        .on_truecolor(color.0, color.1, color.2)
        .to_string()
}

fn field_text(fv: &FieldView) -> String {
    let available = LINE_WIDTH.saturating_sub(INDENT.width() + 4);
    let text = truncate_to_width(&fv.text, available);
    if fv.is_category {
        text.bold().to_string()
    } else {
        text
    }
}

pub(super) fn print_config(config: &ArticulateConfig) {
    if let Some(value) = config.get(KEY_EXPORT_DIR) {
        println!("{} = {}", KEY_EXPORT_DIR.bold(), value);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
