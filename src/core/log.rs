use crate::errors::AppResult;
use crate::store::log::load_log;
use crate::ui::messages::{colors_enabled, info};
use ansi_term::Colour;
use std::path::Path;

const TARGET_WIDTH: usize = 40;

fn strip_ansi(s: &str) -> String {
    match regex::Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// ANSI colour for each operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "register" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "roster" => Colour::Cyan,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(path: &Path) -> AppResult<()> {
        let entries = load_log(path)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);
        let id_w = entries.len().to_string().len();

        println!("📜 Internal log:\n");

        for (i, e) in entries.iter().enumerate() {
            let color = color_for_operation(&e.operation);

            // op coloured, target plain, truncated on the visible text
            let visible = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            let truncated: String = if visible.chars().count() > TARGET_WIDTH {
                let mut s: String = visible.chars().take(TARGET_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                visible
            };

            let colored = if !colors_enabled() {
                truncated
            } else {
                match truncated.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(truncated.as_str()).to_string(),
                }
            };

            let padding =
                " ".repeat(TARGET_WIDTH.saturating_sub(strip_ansi(&colored).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                i + 1,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
