use colored::*;
use tracing::info;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;
pub const TARGET: &str = "iprange::print";
pub const RAW_FIELD: &str = "raw_msg";

pub fn print(msg: &str) {
    info!(target: "iprange::print", raw_msg = msg);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&format!("{}", line));
}

pub fn fat_separator(q_level: u8) {
    if q_level > 0 {
        return;
    }
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

/// Prints `key....: value` lines with the dots lined up.
pub fn aligned_lines(pairs: &[(&str, ColoredString)]) {
    let key_width: usize = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    for (key, value) in pairs {
        let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
        let colon: String = format!(
            "{}{}",
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR)
        );
        print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
    }
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(colors::SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(colors::TEXT_DEFAULT));
    print(&message);
}

/// Prints one numbered result line, or the bare value when fully quiet.
pub fn indexed(idx: usize, value: &ColoredString, q_level: u8) {
    if q_level > 1 {
        print(&value.to_string());
        return;
    }

    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    print(&format!("{} {}", idx_str.color(colors::SEPARATOR), value));
}

pub fn no_results(q_level: u8) {
    if q_level > 1 {
        return;
    }
    print(&format!("{}", "(empty)".red().bold()));
}
