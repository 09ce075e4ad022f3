use std::fmt::Display;

use colored::*;
use iprange_core::Family;

use crate::terminal::colors;

fn family_color(family: Family) -> Color {
    match family {
        Family::Ipv4 => colors::IPV4_ADDR,
        Family::Ipv6 => colors::IPV6_ADDR,
        Family::Unknown => colors::TEXT_DEFAULT,
    }
}

/// Colors anything address-shaped by its family.
pub fn by_family<T: Display>(value: T, family: Family) -> ColoredString {
    value.to_string().color(family_color(family))
}

pub fn family(family: Family) -> ColoredString {
    family.to_string().color(family_color(family)).bold()
}

pub fn yes_no(value: bool) -> ColoredString {
    if value { "yes".green() } else { "no".red() }
}
