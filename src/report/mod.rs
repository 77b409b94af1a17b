// src/report/mod.rs
use std::fmt::Write;

use crate::room::Room;

/// Readings above this, or below zero, print a marker instead of a bar.
/// This is a display bound only, not a physical temperature limit.
pub const DISPLAY_MAX_TEMPERATURE: f32 = 30.0;

pub const BAR_CHAR: char = '-';
pub const OUT_OF_RANGE_MARKER: &str = " X";

const RULE: &str = "--------------------";
const NAME_COLUMN: usize = 20;

/// Bar length for a reading, or `None` when it falls outside the display range.
pub fn bar_len(temperature: f32) -> Option<usize> {
    if temperature < 0.0 || temperature > DISPLAY_MAX_TEMPERATURE {
        return None;
    }
    Some((f64::from(temperature) * 2.0).floor() as usize)
}

/// One line per reading: the value to one decimal, then the bar.
pub fn bar_graph(room: &Room) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", room.display_name);
    for &t in &room.readings {
        let _ = write!(out, "{t:.1}");
        match bar_len(t) {
            Some(n) => out.extend(std::iter::repeat(BAR_CHAR).take(n)),
            None => out.push_str(OUT_OF_RANGE_MARKER),
        }
        out.push('\n');
    }
    out
}

fn name_column<'a>(out: &mut String, rooms: impl IntoIterator<Item = &'a Room>) {
    let _ = writeln!(out, "{RULE}");
    for room in rooms {
        let _ = writeln!(out, "{:<width$}", room.display_name, width = NAME_COLUMN);
    }
}

/// Listing printed once after a successful load.
pub fn available_rooms<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> String {
    let mut out = String::from("\nAll Available Rooms are:\n");
    name_column(&mut out, rooms);
    out
}

/// Listing printed when a query does not resolve.
pub fn room_not_found<'a>(rooms: impl IntoIterator<Item = &'a Room>) -> String {
    let mut out = String::from("\nRoom not found. Compare your input to CSV room names:\n");
    name_column(&mut out, rooms);
    out
}
