// src/shell/mod.rs
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

use crate::{
    report,
    room::{resolve, RoomTable},
};

/// Exact, case-sensitive line that ends the session.
pub const END_COMMAND: &str = "end";
pub const PROMPT: &str = "\nType a Room here (or type 'end' to quit): ";
pub const FAREWELL: &str = "Thanks Bye.";

/// Counters for one interactive session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub queries: usize,
    pub found: usize,
    pub missed: usize,
}

/// Text printed in answer to one query: a bar graph on a match, the room
/// listing otherwise.
pub fn answer(table: &RoomTable, query: &str) -> (String, bool) {
    match resolve(table, query) {
        Ok(room) => (report::bar_graph(room), true),
        Err(miss) => {
            debug!(query, %miss, "query missed");
            (report::room_not_found(table.rooms()), false)
        }
    }
}

/// Prompt loop over a loaded table.
///
/// Generic over its streams so it runs on stdin/stdout in the binary and on
/// in-memory buffers in tests.
pub struct Shell<'t, R, W> {
    table: &'t RoomTable,
    input: R,
    output: W,
}

impl<'t, R: BufRead, W: Write> Shell<'t, R, W> {
    pub fn new(table: &'t RoomTable, input: R, output: W) -> Self {
        Self {
            table,
            input,
            output,
        }
    }

    /// List the rooms, then answer queries until `end` or end of input.
    pub fn run(mut self) -> io::Result<SessionStats> {
        let mut stats = SessionStats::default();
        self.output
            .write_all(report::available_rooms(self.table.rooms()).as_bytes())?;

        let mut line = String::new();
        loop {
            self.output.write_all(PROMPT.as_bytes())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                // closed input ends the session like `end`
                writeln!(self.output)?;
                break;
            }
            let query = line.trim_end_matches(['\n', '\r']);
            if query == END_COMMAND {
                break;
            }

            stats.queries += 1;
            let (text, found) = answer(self.table, query);
            if found {
                stats.found += 1;
            } else {
                stats.missed += 1;
            }
            self.output.write_all(text.as_bytes())?;
        }

        writeln!(self.output, "{FAREWELL}")?;
        self.output.flush()?;
        info!(
            queries = stats.queries,
            found = stats.found,
            missed = stats.missed,
            "session closed"
        );
        Ok(stats)
    }
}
