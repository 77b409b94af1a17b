// src/room/mod.rs

mod normalize;
mod resolve;

pub use normalize::normalize;
pub use resolve::{is_numeric, resolve, Miss};

/// Maximum number of distinct rooms a table may hold.
pub const MAX_ROOMS: usize = 100;

/// Maximum number of readings across the whole table (one per data row).
pub const MAX_ROWS: usize = 100;

/// Temperature history for one room.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Room name exactly as first seen in the file.
    pub display_name: String,
    /// Lowercase-letters-only projection of the name, unique per table.
    pub key: String,
    /// Readings in file order.
    pub readings: Vec<f32>,
}

impl Room {
    fn new(display_name: &str, key: String, reading: f32) -> Self {
        Self {
            display_name: display_name.to_string(),
            key,
            readings: vec![reading],
        }
    }
}

/// Rooms in insertion order. Built once by the ingestor and read-only after.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RoomTable {
    rooms: Vec<Room>,
}

impl RoomTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Total number of readings held by all rooms.
    pub fn reading_count(&self) -> usize {
        self.rooms.iter().map(|r| r.readings.len()).sum()
    }

    /// Linear scan by normalized key, first match in insertion order.
    pub fn find(&self, key: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.key == key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Append `reading` to the room keyed `key`, or open a new room for it.
    /// Caps are enforced by the caller.
    pub(crate) fn record(&mut self, display_name: &str, key: String, reading: f32) {
        match self.rooms.iter_mut().find(|r| r.key == key) {
            Some(room) => room.readings.push(reading),
            None => self.rooms.push(Room::new(display_name, key, reading)),
        }
    }
}
