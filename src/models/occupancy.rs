use serde::Serialize;
use std::fmt;

/// Capacity figures for one hostel building.
///
/// `available_rooms` is derived on construction, so
/// `occupied_rooms + available_rooms == total_rooms` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomOccupancy {
    hostel_name: String,
    total_rooms: u32,
    occupied_rooms: u32,
    available_rooms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyError {
    pub total_rooms: u32,
    pub occupied_rooms: u32,
}

impl fmt::Display for OccupancyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Occupied rooms ({}) exceed total rooms ({})",
            self.occupied_rooms, self.total_rooms
        )
    }
}

impl std::error::Error for OccupancyError {}

impl RoomOccupancy {
    pub fn new(
        hostel_name: impl Into<String>,
        total_rooms: u32,
        occupied_rooms: u32,
    ) -> Result<Self, OccupancyError> {
        let available_rooms = total_rooms
            .checked_sub(occupied_rooms)
            .ok_or(OccupancyError { total_rooms, occupied_rooms })?;
        Ok(Self {
            hostel_name: hostel_name.into(),
            total_rooms,
            occupied_rooms,
            available_rooms,
        })
    }

    pub fn hostel_name(&self) -> &str {
        &self.hostel_name
    }

    pub fn total_rooms(&self) -> u32 {
        self.total_rooms
    }

    pub fn occupied_rooms(&self) -> u32 {
        self.occupied_rooms
    }

    pub fn available_rooms(&self) -> u32 {
        self.available_rooms
    }

    /// Whole-number utilisation; an empty building reports 0.
    pub fn occupancy_percent(&self) -> u32 {
        if self.total_rooms == 0 {
            return 0;
        }
        ((u64::from(self.occupied_rooms) * 100) / u64::from(self.total_rooms)) as u32
    }
}
