use std::fmt;
use validator::Validate;

use crate::models::booking::Booking;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Occupied,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Available => f.write_str("Available"),
            RoomStatus::Occupied => f.write_str("Occupied"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    number: usize,
    occupied: bool,
}

impl Room {
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn status(&self) -> RoomStatus {
        if self.occupied {
            RoomStatus::Occupied
        } else {
            RoomStatus::Available
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    // One-way: nothing ever releases a room.
    pub(crate) fn occupy(&mut self) {
        self.occupied = true;
    }
}

/// A hotel together with the rooms and bookings it owns.
///
/// Rooms are numbered `1..=n` in list order and are only ever touched by
/// [`BookingStore`](crate::db::BookingStore), so the fields that carry
/// invariants are private.
#[derive(Debug, Clone)]
pub struct Hotel {
    pub name: String,
    pub location: String,
    pub price_per_night: f64,
    rooms: Vec<Room>,
    bookings: Vec<Booking>,
}

impl Hotel {
    pub fn new(name: String, location: String, price_per_night: f64, room_count: usize) -> Self {
        let rooms = (1..=room_count)
            .map(|number| Room {
                number,
                occupied: false,
            })
            .collect();

        Self {
            name,
            location,
            price_per_night,
            rooms,
            bookings: Vec::new(),
        }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn is_same_property(&self, other: &Hotel) -> bool {
        self.name == other.name && self.location == other.location
    }

    /// Resolves a 1-based room number.
    pub fn room(&self, number: usize) -> Option<&Room> {
        number.checked_sub(1).and_then(|idx| self.rooms.get(idx))
    }

    pub(crate) fn room_mut(&mut self, number: usize) -> Option<&mut Room> {
        number.checked_sub(1).and_then(|idx| self.rooms.get_mut(idx))
    }

    pub(crate) fn push_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    pub fn booking_for_room(&self, number: usize) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.room_number == number)
    }
}

/// What the operator types in when registering a hotel.
#[derive(Debug, Validate)]
pub struct HotelForm {
    pub name: String,
    pub location: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

impl HotelForm {
    pub fn into_hotel(self, room_count: usize) -> Hotel {
        Hotel::new(self.name, self.location, self.price, room_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_number_rooms_from_one() {
        let hotel = Hotel::new("Grand".into(), "City A".into(), 100.0, 3);
        let numbers: Vec<usize> = hotel.rooms().iter().map(Room::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(hotel.rooms().iter().all(|r| r.status() == RoomStatus::Available));
        assert!(hotel.bookings().is_empty());
    }

    #[test]
    fn should_not_resolve_room_zero_or_past_the_end() {
        let hotel = Hotel::new("Grand".into(), "City A".into(), 100.0, 2);
        assert!(hotel.room(0).is_none());
        assert!(hotel.room(3).is_none());
        assert_eq!(hotel.room(2).map(Room::number), Some(2));
    }

    #[test]
    fn should_reject_negative_price() {
        let form = HotelForm {
            name: "Grand".into(),
            location: "City A".into(),
            price: -1.0,
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn should_compare_properties_by_name_and_location() {
        let a = Hotel::new("Grand".into(), "City A".into(), 100.0, 2);
        let b = Hotel::new("Grand".into(), "City A".into(), 250.0, 2);
        let c = Hotel::new("Grand".into(), "city a".into(), 100.0, 2);
        assert!(a.is_same_property(&b));
        assert!(!a.is_same_property(&c));
    }
}
