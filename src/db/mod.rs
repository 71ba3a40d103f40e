use chrono::Utc;
use log::{debug, info, warn};

use crate::errors::{BillingError, BookingError, HotelError};
use crate::models::booking::{Bill, Booking, BookingRow};
use crate::models::customer::{Customer, CustomerInput};
use crate::models::hotel::{Hotel, Room};

pub const DEFAULT_ROOM_COUNT: usize = 2;

/// In-memory registry of hotels, their rooms and bookings, and every
/// customer ever booked. Lives for one run of the console.
#[derive(Debug)]
pub struct BookingStore {
    hotels: Vec<Hotel>,
    customers: Vec<Customer>,
    default_room_count: usize,
    last_customer_stamp: i64,
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new(DEFAULT_ROOM_COUNT)
    }
}

impl BookingStore {
    pub fn new(default_room_count: usize) -> Self {
        Self {
            hotels: Vec::new(),
            customers: Vec::new(),
            default_room_count,
            last_customer_stamp: 0,
        }
    }

    pub fn default_room_count(&self) -> usize {
        self.default_room_count
    }

    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty()
    }

    #[cfg(test)]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn find_hotel(&self, name: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.name == name)
    }

    /// All hotels in registration order, or `None` when nothing is registered.
    pub fn list_hotels(&self) -> Option<impl Iterator<Item = &Hotel> + Clone + '_> {
        if self.hotels.is_empty() {
            None
        } else {
            Some(self.hotels.iter())
        }
    }

    pub fn add_hotel(&mut self, candidate: Hotel) -> Result<(), HotelError> {
        if self.hotels.iter().any(|h| h.is_same_property(&candidate)) {
            warn!(
                "Rejected duplicate hotel {} in {}",
                candidate.name, candidate.location
            );
            return Err(HotelError::Duplicate {
                name: candidate.name,
                location: candidate.location,
            });
        }

        info!(
            "Registered hotel {} in {} with {} rooms",
            candidate.name,
            candidate.location,
            candidate.rooms().len()
        );
        self.hotels.push(candidate);
        Ok(())
    }

    /// Runs the booking preconditions without touching any state.
    pub fn check_room(&self, hotel_name: &str, room_number: usize) -> Result<&Room, BookingError> {
        if self.hotels.is_empty() {
            return Err(BookingError::NoHotelsAvailable);
        }

        let hotel = self
            .find_hotel(hotel_name)
            .ok_or(BookingError::HotelNotFound)?;
        let room = hotel
            .room(room_number)
            .ok_or(BookingError::InvalidRoomNumber)?;

        if room.is_occupied() {
            return Err(BookingError::RoomOccupied);
        }
        Ok(room)
    }

    pub fn book_room(
        &mut self,
        hotel_name: &str,
        room_number: usize,
        customer: CustomerInput,
        check_in_date: String,
        nights: u32,
    ) -> Result<Booking, BookingError> {
        if let Err(e) = self.check_room(hotel_name, room_number) {
            debug!("Booking of room {room_number} in {hotel_name} refused: {e}");
            return Err(e);
        }

        let customer_id = self.next_customer_id();
        self.customers.push(customer.into_customer(customer_id.clone()));

        let hotel = self
            .hotels
            .iter_mut()
            .find(|h| h.name == hotel_name)
            .ok_or(BookingError::HotelNotFound)?;
        hotel
            .room_mut(room_number)
            .ok_or(BookingError::InvalidRoomNumber)?
            .occupy();

        let booking = Booking {
            room_number,
            check_in_date,
            nights,
            customer_id,
        };
        hotel.push_booking(booking.clone());

        info!(
            "Booked room {} in {} for customer {} ({} nights from {})",
            booking.room_number, hotel.name, booking.customer_id, booking.nights, booking.check_in_date
        );
        Ok(booking)
    }

    pub fn compute_bill(&self, hotel_name: &str, room_number: usize) -> Result<Bill, BillingError> {
        if self.hotels.is_empty() {
            return Err(BillingError::NoBookingsExist);
        }

        let hotel = self
            .find_hotel(hotel_name)
            .ok_or(BillingError::HotelNotFound)?;
        let booking = hotel
            .booking_for_room(room_number)
            .ok_or(BillingError::BookingNotFound)?;

        let total = hotel.price_per_night * f64::from(booking.nights);
        debug!("Billed room {room_number} in {hotel_name}: {total}");

        Ok(Bill {
            nights: booking.nights,
            price_per_night: hotel.price_per_night,
            total,
        })
    }

    /// Every booking whose customer resolves, grouped by hotel in
    /// registration order. `None` when no hotel has a booking yet.
    pub fn list_bookings_with_customers(
        &self,
    ) -> Option<impl Iterator<Item = BookingRow<'_>> + Clone + '_> {
        if self.hotels.iter().all(|h| h.bookings().is_empty()) {
            return None;
        }

        let rows = self
            .hotels
            .iter()
            .filter(|h| !h.bookings().is_empty())
            .flat_map(move |hotel| {
                hotel.bookings().iter().filter_map(move |booking| {
                    let customer = self.customer(&booking.customer_id)?;
                    Some(BookingRow {
                        hotel_name: &hotel.name,
                        room_number: booking.room_number,
                        customer_name: &customer.name,
                        check_in_date: &booking.check_in_date,
                        nights: booking.nights,
                    })
                })
            });
        Some(rows)
    }

    fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    // `C<epoch-millis>`, nudged forward when two bookings land in the same millisecond.
    fn next_customer_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        let stamp = now.max(self.last_customer_stamp + 1);
        self.last_customer_stamp = stamp;
        format!("C{stamp}")
    }
}
