use std::io::{BufRead, Write};

use validator::Validate;

use crate::db::BookingStore;
use crate::errors::{BookingError, ConsoleError};
use crate::handlers::hotels::show_hotels;
use crate::handlers::report_refusal;
use crate::models::booking::StayForm;
use crate::models::customer::CustomerInput;
use crate::prompt::Prompt;

fn refuse<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    e: BookingError,
) -> Result<(), ConsoleError> {
    report_refusal(prompt, e.kind(), e.to_string())
}

fn read_customer<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
) -> Result<CustomerInput, ConsoleError> {
    Ok(CustomerInput {
        name: prompt.ask("Enter customer name: ")?,
        mobile_number: prompt.ask("Enter mobile number: ")?,
        id_type: prompt.ask("Enter ID type: ")?,
        id_number: prompt.ask("Enter ID number: ")?,
    })
}

fn read_stay<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<StayForm, ConsoleError> {
    let check_in_date = prompt.ask("Enter check-in date (YYYY-MM-DD): ")?;
    let nights = prompt.ask_parsed("Enter number of nights: ", "number of nights")?;

    let stay = StayForm {
        check_in_date,
        nights,
    };
    stay.validate()?;
    Ok(stay)
}

pub fn book_hotel<R: BufRead, W: Write>(
    store: &mut BookingStore,
    prompt: &mut Prompt<R, W>,
) -> Result<(), ConsoleError> {
    if store.is_empty() {
        return refuse(prompt, BookingError::NoHotelsAvailable);
    }

    prompt.say("Available Hotels:")?;
    show_hotels(store, prompt)?;

    let hotel_name = prompt.ask("Enter hotel name to book: ")?;
    if store.find_hotel(&hotel_name).is_none() {
        return refuse(prompt, BookingError::HotelNotFound);
    }

    let room_number = prompt.ask_parsed("Enter room number to book: ", "room number")?;
    if let Err(e) = store.check_room(&hotel_name, room_number) {
        return refuse(prompt, e);
    }

    prompt.say("Welcome to our booking portal")?;
    let customer = read_customer(prompt)?;
    let stay = read_stay(prompt)?;

    match store.book_room(
        &hotel_name,
        room_number,
        customer,
        stay.check_in_date,
        stay.nights,
    ) {
        Ok(booking) => prompt.say(format!(
            "Room {} in {} booked successfully for {} nights starting from {}.",
            booking.room_number, hotel_name, booking.nights, booking.check_in_date
        )),
        Err(e) => refuse(prompt, e),
    }
}

pub fn show_bookings<R: BufRead, W: Write>(
    store: &BookingStore,
    prompt: &mut Prompt<R, W>,
) -> Result<(), ConsoleError> {
    let Some(rows) = store.list_bookings_with_customers() else {
        return prompt.say("No bookings available.");
    };

    let mut current_hotel: Option<&str> = None;
    for row in rows {
        if current_hotel != Some(row.hotel_name) {
            prompt.say(format!("Hotel: {}", row.hotel_name))?;
            current_hotel = Some(row.hotel_name);
        }
        prompt.say(format!(
            "Room Number: {}, Customer Name: {}, Check-in Date: {}, Nights: {}",
            row.room_number, row.customer_name, row.check_in_date, row.nights
        ))?;
    }
    Ok(())
}
