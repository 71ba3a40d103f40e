use std::io::{BufRead, Write};

use log::debug;

use crate::db::BookingStore;
use crate::errors::{BillingError, ConsoleError};
use crate::handlers::report_refusal;
use crate::prompt::Prompt;

fn refuse<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    e: BillingError,
) -> Result<(), ConsoleError> {
    report_refusal(prompt, e.kind(), e.to_string())
}

pub fn billing<R: BufRead, W: Write>(
    store: &BookingStore,
    prompt: &mut Prompt<R, W>,
) -> Result<(), ConsoleError> {
    if store.is_empty() {
        return refuse(prompt, BillingError::NoBookingsExist);
    }

    let hotel_name = prompt.ask("Enter hotel name for billing: ")?;
    if store.find_hotel(&hotel_name).is_none() {
        return refuse(prompt, BillingError::HotelNotFound);
    }

    let room_number = prompt.ask_parsed("Enter room number for billing: ", "room number")?;
    match store.compute_bill(&hotel_name, room_number) {
        Ok(bill) => {
            debug!(
                "{} nights at {} per night in {hotel_name}",
                bill.nights, bill.price_per_night
            );
            prompt.say(format!(
                "Total cost for {} nights in room {} of {} is {}.",
                bill.nights, room_number, hotel_name, bill.total
            ))
        }
        Err(e) => refuse(prompt, e),
    }
}
