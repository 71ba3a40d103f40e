use std::io::{BufRead, Write};

use validator::Validate;

use crate::db::BookingStore;
use crate::errors::ConsoleError;
use crate::handlers::report_refusal;
use crate::models::hotel::HotelForm;
use crate::prompt::Prompt;

pub fn show_hotels<R: BufRead, W: Write>(
    store: &BookingStore,
    prompt: &mut Prompt<R, W>,
) -> Result<(), ConsoleError> {
    let Some(hotels) = store.list_hotels() else {
        return prompt.say("No hotels available. Please add hotels.");
    };

    for hotel in hotels {
        prompt.say(format!(
            "Name: {}, Location: {}, Price: {}",
            hotel.name, hotel.location, hotel.price_per_night
        ))?;
        prompt.say("Rooms:")?;
        for room in hotel.rooms() {
            prompt.say(format!(
                "Room No.: {}, Status: {}",
                room.number(),
                room.status()
            ))?;
        }
    }
    Ok(())
}

fn read_hotel_form<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
) -> Result<HotelForm, ConsoleError> {
    let name = prompt.ask("Enter hotel name: ")?;
    let location = prompt.ask("Enter hotel location: ")?;
    let price: f64 = prompt.ask_parsed("Enter hotel price: ", "price")?;
    if !price.is_finite() {
        return Err(ConsoleError::InvalidNumber {
            field: "price",
            value: price.to_string(),
        });
    }

    let form = HotelForm {
        name,
        location,
        price,
    };
    form.validate()?;
    Ok(form)
}

pub fn add_hotel<R: BufRead, W: Write>(
    store: &mut BookingStore,
    prompt: &mut Prompt<R, W>,
) -> Result<(), ConsoleError> {
    let hotel = read_hotel_form(prompt)?.into_hotel(store.default_room_count());

    match store.add_hotel(hotel) {
        Ok(()) => prompt.say("Hotel added successfully."),
        Err(e) => report_refusal(prompt, e.kind(), e.to_string()),
    }
}
