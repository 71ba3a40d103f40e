use std::io::{BufRead, Write};
use std::str::FromStr;

use log::{info, warn};

use crate::db::BookingStore;
use crate::errors::ConsoleError;
use crate::handlers;
use crate::prompt::Prompt;

const MENU: [&str; 7] = [
    "Hotel Management System",
    "1. Display Hotels",
    "2. Add Hotel",
    "3. Book Hotel",
    "4. Billing",
    "5. Show Bookings and Customers",
    "6. Exit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    DisplayHotels,
    AddHotel,
    BookHotel,
    Billing,
    ShowBookings,
    Exit,
}

impl FromStr for MenuOption {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(MenuOption::DisplayHotels),
            "2" => Ok(MenuOption::AddHotel),
            "3" => Ok(MenuOption::BookHotel),
            "4" => Ok(MenuOption::Billing),
            "5" => Ok(MenuOption::ShowBookings),
            "6" => Ok(MenuOption::Exit),
            _ => Err(()),
        }
    }
}

pub struct Console<R, W> {
    store: BookingStore,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(store: BookingStore, input: R, output: W) -> Self {
        Self {
            store,
            prompt: Prompt::new(input, output),
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (BookingStore, W) {
        (self.store, self.prompt.into_output())
    }

    /// Runs the menu until Exit is chosen or input runs dry.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        let mut running = true;

        while running {
            self.prompt.say("")?;
            for line in MENU {
                self.prompt.say(line)?;
            }

            let choice = match self.prompt.ask("Choose an option: ") {
                Ok(choice) => choice,
                Err(ConsoleError::Eof) => break,
                Err(e) => return Err(e),
            };
            let option = choice.parse::<MenuOption>().ok();

            if self.store.is_empty() && option != Some(MenuOption::AddHotel) {
                self.prompt.say("No hotels available. Add hotels first.")?;
                let forced = handlers::hotels::add_hotel(&mut self.store, &mut self.prompt);
                if !self.settle(forced)? {
                    break;
                }
                if self.store.is_empty() {
                    continue;
                }
            }

            let outcome = match option {
                Some(MenuOption::DisplayHotels) => {
                    handlers::hotels::show_hotels(&self.store, &mut self.prompt)
                }
                Some(MenuOption::AddHotel) => {
                    handlers::hotels::add_hotel(&mut self.store, &mut self.prompt)
                }
                Some(MenuOption::BookHotel) => {
                    handlers::bookings::book_hotel(&mut self.store, &mut self.prompt)
                }
                Some(MenuOption::Billing) => {
                    handlers::billing::billing(&self.store, &mut self.prompt)
                }
                Some(MenuOption::ShowBookings) => {
                    handlers::bookings::show_bookings(&self.store, &mut self.prompt)
                }
                Some(MenuOption::Exit) => {
                    running = false;
                    self.prompt.say("Exiting...")
                }
                None => {
                    warn!("Unknown menu option {choice:?}");
                    self.prompt.say("Invalid option. Please try again.")
                }
            };
            if !self.settle(outcome)? {
                break;
            }
        }

        info!("Console loop finished");
        Ok(())
    }

    // Ok(false) means the input is gone and the loop should stop.
    fn settle(&mut self, outcome: Result<(), ConsoleError>) -> Result<bool, ConsoleError> {
        match outcome {
            Ok(()) => Ok(true),
            Err(ConsoleError::Eof) => Ok(false),
            Err(e) if e.is_recoverable() => {
                warn!("Rejected input: {e}");
                self.prompt.say(e.to_string())?;
                Ok(true)
            }
            Err(e) => Err(e),
        }
    }
}
