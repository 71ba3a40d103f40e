use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::errors::{ConsoleError, ErrorKind};
use crate::prompt::Prompt;

pub mod billing;
pub mod bookings;
pub mod hotels;

/// Prints a refused store operation. Conflicts are logged as warnings,
/// lookups and preconditions only at debug level.
fn report_refusal<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    kind: ErrorKind,
    message: String,
) -> Result<(), ConsoleError> {
    match kind {
        ErrorKind::Conflict => warn!("{kind:?}: {message}"),
        ErrorKind::NotFound | ErrorKind::Precondition => debug!("{kind:?}: {message}"),
    }
    prompt.say(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::HotelError;
    use std::io::Cursor;

    #[test]
    fn should_print_refusal_message_for_every_kind() {
        let mut prompt = Prompt::new(Cursor::new(""), Vec::new());
        let duplicate = HotelError::Duplicate {
            name: "Grand".into(),
            location: "City A".into(),
        };
        report_refusal(&mut prompt, duplicate.kind(), duplicate.to_string()).unwrap();
        report_refusal(&mut prompt, ErrorKind::NotFound, "Hotel not found.".into()).unwrap();

        let output = String::from_utf8(prompt.into_output()).unwrap();
        assert_eq!(output, "This hotel already exists.\nHotel not found.\n");
    }
}
