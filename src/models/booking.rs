use validator::Validate;

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub room_number: usize,
    pub check_in_date: String,
    pub nights: u32,
    pub customer_id: String,
}

/// Stay details collected after the customer.
#[derive(Debug, Validate)]
pub struct StayForm {
    pub check_in_date: String,
    #[validate(range(min = 1))]
    pub nights: u32,
}

/// One line of the bookings report.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRow<'a> {
    pub hotel_name: &'a str,
    pub room_number: usize,
    pub customer_name: &'a str,
    pub check_in_date: &'a str,
    pub nights: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bill {
    pub nights: u32,
    pub price_per_night: f64,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_zero_nights() {
        let stay = StayForm {
            check_in_date: "2024-01-10".into(),
            nights: 0,
        };
        assert!(stay.validate().is_err());
    }

    #[test]
    fn should_accept_one_night() {
        let stay = StayForm {
            check_in_date: "2024-01-10".into(),
            nights: 1,
        };
        assert!(stay.validate().is_ok());
    }
}
