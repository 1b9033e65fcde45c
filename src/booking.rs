//! Table-booking form state.
//!
//! Submission is intentionally client-side only: an accepted request is
//! acknowledged immediately and a member of staff follows up by phone.

use serde::Serialize;

/// Times offered by the reservation form.
pub const TIME_SLOTS: [&str; 12] = [
    "12:00", "12:30", "13:00", "13:30", "14:00", "18:00", "18:30", "19:00", "19:30", "20:00",
    "20:30", "21:00",
];

/// Party sizes bookable online; larger groups are asked to phone.
pub const PARTY_SIZES: [u8; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Acknowledgment shown after an accepted submission.
pub const CONFIRMATION_MESSAGE: &str =
    "Booking request submitted! We will contact you shortly to confirm your reservation.";

/// Field values of the booking form. Created empty on mount; each field is
/// overwritten independently as the user types.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub message: String,
}

/// An accepted booking request, captured at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub message: String,
}

impl BookingForm {
    /// Every field except `message` must be filled in.
    pub fn required_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.phone.is_empty()
            && !self.date.is_empty()
            && !self.time.is_empty()
            && !self.guests.is_empty()
    }

    /// Accepts the form if complete: returns the captured request and resets
    /// every field to empty. An incomplete form is left untouched and yields
    /// `None`.
    pub fn submit(&mut self) -> Option<BookingRequest> {
        if !self.required_complete() {
            return None;
        }
        let accepted = std::mem::take(self);
        Some(BookingRequest {
            name: accepted.name,
            email: accepted.email,
            phone: accepted.phone,
            date: accepted.date,
            time: accepted.time,
            guests: accepted.guests,
            message: accepted.message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BookingForm {
        BookingForm {
            name: "Alex Croft".to_string(),
            email: "alex@example.com".to_string(),
            phone: "0121 496 0523".to_string(),
            date: "2026-08-14".to_string(),
            time: "19:30".to_string(),
            guests: "4".to_string(),
            message: "Window table if possible".to_string(),
        }
    }

    #[test]
    fn test_submit_complete_form_resets_and_returns_request() {
        let mut form = filled_form();
        let request = form.submit().unwrap();

        assert_eq!(request.name, "Alex Croft");
        assert_eq!(request.time, "19:30");
        assert_eq!(request.guests, "4");
        assert_eq!(form, BookingForm::default());
    }

    #[test]
    fn test_message_is_optional() {
        let mut form = BookingForm {
            message: String::new(),
            ..filled_form()
        };
        assert!(form.submit().is_some());
    }

    #[test]
    fn test_submit_with_missing_required_field_changes_nothing() {
        let clear: [fn(&mut BookingForm); 6] = [
            |f| f.name.clear(),
            |f| f.email.clear(),
            |f| f.phone.clear(),
            |f| f.date.clear(),
            |f| f.time.clear(),
            |f| f.guests.clear(),
        ];
        for blank in clear {
            let mut form = filled_form();
            blank(&mut form);
            let before = form.clone();

            assert!(form.submit().is_none());
            assert_eq!(form, before);
        }
    }

    #[test]
    fn test_accepted_request_serializes() {
        let mut form = filled_form();
        let request = form.submit().unwrap();
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"guests\":\"4\""));
    }

    #[test]
    fn test_option_sets() {
        assert_eq!(TIME_SLOTS.len(), 12);
        assert!(TIME_SLOTS.contains(&"12:00") && TIME_SLOTS.contains(&"21:00"));
        assert_eq!(PARTY_SIZES, [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
