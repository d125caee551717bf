/// Booking identifier parsing.
///
/// Identifiers arrive as free-form path segments or JSON strings. Anything
/// that is not a hyphenated or simple UUID cannot name a stored booking.
use uuid::Uuid;

pub fn parse_booking_id(raw: &str) -> Option<Uuid> {
    Uuid::try_parse(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hyphenated_id() {
        let id = parse_booking_id("e08f76e8-0e71-4a48-a85a-bf7e8f61479e").unwrap();
        assert_eq!(id.to_string(), "e08f76e8-0e71-4a48-a85a-bf7e8f61479e");
    }

    #[test]
    fn parse_is_case_insensitive() {
        let upper = parse_booking_id("E08F76E8-0E71-4A48-A85A-BF7E8F61479E");
        let lower = parse_booking_id("e08f76e8-0e71-4a48-a85a-bf7e8f61479e");
        assert_eq!(upper, lower);
    }

    #[test]
    fn reject_malformed_id() {
        assert!(parse_booking_id("").is_none());
        assert!(parse_booking_id("not-a-uuid").is_none());
        assert!(parse_booking_id("e08f76e8-0e71-4a48-a85a-bf7e8f61479").is_none());
    }
}
