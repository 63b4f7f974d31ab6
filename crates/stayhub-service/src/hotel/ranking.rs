//! Hotel popularity ranking.

use std::cmp::Ordering;

use stayhub_database::repositories::hotel::HotelWithStats;

/// How many hotels the top listing returns.
pub const TOP_HOTELS_LIMIT: usize = 5;

/// Ordering for the top-hotels listing: most-booked first, average
/// rating as the tie breaker, unrated hotels after rated ones.
pub fn compare_popularity(a: &HotelWithStats, b: &HotelWithStats) -> Ordering {
    b.hotel
        .bookings_count
        .cmp(&a.hotel.bookings_count)
        .then_with(|| match (&b.avg_rating, &a.avg_rating) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        })
}

/// Sort hotels by popularity and keep the top slice.
pub fn top_hotels(mut hotels: Vec<HotelWithStats>) -> Vec<HotelWithStats> {
    hotels.sort_by(compare_popularity);
    hotels.truncate(TOP_HOTELS_LIMIT);
    hotels
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use stayhub_entity::hotel::Hotel;
    use uuid::Uuid;

    fn stats(name: &str, bookings_count: i32, avg_rating: Option<&str>) -> HotelWithStats {
        HotelWithStats {
            hotel: Hotel {
                id: Uuid::new_v4(),
                owner_id: Uuid::new_v4(),
                name: name.to_string(),
                address: "1 Main St".to_string(),
                description: String::new(),
                stars: 3,
                bookings_count,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            avg_rating: avg_rating.map(|r| r.parse::<Decimal>().unwrap()),
            ratings_count: if avg_rating.is_some() { 1 } else { 0 },
            likes_count: 0,
        }
    }

    #[test]
    fn test_most_booked_first() {
        let ranked = top_hotels(vec![
            stats("quiet", 1, Some("5.0")),
            stats("busy", 10, Some("3.0")),
        ]);
        assert_eq!(ranked[0].hotel.name, "busy");
    }

    #[test]
    fn test_rating_breaks_booking_ties() {
        let ranked = top_hotels(vec![
            stats("worse", 5, Some("3.5")),
            stats("better", 5, Some("4.5")),
        ]);
        assert_eq!(ranked[0].hotel.name, "better");
    }

    #[test]
    fn test_unrated_sorts_after_rated() {
        let ranked = top_hotels(vec![
            stats("unrated", 5, None),
            stats("rated", 5, Some("2.0")),
        ]);
        assert_eq!(ranked[0].hotel.name, "rated");
        assert_eq!(ranked[1].hotel.name, "unrated");
    }

    #[test]
    fn test_limit_is_five() {
        let hotels = (0..8).map(|i| stats(&format!("h{i}"), i, None)).collect();
        assert_eq!(top_hotels(hotels).len(), TOP_HOTELS_LIMIT);
    }
}
