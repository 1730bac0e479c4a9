//! Hotel query orchestration over the eligibility policy.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::eligibility::{EligibilityEvaluator, Verdict};
use crate::domain::ports::{
    EnrollmentRepository, HotelRepository, HotelRepositoryError, HotelsQuery, TicketRepository,
};
use crate::domain::{Error, Hotel, HotelId, HotelWithRooms, UserId};

/// Production implementation of [`HotelsQuery`].
///
/// Each operation runs the eligibility evaluation first and touches the
/// hotel store only on an allowed verdict.
#[derive(Clone)]
pub struct HotelsService<E, T, H> {
    eligibility: EligibilityEvaluator<E, T>,
    hotels: Arc<H>,
}

impl<E, T, H> HotelsService<E, T, H> {
    /// Create the service over the three lookup collaborators.
    pub fn new(enrollments: Arc<E>, tickets: Arc<T>, hotels: Arc<H>) -> Self {
        Self {
            eligibility: EligibilityEvaluator::new(enrollments, tickets),
            hotels,
        }
    }
}

fn map_hotel_error(error: HotelRepositoryError) -> Error {
    match error {
        HotelRepositoryError::Connection { message } | HotelRepositoryError::Query { message } => {
            Error::generic(message)
        }
    }
}

impl<E, T, H> HotelsService<E, T, H>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    H: HotelRepository,
{
    async fn require_access(&self, user_id: UserId) -> Result<(), Error> {
        match self.eligibility.evaluate(user_id).await? {
            Verdict::Allowed => Ok(()),
            Verdict::Denied(reason) => Err(reason.into_error()),
        }
    }
}

#[async_trait]
impl<E, T, H> HotelsQuery for HotelsService<E, T, H>
where
    E: EnrollmentRepository,
    T: TicketRepository,
    H: HotelRepository,
{
    async fn list_hotels(&self, user_id: UserId) -> Result<Vec<Hotel>, Error> {
        self.require_access(user_id).await?;

        let hotels = self.hotels.find_all().await.map_err(map_hotel_error)?;
        // Contract decision: an empty listing reports as not-found rather
        // than an empty 200, matching the original service's behaviour.
        if hotels.is_empty() {
            return Err(Error::not_found("no hotels available"));
        }
        Ok(hotels)
    }

    async fn hotel_with_rooms(
        &self,
        user_id: UserId,
        hotel_id: HotelId,
    ) -> Result<HotelWithRooms, Error> {
        self.require_access(user_id).await?;

        self.hotels
            .find_by_id(hotel_id)
            .await
            .map_err(map_hotel_error)?
            .ok_or_else(|| Error::not_found("hotel not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        MockEnrollmentRepository, MockHotelRepository, MockTicketRepository,
    };
    use crate::domain::{
        Address, AddressId, Enrollment, EnrollmentId, ErrorCode, Room, RoomId, Ticket, TicketId,
        TicketStatus, TicketType, TicketTypeId,
    };

    const USER_ID: UserId = UserId::new(7);

    fn eligible_enrollments() -> MockEnrollmentRepository {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_find_with_address_by_user_id()
            .return_once(|user_id| {
                Ok(Some(Enrollment {
                    id: EnrollmentId::new(3),
                    user_id,
                    addresses: vec![Address {
                        id: AddressId::new(1),
                        street: "1 Test Street".to_owned(),
                        city: "Testville".to_owned(),
                        state: "TS".to_owned(),
                        postal_code: "00000-000".to_owned(),
                    }],
                }))
            });
        enrollments
    }

    fn paid_in_person_tickets() -> MockTicketRepository {
        let mut tickets = MockTicketRepository::new();
        tickets.expect_find_by_enrollment_id().return_once(|enrollment_id| {
            Ok(Some(Ticket {
                id: TicketId::new(4),
                enrollment_id,
                status: TicketStatus::Paid,
                ticket_type: TicketType {
                    id: TicketTypeId::new(1),
                    name: "In person with hotel".to_owned(),
                    price: 60_000,
                    is_remote: false,
                    includes_hotel: true,
                },
            }))
        });
        tickets
    }

    fn hotel(id: i32) -> Hotel {
        Hotel {
            id: HotelId::new(id),
            name: format!("Hotel {id}"),
            image: "https://example.com/hotel.jpg".to_owned(),
        }
    }

    fn service(
        enrollments: MockEnrollmentRepository,
        tickets: MockTicketRepository,
        hotels: MockHotelRepository,
    ) -> HotelsService<MockEnrollmentRepository, MockTicketRepository, MockHotelRepository> {
        HotelsService::new(Arc::new(enrollments), Arc::new(tickets), Arc::new(hotels))
    }

    #[tokio::test]
    async fn list_returns_hotels_for_eligible_user() {
        let mut hotels = MockHotelRepository::new();
        hotels
            .expect_find_all()
            .times(1)
            .return_once(|| Ok(vec![hotel(1), hotel(2)]));

        let listed = service(eligible_enrollments(), paid_in_person_tickets(), hotels)
            .list_hotels(USER_ID)
            .await
            .expect("eligible listing");

        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn empty_listing_reports_not_found() {
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_all().times(1).return_once(|| Ok(Vec::new()));

        let err = service(eligible_enrollments(), paid_in_person_tickets(), hotels)
            .list_hotels(USER_ID)
            .await
            .expect_err("empty listing");

        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn ineligible_user_never_reaches_the_hotel_store() {
        let mut enrollments = MockEnrollmentRepository::new();
        enrollments
            .expect_find_with_address_by_user_id()
            .return_once(|_| Ok(None));
        let mut tickets = MockTicketRepository::new();
        tickets.expect_find_by_enrollment_id().times(0);
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_all().times(0);
        hotels.expect_find_by_id().times(0);

        let err = service(enrollments, tickets, hotels)
            .list_hotels(USER_ID)
            .await
            .expect_err("missing enrollment");

        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn reserved_ticket_denies_detail_with_payment_required() {
        let mut tickets = MockTicketRepository::new();
        tickets.expect_find_by_enrollment_id().return_once(|enrollment_id| {
            Ok(Some(Ticket {
                id: TicketId::new(4),
                enrollment_id,
                status: TicketStatus::Reserved,
                ticket_type: TicketType {
                    id: TicketTypeId::new(1),
                    name: "In person with hotel".to_owned(),
                    price: 60_000,
                    is_remote: false,
                    includes_hotel: true,
                },
            }))
        });
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_by_id().times(0);

        let err = service(eligible_enrollments(), tickets, hotels)
            .hotel_with_rooms(USER_ID, HotelId::new(1))
            .await
            .expect_err("reserved ticket");

        assert_eq!(err.code, ErrorCode::PaymentRequired);
    }

    #[tokio::test]
    async fn detail_returns_hotel_with_rooms() {
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_by_id().times(1).return_once(|hotel_id| {
            Ok(Some(HotelWithRooms {
                hotel: hotel(hotel_id.get()),
                rooms: vec![Room {
                    id: RoomId::new(9),
                    name: "Room 101".to_owned(),
                    capacity: 3,
                    hotel_id,
                }],
            }))
        });

        let detail = service(eligible_enrollments(), paid_in_person_tickets(), hotels)
            .hotel_with_rooms(USER_ID, HotelId::new(1))
            .await
            .expect("eligible detail");

        assert_eq!(detail.hotel.id, HotelId::new(1));
        assert_eq!(detail.rooms.len(), 1);
    }

    #[tokio::test]
    async fn unknown_hotel_id_reports_not_found() {
        let mut hotels = MockHotelRepository::new();
        hotels.expect_find_by_id().times(1).return_once(|_| Ok(None));

        let err = service(eligible_enrollments(), paid_in_person_tickets(), hotels)
            .hotel_with_rooms(USER_ID, HotelId::new(404))
            .await
            .expect_err("unknown hotel");

        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn hotel_store_fault_surfaces_as_generic_error() {
        let mut hotels = MockHotelRepository::new();
        hotels
            .expect_find_all()
            .times(1)
            .return_once(|| Err(HotelRepositoryError::query("database query failed")));

        let err = service(eligible_enrollments(), paid_in_person_tickets(), hotels)
            .list_hotels(USER_ID)
            .await
            .expect_err("store fault");

        assert_eq!(err.code, ErrorCode::Generic);
    }
}
