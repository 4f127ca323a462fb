use crate::handler::{
    reservation::register_reservation,
    room::{bulk_update_rooms, register_room, show_room, show_room_list},
    user::register_user,
};
use crate::model::room::{RoomStatusName, RoomTypeName};
use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{NaiveDate, Utc};
use kernel::{
    model::{
        id::{ReservationId, UserId},
        reservation::{
            event::{CreateReservation, UpdateReservation},
            Reservation, ReservationStatus, ReservedRoom,
        },
        room::{
            event::{BulkUpdateRooms, CreateRoom, UpdateRoom},
            Room, RoomCondition, RoomStatus, RoomType,
        },
        user::{event::CreateUser, User},
    },
    repository::{
        auth::AuthRepository, health::HealthCheckRepository, reservation::ReservationRepository,
        room::RoomRepository, user::UserRepository,
    },
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use std::sync::{Arc, Mutex};

/// One store behind all five repositories, keeping the vacancy gate,
/// uniqueness checks, and all-or-nothing bulk patch observable without a
/// database.
#[derive(Default)]
struct InMemoryStore {
    users: Mutex<Vec<(User, String)>>,
    rooms: Mutex<Vec<Room>>,
    reservations: Mutex<Vec<Reservation>>,
}

#[async_trait]
impl HealthCheckRepository for InMemoryStore {
    async fn check_db(&self) -> bool {
        true
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|(u, _)| u.email == event.email || u.name == event.name)
        {
            return Err(AppError::DuplicateEntity(
                "Email or Name already registered".into(),
            ));
        }
        let user = User {
            user_id: UserId::new(),
            name: event.name,
            email: event.email,
            role: event.role,
            created_at: Utc::now(),
            updated_at: None,
        };
        users.push((user.clone(), event.password));
        Ok(user)
    }
}

#[async_trait]
impl AuthRepository for InMemoryStore {
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|(u, stored)| u.email == email && stored == password)
            .map(|(u, _)| u.clone())
            .ok_or(AppError::UnauthenticatedError)
    }
}

#[async_trait]
impl RoomRepository for InMemoryStore {
    async fn create(&self, event: CreateRoom) -> AppResult<()> {
        let mut rooms = self.rooms.lock().unwrap();
        if rooms.iter().any(|r| r.room_number == event.room_number) {
            return Err(AppError::DuplicateEntity(format!(
                "Room {} already registered",
                event.room_number
            )));
        }
        rooms.push(Room {
            room_number: event.room_number,
            room_type: event.room_type,
            status: event.status,
            room_condition: event.room_condition,
            created_by: event.registered_by,
            updated_by: None,
            created_at: Utc::now(),
            updated_at: None,
        });
        Ok(())
    }

    async fn find_all(&self) -> AppResult<Vec<Room>> {
        let mut rooms = self.rooms.lock().unwrap().clone();
        rooms.sort_by(|a, b| a.room_number.cmp(&b.room_number));
        Ok(rooms)
    }

    async fn find_by_room_number(&self, room_number: &str) -> AppResult<Option<Room>> {
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.room_number == room_number)
            .cloned())
    }

    async fn find_vacant(&self, room_type: Option<RoomType>) -> AppResult<Vec<Room>> {
        Ok(self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.status == RoomStatus::Vacant)
            .filter(|r| room_type.map_or(true, |t| r.room_type == t))
            .cloned()
            .collect())
    }

    async fn update(&self, event: UpdateRoom) -> AppResult<Room> {
        let mut rooms = self.rooms.lock().unwrap();
        let room = rooms
            .iter_mut()
            .find(|r| r.room_number == event.room_number)
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("Room {} not found", event.room_number))
            })?;
        apply_room_patch(room, event.room_type, event.status, event.room_condition);
        Ok(room.clone())
    }

    async fn bulk_update(&self, event: BulkUpdateRooms) -> AppResult<Vec<Room>> {
        let mut rooms = self.rooms.lock().unwrap();
        // First missing room number fails the batch before anything is
        // written, mirroring the rolled-back transaction.
        for room_number in &event.room_numbers {
            if !rooms.iter().any(|r| &r.room_number == room_number) {
                return Err(AppError::EntityNotFound(format!(
                    "Room {room_number} not found"
                )));
            }
        }
        let mut updated = Vec::with_capacity(event.room_numbers.len());
        for room_number in &event.room_numbers {
            let room = rooms
                .iter_mut()
                .find(|r| &r.room_number == room_number)
                .unwrap();
            apply_room_patch(room, event.room_type, event.status, event.room_condition);
            updated.push(room.clone());
        }
        Ok(updated)
    }
}

fn apply_room_patch(
    room: &mut Room,
    room_type: Option<RoomType>,
    status: Option<RoomStatus>,
    room_condition: Option<RoomCondition>,
) {
    if let Some(v) = room_type {
        room.room_type = v;
    }
    if let Some(v) = status {
        room.status = v;
    }
    if let Some(v) = room_condition {
        room.room_condition = v;
    }
    room.updated_at = Some(Utc::now());
}

#[async_trait]
impl ReservationRepository for InMemoryStore {
    async fn create(&self, event: CreateReservation) -> AppResult<ReservationId> {
        let has_vacancy = self
            .rooms
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.room_type == event.room_type && r.status == RoomStatus::Vacant);
        if !has_vacancy {
            return Err(AppError::NoAvailability(format!(
                "No available rooms of the requested type: {}",
                event.room_type
            )));
        }
        let reservation_id = ReservationId::new();
        self.reservations.lock().unwrap().push(Reservation {
            reservation_id,
            first_name: event.first_name,
            last_name: event.last_name,
            email: event.email,
            phone_number: event.phone_number,
            check_in: event.check_in,
            check_out: event.check_out,
            total_amount: event.total_amount,
            address: event.address,
            credit_card_number: event.credit_card_number,
            cc_expiry: event.cc_expiry,
            status: event.status,
            room_type: event.room_type,
            room_number: None,
            created_by: event.created_by,
            updated_by: None,
            created_at: Utc::now(),
            updated_at: None,
        });
        Ok(reservation_id)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.reservation_id == reservation_id)
            .cloned())
    }

    async fn update(
        &self,
        reservation_id: ReservationId,
        event: UpdateReservation,
    ) -> AppResult<Reservation> {
        let mut reservations = self.reservations.lock().unwrap();
        let reservation = reservations
            .iter_mut()
            .find(|r| r.reservation_id == reservation_id)
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("Reservation {reservation_id} not found"))
            })?;
        if let Some(v) = event.first_name {
            reservation.first_name = v;
        }
        if let Some(v) = event.last_name {
            reservation.last_name = v;
        }
        if let Some(v) = event.email {
            reservation.email = v;
        }
        if let Some(v) = event.phone_number {
            reservation.phone_number = v;
        }
        if let Some(v) = event.check_in {
            reservation.check_in = v;
        }
        if let Some(v) = event.check_out {
            reservation.check_out = v;
        }
        if let Some(v) = event.total_amount {
            reservation.total_amount = v;
        }
        if let Some(v) = event.address {
            reservation.address = v;
        }
        if let Some(v) = event.credit_card_number {
            reservation.credit_card_number = v;
        }
        if let Some(v) = event.cc_expiry {
            reservation.cc_expiry = v;
        }
        if let Some(v) = event.status {
            reservation.status = v;
        }
        if let Some(v) = event.room_type {
            reservation.room_type = v;
        }
        if let Some(v) = event.room_number {
            reservation.room_number = Some(v);
        }
        reservation.updated_at = Some(Utc::now());
        Ok(reservation.clone())
    }

    async fn find_arrivals(&self, date: NaiveDate) -> AppResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.check_in == date && r.status == ReservationStatus::Booked)
            .cloned()
            .collect())
    }

    async fn find_departures(&self, date: NaiveDate) -> AppResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.check_out == date)
            .cloned()
            .collect())
    }

    async fn find_checkins(
        &self,
        date: NaiveDate,
        status: ReservationStatus,
    ) -> AppResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.check_in == date && r.status == status)
            .cloned()
            .collect())
    }

    async fn find_by_status(&self, status: ReservationStatus) -> AppResult<Vec<Reservation>> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.status == status)
            .cloned()
            .collect())
    }

    async fn find_reserved_rooms(
        &self,
        room_type: RoomType,
        date: NaiveDate,
    ) -> AppResult<Vec<ReservedRoom>> {
        Ok(self
            .reservations
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.room_type == room_type && r.occupies(date))
            .map(|r| ReservedRoom {
                room_number: r.room_number.clone(),
                room_type: r.room_type,
                status: r.status,
            })
            .collect())
    }
}

fn registry_with_rooms(rooms: Vec<Room>) -> AppRegistry {
    let store = Arc::new(InMemoryStore {
        rooms: Mutex::new(rooms),
        ..Default::default()
    });
    AppRegistry::from_parts(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
        store,
    )
}

fn room(room_number: &str, room_type: RoomType, status: RoomStatus) -> Room {
    Room {
        room_number: room_number.into(),
        room_type,
        status,
        room_condition: RoomCondition::Clean,
        created_by: UserId::new(),
        updated_by: None,
        created_at: Utc::now(),
        updated_at: None,
    }
}

fn booking_payload(room_type: &str) -> serde_json::Value {
    serde_json::json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "phoneNumber": "0123456789",
        "checkIn": "2024-06-01",
        "checkOut": "2024-06-03",
        "totalAmount": "250.00",
        "address": "12 Analytical St",
        "creditCardNumber": "4111111111111111",
        "ccExpiry": "12/27",
        "roomType": room_type,
        "createdBy": "7d8ac1d6-2ba5-4d5c-9486-52f1bd20f4a1"
    })
}

#[tokio::test]
async fn booking_without_a_vacant_room_of_the_type_is_rejected() {
    let registry = registry_with_rooms(vec![room("101", RoomType::Single, RoomStatus::Occupied)]);
    let req = serde_json::from_value(booking_payload("Single")).unwrap();

    let err = register_reservation(State(registry), Json(req))
        .await
        .err()
        .expect("occupied-only inventory must not accept a booking");
    assert!(matches!(&err, AppError::NoAvailability(msg) if msg.contains("Single")));
    assert_eq!(
        err.into_response().status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
}

#[tokio::test]
async fn booking_with_a_vacant_room_leaves_the_room_unassigned() {
    let registry = registry_with_rooms(vec![room("201", RoomType::Double, RoomStatus::Vacant)]);
    let req = serde_json::from_value(booking_payload("Double")).unwrap();

    let (status, Json(reservation)) = register_reservation(State(registry), Json(req))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert!(reservation.room_number.is_none());
}

#[tokio::test]
async fn duplicate_user_registration_conflicts() {
    let registry = registry_with_rooms(vec![]);
    let payload = serde_json::json!({
        "name": "bob",
        "email": "bob@example.com",
        "role": "frontdesk",
        "password": "secret"
    });

    let req = serde_json::from_value(payload.clone()).unwrap();
    register_user(State(registry.clone()), Json(req)).await.unwrap();

    let req = serde_json::from_value(payload).unwrap();
    let err = register_user(State(registry), Json(req))
        .await
        .err()
        .expect("second registration with the same name and email");
    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn registered_room_round_trips_through_lookup() {
    let registry = registry_with_rooms(vec![]);
    let req = serde_json::from_value(serde_json::json!({
        "roomNumber": "204",
        "roomType": "Double",
        "createdBy": "7d8ac1d6-2ba5-4d5c-9486-52f1bd20f4a1"
    }))
    .unwrap();

    let status = register_room(State(registry.clone()), Json(req)).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);

    let Json(found) = show_room(Path("204".into()), State(registry)).await.unwrap();
    assert_eq!(found.room_number, "204");
    assert!(matches!(found.room_type, RoomTypeName::Double));
    assert!(matches!(found.status, RoomStatusName::Vacant));
}

#[tokio::test]
async fn bulk_update_aborts_on_the_first_missing_room() {
    let registry = registry_with_rooms(vec![
        room("101", RoomType::Single, RoomStatus::Vacant),
        room("102", RoomType::Single, RoomStatus::Vacant),
    ]);
    let req = serde_json::from_value(serde_json::json!({
        "roomNumbers": ["101", "999", "102"],
        "status": "maintenance"
    }))
    .unwrap();

    let err = bulk_update_rooms(State(registry.clone()), Json(req))
        .await
        .err()
        .expect("unknown room 999 must fail the batch");
    assert!(matches!(&err, AppError::EntityNotFound(msg) if msg.contains("999")));

    // nothing from the failed batch was applied
    let Json(rooms) = show_room_list(State(registry)).await.unwrap();
    assert_eq!(rooms.items.len(), 2);
    assert!(rooms
        .items
        .iter()
        .all(|r| matches!(r.status, RoomStatusName::Vacant)));
}
