use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use stayhub_api::config::AppConfig;
use stayhub_api::state::AppState;
use stayhub_core::events::BookingEvent;
use stayhub_core::seed::Seed;

const FIXTURE: &str = include_str!("../../../fixtures/seed.json");
const SEEDED_UUID: &str = "e08f76e8-0e71-4a48-a85a-bf7e8f61479e";

struct TestServer {
    base: String,
    client: Client,
    state: AppState,
}

impl TestServer {
    async fn spawn() -> Self {
        let state = AppState::in_memory(AppConfig::default());
        Seed::from_json(FIXTURE)
            .unwrap()
            .apply(state.bookings())
            .await
            .unwrap();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = stayhub_api::app(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base: format!("http://{addr}"),
            client: Client::new(),
            state,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

fn update_payload(uuid: &str) -> Value {
    json!({
        "uuid": uuid,
        "status": "Finalizada",
        "check_in": "2024-06-15T08:30:00",
        "check_out": "2024-06-18T17:30:00",
        "guest": {
            "document": "00157624242",
            "name": "Bento Luiz",
            "surname": "Vervloet Machado da Silva Neto",
            "country": "Brazil",
            "created_at": "2024-03-15T10:30:00",
            "phone": "48992054211",
        },
        "accommodation": {
            "id": 6,
            "name": "Estacionamento para overlanders",
            "status": "Disponível",
            "total_guests": 4,
            "single_beds": 0,
            "double_beds": 0,
            "min_nights": 2,
            "price": 100,
            "created_at": "2000-01-01T00:15:00",
            "amenities": ["ducha"],
        },
    })
}

#[tokio::test]
async fn list_all_bookings() {
    let server = TestServer::spawn().await;
    let response = server.client.get(server.url("/bookings")).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bookings: Vec<Value> = response.json().await.unwrap();
    assert_eq!(bookings.len(), 4);
}

#[tokio::test]
async fn get_booking_by_uuid() {
    let server = TestServer::spawn().await;
    let response = server
        .client
        .get(server.url(&format!("/bookings/{SEEDED_UUID}")))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let booking: Value = response.json().await.unwrap();
    assert_eq!(booking["guest"]["document"], "00157624242");
    assert_eq!(booking["uuid"], SEEDED_UUID);
}

#[tokio::test]
async fn get_every_seeded_booking() {
    let server = TestServer::spawn().await;
    for booking in server.state.bookings().list().await.unwrap() {
        let response = server
            .client
            .get(server.url(&format!("/bookings/{}", booking.uuid)))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["guest"]["document"], booking.guest.document.as_str());
    }
}

#[tokio::test]
async fn get_unknown_booking_is_404() {
    let server = TestServer::spawn().await;
    let response = server
        .client
        .get(server.url("/bookings/e08f76b8-0e71-4a48-a85a-bf7e8f61479e"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["type"], "notFound");
    assert_eq!(body["error"]["statusCode"], 404);
}

#[tokio::test]
async fn create_booking() {
    let server = TestServer::spawn().await;
    let response = server
        .client
        .post(server.url("/bookings/create"))
        .json(&json!({
            "check_in": "2024-09-15T08:30:00",
            "check_out": "2024-09-18T12:30:00",
            "guest_document": "00157624242",
            "accommodation_id": 1,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let booking: Value = response.json().await.unwrap();
    let uuid = booking["uuid"].as_str().unwrap();
    assert!(!uuid.is_empty());
    assert!(booking["created_at"].as_str().is_some());
    assert_eq!(booking["guest"]["name"], "Bento Luiz");
    assert_eq!(booking["accommodation"]["id"], 1);
    assert_eq!(booking["status"], "Pending");

    let response = server
        .client
        .get(server.url(&format!("/bookings/{uuid}")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_with_empty_payload_is_400() {
    let server = TestServer::spawn().await;
    let response = server
        .client
        .post(server.url("/bookings/create"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(server.state.bookings().list().await.unwrap().len(), 4);
}

#[tokio::test]
async fn create_with_malformed_json_is_400() {
    let server = TestServer::spawn().await;
    let response = server
        .client
        .post(server.url("/bookings/create"))
        .header("content-type", "application/json")
        .body("{\"check_in\": ")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_inverted_stay_is_400() {
    let server = TestServer::spawn().await;
    let response = server
        .client
        .post(server.url("/bookings/create"))
        .json(&json!({
            "check_in": "2024-09-18T12:30:00",
            "check_out": "2024-09-15T08:30:00",
            "guest_document": "00157624242",
            "accommodation_id": 1,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_unknown_guest_is_404() {
    let server = TestServer::spawn().await;
    let response = server
        .client
        .post(server.url("/bookings/create"))
        .json(&json!({
            "check_in": "2024-09-15T08:30:00",
            "check_out": "2024-09-18T12:30:00",
            "guest_document": "99999999999",
            "accommodation_id": 1,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_booking_then_get_is_404() {
    let server = TestServer::spawn().await;
    let url = server.url(&format!("/bookings/{SEEDED_UUID}"));

    let response = server.client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "DELETED");

    let response = server.client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = server.client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_booking_is_404() {
    let server = TestServer::spawn().await;
    for uuid in ["e08f76e8-0e71-4a48-a85a-Cf7e8f61479e", "not-a-uuid"] {
        let response = server
            .client
            .delete(server.url(&format!("/bookings/{uuid}")))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
    assert_eq!(server.state.bookings().list().await.unwrap().len(), 4);
}

#[tokio::test]
async fn create_segment_is_not_a_booking_uuid() {
    let server = TestServer::spawn().await;
    let url = server.url("/bookings/create");

    let response = server.client.get(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"]["type"], "notFound");

    let response = server.client.delete(&url).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(server.state.bookings().list().await.unwrap().len(), 4);
}

#[tokio::test]
async fn update_booking() {
    let server = TestServer::spawn().await;
    let before = server.state.bookings().get(SEEDED_UUID).await.unwrap();

    let response = server
        .client
        .put(server.url("/bookings"))
        .json(&update_payload(SEEDED_UUID))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "UPDATED");

    let response = server
        .client
        .get(server.url(&format!("/bookings/{SEEDED_UUID}")))
        .send()
        .await
        .unwrap();
    let booking: Value = response.json().await.unwrap();
    assert_eq!(booking["status"], "Finalizada");
    assert_eq!(booking["check_in"], "2024-06-15T08:30:00");
    assert_eq!(booking["check_out"], "2024-06-18T17:30:00");
    assert_eq!(
        booking["created_at"],
        before.created_at.format("%Y-%m-%dT%H:%M:%S").to_string()
    );
}

#[tokio::test]
async fn update_with_inverted_stay_is_400() {
    let server = TestServer::spawn().await;
    let before = server.state.bookings().get(SEEDED_UUID).await.unwrap();

    let mut payload = update_payload(SEEDED_UUID);
    payload["check_in"] = json!("2024-06-18T17:30:00");
    payload["check_out"] = json!("2024-06-15T08:30:00");
    let response = server
        .client
        .put(server.url("/bookings"))
        .json(&payload)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let after = server.state.bookings().get(SEEDED_UUID).await.unwrap();
    assert_eq!(after, before);
}

#[tokio::test]
async fn update_unknown_booking_is_404() {
    let server = TestServer::spawn().await;
    let response = server
        .client
        .put(server.url("/bookings"))
        .json(&update_payload("e08f76e8-0e72-4a48-a85a-bf7e8f61479e"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mutations_reach_subscribers() {
    let server = TestServer::spawn().await;
    let mut events = server.state.event_bus().subscribe();

    server
        .client
        .delete(server.url(&format!("/bookings/{SEEDED_UUID}")))
        .send()
        .await
        .unwrap();

    let event = events.recv().await.unwrap();
    assert!(matches!(event, BookingEvent::Deleted(_)));
    assert_eq!(event.change().booking_uuid.to_string(), SEEDED_UUID);
}

#[tokio::test]
async fn guests_and_accommodations() {
    let server = TestServer::spawn().await;

    let guests: Vec<Value> = server
        .client
        .get(server.url("/guests"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(guests.len(), 2);

    let response = server
        .client
        .get(server.url("/accommodations/6"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let accommodation: Value = response.json().await.unwrap();
    assert_eq!(accommodation["amenities"], json!(["ducha"]));

    for path in ["/accommodations/99", "/accommodations/abc", "/guests/000"] {
        let response = server.client.get(server.url(path)).send().await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn health_reports_store() {
    let server = TestServer::spawn().await;
    let body: Value = server
        .client
        .get(server.url("/health"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["bookings"], 4);

    let response = server.client.get(server.url("/v1/ping")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
