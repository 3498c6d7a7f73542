//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use chrono::{DateTime, Local, NaiveDate, Utc};
use mockable::Clock;

use crate::Trace;
use crate::domain::ports::{
    MockOrdersQuery, MockPurchaseFileCommand, MockPurchasesQuery, MockUserQuery,
};
use crate::inbound::http::orders::{get_order, list_orders};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::users::{get_user, upload_users_data};

const BOUNDARY: &str = "purchases-test-boundary";

/// Clock frozen at midday UTC on a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FrozenClock {
    utc_now: DateTime<Utc>,
}

impl FrozenClock {
    pub fn on(date: NaiveDate) -> Self {
        let utc_now = date
            .and_hms_opt(12, 0, 0)
            .expect("valid time")
            .and_utc();
        Self { utc_now }
    }
}

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Ports with no expectations; any call through them fails the test.
pub fn unused_ports() -> HttpStatePorts {
    HttpStatePorts {
        users: Arc::new(MockUserQuery::new()),
        orders: Arc::new(MockOrdersQuery::new()),
        purchases: Arc::new(MockPurchasesQuery::new()),
        purchase_files: Arc::new(MockPurchaseFileCommand::new()),
    }
}

/// Build state from ports with a clock frozen on `today`.
pub fn state_on(ports: HttpStatePorts, today: NaiveDate) -> HttpState {
    HttpState::with_clock(ports, Arc::new(FrozenClock::on(today)))
}

/// App exposing every user and order route over the given state.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(upload_users_data)
        .service(get_user)
        .service(get_order)
        .service(list_orders)
}

/// Encode a single-file multipart body, returning its content type and bytes.
pub fn multipart_body(field: &str, contents: &[u8]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"purchases.txt\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: text/plain\r\n\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}
