pub mod mock;
pub mod telemetry;

use std::net::TcpListener;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::dev::{HttpServiceFactory, Server};
use actix_web::{App, HttpResponse, HttpServer, get, post, web};
use jiff::Timestamp;
use payloads::{CommunityId, requests, responses};
use reqwest::StatusCode;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: payloads::APIClient,
    pub communities: CommunityStore,
}

impl TestApp {
    /// Seed communities directly into the store, bypassing the HTTP
    /// surface. Insertion order is the order the server will list them in.
    pub fn seed_communities(&self, entries: &[(&str, &str)]) {
        for (name, description) in entries {
            self.communities.insert(name, description);
        }
    }
}

/// Shared handle to the mock API's in-memory community list.
///
/// Tests hold a clone so they can seed entries and inject failures without
/// going through the HTTP surface.
#[derive(Clone, Default)]
pub struct CommunityStore {
    inner: Arc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    communities: Mutex<Vec<responses::Community>>,
    fail_requests: AtomicBool,
}

impl CommunityStore {
    /// Make every list/create request return a 500 until reset.
    pub fn set_fail_requests(&self, fail: bool) {
        self.inner.fail_requests.store(fail, Ordering::SeqCst);
    }

    pub fn communities(&self) -> Vec<responses::Community> {
        self.inner.communities.lock().unwrap().clone()
    }

    pub fn insert(&self, name: &str, description: &str) -> CommunityId {
        let id = CommunityId(Uuid::new_v4());
        let now = Timestamp::now();
        self.inner.communities.lock().unwrap().push(
            responses::Community {
                id,
                name: name.to_string(),
                description: description.to_string(),
                created_at: now,
                updated_at: now,
            },
        );
        id
    }

    fn should_fail(&self) -> bool {
        self.inner.fail_requests.load(Ordering::SeqCst)
    }
}

#[get("/health_check")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}

#[get("/communities")]
async fn get_communities(store: web::Data<CommunityStore>) -> HttpResponse {
    if store.should_fail() {
        return HttpResponse::InternalServerError().body("injected failure");
    }
    HttpResponse::Ok().json(store.communities())
}

#[post("/create_community")]
async fn create_community(
    details: web::Json<requests::CreateCommunity>,
    store: web::Data<CommunityStore>,
) -> HttpResponse {
    if store.should_fail() {
        return HttpResponse::InternalServerError().body("injected failure");
    }
    if let Some(message) =
        requests::validate_community_name(&details.name).error_message()
    {
        return HttpResponse::BadRequest().body(message);
    }
    if details.description.len() > requests::COMMUNITY_DESCRIPTION_MAX_LEN {
        return HttpResponse::BadRequest().body("description too long");
    }
    let id = store.insert(&details.name, &details.description);
    HttpResponse::Ok().json(id)
}

fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(get_communities)
        .service(create_community)
}

/// Build the mock server, but not await it.
fn build(
    listener: TcpListener,
    store: CommunityStore,
) -> std::io::Result<Server> {
    let store = web::Data::new(store);
    let server = HttpServer::new(move || {
        App::new().service(api_services()).app_data(store.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub async fn spawn_app_on_port(port: u16) -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    let listener = TcpListener::bind(format!("127.0.0.1:{port}")).unwrap();
    let port = listener.local_addr().unwrap().port();

    let store = CommunityStore::default();
    let server = build(listener, store.clone()).unwrap();
    tokio::spawn(server);

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        port,
        client: payloads::APIClient {
            address: format!("http://127.0.0.1:{port}"),
            inner_client: client,
        },
        communities: store,
    }
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    spawn_app_on_port(0).await
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
