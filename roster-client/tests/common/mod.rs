// roster-client/tests/common/mod.rs
// 测试用的后端桩和导航记录器

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use roster_client::{
    ClientConfig, MemoryStore, Navigator, PageContext, SessionStore, View, session,
};
use serde_json::{Value, json};
use shared::{ApiResponse, Employee, LoginRequest};

/// In-memory stand-in for the roster backend
#[derive(Default)]
pub struct Backend {
    pub employees: Mutex<Vec<Employee>>,
    pub hits: AtomicUsize,
    pub last_update: Mutex<Option<Value>>,
    pub last_add: Mutex<Option<Value>>,
    /// When set, `/employees` hangs instead of answering
    pub stall_list: AtomicBool,
}

impl Backend {
    pub fn with_employees(employees: Vec<Employee>) -> Arc<Self> {
        Arc::new(Self {
            employees: Mutex::new(employees),
            ..Default::default()
        })
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn stall_list(&self) {
        self.stall_list.store(true, Ordering::SeqCst);
    }

    fn hit(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }
}

type Reply = (StatusCode, Json<Value>);

fn reply<T: serde::Serialize>(status: StatusCode, body: ApiResponse<T>) -> Reply {
    (status, Json(serde_json::to_value(body).unwrap()))
}

async fn login(State(backend): State<Arc<Backend>>, Json(req): Json<LoginRequest>) -> Reply {
    backend.hit();
    let student_id = match (req.username.as_str(), req.password.as_str()) {
        ("admin", "123456") => 1,
        ("alice", "secret") => 1,
        ("bob", "secret") => 2,
        _ => {
            return reply(
                StatusCode::UNAUTHORIZED,
                ApiResponse::<()>::error(401, "用户名或密码错误"),
            );
        }
    };
    reply(
        StatusCode::OK,
        ApiResponse::ok_with_message(
            json!({ "username": req.username, "student_id": student_id }),
            "登录成功",
        ),
    )
}

async fn list(State(backend): State<Arc<Backend>>) -> Reply {
    backend.hit();
    if backend.stall_list.load(Ordering::SeqCst) {
        tokio::time::sleep(Duration::from_secs(30)).await;
    }
    let employees = backend.employees.lock().unwrap().clone();
    reply(StatusCode::OK, ApiResponse::ok_with_message(employees, "获取成功"))
}

async fn detail(State(backend): State<Arc<Backend>>, Path(id): Path<i64>) -> Reply {
    backend.hit();
    let found = backend
        .employees
        .lock()
        .unwrap()
        .iter()
        .find(|e| e.id == id)
        .cloned();
    match found {
        Some(emp) => reply(StatusCode::OK, ApiResponse::ok_with_message(emp, "获取成功")),
        None => reply(StatusCode::NOT_FOUND, ApiResponse::<()>::error(404, "员工不存在")),
    }
}

async fn add(State(backend): State<Arc<Backend>>, Json(body): Json<Value>) -> Reply {
    backend.hit();
    *backend.last_add.lock().unwrap() = Some(body.clone());

    if body["student_id"] != json!(1) {
        return reply(
            StatusCode::FORBIDDEN,
            ApiResponse::<()>::error(403, "权限不足，只有root用户才能添加员工"),
        );
    }
    let Some(age) = body["age"].as_i64() else {
        return reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiResponse::<()>::error(500, "添加失败：age may not be null"),
        );
    };

    let mut employees = backend.employees.lock().unwrap();
    let id = employees.iter().map(|e| e.id).max().unwrap_or(0) + 1;
    let text = |key: &str| body[key].as_str().unwrap_or_default().to_string();
    employees.push(Employee {
        id,
        name: text("name"),
        gender: text("gender"),
        age,
        department: text("department"),
        position: text("position"),
        phone: text("phone"),
        email: Some(text("email")),
        hire_date: text("hire_date"),
    });
    reply(StatusCode::OK, ApiResponse::ok_with_message(json!({ "id": id }), "added"))
}

async fn update(State(backend): State<Arc<Backend>>, Json(body): Json<Value>) -> Reply {
    backend.hit();
    *backend.last_update.lock().unwrap() = Some(body.clone());

    let mut employees = backend.employees.lock().unwrap();
    let id = body["id"].as_i64();
    let Some(emp) = employees.iter_mut().find(|e| Some(e.id) == id) else {
        return reply(StatusCode::NOT_FOUND, ApiResponse::<()>::error(404, "员工不存在"));
    };

    if let Some(name) = body["name"].as_str() {
        emp.name = name.to_string();
    }
    if let Some(age) = body["age"].as_i64() {
        emp.age = age;
    }
    if let Some(phone) = body["phone"].as_str() {
        emp.phone = phone.to_string();
    }
    let id = emp.id;
    reply(
        StatusCode::OK,
        ApiResponse::ok_with_message(json!({ "id": id }), "员工信息修改成功"),
    )
}

pub fn router(backend: Arc<Backend>) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/employees", get(list))
        .route("/employee/{id}", get(detail))
        .route("/employee/add", post(add))
        .route("/update", post(update))
        .with_state(backend)
}

/// Serve `router` on an ephemeral port; returns its base URL
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub async fn spawn_backend(backend: Arc<Backend>) -> String {
    serve(router(backend)).await
}

/// Base URL nothing is listening on
pub async fn refused_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Navigate(View),
    Alert(String),
}

/// Navigator that remembers every call
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavEvent>>,
}

impl RecordingNavigator {
    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn navigations(&self) -> Vec<View> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                NavEvent::Navigate(view) => Some(view),
                NavEvent::Alert(_) => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                NavEvent::Alert(text) => Some(text),
                NavEvent::Navigate(_) => None,
            })
            .collect()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, view: View) {
        self.events.lock().unwrap().push(NavEvent::Navigate(view));
    }

    fn alert(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(NavEvent::Alert(message.to_string()));
    }
}

/// Short delay so tests can await the scheduled navigation
pub const TEST_REDIRECT_DELAY_MS: u64 = 200;

pub struct Harness {
    pub ctx: PageContext,
    pub store: Arc<MemoryStore>,
    pub navigator: Arc<RecordingNavigator>,
}

pub fn harness(base_url: &str, store: MemoryStore) -> Harness {
    let store = Arc::new(store);
    let navigator = Arc::new(RecordingNavigator::default());
    let config = ClientConfig::new(base_url).with_redirect_delay_ms(TEST_REDIRECT_DELAY_MS);
    let ctx = PageContext::connect(
        config,
        store.clone() as Arc<dyn SessionStore>,
        navigator.clone() as Arc<dyn Navigator>,
    )
    .unwrap();
    Harness {
        ctx,
        store,
        navigator,
    }
}

pub fn logged_in(username: &str, student_id: &str) -> MemoryStore {
    MemoryStore::with_entries([
        (session::USERNAME_KEY, username),
        (session::STUDENT_ID_KEY, student_id),
    ])
}

pub fn employee(id: i64, name: &str, email: Option<&str>) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        gender: "男".to_string(),
        age: 30,
        department: "研发部".to_string(),
        position: "工程师".to_string(),
        phone: "13800000000".to_string(),
        email: email.map(str::to_string),
        hire_date: "2023-07-01".to_string(),
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
