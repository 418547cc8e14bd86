// roster-client/src/http.rs
// HTTP 客户端 - 网络通信

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use shared::response::CreatedId;
use shared::{ApiResponse, Employee, EmployeeUpdate, LoginData, LoginRequest, NewEmployee};

use crate::{ClientConfig, ClientError, ClientResult};

/// Longest body excerpt kept in an `InvalidResponse` error
const BODY_EXCERPT_LEN: usize = 200;

/// Fixed backend endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// POST /login
    Login,
    /// GET /employees
    Employees,
    /// GET /employee/{id}
    Employee(i64),
    /// POST /employee/add
    AddEmployee,
    /// POST /update
    Update,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Self::Employees | Self::Employee(_) => Method::GET,
            Self::Login | Self::AddEmployee | Self::Update => Method::POST,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::Employees => "/employees".to_string(),
            Self::Employee(id) => format!("/employee/{id}"),
            Self::AddEmployee => "/employee/add".to_string(),
            Self::Update => "/update".to_string(),
        }
    }
}

/// HTTP 客户端 trait
///
/// Every method yields the decoded envelope whatever the HTTP status; only
/// transport failures and undecodable bodies are errors.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;

    /// Dispatch on the endpoint's method. A GET ignores `body`.
    async fn request<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        endpoint: Endpoint,
        body: Option<&B>,
    ) -> ClientResult<ApiResponse<T>> {
        let path = endpoint.path();
        match (endpoint.method(), body) {
            (Method::GET, _) => self.get(&path).await,
            (_, Some(body)) => self.post(&path, body).await,
            (_, None) => self.post(&path, &serde_json::Value::Null).await,
        }
    }

    async fn login(&self, username: &str, password: &str) -> ClientResult<ApiResponse<LoginData>> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.request(Endpoint::Login, Some(&req)).await
    }

    async fn employees(&self) -> ClientResult<ApiResponse<Vec<Employee>>> {
        self.request::<_, ()>(Endpoint::Employees, None).await
    }

    async fn employee(&self, id: i64) -> ClientResult<ApiResponse<Employee>> {
        self.request::<_, ()>(Endpoint::Employee(id), None).await
    }

    async fn add_employee(&self, body: &NewEmployee) -> ClientResult<ApiResponse<CreatedId>> {
        self.request(Endpoint::AddEmployee, Some(body)).await
    }

    async fn update_employee(
        &self,
        body: &EmployeeUpdate,
    ) -> ClientResult<ApiResponse<IgnoredAny>> {
        self.request(Endpoint::Update, Some(body)).await
    }
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            tracing::debug!(status = %status, "Non-success HTTP status, decoding envelope anyway");
        }
        serde_json::from_str(&text).map_err(|e| {
            tracing::debug!(status = %status, error = %e, "Response body is not a valid envelope");
            ClientError::InvalidResponse {
                status: status.as_u16(),
                body: text.chars().take(BODY_EXCERPT_LEN).collect(),
            }
        })
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GET");
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(url = %url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_routes() {
        assert_eq!(Endpoint::Login.method(), Method::POST);
        assert_eq!(Endpoint::Employees.method(), Method::GET);
        assert_eq!(Endpoint::Employee(12).path(), "/employee/12");
        assert_eq!(Endpoint::AddEmployee.path(), "/employee/add");
        assert_eq!(Endpoint::Update.method(), Method::POST);
    }

    #[test]
    fn test_url_join() {
        let client = NetworkHttpClient::new(&ClientConfig::new("http://127.0.0.1:8000/")).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:8000");
        assert_eq!(client.url("/login"), "http://127.0.0.1:8000/login");
        assert_eq!(client.url("employees"), "http://127.0.0.1:8000/employees");
    }
}
