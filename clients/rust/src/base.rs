use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

pub(crate) struct BaseClient {
    address: String,
    principal: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum APIError {
    Network,
    MalformedResponse,
    /// Unexpected status code; `message` carries the server's
    /// `{"error": ...}` payload when one was sent.
    Api {
        status: u16,
        message: String,
    },
}

impl APIError {
    /// User-displayable message for the error slot of a cache.
    pub fn message(&self) -> String {
        match self {
            APIError::Network => "Network error".into(),
            APIError::MalformedResponse => "Malformed response from server".into(),
            APIError::Api { message, .. } => message.clone(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            APIError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type APIResponse<T> = Result<T, APIError>;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address,
            principal: None,
        }
    }

    pub fn set_principal(&mut self, principal: String) {
        self.principal = Some(principal);
    }

    fn get_client(&self, method: Method, path: String) -> RequestBuilder {
        let client = Client::new();
        let url = format!("{}/api/{}", self.address, path);
        let builder = match method {
            Method::GET => client.get(&url),
            Method::POST => client.post(&url),
            Method::PUT => client.put(&url),
            Method::DELETE => client.delete(&url),
            _ => unimplemented!(),
        };

        if let Some(principal) = &self.principal {
            builder.header("x-agenda-principal", principal.clone())
        } else {
            builder
        }
    }

    async fn handle_api_response<T: for<'de> Deserialize<'de>>(
        &self,
        res: Response,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let status = res.status();
        if status != expected_status_code {
            let message = match res.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("Unexpected response status: {}", status),
            };
            return Err(APIError::Api {
                status: status.as_u16(),
                message,
            });
        }
        res.json::<T>()
            .await
            .map_err(|_| APIError::MalformedResponse)
    }

    pub async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = match self.get_client(Method::GET, path).send().await {
            Ok(res) => res,
            Err(_) => return Err(APIError::Network),
        };
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn delete<T: for<'de> Deserialize<'de>>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = match self.get_client(Method::DELETE, path).send().await {
            Ok(res) => res,
            Err(_) => return Err(APIError::Network),
        };
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn put<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = match self.get_client(Method::PUT, path).json(&body).send().await {
            Ok(res) => res,
            Err(_) => return Err(APIError::Network),
        };
        self.handle_api_response(res, expected_status_code).await
    }

    pub async fn post<T: for<'de> Deserialize<'de>, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = match self.get_client(Method::POST, path).json(&body).send().await {
            Ok(res) => res,
            Err(_) => return Err(APIError::Network),
        };
        self.handle_api_response(res, expected_status_code).await
    }
}
