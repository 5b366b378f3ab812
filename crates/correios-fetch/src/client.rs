//! HTTP client for the price and deadline calculator.

use correios_types::{ConfigurationError, CorreiosError, QuoteRequest, QuoteResult};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{Credentials, RequestPayload, build_request, parse_fare_response};

/// The carrier's calculator endpoint.
pub const DEFAULT_ENDPOINT: &str =
    "http://ws.correios.com.br/calculador/CalcPrecoPrazo.asmx/CalcPrecoPrazo";

/// Configuration for the fare client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Calculator URL.
    pub endpoint: String,
    /// Total request timeout.
    pub timeout: Duration,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// User agent string.
    pub user_agent: String,
    /// Contract credentials; retail quotes when `None`.
    pub credentials: Option<Credentials>,
    /// Run [`QuoteRequest::validate`] before sending.
    pub validate_requests: bool,
    /// Reject requests with no services instead of letting the carrier decide.
    pub require_services: bool,
    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("correios/{}", env!("CARGO_PKG_VERSION")),
            credentials: None,
            validate_requests: false,
            require_services: false,
            use_system_proxy: true,
        }
    }
}

/// Errors that can occur while talking to the calculator.
#[derive(Error, Debug)]
pub enum RemoteServiceError {
    /// HTTP request failed (connection, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server error: {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
}

/// Client for the carrier's price and deadline calculator.
///
/// Each [`get_fare`](Self::get_fare) call performs exactly one HTTP request.
/// Nothing is retried or cached; wrap the call if you need either.
#[derive(Debug, Clone)]
pub struct FareClient {
    client: Client,
    config: ClientConfig,
}

impl FareClient {
    /// Creates a new fare client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent)
            .gzip(true);
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Builds the payload that [`get_fare`](Self::get_fare) would send.
    ///
    /// Applies the configured validation and credentials.
    ///
    /// # Errors
    ///
    /// Returns an error if validation is enabled and the request fails it.
    pub fn prepare(&self, request: &QuoteRequest) -> Result<RequestPayload, ConfigurationError> {
        if self.config.validate_requests {
            request.validate()?;
        }
        if self.config.require_services && request.services.is_empty() {
            return Err(ConfigurationError::EmptyServiceList);
        }

        let payload = build_request(request);
        Ok(match &self.config.credentials {
            Some(credentials) => payload.with_credentials(credentials),
            None => payload,
        })
    }

    /// Quotes every requested service for the current request state.
    ///
    /// Services the carrier cannot quote are returned with a nonzero
    /// [`QuoteResult::error_code`]; only transport and document-level
    /// failures abort the call.
    ///
    /// # Errors
    ///
    /// Returns an error if local validation fails, the request does not
    /// complete successfully, or the response is not a calculator document.
    pub async fn get_fare(&self, request: &QuoteRequest) -> Result<Vec<QuoteResult>, CorreiosError> {
        let payload = self.prepare(request)?;

        debug!(
            services = %payload.services,
            origin = %payload.origin,
            destination = %payload.destination,
            "requesting fare"
        );

        let body = self
            .post(&payload)
            .await
            .map_err(|e| CorreiosError::RemoteService(e.to_string()))?;

        let quotes =
            parse_fare_response(&body).map_err(|e| CorreiosError::ResponseParse(e.to_string()))?;

        for quote in quotes.iter().filter(|quote| !quote.is_ok()) {
            warn!(
                service = %quote.service,
                code = quote.error_code,
                message = %quote.error_message,
                "carrier could not quote service"
            );
        }
        debug!(count = quotes.len(), "fare received");

        Ok(quotes)
    }

    /// Posts a payload and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the status is not 2xx.
    pub async fn post(&self, payload: &RequestPayload) -> Result<String, RemoteServiceError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .form(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), endpoint = %self.config.endpoint, "calculator returned an error status");
            return Err(RemoteServiceError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "calculator responded");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use correios_types::{Dimensions, Extras, ServiceCode};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    const MIXED_RESPONSE: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
        <cResultado xmlns=\"http://tempuri.org/\"><Servicos>\
        <cServico><Codigo>40010</Codigo><Valor>26,50</Valor><PrazoEntrega>1</PrazoEntrega>\
        <ValorMaoPropria>7,00</ValorMaoPropria><ValorAvisoRecebimento>0,00</ValorAvisoRecebimento>\
        <ValorValorDeclarado>0,00</ValorValorDeclarado><EntregaDomiciliar>S</EntregaDomiciliar>\
        <EntregaSabado>S</EntregaSabado><Erro>0</Erro><MsgErro></MsgErro></cServico>\
        <cServico><Codigo>41106</Codigo><Valor>0,00</Valor><PrazoEntrega>0</PrazoEntrega>\
        <ValorMaoPropria>0,00</ValorMaoPropria><ValorAvisoRecebimento>0,00</ValorAvisoRecebimento>\
        <ValorValorDeclarado>0,00</ValorValorDeclarado><EntregaDomiciliar></EntregaDomiciliar>\
        <EntregaSabado></EntregaSabado><Erro>-3</Erro><MsgErro>CEP de destino invalido.</MsgErro></cServico>\
        </Servicos></cResultado>";

    /// Serves one canned HTTP response and hands back the raw request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: text/xml; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (format!("http://{addr}/calculador/CalcPrecoPrazo"), handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|value| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn test_client(endpoint: String) -> FareClient {
        FareClient::new(ClientConfig {
            endpoint,
            timeout: Duration::from_secs(5),
            use_system_proxy: false,
            ..Default::default()
        })
        .unwrap()
    }

    fn sample_request() -> QuoteRequest {
        QuoteRequest::new()
            .with_route("01001000", "99999999")
            .with_dimensions(Dimensions::new(1.5, 20.0, 10.0, 15.0))
            .with_extras(Extras {
                receipt_warning: false,
                own_hand: true,
            })
            .with_services([ServiceCode::SedexRetail, ServiceCode::PacRetail])
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.credentials.is_none());
        assert!(!config.validate_requests);
        assert!(!config.require_services);
        assert!(config.user_agent.starts_with("correios/"));
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = FareClient::with_defaults();
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_get_fare_mixed_results() {
        let (endpoint, server) = serve_once("200 OK", MIXED_RESPONSE).await;
        let client = test_client(endpoint);

        let quotes = client.get_fare(&sample_request()).await.unwrap();
        assert_eq!(quotes.len(), 2);
        assert!(quotes[0].is_ok());
        assert_eq!(quotes[0].service, ServiceCode::SedexRetail);
        assert_eq!(quotes[1].error_code, -3);
        assert_eq!(quotes[1].home_delivery, "");
        assert!(!quotes[1].saturday_delivery);

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /calculador/CalcPrecoPrazo"));
        assert!(request.contains("nCdServico=40010%2C41106"));
        assert!(request.contains("sCepOrigem=01001000"));
        assert!(request.contains("nVlPeso=1.5"));
        assert!(request.contains("nCdFormato=1"));
        assert!(request.contains("sCdMaoPropria=S"));
        assert!(request.contains("sCdAvisoRecebimento=N"));
        assert!(request.contains("nCdEmpresa=&"));
    }

    #[tokio::test]
    async fn test_get_fare_sends_credentials() {
        let (endpoint, server) = serve_once("200 OK", MIXED_RESPONSE).await;
        let client = FareClient::new(ClientConfig {
            endpoint,
            credentials: Some(Credentials::new("08082650", "564321")),
            use_system_proxy: false,
            ..Default::default()
        })
        .unwrap();

        client.get_fare(&sample_request()).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.contains("nCdEmpresa=08082650"));
        assert!(request.contains("sDsSenha=564321"));
    }

    #[tokio::test]
    async fn test_get_fare_empty_services_still_sends() {
        let (endpoint, server) = serve_once("200 OK", MIXED_RESPONSE).await;
        let client = test_client(endpoint);

        let request = sample_request().with_services([]);
        assert!(client.get_fare(&request).await.is_ok());

        let raw = server.await.unwrap();
        assert!(raw.contains("nCdServico=&"));
    }

    #[tokio::test]
    async fn test_get_fare_error_page() {
        let (endpoint, _server) =
            serve_once("200 OK", "<html><body>Servico indisponivel</body></html>").await;
        let client = test_client(endpoint);

        let result = client.get_fare(&sample_request()).await;
        assert!(matches!(result, Err(CorreiosError::ResponseParse(_))));
    }

    #[tokio::test]
    async fn test_get_fare_server_error() {
        let (endpoint, _server) = serve_once("500 Internal Server Error", "").await;
        let client = test_client(endpoint);

        let result = client.get_fare(&sample_request()).await;
        assert!(matches!(result, Err(CorreiosError::RemoteService(_))));
    }

    #[tokio::test]
    async fn test_get_fare_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = test_client(format!("http://{addr}/"));
        let result = client.get_fare(&sample_request()).await;
        assert!(matches!(result, Err(CorreiosError::RemoteService(_))));
    }

    #[tokio::test]
    async fn test_post_status_error() {
        let (endpoint, _server) = serve_once("503 Service Unavailable", "").await;
        let client = test_client(endpoint);

        let payload = build_request(&sample_request());
        let result = client.post(&payload).await;
        assert!(matches!(
            result,
            Err(RemoteServiceError::Status { status: 503 })
        ));
    }

    #[test]
    fn test_prepare_validation_is_opt_in() {
        let invalid = sample_request().with_route("123", "456");

        let lenient = FareClient::with_defaults().unwrap();
        assert!(lenient.prepare(&invalid).is_ok());

        let strict = FareClient::new(ClientConfig {
            validate_requests: true,
            ..Default::default()
        })
        .unwrap();
        assert!(matches!(
            strict.prepare(&invalid),
            Err(ConfigurationError::InvalidPostalCode { field: "origin", .. })
        ));
    }

    #[test]
    fn test_prepare_require_services() {
        let client = FareClient::new(ClientConfig {
            require_services: true,
            ..Default::default()
        })
        .unwrap();

        let empty = sample_request().with_services([]);
        assert_eq!(
            client.prepare(&empty),
            Err(ConfigurationError::EmptyServiceList)
        );
        assert!(client.prepare(&sample_request()).is_ok());
    }
}
