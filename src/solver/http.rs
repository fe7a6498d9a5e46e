use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use url::Url;

use super::{
    Error, HistoryEntry, SolverClient, StatusError, SuggestionRequest, SuggestionResponse,
    SUGGESTIONS_PATH,
};
use crate::config::SolverConfig;

type Result<T, E = Error> = std::result::Result<T, E>;

/// [`SolverClient`] speaking json over http.
#[derive(Debug, Clone)]
pub struct HttpSolver {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpSolver {
    pub fn new(base: &Url) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), base)
    }

    /// Any path on `base` is kept as a prefix of the endpoint.
    pub fn with_client(client: reqwest::Client, base: &Url) -> Result<Self> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        Ok(Self {
            client,
            endpoint: base.join(SUGGESTIONS_PATH)?,
        })
    }

    pub fn from_config(config: &SolverConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(Error::Client)?;

        Self::with_client(client, &config.url)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SolverClient for HttpSolver {
    #[tracing::instrument(skip_all, fields(rows = history.len()))]
    async fn suggestions(&self, history: Vec<HistoryEntry>) -> Result<Vec<String>> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&SuggestionRequest { history })
            .send()
            .await
            .map_err(Error::Connect)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StatusError { status, body }.into());
        }

        let SuggestionResponse { suggestions } = response.json().await.map_err(Error::Decode)?;
        debug!(count = suggestions.len(), "suggestions received");

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use pretty_assertions::assert_eq;
    use tokio::net::TcpListener;
    use url::Url;

    use super::HttpSolver;
    use crate::solver::{Error, HistoryEntry, SolverClient, SuggestionRequest, SuggestionResponse};

    type Received = Arc<Mutex<Vec<SuggestionRequest>>>;

    async fn spawn_solver(app: Router) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Url::parse(&format!("http://{addr}")).expect("valid url")
    }

    fn local_solver(base: &Url) -> HttpSolver {
        let client = reqwest::Client::builder()
            .no_proxy()
            .build()
            .expect("client builds");
        HttpSolver::with_client(client, base).expect("valid url")
    }

    async fn handle_suggestions(
        State(received): State<Received>,
        Json(request): Json<SuggestionRequest>,
    ) -> Json<SuggestionResponse> {
        let suggestions = if request.history.is_empty() {
            vec!["SLATE".to_owned(), "CRANE".to_owned()]
        } else {
            vec!["MOUSY".to_owned()]
        };
        received.lock().expect("lock").push(request);

        Json(SuggestionResponse { suggestions })
    }

    fn entry(guess: &str, feedback: &str) -> HistoryEntry {
        HistoryEntry {
            guess: guess.to_owned(),
            feedback: feedback.to_owned(),
        }
    }

    #[tokio::test]
    async fn posts_history_and_reads_ranked_words() {
        let received = Received::default();
        let app = Router::new()
            .route("/api/suggestions", post(handle_suggestions))
            .with_state(received.clone());
        let solver = local_solver(&spawn_solver(app).await);

        let opening = solver.suggestions(Vec::new()).await.expect("solver is up");
        assert_eq!(opening, vec!["SLATE".to_owned(), "CRANE".to_owned()]);

        let history = vec![entry("CRANE", "bbgby")];
        let next = solver.suggestions(history.clone()).await.expect("solver is up");
        assert_eq!(next, vec!["MOUSY".to_owned()]);

        let received = received.lock().expect("lock").clone();
        assert_eq!(
            received,
            vec![
                SuggestionRequest {
                    history: Vec::new()
                },
                SuggestionRequest { history }
            ]
        );
    }

    #[tokio::test]
    async fn error_status_carries_body() {
        let app = Router::new().route(
            "/api/suggestions",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "no candidates left") }),
        );
        let solver = local_solver(&spawn_solver(app).await);

        let err = solver
            .suggestions(vec![entry("CRANE", "ggggg")])
            .await
            .expect_err("server fails");

        match err {
            Error::Status(status) => {
                assert_eq!(status.status.as_u16(), 500);
                assert_eq!(status.body, "no candidates left");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn garbage_body_is_a_decode_error() {
        let app = Router::new().route("/api/suggestions", post(|| async { "not json" }));
        let solver = local_solver(&spawn_solver(app).await);

        let err = solver.suggestions(Vec::new()).await.expect_err("bad body");
        assert!(matches!(err, Error::Decode(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn unreachable_solver_is_a_connect_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let base = Url::parse(&format!("http://{addr}")).expect("valid url");
        let solver = local_solver(&base);

        let err = solver.suggestions(Vec::new()).await.expect_err("nobody listening");
        assert!(matches!(err, Error::Connect(_)), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn base_path_prefixes_the_endpoint() {
        let received = Received::default();
        let app = Router::new()
            .route("/solver/api/suggestions", post(handle_suggestions))
            .with_state(received.clone());
        let mut base = spawn_solver(app).await;
        base.set_path("/solver");

        let words = local_solver(&base)
            .suggestions(Vec::new())
            .await
            .expect("served under the prefix");

        assert_eq!(words, vec!["SLATE".to_owned(), "CRANE".to_owned()]);
        assert_eq!(received.lock().expect("lock").len(), 1);
    }

    macro_rules! endpoint {
        ($($name:ident: $base:expr => $expected:expr;)+) => {
            paste::paste! {
                $(
                    #[test]
                    fn [<endpoint_ $name>]() {
                        let base = Url::parse($base).expect("hard-coded");
                        let solver = HttpSolver::new(&base).expect("valid url");

                        assert_eq!(solver.endpoint().as_str(), $expected);
                    }
                )+
            }
        };
    }

    endpoint! {
        bare_host: "http://localhost:8000" => "http://localhost:8000/api/suggestions";
        prefix: "http://localhost:8000/solver" => "http://localhost:8000/solver/api/suggestions";
        prefix_with_slash: "http://localhost:8000/solver/" => "http://localhost:8000/solver/api/suggestions";
        nested_prefix: "https://example.com/a/b" => "https://example.com/a/b/api/suggestions";
    }
}
