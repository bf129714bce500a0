//! Remote option loading.
//!
//! Options can be fetched from an HTTP endpoint returning a JSON array of
//! the same shapes the static path accepts (bare labels or `{title, value}`
//! records). Fetched entries are normalized identically to the static path;
//! filtering and navigation never care where the working set came from.
//!
//! Overlapping loads are ordered by a monotonically increasing sequence
//! number: only the most recently issued load may deliver its outcome, and a
//! completion that has been overtaken is dropped. A failed load leaves the
//! caller's options untouched; there is no retry policy - callers re-trigger.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use alege_core::Signal;
use thiserror::Error;
use url::Url;

use crate::combobox::ComboBox;
use crate::option::{RawOption, SelectOption};

/// Errors that can occur while loading options remotely.
#[derive(Error, Debug, Clone)]
pub enum RemoteError {
    /// The URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request failed before producing a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP {status}")]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
    },

    /// The response body was not a JSON option array.
    #[error("invalid options payload: {0}")]
    Json(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}

/// Result type for remote option loading.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Fetch an option array from `url` and normalize it.
///
/// Any non-2xx status or parse failure is an error - "no options available".
/// Malformed entries inside an otherwise valid array degrade (or are
/// dropped) instead of failing the batch.
pub async fn fetch_options(
    client: &reqwest::Client,
    url: &str,
) -> RemoteResult<Vec<SelectOption>> {
    let url = Url::parse(url).map_err(|e| RemoteError::InvalidUrl(e.to_string()))?;
    fetch(client, url).await
}

/// Fetch an option array for a search term, sent as the `q` query parameter.
pub async fn search_options(
    client: &reqwest::Client,
    url: &str,
    query: &str,
) -> RemoteResult<Vec<SelectOption>> {
    let mut url = Url::parse(url).map_err(|e| RemoteError::InvalidUrl(e.to_string()))?;
    url.query_pairs_mut().append_pair("q", query);
    fetch(client, url).await
}

async fn fetch(client: &reqwest::Client, url: Url) -> RemoteResult<Vec<SelectOption>> {
    tracing::debug!(target: "alege::remote", url = %url, "fetching options");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(RemoteError::HttpStatus {
            status: status.as_u16(),
        });
    }
    let raw: Vec<RawOption> = response
        .json()
        .await
        .map_err(|e| RemoteError::Json(e.to_string()))?;
    Ok(SelectOption::from_raw_all(raw))
}

/// Outcome of one sequenced load.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    /// The load succeeded; the normalized options are ready to install.
    Loaded {
        /// The load's sequence number.
        seq: u64,
        /// The normalized option set.
        options: Vec<SelectOption>,
    },
    /// The load failed; the caller's options should stay as they are.
    Failed {
        /// The load's sequence number.
        seq: u64,
        /// Human-readable failure description.
        message: String,
    },
}

impl LoadOutcome {
    /// The sequence number of the load this outcome belongs to.
    pub fn seq(&self) -> u64 {
        match self {
            Self::Loaded { seq, .. } => *seq,
            Self::Failed { seq, .. } => *seq,
        }
    }
}

/// A signal-based option loader with stale-response rejection.
///
/// Each call to [`load`](Self::load) or [`search`](Self::search) gets a
/// sequence number and runs on the shared tokio runtime. When a load
/// completes, its outcome is emitted through [`finished`](Self::finished) -
/// unless a newer load has been issued in the meantime, in which case the
/// overtaken outcome is dropped. The latest issued load always wins,
/// deterministically, regardless of response arrival order.
///
/// # Example
///
/// ```ignore
/// use alege::remote::{LoadOutcome, OptionLoader};
///
/// let loader = OptionLoader::new();
/// loader.finished().connect(|outcome| match outcome {
///     LoadOutcome::Loaded { options, .. } => {
///         println!("loaded {} options", options.len());
///     }
///     LoadOutcome::Failed { message, .. } => {
///         println!("load failed: {}", message);
///     }
/// });
///
/// loader.load("https://example.com/api/ngos");
/// ```
pub struct OptionLoader {
    client: reqwest::Client,
    /// Sequence number of the most recently issued load.
    latest: Arc<AtomicU64>,
    finished: Arc<Signal<LoadOutcome>>,
}

impl Default for OptionLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionLoader {
    /// Create a loader with a default HTTP client.
    pub fn new() -> Self {
        Self::from_client(reqwest::Client::new())
    }

    /// Create a loader from a preconfigured HTTP client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self {
            client,
            latest: Arc::new(AtomicU64::new(0)),
            finished: Arc::new(Signal::new()),
        }
    }

    /// Signal emitted when a still-current load completes.
    ///
    /// Slots run on the runtime worker thread that finished the request.
    pub fn finished(&self) -> &Signal<LoadOutcome> {
        &self.finished
    }

    /// Start a sequenced load of `url`. Returns the load's sequence number.
    pub fn load(&self, url: impl Into<String>) -> u64 {
        let url = url.into();
        self.spawn(move |client| async move { fetch_options(&client, &url).await })
    }

    /// Start a sequenced search of `url` with the `q` parameter set.
    pub fn search(&self, url: impl Into<String>, query: impl Into<String>) -> u64 {
        let url = url.into();
        let query = query.into();
        self.spawn(move |client| async move { search_options(&client, &url, &query).await })
    }

    fn spawn<F, Fut>(&self, request: F) -> u64
    where
        F: FnOnce(reqwest::Client) -> Fut + Send + 'static,
        Fut: Future<Output = RemoteResult<Vec<SelectOption>>> + Send + 'static,
    {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let client = self.client.clone();
        let latest = Arc::clone(&self.latest);
        let finished = Arc::clone(&self.finished);

        runtime::spawn(async move {
            let result = request(client).await;
            if latest.load(Ordering::SeqCst) != seq {
                tracing::debug!(target: "alege::remote", seq, "dropping stale load outcome");
                return;
            }
            let outcome = match result {
                Ok(options) => {
                    tracing::debug!(
                        target: "alege::remote",
                        seq,
                        count = options.len(),
                        "options loaded"
                    );
                    LoadOutcome::Loaded { seq, options }
                }
                Err(err) => {
                    tracing::warn!(target: "alege::remote", seq, error = %err, "option load failed");
                    LoadOutcome::Failed {
                        seq,
                        message: err.to_string(),
                    }
                }
            };
            finished.emit(outcome);
        });

        seq
    }
}

impl std::fmt::Debug for OptionLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionLoader")
            .field("latest_seq", &self.latest.load(Ordering::SeqCst))
            .finish()
    }
}

impl ComboBox {
    /// Install a load outcome into the widget.
    ///
    /// A successful load replaces the working set wholesale; a failed load
    /// leaves the previous options untouched.
    pub fn apply_load(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::Loaded { options, .. } => self.replace_normalized(options),
            LoadOutcome::Failed { seq, message } => {
                tracing::warn!(
                    target: "alege::combobox",
                    seq,
                    error = %message,
                    "keeping previous options after failed load"
                );
            }
        }
    }
}

/// Runtime management for remote loads.
///
/// The loader shares one small multi-thread tokio runtime, created lazily on
/// first use.
pub mod runtime {
    use std::sync::OnceLock;
    use tokio::runtime::Runtime;

    static RUNTIME: OnceLock<Runtime> = OnceLock::new();

    /// Initialize the shared runtime.
    ///
    /// If not called explicitly, a runtime is created on first use.
    pub fn init() -> &'static Runtime {
        RUNTIME.get_or_init(|| {
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime")
        })
    }

    /// Get a reference to the shared runtime.
    pub fn get() -> &'static Runtime {
        init()
    }

    /// Block on a future using the shared runtime.
    ///
    /// # Warning
    ///
    /// Do not call this from within an async context, as it will block the
    /// current thread.
    pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
        get().block_on(future)
    }

    /// Spawn a future on the shared runtime.
    pub fn spawn<F>(future: F) -> tokio::task::JoinHandle<F::Output>
    where
        F: std::future::Future + Send + 'static,
        F::Output: Send + 'static,
    {
        get().spawn(future)
    }
}
