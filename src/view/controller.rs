//! Resource View Controller
//!
//! One generic state machine per remote resource shown on a screen:
//!
//! ```text
//!            set_param / reload
//!   Idle ───────────────────────▶ Loading ──ok──▶ Ready
//!                                  ▲   │
//!                                  │   └──err──▶ Error
//!                                  └─────────────┘ (new param / reload)
//! ```
//!
//! Every fetch is issued under a [`FetchTicket`]. A result is only committed
//! when its ticket is the one currently in flight and still targets the
//! current parameter; anything else is stale and dropped without touching
//! state.

use std::fmt;
use uuid::Uuid;

use super::pagination::{Page, PageSize, Pagination};
use super::sort::SortPolicy;
use crate::fetch::{Endpoint, ErrorKind, FetchError, FetchResult};

/// A remote resource the controller can load
pub trait ResourceKind: 'static {
    /// Identifying parameter (client name, VIN, or `()` for a fixed list)
    type Param: Clone + PartialEq + fmt::Debug + Send;
    /// Non-row data carried with the rows
    type Header: Clone + fmt::Debug;
    /// Row type shown in the paginated table
    type Row: Clone + fmt::Debug;

    /// Name used in logs
    const NAME: &'static str;

    /// Endpoint serving the resource for `param`
    fn endpoint(param: &Self::Param) -> Endpoint;

    /// Turn a response body into header and rows
    fn decode(body: serde_json::Value) -> FetchResult<(Self::Header, Vec<Self::Row>)>;

    /// Order applied to rows once per successful fetch
    fn sort_policy() -> SortPolicy<Self::Row>;
}

/// Controller lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Loading,
    Ready,
    Error,
}

/// Handle for one issued fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    id: Uuid,
    endpoint: Endpoint,
}

impl FetchTicket {
    fn new(endpoint: Endpoint) -> Self {
        Self {
            id: Uuid::new_v4(),
            endpoint,
        }
    }

    /// Request id, unique per issued fetch
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Endpoint captured when the fetch was issued
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

/// Outcome of handing a fetch result to a controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The result was committed
    Applied,
    /// The result belonged to a superseded fetch and was dropped
    Stale,
}

/// State machine for one remote resource
pub struct ResourceController<K: ResourceKind> {
    param: Option<K::Param>,
    status: Status,
    in_flight: Option<FetchTicket>,
    header: Option<K::Header>,
    rows: Vec<K::Row>,
    failure: Option<FetchError>,
    pagination: Pagination,
}

impl<K: ResourceKind> ResourceController<K> {
    /// Create an idle controller with the given rows per page
    pub fn new(page_size: PageSize) -> Self {
        Self {
            param: None,
            status: Status::Idle,
            in_flight: None,
            header: None,
            rows: Vec::new(),
            failure: None,
            pagination: Pagination::new(page_size),
        }
    }

    /// Provide or change the identifying parameter
    ///
    /// Starts a fetch unless `param` is already the current parameter of a
    /// controller that has left `Idle`.
    pub fn set_param(&mut self, param: K::Param) -> Option<FetchTicket> {
        if self.status != Status::Idle && self.param.as_ref() == Some(&param) {
            return None;
        }
        self.param = Some(param);
        self.begin()
    }

    /// Fetch the current parameter again
    pub fn reload(&mut self) -> Option<FetchTicket> {
        self.begin()
    }

    fn begin(&mut self) -> Option<FetchTicket> {
        let param = self.param.as_ref()?;
        let ticket = FetchTicket::new(K::endpoint(param));

        if let Some(previous) = &self.in_flight {
            tracing::debug!(
                resource = K::NAME,
                request_id = %previous.id,
                "superseding in-flight fetch"
            );
        }
        tracing::debug!(
            resource = K::NAME,
            request_id = %ticket.id,
            endpoint = %ticket.endpoint,
            "fetch started"
        );

        self.status = Status::Loading;
        self.header = None;
        self.rows.clear();
        self.failure = None;
        self.pagination.reset();
        self.in_flight = Some(ticket.clone());

        Some(ticket)
    }

    /// Whether `ticket` is the fetch this controller is waiting for
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        let in_flight = self.in_flight.as_ref().map(|t| t.id) == Some(ticket.id);
        let same_param = self
            .param
            .as_ref()
            .map(|p| K::endpoint(p) == ticket.endpoint)
            .unwrap_or(false);
        in_flight && same_param
    }

    /// Hand over a raw fetch result
    pub fn resolve(
        &mut self,
        ticket: &FetchTicket,
        result: FetchResult<serde_json::Value>,
    ) -> Resolution {
        if !self.is_current(ticket) {
            return self.discard(ticket);
        }
        self.commit(result.and_then(K::decode))
    }

    fn discard(&self, ticket: &FetchTicket) -> Resolution {
        tracing::debug!(
            resource = K::NAME,
            request_id = %ticket.id,
            endpoint = %ticket.endpoint,
            "discarding stale result"
        );
        Resolution::Stale
    }

    fn commit(&mut self, result: FetchResult<(K::Header, Vec<K::Row>)>) -> Resolution {
        let ticket = self.in_flight.take();
        let request_id = ticket.as_ref().map(|t| t.id.to_string()).unwrap_or_default();

        match result {
            Ok((header, rows)) => {
                self.rows = K::sort_policy().apply(rows);
                self.header = Some(header);
                self.failure = None;
                self.status = Status::Ready;
                self.pagination.reset();
                tracing::debug!(
                    resource = K::NAME,
                    request_id = %request_id,
                    rows = self.rows.len(),
                    "fetch applied"
                );
            }
            Err(err) => {
                tracing::warn!(
                    resource = K::NAME,
                    request_id = %request_id,
                    status = ?err.status(),
                    error = %err,
                    "fetch failed"
                );
                self.rows.clear();
                self.header = None;
                self.failure = Some(err);
                self.status = Status::Error;
            }
        }
        Resolution::Applied
    }

    /// Move to `page`; out-of-range requests are ignored
    pub fn on_page_change(&mut self, page: usize) -> bool {
        self.pagination.set_page(page, self.rows.len())
    }

    /// Change rows per page from an untrusted value; always returns to page 0
    pub fn on_page_size_change(&mut self, requested: usize) -> PageSize {
        self.pagination.request_page_size(requested)
    }

    /// Visible window over the sorted rows
    pub fn current_slice(&self) -> Page<'_, K::Row> {
        self.pagination.window(&self.rows)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    /// True once the controller has reached Ready or Error (or never started)
    pub fn is_settled(&self) -> bool {
        self.status != Status::Loading
    }

    pub fn param(&self) -> Option<&K::Param> {
        self.param.as_ref()
    }

    pub fn header(&self) -> Option<&K::Header> {
        self.header.as_ref()
    }

    /// All rows in sorted order
    pub fn rows(&self) -> &[K::Row] {
        &self.rows
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// User-displayable message while in `Error`
    pub fn error_message(&self) -> Option<String> {
        self.failure.as_ref().map(FetchError::user_message)
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.failure.as_ref().map(FetchError::kind)
    }
}

impl<K: ResourceKind> Default for ResourceController<K> {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl<K: ResourceKind> fmt::Debug for ResourceController<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceController")
            .field("resource", &K::NAME)
            .field("param", &self.param)
            .field("status", &self.status)
            .field("rows", &self.rows.len())
            .field("error", &self.error_message())
            .field("pagination", &self.pagination)
            .finish()
    }
}
