//! `PaginatedList`: a lazily fetched, server-paginated collection.

use std::fmt;
use std::ops::{Bound, RangeBounds};

use async_lock::Mutex;
use futures_util::{Stream, TryStreamExt};
use serde_json::{Map, Value};

use crate::domain::Resource;
use crate::error::SdkError;
use crate::http::{CanvasHttp, Method, RequestOptions, Target};
use crate::network::DEFAULT_PER_PAGE;
use crate::pagination::page::decode_page;
use crate::pagination::slice::Slice;
use crate::shared::Params;

/// Everything a list has learned from the server so far.
struct FetchState<T> {
    /// Append-only, in server order.
    elements: Vec<T>,
    /// Target of the next page; `None` once the server stops sending
    /// `rel="next"`, and never `Some` again after that.
    next: Option<Target>,
    /// Sent with the next request only. Emptied after the first page.
    params: Params,
}

/// A remote collection presented as a sequence.
///
/// Pages are fetched on demand through [`at`](Self::at),
/// [`slice`](Self::slice) and [`iter`](Self::iter). Every path goes through
/// the same locked fetch state, so there is at most one request in flight
/// per list no matter how many views are alive, and a page is never
/// fetched twice.
///
/// ```rust,ignore
/// let users = canvas.users().list(1, Params::new());
/// let third = users.at(2).await?;
/// let first_ten: Vec<_> = users.range(..10).iter().try_collect().await?;
/// ```
pub struct PaginatedList<T> {
    http: CanvasHttp,
    method: Method,
    first_target: Target,
    extra_attributes: Map<String, Value>,
    root: Option<String>,
    state: Mutex<FetchState<T>>,
}

impl<T: Resource> PaginatedList<T> {
    pub fn new(http: CanvasHttp, method: Method, target: impl Into<Target>) -> Self {
        let first_target = target.into();
        let mut params = Params::new();
        params.set_default("per_page", DEFAULT_PER_PAGE);
        Self {
            http,
            method,
            state: Mutex::new(FetchState {
                elements: Vec::new(),
                next: Some(first_target.clone()),
                params,
            }),
            first_target,
            extra_attributes: Map::new(),
            root: None,
        }
    }

    /// Query parameters for the first request. `per_page` defaults to 100.
    pub fn params(mut self, mut params: Params) -> Self {
        params.set_default("per_page", DEFAULT_PER_PAGE);
        self.state.get_mut().params = params;
        self
    }

    /// Attributes stamped onto every item before decoding, e.g. the parent
    /// id of a nested listing.
    pub fn extra_attributes(mut self, extra: Map<String, Value>) -> Self {
        self.extra_attributes = extra;
        self
    }

    pub fn extra_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_attributes.insert(key.into(), value.into());
        self
    }

    /// Key under which the endpoint nests its item array.
    pub fn root(mut self, key: impl Into<String>) -> Self {
        self.root = Some(key.into());
        self
    }

    // ── Random access ────────────────────────────────────────────────────

    /// Item at `index`, fetching pages up to it if needed.
    ///
    /// Negative indices are rejected before any request is made: counting
    /// from the end would mean loading the whole collection.
    pub async fn at(&self, index: isize) -> Result<T, SdkError> {
        let index = usize::try_from(index).map_err(|_| {
            SdkError::IndexOutOfRange("Cannot negative index a PaginatedList".to_string())
        })?;
        self.get(index).await
    }

    /// Item at `index`, fetching pages up to it if needed.
    pub async fn get(&self, index: usize) -> Result<T, SdkError> {
        let mut state = self.state.lock().await;
        self.load_through(&mut state, index).await?;
        state.elements.get(index).cloned().ok_or_else(|| {
            SdkError::IndexOutOfRange(format!(
                "index {} out of range for list of {} items",
                index,
                state.elements.len()
            ))
        })
    }

    /// Lazy view over `start..stop` stepping by `step`.
    ///
    /// `start` defaults to 0, `stop` to unbounded, `step` to 1. Negative
    /// bounds fail here, without touching the network.
    pub fn slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<usize>,
    ) -> Result<Slice<'_, T>, SdkError> {
        let negative =
            || SdkError::IndexOutOfRange("Cannot negative index a PaginatedList slice".to_string());
        let start = usize::try_from(start.unwrap_or(0)).map_err(|_| negative())?;
        let stop = stop
            .map(|s| usize::try_from(s).map_err(|_| negative()))
            .transpose()?;
        let step = step.unwrap_or(1);
        if step == 0 {
            return Err(SdkError::Validation("slice step cannot be zero".to_string()));
        }
        Ok(Slice::new(self, start, stop, step))
    }

    /// Lazy view over a Rust range, e.g. `list.range(2..4)`.
    pub fn range(&self, range: impl RangeBounds<usize>) -> Slice<'_, T> {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let stop = match range.end_bound() {
            Bound::Included(&e) => Some(e.saturating_add(1)),
            Bound::Excluded(&e) => Some(e),
            Bound::Unbounded => None,
        };
        Slice::new(self, start, stop, 1)
    }

    // ── Iteration ────────────────────────────────────────────────────────

    /// Every item, cached ones first, then fetching until the last page.
    ///
    /// Each call starts a fresh pass from index 0. Pages already loaded
    /// are replayed from the cache, never re-fetched.
    pub fn iter(&self) -> impl Stream<Item = Result<T, SdkError>> + '_ {
        async_stream::try_stream! {
            let mut index = 0usize;
            loop {
                let item = {
                    let mut state = self.state.lock().await;
                    if index >= state.elements.len() {
                        if state.next.is_none() {
                            break;
                        }
                        self.fetch_locked(&mut state).await?;
                        continue;
                    }
                    state.elements[index].clone()
                };
                index += 1;
                yield item;
            }
        }
    }

    /// Drain [`iter`](Self::iter) into a `Vec`.
    pub async fn collect_all(&self) -> Result<Vec<T>, SdkError> {
        self.iter().try_collect().await
    }

    // ── Fetch state machine ──────────────────────────────────────────────

    /// Fetch one more page. Returns the number of items it added; `0` once
    /// the last page has been loaded (no request is made then).
    pub async fn fetch_next_page(&self) -> Result<usize, SdkError> {
        let mut state = self.state.lock().await;
        self.fetch_locked(&mut state).await
    }

    /// Fetch pages until `index` is loaded or there are no pages left.
    pub async fn ensure_loaded_through(&self, index: usize) -> Result<(), SdkError> {
        let mut state = self.state.lock().await;
        self.load_through(&mut state, index).await
    }

    /// Whether `index` is loaded, or might be once more pages arrive.
    pub async fn is_larger_than(&self, index: usize) -> bool {
        let state = self.state.lock().await;
        state.elements.len() > index || state.next.is_some()
    }

    /// Number of items fetched so far.
    pub async fn loaded_len(&self) -> usize {
        self.state.lock().await.elements.len()
    }

    /// `false` once the last page has been loaded.
    pub async fn has_next(&self) -> bool {
        self.state.lock().await.next.is_some()
    }

    async fn load_through(
        &self,
        state: &mut FetchState<T>,
        index: usize,
    ) -> Result<(), SdkError> {
        while state.elements.len() <= index && state.next.is_some() {
            self.fetch_locked(state).await?;
        }
        Ok(())
    }

    /// The only place `FetchState` changes. Nothing is touched until the
    /// whole page has decoded, so a failed or cancelled fetch can simply be
    /// tried again.
    async fn fetch_locked(&self, state: &mut FetchState<T>) -> Result<usize, SdkError> {
        let Some(target) = state.next.clone() else {
            return Ok(0);
        };

        let options = RequestOptions::new().params(state.params.clone());
        let response = self.http.send(self.method, target, options).await?;
        let next = response.next_link().map(Target::Url);
        let body: Value = response.json().await?;
        let items = decode_page::<T>(body, self.root.as_deref(), &self.extra_attributes)?;

        let added = items.len();
        state.elements.extend(items);
        state.next = next;
        state.params = Params::new();

        tracing::debug!(
            added,
            loaded = state.elements.len(),
            has_next = state.next.is_some(),
            "Fetched page"
        );
        Ok(added)
    }
}

impl<T> fmt::Debug for PaginatedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = std::any::type_name::<T>();
        let short = type_name.rsplit("::").next().unwrap_or(type_name);
        write!(f, "PaginatedList<{}>({:?})", short, self.first_target)
    }
}
