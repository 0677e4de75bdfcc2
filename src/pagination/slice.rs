//! `Slice`: a lazy, bounded view over a `PaginatedList`.

use futures_util::{Stream, TryStreamExt};

use crate::domain::Resource;
use crate::error::SdkError;
use crate::pagination::list::PaginatedList;

/// Indices `start, start + step, ...` below `stop` of the underlying list.
///
/// Holds a reference to the owning list rather than a copy of its state, so
/// fetches triggered through a slice fill the list's cache.
pub struct Slice<'a, T> {
    list: &'a PaginatedList<T>,
    start: usize,
    stop: Option<usize>,
    step: usize,
}

impl<'a, T: Resource> Slice<'a, T> {
    pub(crate) fn new(
        list: &'a PaginatedList<T>,
        start: usize,
        stop: Option<usize>,
        step: usize,
    ) -> Self {
        Self {
            list,
            start,
            stop,
            step,
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn stop(&self) -> Option<usize> {
        self.stop
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// Items of the slice, fetching pages as needed.
    ///
    /// Ends quietly when the collection turns out shorter than `stop`, so
    /// `range(0..1000)` over a 12-item list yields 12 items.
    pub fn iter(&self) -> impl Stream<Item = Result<T, SdkError>> + 'a {
        let list = self.list;
        let (start, stop, step) = (self.start, self.stop, self.step);

        async_stream::try_stream! {
            let mut index = start;
            while stop.map_or(true, |stop| index < stop) {
                if !list.is_larger_than(index).await {
                    break;
                }
                match list.get(index).await {
                    Ok(item) => {
                        yield item;
                    }
                    Err(SdkError::IndexOutOfRange(_)) => break,
                    Err(e) => {
                        Err::<(), SdkError>(e)?;
                    }
                }
                match index.checked_add(step) {
                    Some(next) => index = next,
                    None => break,
                }
            }
        }
    }

    pub async fn collect_all(&self) -> Result<Vec<T>, SdkError> {
        self.iter().try_collect().await
    }
}
