//! In-process stand-in for a remote API.
//!
//! Every fetch runs on a tokio task that sleeps before answering over an
//! unbounded channel, so screens exercise the same loading and stale-response
//! paths a network source would.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

use lazygrid::grid::PageRequest;

use super::Record;

/// Rows answering one fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub page_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response<T> {
    /// `None` for a full fetch.
    pub request: Option<PageRequest>,
    /// Search query the page was filtered by, empty for a full fetch.
    pub query: String,
    pub result: Result<Page<T>, String>,
}

pub struct MockSource<T> {
    records: Arc<Vec<T>>,
    delay: Duration,
    fail_next: bool,
    tx: UnboundedSender<Response<T>>,
    rx: UnboundedReceiver<Response<T>>,
}

impl<T: Record> MockSource<T> {
    pub fn new(records: Vec<T>, delay: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            records: Arc::new(records),
            delay,
            fail_next: false,
            tx,
            rx,
        }
    }

    /// Make the next fetch answer with an error.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    pub fn fetch_all(&mut self) {
        let fail = std::mem::take(&mut self.fail_next);
        let records = Arc::clone(&self.records);
        self.spawn(None, String::new(), move || {
            if fail {
                return Err("connection reset".to_string());
            }
            Ok(Page {
                rows: records.to_vec(),
                page_count: 1,
            })
        });
    }

    /// Fetch one page of the records matching `query`.
    ///
    /// A page index past the end answers with an empty page.
    pub fn fetch_page(&mut self, request: PageRequest, query: &str) {
        let fail = std::mem::take(&mut self.fail_next);
        let records = Arc::clone(&self.records);
        let needle = query.to_lowercase();
        self.spawn(Some(request), query.to_string(), move || {
            if fail {
                return Err("connection reset".to_string());
            }
            Ok(slice_page(&records, request, &needle))
        });
    }

    /// Next response that has arrived, if any.
    pub fn try_recv(&mut self) -> Option<Response<T>> {
        self.rx.try_recv().ok()
    }

    fn spawn(
        &self,
        request: Option<PageRequest>,
        query: String,
        answer: impl FnOnce() -> Result<Page<T>, String> + Send + 'static,
    ) {
        let tx = self.tx.clone();
        let delay = self.delay;
        debug!(?request, %query, ?delay, "Fetching records");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Response {
                request,
                query,
                result: answer(),
            });
        });
    }
}

fn slice_page<T: Record>(records: &[T], request: PageRequest, query: &str) -> Page<T> {
    let matching: Vec<&T> = records
        .iter()
        .filter(|record| query.is_empty() || record.summary().to_lowercase().contains(query))
        .collect();
    let page_size = request.page_size.max(1);
    let rows = matching
        .iter()
        .skip(request.page_index * page_size)
        .take(page_size)
        .map(|&record| record.clone())
        .collect();
    Page {
        rows,
        page_count: matching.len().div_ceil(page_size).max(1),
    }
}
