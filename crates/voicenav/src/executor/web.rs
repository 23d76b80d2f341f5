use super::{Dispatcher, ExecutionResult};

impl Dispatcher {
    pub(super) fn web_search(&self, query: &str) -> ExecutionResult {
        let url = format!("{}{}", self.search_url, urlencoding::encode(query));
        match self.platform.open_url(&url) {
            Ok(()) => ExecutionResult::ok(format!("Searching for: {query}")),
            Err(error) => ExecutionResult::failed(format!("Search failed: {error}")),
        }
    }

    pub(super) fn open_url(&self, url: &str) -> ExecutionResult {
        match self.platform.open_url(url) {
            Ok(()) => ExecutionResult::ok(format!("Opening: {url}")),
            Err(error) => ExecutionResult::failed(format!("Failed to open URL: {error}")),
        }
    }
}
