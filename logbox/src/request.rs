//!
//! Pooled log requests. A [`LogRequest`] carries one log call's
//! `(level, tag, content, call site)` through the handler chain and is
//! recycled through a bounded LIFO [`RequestPool`] to keep steady-state
//! logging allocation-free.
//!

use std::sync::Mutex;

use crate::callsite::CallSite;
use crate::content::Content;
use crate::levels::Level;

/// Mutable unit of work for one log call. Owned by exactly one in-flight
/// dispatch at a time; content is present from assignment until the
/// request returns to the pool.
pub struct LogRequest {
    level: Level,
    tag: String,
    content: Option<Content>,
    site: Option<CallSite>,
}

impl LogRequest {
    fn new() -> Self {
        Self {
            level: Level::Verbose,
            tag: String::new(),
            content: None,
            site: None,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The payload under classification. Only valid while the request is
    /// in flight.
    pub fn content(&self) -> &Content {
        self.content
            .as_ref()
            .expect("log request content accessed outside of a dispatch")
    }

    pub fn call_site(&self) -> Option<&CallSite> {
        self.site.as_ref()
    }

    pub(crate) fn assign(
        &mut self,
        level: Level,
        tag: String,
        content: Content,
        site: Option<CallSite>,
    ) {
        self.level = level;
        self.tag = tag;
        self.content = Some(content);
        self.site = site;
    }

    fn reset(&mut self) {
        self.level = Level::Verbose;
        self.tag.clear();
        self.content = None;
        self.site = None;
    }
}

/// Bounded LIFO free list of requests. One lock guards the whole pool;
/// `acquire` and `release` are the only critical sections.
pub struct RequestPool {
    slots: Mutex<Vec<Box<LogRequest>>>,
    capacity: usize,
}

impl RequestPool {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    /// Pops the most recently released request, allocating a fresh one on
    /// a pool miss. Never blocks beyond the pool lock and never fails.
    pub fn acquire(&self) -> Box<LogRequest> {
        self.slots
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Box::new(LogRequest::new()))
    }

    /// Clears the request and returns it to the pool. Returns false when
    /// the pool is already full and the request is dropped instead.
    pub fn release(&self, mut request: Box<LogRequest>) -> bool {
        request.reset();
        let mut slots = self.slots.lock().unwrap();
        if slots.len() < self.capacity {
            slots.push(request);
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    fn cached(&self) -> usize {
        self.slots.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_beyond_capacity_allocates() {
        let pool = RequestPool::new(2);
        let a = pool.acquire();
        let b = pool.acquire();
        let c = pool.acquire();
        assert_eq!(pool.cached(), 0);
        assert!(pool.release(a));
        assert!(pool.release(b));
        assert!(!pool.release(c));
        assert_eq!(pool.cached(), 2);
    }

    #[test]
    fn released_requests_are_cleared() {
        let pool = RequestPool::new(4);
        let mut request = pool.acquire();
        request.assign(
            Level::Error,
            "tag".to_string(),
            Content::from("payload"),
            Some(CallSite::new("a.rs", 1, "f")),
        );
        pool.release(request);

        let request = pool.acquire();
        assert_eq!(request.level(), Level::Verbose);
        assert_eq!(request.tag(), "");
        assert!(request.call_site().is_none());
        assert!(request.content.is_none());
    }

    #[test]
    fn pool_is_lifo() {
        let pool = RequestPool::new(4);
        let mut first = pool.acquire();
        first.assign(Level::Info, "first".into(), Content::from("x"), None);
        let second = pool.acquire();
        // release order: first then second; second must come back first
        let first_ptr = &*first as *const LogRequest;
        let second_ptr = &*second as *const LogRequest;
        pool.release(first);
        pool.release(second);
        assert_eq!(&*pool.acquire() as *const LogRequest, second_ptr);
        assert_eq!(&*pool.acquire() as *const LogRequest, first_ptr);
    }
}
