/// Identity of one issued request, echoed back with its completion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestTag {
    pub seq: u64,
    /// The query or identifier that triggered the request.
    pub key: String,
}

/// Single-slot tracker of the request a machine is currently waiting for.
///
/// Completions are matched against the in-flight tag rather than arrival
/// order, so a slow response for an abandoned input is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct RequestTracker {
    next_seq: u64,
    in_flight: Option<RequestTag>,
}

impl RequestTracker {
    /// Issues a new tag, superseding whatever was in flight.
    pub(crate) fn begin(&mut self, key: &str) -> RequestTag {
        self.next_seq += 1;
        let tag = RequestTag {
            seq: self.next_seq,
            key: key.to_string(),
        };
        self.in_flight = Some(tag.clone());
        tag
    }

    /// Consumes the in-flight slot if `tag` is the one being waited for.
    pub(crate) fn settle(&mut self, tag: &RequestTag) -> bool {
        if self.in_flight.as_ref() == Some(tag) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    /// Forgets the in-flight request; its completion will be dropped.
    pub(crate) fn abandon(&mut self) {
        self.in_flight = None;
    }

    pub(crate) fn in_flight(&self) -> Option<&RequestTag> {
        self.in_flight.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_supersedes_older() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin("a");
        let second = tracker.begin("b");

        assert!(!tracker.settle(&first));
        assert!(tracker.settle(&second));
        assert!(tracker.in_flight().is_none());
    }

    #[test]
    fn same_key_gets_a_fresh_seq() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin("a");
        let second = tracker.begin("a");

        assert_ne!(first, second);
        assert!(!tracker.settle(&first));
        assert!(tracker.settle(&second));
    }

    #[test]
    fn abandoned_request_is_not_settled() {
        let mut tracker = RequestTracker::default();
        let tag = tracker.begin("a");
        tracker.abandon();

        assert!(!tracker.settle(&tag));
    }
}
