pub mod generate;
pub mod history;

pub use generate::{GenerateState, GenerateTab};
pub use history::{DetailState, HistoryTab, ListState};

use crate::models::RequestTag;

/// Hands out request tags for one mounted tab instance.
#[derive(Debug)]
pub struct RequestCounter {
    instance: u64,
    last_seq: u64,
}

impl RequestCounter {
    pub fn new(instance: u64) -> Self {
        Self {
            instance,
            last_seq: 0,
        }
    }

    pub fn instance(&self) -> u64 {
        self.instance
    }

    pub fn issue(&mut self) -> RequestTag {
        self.last_seq += 1;
        RequestTag {
            instance: self.instance,
            seq: self.last_seq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_monotonic_per_instance() {
        let mut counter = RequestCounter::new(4);
        let first = counter.issue();
        let second = counter.issue();
        assert_eq!(first, RequestTag { instance: 4, seq: 1 });
        assert_eq!(second, RequestTag { instance: 4, seq: 2 });
        assert_eq!(counter.instance(), 4);
    }
}
