//! Per-key "seen" bookkeeping for the scan pass.

use super::template::Template;

/// Tracks which template keys have been found in scanned text.
///
/// Flags only ever move from unseen to seen. A seen key is never tested
/// again, so later lines cannot change its state.
#[derive(Debug)]
pub struct SeenKeys<'a> {
    keys: &'a [String],
    seen: Vec<bool>,
    remaining: usize,
}

impl<'a> SeenKeys<'a> {
    pub fn new(template: &'a Template) -> Self {
        let keys = template.keys();
        Self {
            keys,
            seen: vec![false; keys.len()],
            remaining: keys.len(),
        }
    }

    /// Mark every still-unseen key that occurs literally in `line`.
    pub fn mark_line(&mut self, line: &str) {
        if self.remaining == 0 {
            return;
        }
        for (key, seen) in self.keys.iter().zip(self.seen.iter_mut()) {
            if !*seen && line.contains(key.as_str()) {
                *seen = true;
                self.remaining -= 1;
            }
        }
    }

    /// Number of keys not yet seen.
    #[cfg(test)]
    fn remaining(&self) -> usize {
        self.remaining
    }

    #[cfg(test)]
    fn is_seen(&self, key: &str) -> bool {
        self.keys
            .iter()
            .zip(&self.seen)
            .any(|(k, seen)| *seen && k == key)
    }

    /// Keys never seen, in template order.
    pub fn into_unseen(self) -> Vec<String> {
        self.keys
            .iter()
            .zip(self.seen)
            .filter(|(_, seen)| !seen)
            .map(|(key, _)| key.clone())
            .collect()
    }
}
