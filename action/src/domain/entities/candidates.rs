//! Candidate set
//!
//! Unique logins in first-seen order. The builder narrows it down (self
//! exclusion, sampling) and the dispatcher only reads it.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    logins: Vec<String>,
}

impl CandidateSet {
    /// Collect logins, keeping the first occurrence of each
    pub fn from_logins<I>(logins: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let logins = logins
            .into_iter()
            .filter(|login| seen.insert(login.clone()))
            .collect();
        Self { logins }
    }

    /// Drop a login if present. Returns whether anything was removed.
    pub fn remove(&mut self, login: &str) -> bool {
        match self.logins.iter().position(|l| l == login) {
            Some(index) => {
                self.logins.remove(index);
                true
            }
            None => false,
        }
    }

    /// Keep `min(n, len)` logins drawn uniformly without replacement.
    /// The result is in draw order; an empty set stays empty.
    pub fn sample<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) {
        if n >= self.logins.len() {
            self.logins.shuffle(rng);
            return;
        }
        self.logins = self.logins.choose_multiple(rng, n).cloned().collect();
    }

    /// Logins other than `login`, in set order
    pub fn without(&self, login: Option<&str>) -> Vec<String> {
        self.logins
            .iter()
            .filter(|l| Some(l.as_str()) != login)
            .cloned()
            .collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.logins
    }

    pub fn len(&self) -> usize {
        self.logins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logins.is_empty()
    }

    #[cfg(test)]
    pub fn into_vec(self) -> Vec<String> {
        self.logins
    }
}
