/// Map from string keys to values, kept sorted by key bytes.
#[derive(Debug, Clone)]
pub struct StrMap<T> {
    entries: Vec<(Box<str>, T)>,
}

impl<T> Default for StrMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StrMap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn find(&self, key: &str) -> Option<&T> {
        match self.find_index(key) {
            Ok(i) => Some(&self.entries[i].1),
            Err(_) => None,
        }
    }

    pub fn find_mut_with(&mut self, key: &str, f: impl FnOnce() -> T) -> &mut T {
        let i = match self.find_index(key) {
            Ok(i) => i,
            Err(i) => {
                self.entries.insert(i, (key.into(), f()));
                i
            }
        };
        &mut self.entries[i].1
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.entries.iter_mut().map(|(_, v)| v)
    }

    /// Removes and returns the only entry, if the map holds exactly one.
    pub fn take_single(&mut self) -> Option<(Box<str>, T)> {
        if self.entries.len() == 1 {
            self.entries.pop()
        } else {
            None
        }
    }

    fn find_index(&self, key: &str) -> Result<usize, usize> {
        self.entries
            .binary_search_by(|(k, _)| k.as_bytes().cmp(key.as_bytes()))
    }
}
