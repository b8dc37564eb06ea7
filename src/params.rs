use std::collections::HashMap;
use std::ops::Index;
use std::str::FromStr;

use smallvec::SmallVec;

/// Named path parameters captured by a matched route.
///
/// Names are unique within a pattern, so each name appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    buf: SmallVec<[(Box<str>, Box<str>); 4]>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if **k == *name { Some(&**v) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.buf.iter().map(|(k, v)| (&**k, &**v))
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.buf
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect()
    }

    pub(crate) fn push(&mut self, name: &str, value: &str) {
        self.buf.push((name.into(), value.into()))
    }
}

impl<'a, 'b> From<&'b [(&'a str, &'a str)]> for Params {
    fn from(caps: &'b [(&'a str, &'a str)]) -> Self {
        let mut params = Self::new();
        for &(name, value) in caps {
            params.push(name, value);
        }
        params
    }
}

impl Index<&str> for Params {
    type Output = str;

    /// # Panics
    /// Panics if `name` was not captured.
    fn index(&self, name: &str) -> &str {
        match self.get(name) {
            Some(v) => v,
            None => panic!("no such parameter: {:?}", name),
        }
    }
}

impl IntoIterator for Params {
    type Item = (Box<str>, Box<str>);
    type IntoIter = smallvec::IntoIter<[(Box<str>, Box<str>); 4]>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_parse() {
        let caps: &[(&str, &str)] = &[("id", "42"), ("rest", "a/b")];
        let params = Params::from(caps);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("rest"), Some("a/b"));
        assert_eq!(&params["id"], "42");
        assert_eq!(params.parse::<u32>("id").unwrap().unwrap(), 42);
        assert!(params.parse::<u32>("rest").unwrap().is_err());
        assert!(params.get("missing").is_none());

        let map = params.into_map();
        assert_eq!(map["rest"], "a/b");
    }

    #[test]
    #[should_panic(expected = "no such parameter")]
    fn index_missing() {
        let params = Params::new();
        let _ = &params["id"];
    }
}
