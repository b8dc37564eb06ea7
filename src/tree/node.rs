use super::pattern::Segment;

use crate::matcher::{Candidate, Candidates};
use crate::params::Params;
use crate::route::RouteId;
use crate::strmap::StrMap;

use std::mem;

use smallvec::SmallVec;

type Endpoints = SmallVec<[(Box<str>, RouteId); 2]>;

pub(super) type CaptureBuf<'s, 'p> = SmallVec<[(&'s str, &'p str); 8]>;

#[derive(Debug, Default)]
pub(super) struct Node {
    /// Literal segments that must follow the key this node is stored under.
    /// Only non-empty after compression.
    tail: Vec<Box<str>>,
    statics: StrMap<Node>,
    params: Vec<(Box<str>, Node)>,
    wildcards: Vec<(Box<str>, Endpoints)>,
    endpoints: Endpoints,
}

/// Query state shared by the whole traversal.
pub(super) struct Search<'s, 'p, 'm> {
    pub(super) path: &'p str,
    pub(super) method: &'m str,
    pub(super) captures: CaptureBuf<'s, 'p>,
    pub(super) candidates: Candidates,
    pub(super) path_matched: bool,
}

impl Node {
    /// Returns the id already registered for the same method and pattern.
    pub(super) fn insert(
        &mut self,
        segments: &[Segment<'_>],
        method: &str,
        id: RouteId,
    ) -> Result<(), RouteId> {
        let (first, rest) = match segments.split_first() {
            Some(x) => x,
            None => return add_endpoint(&mut self.endpoints, method, id),
        };

        match *first {
            Segment::Literal(s) => {
                let child = self.statics.find_mut_with(s, Node::default);
                let common = child
                    .tail
                    .iter()
                    .zip(rest)
                    .take_while(|&(t, seg)| matches!(*seg, Segment::Literal(l) if l == &**t))
                    .count();
                if common < child.tail.len() {
                    child.split_tail(common);
                }
                child.insert(&rest[common..], method, id)
            }
            Segment::Param(name) => {
                let pos = match self.params.iter().position(|(n, _)| **n == *name) {
                    Some(pos) => pos,
                    None => {
                        self.params.push((name.into(), Node::default()));
                        self.params.len() - 1
                    }
                };
                self.params[pos].1.insert(rest, method, id)
            }
            Segment::Wildcard(name) => {
                debug_assert!(rest.is_empty());
                match self.wildcards.iter_mut().find(|(n, _)| **n == *name) {
                    Some((_, endpoints)) => add_endpoint(endpoints, method, id),
                    None => {
                        let mut endpoints = Endpoints::new();
                        endpoints.push((method.into(), id));
                        self.wildcards.push((name.into(), endpoints));
                        Ok(())
                    }
                }
            }
        }
    }

    /// Moves everything below `tail[at]` into a new child keyed by `tail[at]`.
    fn split_tail(&mut self, at: usize) {
        let mut rest = self.tail.split_off(at);
        let key = rest.remove(0);
        let child = Node {
            tail: rest,
            statics: mem::take(&mut self.statics),
            params: mem::take(&mut self.params),
            wildcards: mem::take(&mut self.wildcards),
            endpoints: mem::take(&mut self.endpoints),
        };
        self.statics.find_mut_with(&key, || child);
    }

    pub(super) fn compress(&mut self) {
        for child in self.statics.values_mut() {
            child.absorb();
            child.compress();
        }
        for (_, child) in self.params.iter_mut() {
            child.compress();
        }
    }

    /// Merges single literal children into this node while it is a pure
    /// pass-through.
    fn absorb(&mut self) {
        while self.endpoints.is_empty() && self.params.is_empty() && self.wildcards.is_empty() {
            let (key, child) = match self.statics.take_single() {
                Some(x) => x,
                None => break,
            };
            self.tail.push(key);
            self.tail.extend(child.tail);
            self.statics = child.statics;
            self.params = child.params;
            self.wildcards = child.wildcards;
            self.endpoints = child.endpoints;
        }
    }

    pub(super) fn search<'s, 'p>(&'s self, parts: &[&'p str], s: &mut Search<'s, 'p, '_>) {
        let (&first, rest) = match parts.split_first() {
            Some(x) => x,
            None => return collect_endpoints(&self.endpoints, s),
        };

        if let Some(child) = self.statics.find(first) {
            let n = child.tail.len();
            if n <= rest.len() && child.tail.iter().zip(rest).all(|(t, p)| **t == **p) {
                child.search(&rest[n..], s);
            }
        }

        if !first.is_empty() {
            for (name, child) in &self.params {
                s.captures.push((&**name, first));
                child.search(rest, s);
                s.captures.pop();
            }
        }

        if !self.wildcards.is_empty() {
            let path = s.path;
            let remainder = &path[calc_offset(path, first)..];
            if !remainder.is_empty() {
                for (name, endpoints) in &self.wildcards {
                    s.captures.push((&**name, remainder));
                    collect_endpoints(endpoints, s);
                    s.captures.pop();
                }
            }
        }
    }
}

fn collect_endpoints<'s>(endpoints: &'s Endpoints, s: &mut Search<'s, '_, '_>) {
    if endpoints.is_empty() {
        return;
    }
    s.path_matched = true;
    if let Some(&(_, id)) = endpoints.iter().find(|(m, _)| **m == *s.method) {
        s.candidates.push(Candidate {
            id,
            params: Params::from(&*s.captures),
        });
    }
}

fn add_endpoint(endpoints: &mut Endpoints, method: &str, id: RouteId) -> Result<(), RouteId> {
    if let Some(&(_, prev)) = endpoints.iter().find(|(m, _)| **m == *method) {
        return Err(prev);
    }
    endpoints.push((method.into(), id));
    Ok(())
}

/// Byte offset of `dst` inside `src`. `dst` must be a subslice of `src`.
#[inline(always)]
fn calc_offset(src: &str, dst: &str) -> usize {
    let p2 = dst.as_ptr() as usize;
    let p1 = src.as_ptr() as usize;
    p2 - p1
}
