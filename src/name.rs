//! NDN names: an ordered list of opaque byte-string components.
//!
//! Names and components use the NDN canonical order, which is *not* plain lexicographic order.
//! A shorter component always sorts before a longer one, and only components of equal length
//! are compared byte by byte. Names are then compared component by component, with a strict
//! prefix sorting first.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    block::Block,
    entity::TlvEntity,
    error::{Error, Result},
    type_code::TypeCode,
};

/// Percent-decode one URI path segment. Both the segment and the decoded bytes must be ASCII.
fn decode_segment(segment: &str) -> Result<Vec<u8>> {
    if !segment.is_ascii() {
        return Err(Error::BadUri(format!(
            "segment {:?} contains non-ASCII characters",
            segment
        )));
    }
    let bytes = urlencoding::decode_binary(segment.as_bytes()).into_owned();
    if !bytes.is_ascii() {
        return Err(Error::BadUri(format!(
            "segment {:?} decodes to non-ASCII bytes",
            segment
        )));
    }
    Ok(bytes)
}

/// One segment of a [`Name`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Component {
    #[serde(with = "serde_bytes")]
    value: Vec<u8>,
}

impl Component {
    pub fn new(value: Vec<u8>) -> Component {
        Component { value }
    }

    /// Build a component from a single URI path segment, such as `hello%20world`. Fails if the
    /// segment is empty, contains a `/`, decodes to a lone `/`, or isn't ASCII once
    /// percent-decoded.
    pub fn from_uri(segment: &str) -> Result<Component> {
        if segment.is_empty() {
            return Err(Error::BadUri("empty component".to_string()));
        }
        if segment.contains('/') {
            return Err(Error::BadUri(format!(
                "{:?} is more than one path segment",
                segment
            )));
        }
        let bytes = decode_segment(segment)?;
        if bytes == b"/" {
            return Err(Error::BadUri(format!("{:?} decodes to a lone '/'", segment)));
        }
        Ok(Component::new(bytes))
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn into_value(self) -> Vec<u8> {
        self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Percent-encode every byte outside the URI unreserved set.
    pub fn to_uri(&self) -> String {
        urlencoding::encode_binary(&self.value).into_owned()
    }

    /// Canonical order: shorter components first, then unsigned byte-by-byte comparison.
    pub fn compare(&self, other: &Component) -> Ordering {
        match self.value.len().cmp(&other.value.len()) {
            Ordering::Equal => (),
            ord => return ord,
        }
        for (a, b) in self.value.iter().zip(other.value.iter()) {
            match a.cmp(b) {
                Ordering::Equal => (),
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

impl Ord for Component {
    fn cmp(&self, other: &Component) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Component {
    fn partial_cmp(&self, other: &Component) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

impl From<Vec<u8>> for Component {
    fn from(value: Vec<u8>) -> Self {
        Component::new(value)
    }
}

impl From<&[u8]> for Component {
    fn from(value: &[u8]) -> Self {
        Component::new(value.to_vec())
    }
}

impl From<&str> for Component {
    fn from(value: &str) -> Self {
        Component::new(value.as_bytes().to_vec())
    }
}

impl TlvEntity for Component {
    fn to_block(&self) -> Result<Block> {
        Ok(Block::new_raw(TypeCode::NameComponent, self.value.clone()))
    }

    fn from_block(block: &Block) -> Result<Self> {
        let bytes = block.expect_bytes(TypeCode::NameComponent)?;
        Ok(Component::new(bytes.to_vec()))
    }
}

/// A hierarchical NDN name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name {
    components: Vec<Component>,
}

impl Name {
    /// Create an empty name. Note that an empty name has no wire encoding.
    pub fn new() -> Name {
        Name::default()
    }

    /// Parse a name from its URI form, like `/hello/world` or `ndn:/hello/world`.
    ///
    /// The leading `/` is required. Empty segments are skipped, so `/a//b/` is the same as
    /// `/a/b`, but a URI with no segments at all (like `/`) fails. Segments are percent-decoded,
    /// and the whole parse fails if any of them is not ASCII. Any query or fragment part is
    /// dropped.
    pub fn from_uri(uri: &str) -> Result<Name> {
        let path = uri.strip_prefix("ndn:").unwrap_or(uri);
        let path = path
            .find(|c| c == '?' || c == '#')
            .map_or(path, |end| &path[..end]);
        let path = path.strip_prefix('/').ok_or_else(|| {
            Error::BadUri(format!("{:?} doesn't start with '/'", uri))
        })?;
        let components = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| decode_segment(s).map(Component::new))
            .collect::<Result<Vec<_>>>()?;
        if components.is_empty() {
            return Err(Error::BadUri(format!("{:?} has no name components", uri)));
        }
        Ok(Name { components })
    }

    pub fn append(&mut self, component: Component) -> &mut Self {
        self.components.push(component);
        self
    }

    pub fn get(&self, index: usize) -> Option<&Component> {
        self.components.get(index)
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// True if every component of `self` matches the start of `other`.
    pub fn is_prefix_of(&self, other: &Name) -> bool {
        self.len() <= other.len()
            && self
                .components
                .iter()
                .zip(other.components.iter())
                .all(|(a, b)| a == b)
    }

    /// The first `len` components of this name.
    pub fn get_prefix(&self, len: usize) -> Name {
        Name {
            components: self.components.iter().take(len).cloned().collect(),
        }
    }

    pub fn to_uri(&self) -> String {
        if self.components.is_empty() {
            return "/".to_string();
        }
        let mut uri = String::new();
        for c in self.components.iter() {
            uri.push('/');
            uri.push_str(&c.to_uri());
        }
        uri
    }

    /// Canonical order: first differing component decides, otherwise the shorter name is less.
    pub fn compare(&self, other: &Name) -> Ordering {
        for (a, b) in self.components.iter().zip(other.components.iter()) {
            match a.compare(b) {
                Ordering::Equal => (),
                ord => return ord,
            }
        }
        self.components.len().cmp(&other.components.len())
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Name) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Name) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

impl FromStr for Name {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Name::from_uri(s)
    }
}

impl From<Vec<Component>> for Name {
    fn from(components: Vec<Component>) -> Self {
        Name { components }
    }
}

impl FromIterator<Component> for Name {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Name {
            components: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Name {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;
    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl TlvEntity for Name {
    /// Fails with [`Error::EmptyName`] if there are no components.
    fn to_block(&self) -> Result<Block> {
        if self.components.is_empty() {
            return Err(Error::EmptyName);
        }
        let blocks = self
            .components
            .iter()
            .map(Component::to_block)
            .collect::<Result<Vec<_>>>()?;
        Ok(Block::new_nested(TypeCode::Name, blocks))
    }

    /// A Name block with no children decodes to the empty name.
    fn from_block(block: &Block) -> Result<Self> {
        let components = block
            .expect_blocks(TypeCode::Name)?
            .iter()
            .map(Component::from_block)
            .collect::<Result<Vec<_>>>()?;
        Ok(Name { components })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn name(parts: &[&[u8]]) -> Name {
        parts.iter().map(|p| Component::from(*p)).collect()
    }

    mod component {
        use super::*;

        #[test]
        fn shorter_is_less() {
            let a = Component::new(vec![0x01]);
            let b = Component::new(vec![0x00, 0x00]);
            assert_eq!(a.compare(&b), Ordering::Less);
            assert_eq!(b.compare(&a), Ordering::Greater);
            assert!(a < b);
        }

        #[test]
        fn equal_length_by_bytes() {
            let a = Component::new(vec![0x05]);
            let b = Component::new(vec![0x02]);
            assert_eq!(a.compare(&b), Ordering::Greater);
            let a = Component::new(vec![0x01, 0xff]);
            let b = Component::new(vec![0x02, 0x00]);
            assert_eq!(a.compare(&b), Ordering::Less);
            assert_eq!(a.compare(&a.clone()), Ordering::Equal);
        }

        #[test]
        fn not_lexicographic() {
            // Plain lexicographic order would put "b" after "ab".
            let a = Component::from("b");
            let b = Component::from("ab");
            assert_eq!(a.compare(&b), Ordering::Less);
        }

        #[test]
        fn from_uri() {
            assert_eq!(Component::from_uri("abc").unwrap().value(), b"abc");
            assert_eq!(Component::from_uri("a%20b").unwrap().value(), b"a b");
            assert!(Component::from_uri("").is_err());
            assert!(Component::from_uri("/").is_err());
            assert!(Component::from_uri("%2F").is_err());
            assert!(Component::from_uri("%2f").is_err());
            assert_eq!(Component::from_uri("a%2Fb").unwrap().value(), b"a/b");
            assert!(Component::from_uri("a/b").is_err());
            assert!(Component::from_uri("caf\u{e9}").is_err());
            assert!(Component::from_uri("%C3%A9").is_err());
        }

        #[test]
        fn to_uri() {
            assert_eq!(Component::from("abc").to_uri(), "abc");
            assert_eq!(Component::from("a b").to_uri(), "a%20b");
            assert_eq!(Component::new(vec![0x00, 0xff]).to_uri(), "%00%FF");
            assert_eq!(Component::from("-._~").to_uri(), "-._~");
        }

        #[test]
        fn block() {
            let c = Component::from("hi");
            let block = c.to_block().unwrap();
            assert_eq!(block.wire_encode(), vec![0x08, 0x02, b'h', b'i']);
            assert_eq!(Component::from_block(&block).unwrap(), c);

            let wrong = Block::new_raw(TypeCode::Content, b"hi".to_vec());
            assert!(matches!(
                Component::from_block(&wrong),
                Err(Error::WrongType { .. })
            ));
        }
    }

    mod uri {
        use super::*;

        #[test]
        fn to_uri() {
            assert_eq!(name(&[b"a", b"b"]).to_uri(), "/a/b");
            assert_eq!(Name::new().to_uri(), "/");
            assert_eq!(name(&[b"a b", b"%"]).to_uri(), "/a%20b/%25");
        }

        #[test]
        fn from_uri() {
            assert_eq!(Name::from_uri("/a/b").unwrap(), name(&[b"a", b"b"]));
            assert_eq!(Name::from_uri("ndn:/a/b").unwrap(), name(&[b"a", b"b"]));
            assert_eq!(Name::from_uri("/a//b/").unwrap(), name(&[b"a", b"b"]));
            assert_eq!(Name::from_uri("/a%2Fb").unwrap(), name(&[b"a/b"]));
            assert_eq!(Name::from_uri("/a/b?x=1#frag").unwrap(), name(&[b"a", b"b"]));
        }

        #[test]
        fn from_uri_fails() {
            assert!(Name::from_uri("a/b").is_err());
            assert!(Name::from_uri("").is_err());
            assert!(matches!(Name::from_uri("/"), Err(Error::BadUri(_))));
            assert!(matches!(Name::from_uri("ndn:/"), Err(Error::BadUri(_))));
            assert!(Name::from_uri("//").is_err());
            assert!(Name::from_uri("/?x=1").is_err());
            assert!(Name::from_uri("/ok/caf\u{e9}").is_err());
            assert!(Name::from_uri("/ok/%FF").is_err());
        }

        #[test]
        fn roundtrip() {
            let uri = "/hello/a%20b/x-y_z.~";
            let n: Name = uri.parse().unwrap();
            assert_eq!(n.len(), 3);
            assert_eq!(n.to_string(), uri);
        }
    }

    mod order {
        use super::*;
        use rand::prelude::*;

        fn random_name(rng: &mut ThreadRng) -> Name {
            let len = rng.gen_range(0..4);
            (0..len)
                .map(|_| {
                    // Small alphabet so that equal components and shared prefixes show up.
                    let clen = rng.gen_range(0..3);
                    let bytes: Vec<u8> = (0..clen).map(|_| rng.gen_range(0..3)).collect();
                    Component::new(bytes)
                })
                .collect()
        }

        #[test]
        fn prefix_is_less() {
            let short = name(&[b"a"]);
            let long = name(&[b"a", b"b"]);
            assert_eq!(short.compare(&long), Ordering::Less);
            assert_eq!(long.compare(&short), Ordering::Greater);
            assert!(Name::new() < short);
            assert!(short.is_prefix_of(&long));
            assert!(!long.is_prefix_of(&short));
        }

        #[test]
        fn first_difference_decides() {
            let a = name(&[b"a", b"zz", b"q"]);
            let b = name(&[b"a", b"b", b"q", b"r"]);
            // "b" is shorter than "zz", so b sorts first despite being longer overall.
            assert_eq!(a.compare(&b), Ordering::Greater);
            assert_eq!(a.compare(&a.clone()), Ordering::Equal);
        }

        #[test]
        fn total_order() {
            let mut rng = thread_rng();
            let names: Vec<Name> = (0..40).map(|_| random_name(&mut rng)).collect();
            for a in names.iter() {
                for b in names.iter() {
                    let ab = a.compare(b);
                    assert_eq!(ab, b.compare(a).reverse(), "antisymmetry: {} vs {}", a, b);
                    assert_eq!(ab == Ordering::Equal, a == b, "equality: {} vs {}", a, b);
                    for c in names.iter() {
                        if ab == Ordering::Less && b.compare(c) == Ordering::Less {
                            assert_eq!(
                                a.compare(c),
                                Ordering::Less,
                                "transitivity: {} < {} < {}",
                                a,
                                b,
                                c
                            );
                        }
                    }
                }
                if !a.is_empty() {
                    let mut longer = a.clone();
                    longer.append(Component::from("x"));
                    assert_eq!(a.compare(&longer), Ordering::Less);
                }
            }
        }

        #[test]
        fn sort() {
            let mut names = vec![
                name(&[b"b"]),
                name(&[b"aa"]),
                name(&[b"a", b"b"]),
                name(&[b"a"]),
                Name::new(),
            ];
            names.sort();
            let uris: Vec<String> = names.iter().map(Name::to_uri).collect();
            assert_eq!(uris, vec!["/", "/a", "/a/b", "/b", "/aa"]);
        }
    }

    mod block {
        use super::*;

        #[test]
        fn roundtrip() {
            let n = name(&[b"a", b"bc", &[0, 1, 2]]);
            let enc = n.wire_encode().unwrap();
            assert_eq!(&enc[..2], &[0x07, 12]);
            assert_eq!(Name::wire_decode(&enc).unwrap(), n);
        }

        #[test]
        fn empty_name_asymmetry() {
            assert_eq!(Name::new().to_block(), Err(Error::EmptyName));
            let decoded = Name::wire_decode(&[0x07, 0x00]).unwrap();
            assert!(decoded.is_empty());
        }

        #[test]
        fn bad_child() {
            // Second child is a Content block, not a NameComponent.
            let enc = [0x07, 0x06, 0x08, 0x01, b'a', 0x15, 0x01, b'b'];
            assert!(matches!(
                Name::wire_decode(&enc),
                Err(Error::WrongType {
                    expected: 8,
                    actual: 21
                })
            ));
        }

        #[test]
        fn raw_name_rejected() {
            let block = Block::new_raw(TypeCode::Name, vec![0x08, 0x01, b'a']);
            assert!(matches!(
                Name::from_block(&block),
                Err(Error::WrongShape { .. })
            ));
        }

        #[test]
        fn index() {
            let n = name(&[b"a", b"b"]);
            assert_eq!(n.get(1), Some(&Component::from("b")));
            assert_eq!(n.get(2), None);
            assert_eq!(n.get_prefix(1), name(&[b"a"]));
        }
    }

    #[test]
    fn serde_json() {
        let n = name(&[b"a", b"b"]);
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "[[97],[98]]");
        let back: Name = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
    }
}
