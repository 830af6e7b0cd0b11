//! Error paths
//!
//! A [`Path`] locates a single failure inside a validated value. It is built
//! leaf-first: validators report errors at the root (empty path) and every
//! composite prepends one segment while propagating them upwards.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// PATH SEGMENT
// ============================================================================

/// One level of nesting: an object key or an array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A field name inside an object.
    Key(Cow<'static, str>),
    /// A position inside an array.
    Index(usize),
}

impl PathSegment {
    /// Returns the key, if this segment is one.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Index(_) => None,
        }
    }

    /// Returns the index, if this segment is one.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Key(_) => None,
            Self::Index(index) => Some(*index),
        }
    }
}

impl From<&'static str> for PathSegment {
    fn from(key: &'static str) -> Self {
        Self::Key(Cow::Borrowed(key))
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        Self::Key(Cow::Owned(key))
    }
}

impl From<Cow<'static, str>> for PathSegment {
    fn from(key: Cow<'static, str>) -> Self {
        Self::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "[{index}]"),
        }
    }
}

// ============================================================================
// PATH
// ============================================================================

/// Ordered sequence of segments from the validated root to a failure.
///
/// Most schemas nest only a few levels, so segments live inline.
///
/// # Examples
///
/// ```rust,ignore
/// use conform_validator::foundation::{Path, PathSegment};
///
/// let path: Path = [PathSegment::from("items"), PathSegment::Index(2), "name".into()]
///     .into_iter()
///     .collect();
/// assert_eq!(path.to_string(), "items[2].name");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path(SmallVec<[PathSegment; 4]>);

impl Path {
    /// The empty path, pointing at the validated value itself.
    #[must_use]
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    /// Returns `true` for the empty path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Same as [`Path::is_root`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Appends a segment at the innermost end.
    pub fn push(&mut self, segment: impl Into<PathSegment>) {
        self.0.push(segment.into());
    }

    /// Inserts a segment at the outermost end.
    pub fn prepend(&mut self, segment: impl Into<PathSegment>) {
        self.0.insert(0, segment.into());
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 && matches!(segment, PathSegment::Key(_)) {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
