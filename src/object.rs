use std::{
    cmp::Ordering,
    collections::BTreeMap,
    fmt::{self, Display},
    hash::{Hash, Hasher},
};

use ordered_float::OrderedFloat;

use crate::interpreter::value::complex::ComplexNumber;

/// A dynamically-typed value handed to and returned from an
/// [`EvalEnvironment`](crate::EvalEnvironment).
///
/// Objects form a closed set of kinds. Equality, ordering and hashing are
/// total (floats compare through [`OrderedFloat`]), so any object, including
/// floats and complex numbers, can be a map key.
///
/// Ordering first ranks by kind in declaration order, then by value.
#[derive(Debug, Clone, Default)]
pub enum Object {
    /// The empty object. It cannot be converted into an engine value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit float.
    Float(f64),
    /// A complex number.
    Complex(ComplexNumber),
    /// A string.
    String(String),
    /// An ordered sequence of objects.
    Vector(Vec<Self>),
    /// A key/value mapping.
    Map(BTreeMap<Self, Self>),
}

impl Object {
    /// Short name of the object's kind, used in diagnostics.
    ///
    /// # Example
    /// ```
    /// use evalenv::Object;
    ///
    /// assert_eq!(Object::from(1.5).type_name(), "float");
    /// assert_eq!(Object::Null.type_name(), "null");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Complex(_) => "complex",
            Self::String(_) => "string",
            Self::Vector(_) => "vector",
            Self::Map(_) => "map",
        }
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is one.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float, if this is one.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the complex number, if this is one.
    #[must_use]
    pub const fn as_complex(&self) -> Option<ComplexNumber> {
        match self {
            Self::Complex(c) => Some(*c),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements, if this is a vector.
    #[must_use]
    pub fn as_vector(&self) -> Option<&[Self]> {
        match self {
            Self::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the entries, if this is a map.
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<Self, Self>> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) => 2,
            Self::Float(_) => 3,
            Self::Complex(_) => 4,
            Self::String(_) => 5,
            Self::Vector(_) => 6,
            Self::Map(_) => 7,
        }
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Object {}

impl PartialOrd for Object {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Object {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => OrderedFloat(*a).cmp(&OrderedFloat(*b)),
            (Self::Complex(a), Self::Complex(b)) => a.cmp(b),
            (Self::String(a), Self::String(b)) => a.cmp(b),
            (Self::Vector(a), Self::Vector(b)) => a.cmp(b),
            (Self::Map(a), Self::Map(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Self::Null => {},
            Self::Bool(b) => b.hash(state),
            Self::Int(n) => n.hash(state),
            Self::Float(f) => OrderedFloat(*f).hash(state),
            Self::Complex(c) => c.hash(state),
            Self::String(s) => s.hash(state),
            Self::Vector(v) => v.hash(state),
            Self::Map(m) => m.hash(state),
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::Complex(c) => write!(f, "{c}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Vector(items) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
            Self::Map(entries) => {
                write!(f, "{{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
        }
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<ComplexNumber> for Object {
    fn from(value: ComplexNumber) -> Self {
        Self::Complex(value)
    }
}

impl From<String> for Object {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Vec<Self>> for Object {
    fn from(value: Vec<Self>) -> Self {
        Self::Vector(value)
    }
}

impl From<BTreeMap<Self, Self>> for Object {
    fn from(value: BTreeMap<Self, Self>) -> Self {
        Self::Map(value)
    }
}

impl FromIterator<Self> for Object {
    fn from_iter<T: IntoIterator<Item = Self>>(iter: T) -> Self {
        Self::Vector(iter.into_iter().collect())
    }
}

impl FromIterator<(Self, Self)> for Object {
    /// Collects pairs into a map. When a key repeats, the first value is kept.
    fn from_iter<T: IntoIterator<Item = (Self, Self)>>(iter: T) -> Self {
        let mut map = BTreeMap::new();
        for (key, value) in iter {
            map.entry(key).or_insert(value);
        }
        Self::Map(map)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn floats_are_usable_as_keys() {
        let map: Object = [(Object::from(f64::NAN), Object::from(1_i64)),
                           (Object::from(0.5), Object::from(2_i64))].into_iter()
                                                                 .collect();
        let entries = map.as_map().unwrap();
        assert_eq!(entries.get(&Object::from(f64::NAN)), Some(&Object::from(1_i64)));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn kinds_never_compare_equal() {
        assert_ne!(Object::from(1_i64), Object::from(1.0));
        assert_ne!(Object::from("1"), Object::from(1_i64));
        assert!(Object::Null < Object::from(false));
    }

    #[test]
    fn first_duplicate_key_wins() {
        let map: Object = [(Object::from("k"), Object::from(1_i64)), (Object::from("k"), Object::from(2_i64))]
            .into_iter()
            .collect();
        assert_eq!(map.as_map().unwrap()[&Object::from("k")], Object::from(1_i64));
    }

    #[test]
    fn equal_objects_hash_equally() {
        let set: HashSet<Object> = [Object::from(0.0), Object::from(-0.0)].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn display_nests() {
        let obj = Object::Vector(vec![Object::from(1_i64),
                                      Object::from("a"),
                                      [(Object::from(true), Object::from(2.5))].into_iter()
                                                                               .collect()]);
        assert_eq!(obj.to_string(), "[1, \"a\", {true: 2.5}]");
    }
}
