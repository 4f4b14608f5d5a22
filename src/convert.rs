use std::collections::BTreeMap;

use crate::{
    error::EvalError,
    interpreter::value::{
        array::{ArrayKind, NativeArray},
        core::Value,
    },
    object::Object,
};

/// First cell of an array that encodes a key/value map.
///
/// An encoded map with `M` entries is a one-row array of `2M + 1` cells:
/// `[MAP_SENTINEL, k0, v0, k1, v1, ...]`. The array additionally carries
/// [`ArrayKind::EncodedMap`], and only that tag decides how it is decoded.
pub const MAP_SENTINEL: &str = "__map__B098D7A2__";

/// Converts an engine value into an [`Object`].
///
/// Scalars map one-to-one. Arrays tagged [`ArrayKind::EncodedMap`] become
/// maps; every other array becomes a vector, even one whose first cell happens
/// to be the sentinel string. Cells are converted recursively.
///
/// # Errors
/// [`EvalError::UnknownType`] if an array tagged as an encoded map does not
/// have the encoded layout.
///
/// # Example
/// ```
/// use evalenv::{
///     Object,
///     convert::native_to_object,
///     interpreter::value::core::Value,
/// };
///
/// let value = Value::from(vec![Value::Integer(1), Value::from("two")]);
/// assert_eq!(native_to_object(&value).unwrap(),
///            Object::Vector(vec![Object::Int(1), Object::from("two")]));
/// ```
pub fn native_to_object(value: &Value) -> Result<Object, EvalError> {
    match value {
        Value::Bool(b) => Ok(Object::Bool(*b)),
        Value::Integer(n) => Ok(Object::Int(*n)),
        Value::Real(r) => Ok(Object::Float(*r)),
        Value::Complex(c) => Ok(Object::Complex(*c)),
        Value::Str(s) => Ok(Object::String(s.clone())),
        Value::Array(arr) => match arr.kind() {
            ArrayKind::Sequence => arr.iter()
                                      .map(native_to_object)
                                      .collect::<Result<Vec<_>, _>>()
                                      .map(Object::Vector),
            ArrayKind::EncodedMap => decode_map(arr),
        },
    }
}

/// Rebuilds a map from `[sentinel, k0, v0, ...]`.
///
/// Keys are inserted in cell order; a repeated key keeps its first value.
fn decode_map(arr: &NativeArray) -> Result<Object, EvalError> {
    let well_formed = arr.cols() % 2 == 1
                      && matches!(arr.at(0, 0), Some(Value::Str(s)) if s == MAP_SENTINEL);
    if !well_formed {
        return Err(EvalError::UnknownType { type_name: format!("malformed encoded map of {} cells",
                                                               arr.cols()) });
    }

    let mut map = BTreeMap::new();
    for pair in arr[1..].chunks_exact(2) {
        let key = native_to_object(&pair[0])?;
        let value = native_to_object(&pair[1])?;
        map.entry(key).or_insert(value);
    }
    Ok(Object::Map(map))
}

/// Converts an [`Object`] into an engine value.
///
/// Scalars map one-to-one. A vector becomes a one-row sequence array with
/// each element converted recursively. A map becomes a one-row array tagged
/// [`ArrayKind::EncodedMap`]: the sentinel, then each converted key followed
/// by its converted value, in the map's iteration order.
///
/// # Errors
/// [`EvalError::UnknownType`] for [`Object::Null`], wherever it is nested.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
///
/// use evalenv::{
///     Object,
///     convert::{MAP_SENTINEL, object_to_native},
///     interpreter::value::{array::ArrayKind, core::Value},
/// };
///
/// let map = Object::Map(BTreeMap::from([(Object::from("a"), Object::from(1_i64))]));
/// let Value::Array(arr) = object_to_native(&map).unwrap() else { panic!() };
///
/// assert_eq!(arr.kind(), ArrayKind::EncodedMap);
/// assert_eq!(&arr[..], &[Value::from(MAP_SENTINEL), Value::from("a"), Value::Integer(1)]);
/// ```
pub fn object_to_native(obj: &Object) -> Result<Value, EvalError> {
    match obj {
        Object::Null => Err(EvalError::UnknownType { type_name: obj.type_name().to_string() }),
        Object::Bool(b) => Ok(Value::Bool(*b)),
        Object::Int(n) => Ok(Value::Integer(*n)),
        Object::Float(f) => Ok(Value::Real(*f)),
        Object::Complex(c) => Ok(Value::Complex(*c)),
        Object::String(s) => Ok(Value::Str(s.clone())),
        Object::Vector(items) => items.iter()
                                      .map(object_to_native)
                                      .collect::<Result<Vec<_>, _>>()
                                      .map(|cells| Value::Array(NativeArray::sequence(cells))),
        Object::Map(entries) => {
            let mut cells = Vec::with_capacity(entries.len() * 2 + 1);
            cells.push(Value::from(MAP_SENTINEL));
            for (key, value) in entries {
                cells.push(object_to_native(key)?);
                cells.push(object_to_native(value)?);
            }
            Ok(Value::Array(NativeArray::new(cells, ArrayKind::EncodedMap)))
        },
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::interpreter::value::complex::ComplexNumber;

    fn arb_object() -> impl Strategy<Value = Object> {
        let leaf = prop_oneof![any::<bool>().prop_map(Object::Bool),
                               any::<i64>().prop_map(Object::Int),
                               any::<f64>().prop_map(Object::Float),
                               (any::<f64>(), any::<f64>()).prop_map(|(re, im)| {
                                                               Object::Complex(ComplexNumber::new(re, im))
                                                           }),
                               ".{0,12}".prop_map(Object::String),];

        leaf.prop_recursive(4, 64, 6, |inner| {
                prop_oneof![prop::collection::vec(inner.clone(), 0..6).prop_map(Object::Vector),
                            prop::collection::btree_map(inner.clone(), inner, 0..6).prop_map(Object::Map),]
            })
    }

    proptest! {
        #[test]
        fn objects_round_trip(obj in arb_object()) {
            let native = object_to_native(&obj).unwrap();
            prop_assert_eq!(native_to_object(&native).unwrap(), obj);
        }
    }

    #[test]
    fn sentinel_prefixed_sequence_stays_a_vector() {
        let obj = Object::Vector(vec![Object::from(MAP_SENTINEL), Object::from(1_i64), Object::from(2_i64)]);
        let native = object_to_native(&obj).unwrap();
        assert_eq!(native_to_object(&native).unwrap(), obj);
    }

    #[test]
    fn empty_map_encodes_as_lone_sentinel() {
        let Value::Array(arr) = object_to_native(&Object::Map(BTreeMap::new())).unwrap() else {
            panic!("expected an array");
        };
        assert_eq!(arr.cols(), 1);
        assert_eq!(native_to_object(&Value::Array(arr)).unwrap(),
                   Object::Map(BTreeMap::new()));
    }

    #[test]
    fn malformed_encoded_map_is_rejected() {
        let broken = NativeArray::new(vec![Value::from(MAP_SENTINEL), Value::Integer(1)],
                                      ArrayKind::EncodedMap);
        assert!(matches!(native_to_object(&Value::Array(broken)),
                         Err(EvalError::UnknownType { .. })));

        let no_sentinel = NativeArray::new(vec![Value::Integer(0)], ArrayKind::EncodedMap);
        assert!(native_to_object(&Value::Array(no_sentinel)).is_err());
    }

    #[test]
    fn nested_null_fails_conversion() {
        let obj = Object::Vector(vec![Object::from(1_i64), Object::Null]);
        assert_eq!(object_to_native(&obj),
                   Err(EvalError::UnknownType { type_name: "null".to_string() }));
    }

    #[test]
    fn duplicate_decoded_keys_keep_the_first_value() {
        let arr = NativeArray::new(vec![Value::from(MAP_SENTINEL),
                                        Value::from("k"),
                                        Value::Integer(1),
                                        Value::from("k"),
                                        Value::Integer(2)],
                                   ArrayKind::EncodedMap);
        let obj = native_to_object(&Value::Array(arr)).unwrap();
        assert_eq!(obj.as_map().unwrap()[&Object::from("k")], Object::Int(1));
    }
}
