//! Comprehensive tests for the Json handle

use pretty_assertions::{assert_eq, assert_ne};
use simplejson::*;

fn point(x: i32, y: i32) -> Json {
    let mut p = Json::object();
    p["x"] = Json::from(x);
    p["y"] = Json::from(y);
    p
}

#[test]
fn test_construction_kinds() {
    assert_eq!(Json::default().value_type(), JsonType::Null);
    assert_eq!(Json::from(()).value_type(), JsonType::Null);
    assert_eq!(Json::from(true).value_type(), JsonType::Boolean);
    assert_eq!(Json::from(42).value_type(), JsonType::Number);
    assert_eq!(Json::from(4.2).value_type(), JsonType::Number);
    assert_eq!(Json::from("literal").value_type(), JsonType::String);
    assert_eq!(Json::from(String::from("owned")).value_type(), JsonType::String);
    assert_eq!(Json::from(Object::new()).value_type(), JsonType::Object);
    assert_eq!(Json::from(Array::new()).value_type(), JsonType::Array);
}

#[test]
fn test_construction_by_copy_and_by_move() {
    let text = String::from("hello");
    let by_ref = Json::from(&text);
    let by_move = Json::from(text);
    assert_eq!(by_ref, by_move);

    let mut members = Object::new();
    members.insert("k".to_string(), Json::from(1));
    let copied = Json::from(&members);
    members.insert("extra".to_string(), Json::from(2));
    assert_eq!(copied.len(), 1);
    assert_eq!(Json::from(members).len(), 2);

    let items: Array = vec![Json::from(1), Json::from(2)];
    let copied = Json::from(&items);
    assert_eq!(copied, Json::from(items));
}

#[test]
fn test_predicates() {
    let values = [
        Json::null(),
        Json::from(false),
        Json::from(0),
        Json::from(""),
        Json::object(),
        Json::array(),
    ];
    let flags: Vec<[bool; 6]> = values
        .iter()
        .map(|v| {
            [
                v.is_null(),
                v.is_boolean(),
                v.is_number(),
                v.is_string(),
                v.is_object(),
                v.is_array(),
            ]
        })
        .collect();

    for (i, row) in flags.iter().enumerate() {
        for (j, flag) in row.iter().enumerate() {
            assert_eq!(*flag, i == j, "value {i} predicate {j}");
        }
    }
}

#[test]
fn test_safe_extraction() {
    assert!(Json::from(true).as_bool());
    assert_eq!(Json::from(42).as_int(), 42);
    assert_eq!(Json::from(42).as_double(), 42.0);
    assert_eq!(Json::from(2.75).as_int(), 2);
    assert_eq!(Json::from(2.75).as_double(), 2.75);
    assert_eq!(Json::from("abc").as_string(), "abc");
}

#[test]
fn test_default_on_mismatch() {
    let others = [
        Json::null(),
        Json::from(1),
        Json::from("true"),
        Json::object(),
        Json::array(),
    ];
    for v in &others {
        assert!(!v.as_bool(), "{v:?}");
    }

    for v in [Json::null(), Json::from(true), Json::from("7"), Json::array()] {
        assert_eq!(v.as_int(), 0);
        assert_eq!(v.as_double(), 0.0);
    }

    for v in [Json::null(), Json::from(false), Json::from(7), Json::object()] {
        assert_eq!(v.as_string(), "");
    }
}

#[test]
fn test_number_sub_kind_is_preserved() {
    assert_eq!(Json::from(3).as_number().map(Number::is_int), Some(true));
    assert_eq!(Json::from(3.0).as_number().map(Number::is_double), Some(true));
    assert_eq!(Json::from(3u8).as_number().map(Number::is_int), Some(true));
    assert_eq!(Json::from(0.5f32).as_number().map(Number::is_double), Some(true));
    assert!(Json::from("3").as_number().is_none());
}

#[test]
fn test_numeric_cross_kind_equality() {
    assert_eq!(Json::from(1), Json::from(1.0));
    assert_ne!(Json::from(1), Json::from(2));
    assert_ne!(Json::from(f64::NAN), Json::from(f64::NAN));
}

#[test]
fn test_scalar_equality() {
    assert_eq!(Json::null(), Json::null());
    assert_eq!(Json::from(true), Json::from(true));
    assert_ne!(Json::from(true), Json::from(false));
    assert_eq!(Json::from("a"), Json::from(String::from("a")));
    assert_ne!(Json::from("a"), Json::from("b"));
}

#[test]
fn test_differing_kinds_never_equal() {
    assert_ne!(Json::null(), Json::from(false));
    assert_ne!(Json::from(0), Json::from(false));
    assert_ne!(Json::from("1"), Json::from(1));
    assert_ne!(Json::object(), Json::array());
    assert_ne!(Json::array(), Json::null());
}

#[test]
fn test_structural_equality_for_containers() {
    assert_eq!(point(1, 2), point(1, 2));
    assert_ne!(point(1, 2), point(1, 3));

    let mut a = Json::array();
    a[0] = point(1, 2);
    a[1] = Json::from("tail");
    let mut b = Json::array();
    b[0] = point(1, 2);
    b[1] = Json::from("tail");
    assert_eq!(a, b);

    b[0]["y"] = Json::from(99);
    assert_ne!(a, b);
}

#[test]
fn test_object_equality_ignores_insertion_order() {
    let mut a = Json::object();
    a["first"] = Json::from(1);
    a["second"] = Json::from(2);
    let mut b = Json::object();
    b["second"] = Json::from(2);
    b["first"] = Json::from(1);
    assert_eq!(a, b);
}

#[test]
fn test_array_equality_respects_order_and_length() {
    let a: Json = vec![Json::from(1), Json::from(2)].into();
    let b: Json = vec![Json::from(2), Json::from(1)].into();
    let c: Json = vec![Json::from(1), Json::from(2), Json::null()].into();
    assert_ne!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_clone_is_deep_and_independent() {
    let mut original = Json::null();
    original["list"][2] = Json::from("x");
    original["nested"]["flag"] = Json::from(true);

    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy["list"][2] = Json::from("changed");
    copy["nested"]["new"] = Json::from(1);
    assert_eq!(original["list"][2].as_string(), "x");
    assert!(original["nested"]["new"].is_null());
    assert_ne!(copy, original);
}

#[test]
fn test_clone_of_shared_leaves_is_identity() {
    for v in [Json::null(), Json::from(true), Json::from(false)] {
        let copy = v.clone();
        assert!(copy.ptr_eq(&v));
        assert_eq!(copy, v);
    }
    let n = Json::from(5);
    assert!(!n.clone().ptr_eq(&n));
}

#[test]
fn test_take_moves_value_out() {
    let mut slot = point(3, 4);
    let moved = slot.take();
    assert!(slot.is_null());
    assert_eq!(moved, point(3, 4));
}

#[test]
fn test_container_accessors() {
    let mut v = point(1, 2);
    assert_eq!(v.len(), 2);
    assert!(!v.is_empty());
    assert_eq!(
        v.as_object().map(|m| m.keys().cloned().collect::<Vec<_>>()),
        Some(vec!["x".to_string(), "y".to_string()])
    );
    assert!(v.as_array().is_none());

    if let Some(map) = v.as_object_mut() {
        map.shift_remove("x");
    }
    assert_eq!(v.len(), 1);

    let mut arr: Json = (1..=3).map(Json::from).collect();
    if let Some(items) = arr.as_array_mut() {
        items.push(Json::from(4));
    }
    assert_eq!(arr.len(), 4);
    assert!(Json::from(7).is_empty());
    assert!(Json::from(true).as_array_mut().is_none());
}

#[test]
fn test_collect_into_object() {
    let v: Json = vec![("a", Json::from(1)), ("b", Json::from("two"))]
        .into_iter()
        .collect();
    assert!(v.is_object());
    assert_eq!(v["a"].as_int(), 1);
    assert_eq!(v["b"].as_string(), "two");
}

#[test]
fn test_strict_conversions() -> anyhow::Result<()> {
    assert!(bool::try_from(&Json::from(true))?);
    assert_eq!(i32::try_from(&Json::from(9.9))?, 9);
    assert_eq!(f64::try_from(&Json::from(9))?, 9.0);
    assert_eq!(String::try_from(&Json::from("s"))?, "s");

    let map = Object::try_from(point(1, 2))?;
    assert_eq!(map.len(), 2);
    let items = Array::try_from(Json::from(vec![Json::null()]))?;
    assert_eq!(items.len(), 1);
    Ok(())
}

#[test]
fn test_strict_conversion_errors() {
    let err = bool::try_from(&Json::from(1)).unwrap_err();
    assert_eq!(
        err,
        JsonError::TypeMismatch {
            expected: JsonType::Boolean,
            got: JsonType::Number,
        }
    );
    assert_eq!(err.to_string(), "Type error: expected boolean, got number");

    assert!(i32::try_from(&Json::null()).is_err());
    assert!(String::try_from(&Json::array()).is_err());
    assert!(Array::try_from(Json::object()).is_err());
    assert!(Object::try_from(Json::from("x")).is_err());
}

#[test]
fn test_debug_rendering() {
    let mut v = Json::null();
    v["name"] = Json::from("simple");
    v["ratio"] = Json::from(1.0);
    v["count"] = Json::from(1);
    v["tags"][1] = Json::from(false);
    assert_eq!(
        format!("{:?}", v),
        r#"{"name": "simple", "ratio": 1.0, "count": 1, "tags": [null, false]}"#
    );
    assert_eq!(format!("{}", Json::from("plain")), "plain");
    assert_eq!(format!("{}", Json::from(2)), "2");
}

#[test]
fn test_json_type_display() {
    assert_eq!(JsonType::Null.to_string(), "null");
    assert_eq!(JsonType::Object.to_string(), "object");
    assert_eq!(JsonType::Array.to_string(), "array");
}
