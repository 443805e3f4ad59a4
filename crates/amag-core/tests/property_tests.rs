use amag_core::config::coerce_value;
use proptest::prelude::*;
use serde_json::Value;

proptest! {
    #[test]
    fn test_integer_strings_become_numbers(n in any::<i64>()) {
        prop_assert_eq!(coerce_value(&n.to_string()), Value::from(n));
    }

    #[test]
    fn test_alphabetic_strings_stay_strings(s in "[a-zA-Z][a-zA-Z0-9._-]{0,20}") {
        prop_assume!(s != "null");
        // Rust float parsing also accepts these spellings; they are not finite
        prop_assume!(!["inf", "infinity", "nan"].contains(&s.to_ascii_lowercase().as_str()));
        prop_assert_eq!(coerce_value(&s), Value::String(s.clone()));
    }

    #[test]
    fn test_finite_floats_become_numbers(f in -1.0e12f64..1.0e12) {
        let coerced = coerce_value(&f.to_string());
        let as_f64 = coerced.as_f64();
        prop_assert!(as_f64.is_some());
        prop_assert!((as_f64.unwrap() - f).abs() < 1e-6);
    }
}
