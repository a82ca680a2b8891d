use std::collections::BTreeSet;

use hyperplanner_core::{build_filter, CourseField, FilterValue};
use proptest::prelude::*;

// One optional value per recognized attribute, plus noise keys.
fn arb_inputs() -> impl Strategy<Value = Vec<(String, String)>> {
    (
        prop::option::of("[a-z]{0,6}"),
        prop::option::of("[A-Z]{0,4}[0-9]{0,3}"),
        prop::option::of(prop::option::of(0.0f64..12.0)),
        prop::option::of("[A-Za-z ]{0,16}"),
        prop::collection::vec(("[a-z_]{1,10}", "[a-z0-9]{0,5}"), 0..4),
    )
        .prop_map(|(campus, code, credits, title, noise)| {
            let mut inputs = Vec::new();
            if let Some(v) = campus {
                inputs.push(("campus".to_string(), v));
            }
            if let Some(v) = code {
                inputs.push(("code".to_string(), v));
            }
            // Some(None) stands in for an empty credits parameter
            if let Some(v) = credits {
                inputs.push((
                    "credits".to_string(),
                    v.map(|n| n.to_string()).unwrap_or_default(),
                ));
            }
            if let Some(v) = title {
                inputs.push(("title".to_string(), v));
            }
            for (k, v) in noise {
                if CourseField::from_name(&k).is_none() {
                    inputs.push((k, v));
                }
            }
            inputs
        })
}

proptest! {
    /// Property: filter keys are exactly the recognized, non-empty inputs
    #[test]
    fn prop_key_set_is_recognized_non_empty(inputs in arb_inputs()) {
        let filter = build_filter(inputs.clone()).unwrap();

        let expected: BTreeSet<&str> = inputs
            .iter()
            .filter(|(k, v)| CourseField::from_name(k).is_some() && !v.is_empty())
            .map(|(k, _)| k.as_str())
            .collect();
        let actual: BTreeSet<&str> = filter.fields().into_iter().collect();

        prop_assert_eq!(actual, expected);
    }

    /// Property: input order never changes the resulting filter
    #[test]
    fn prop_order_independent(
        (inputs, shuffled) in arb_inputs().prop_flat_map(|inputs| {
            let shuffled = Just(inputs.clone()).prop_shuffle();
            (Just(inputs), shuffled)
        })
    ) {
        let a = build_filter(inputs).unwrap();
        let b = build_filter(shuffled).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Property: any formatted finite number parses back to the same credits
    #[test]
    fn prop_credits_round_trip(credits in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let filter = build_filter([("credits", credits.to_string())]).unwrap();
        prop_assert_eq!(
            filter.get(CourseField::Credits),
            Some(&FilterValue::Number(credits))
        );
    }

    /// Property: non-numeric credits always fail, regardless of other keys
    #[test]
    fn prop_bad_credits_rejected(junk in "[a-z]{1,8}", campus in "[a-z]{1,6}") {
        prop_assume!(junk.parse::<f64>().is_err());
        let result = build_filter([("campus", campus), ("credits", junk)]);
        prop_assert!(result.is_err());
    }
}
