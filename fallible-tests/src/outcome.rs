use fallible::Outcome;
use proptest::prelude::*;

pub fn arb_outcome() -> impl Strategy<Value = Outcome<i64, String>> {
    prop_oneof![
        any::<i64>().prop_map(Outcome::ok),
        any::<String>().prop_map(Outcome::err),
    ]
}
