use fallible::Maybe;
use proptest::prelude::*;

pub fn arb_maybe() -> impl Strategy<Value = Maybe<i64>> {
    prop_oneof![Just(Maybe::none()), any::<i64>().prop_map(Maybe::some)]
}
