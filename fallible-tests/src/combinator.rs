#[cfg(test)]
mod tests {
    use fallible::{compose, constant, flip, identity, pipe, tap, tap_detached};
    use std::cell::Cell;

    fn subtract(minuend: i64, subtrahend: i64) -> i64 {
        minuend - subtrahend
    }

    #[test]
    fn identity_returns_the_input() {
        assert_eq!(identity(42), 42);
        assert_eq!(identity("hello"), "hello");
    }

    #[test]
    fn constant_ignores_its_argument() {
        let always_five = constant::<_, i64>(5);
        assert_eq!(always_five(100), 5);
        assert_eq!(always_five(-1), 5);
    }

    #[test]
    fn flip_reverses_argument_order() {
        let flipped = flip(subtract);
        assert_eq!(flipped(3, 10), subtract(10, 3));
    }

    #[test]
    fn double_flip_is_the_original() {
        let twice = flip(flip(subtract));
        assert_eq!(twice(10, 3), subtract(10, 3));
    }

    #[test]
    fn tap_observes_and_passes_the_value_through() {
        let seen = Cell::new(0);
        let v = tap(|n| seen.set(*n), 9);
        assert_eq!((v, seen.get()), (9, 9));
    }

    #[test]
    fn tap_swallows_a_panicking_observer() {
        let v = tap(|_: &i64| panic!("observer failed"), 42);
        assert_eq!(v, 42);
    }

    #[tokio::test]
    async fn detached_tap_runs_the_effect_without_blocking() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let observed = tap_detached(
            move |n| {
                let n = *n;
                async move {
                    tx.send(n).ok();
                }
            },
            7,
        );
        assert_eq!(observed, 7);
        assert_eq!(rx.await.unwrap(), 7);
    }

    #[tokio::test]
    async fn detached_tap_failure_is_invisible_to_the_caller() {
        let v = tap_detached(|_| async { panic!("detached observer failed") }, 5);
        assert_eq!(v, 5);
        tokio::task::yield_now().await;
    }

    #[test]
    fn compose_chains_left_to_right() {
        let pipeline = compose(|s: String| s + "a").compose(|s| s + "b");
        assert_eq!(pipeline.call("x".to_string()), "xab");
    }

    #[test]
    fn composed_pipelines_are_reusable() {
        let pipeline = compose(|n: i64| n + 1).compose(|n| n * 2);
        assert_eq!(pipeline.call(1), 4);
        assert_eq!(pipeline.call(2), 6);
    }

    #[test]
    fn each_compose_yields_a_fresh_pipeline() {
        let base = compose(|n: i64| n + 1);
        let extended = base.compose(|n| n * 10);
        assert_eq!(extended.call(4), 50);
    }

    #[test]
    fn pipe_threads_a_value_through_transforms() {
        let out = pipe(2).to(|n| n + 3).to(|n| n.to_string()).exec();
        assert_eq!(out, "5");
    }
}
