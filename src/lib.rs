// ============================================================================
// Ternary Status Library
// Rounding status reporting for arbitrary-precision arithmetic
// ============================================================================

//! # Ternary Status
//!
//! Storage and transport for the *ternary return value* of rounded
//! arithmetic: zero when a result is exact, positive when it was rounded up,
//! negative when it was rounded down.
//!
//! ## Features
//!
//! - **Per-thread channel** (`get_retval` / `set_retval`) for code that
//!   reports the status out of band
//! - **Explicit cells** (`TernaryStatusCell`) shareable between threads
//! - **`Rounded<T>`** for returning the value and its status together
//! - Optional **serde** configuration loading and **tracing** subscriber setup
//!
//! ## Example
//!
//! ```rust
//! use ternary_status::prelude::*;
//!
//! set_retval(1);
//! assert_eq!(get_retval(), 1);
//!
//! let cell = TernaryStatusCell::new();
//! let value = Rounded::new(10, TernaryStatus::ROUNDED_DOWN).record_into(&cell);
//! assert_eq!(value, 10);
//! assert!(cell.get_status().is_rounded_down());
//! ```

#[cfg(feature = "logging")]
pub mod logging;
pub mod status;

// Re-exports for convenience
pub mod prelude {
    pub use crate::status::{
        get_retval, set_retval, take_retval, with_retval, Rounded, StatusCellConfig,
        StatusError, StatusResult, TernaryStatus, TernaryStatusCell,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_scenarios_on_channel() {
        // Runs on a fresh thread so the channel starts at its default
        thread::spawn(|| {
            assert_eq!(get_retval(), 0);

            set_retval(1);
            assert_eq!(get_retval(), 1);

            set_retval(-1);
            set_retval(0);
            assert_eq!(get_retval(), 0);

            set_retval(42);
            assert_eq!(get_retval(), 42);
            assert_eq!(get_retval(), 42);
        })
        .join()
        .unwrap();
    }

    #[test]
    fn test_status_flows_from_library_to_caller() {
        // A library routine reports through the channel, the caller reads it
        fn halve(n: i32) -> i32 {
            Rounded::new(n / 2, TernaryStatus::from_ordering((n / 2 * 2).cmp(&n)))
                .publish()
        }

        assert_eq!(halve(8), 4);
        assert!(TernaryStatus::from(get_retval()).is_exact());

        assert_eq!(halve(9), 4);
        assert!(TernaryStatus::from(get_retval()).is_rounded_down());
    }

    #[test]
    fn test_explicit_cell_shared_by_workers() {
        let cell = Arc::new(TernaryStatusCell::from_config(
            &StatusCellConfig::new().with_initial(TernaryStatus::ROUNDED_UP),
        ));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cell = Arc::clone(&cell);
                thread::spawn(move || {
                    // Worker threads never see each other's channel writes
                    set_retval(5);
                    cell.get()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }

    proptest! {
        #[test]
        fn prop_cell_round_trip(v in any::<i32>()) {
            let cell = TernaryStatusCell::new();
            cell.set(v);
            prop_assert_eq!(cell.get(), v);
        }

        #[test]
        fn prop_channel_round_trip(v in any::<i32>()) {
            set_retval(v);
            prop_assert_eq!(get_retval(), v);
            prop_assert_eq!(get_retval(), v);
        }

        #[test]
        fn prop_classification_follows_sign(v in any::<i32>()) {
            let status = TernaryStatus::new(v);
            prop_assert_eq!(status.direction(), v.cmp(&0));
            prop_assert_eq!(status.code(), v);
        }
    }

    quickcheck! {
        fn qc_last_write_wins(a: i32, b: i32) -> bool {
            let cell = TernaryStatusCell::new();
            cell.set(a);
            cell.set(b);
            cell.get() == b
        }

        fn qc_with_retval_restores(outer: i32, inner: i32) -> bool {
            set_retval(outer);
            let seen = with_retval(inner, get_retval);
            seen == inner && get_retval() == outer
        }
    }
}
