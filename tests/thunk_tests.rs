//! Unit tests for `fn_return` and `fn_return_new`.

#![cfg(feature = "thunk")]

use fnkit::invoke::Constructible;
use fnkit::thunk::{fn_return, fn_return_new};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Account {
    owner: String,
    balance: i64,
}

impl Constructible<(String, i64)> for Account {
    fn construct((owner, balance): (String, i64)) -> Self {
        Self { owner, balance }
    }
}

// =============================================================================
// fn_return
// =============================================================================

#[rstest]
fn test_fn_return_defers_until_called() {
    let calls = Cell::new(0);
    let thunk = fn_return(|| calls.set(calls.get() + 1));

    assert_eq!(calls.get(), 0);
    thunk();
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_fn_return_reinvokes_on_every_call() {
    let counter = Cell::new(0);
    let next = fn_return(|| {
        counter.set(counter.get() + 1);
        counter.get()
    });

    let results: Vec<i32> = (0..3).map(|_| next()).collect();
    assert_eq!(results, vec![1, 2, 3]);
}

#[rstest]
fn test_fn_return_captures_by_value() {
    let mut greeting = String::from("hello");
    let thunk = {
        let captured = greeting.clone();
        fn_return(move || captured.clone())
    };
    greeting.push_str(", world");

    assert_eq!(thunk(), "hello");
    assert_eq!(greeting, "hello, world");
}

// =============================================================================
// fn_return_new
// =============================================================================

#[rstest]
fn test_fn_return_new_builds_from_captured_arguments() {
    let open = fn_return_new::<Account, _>(("ada".to_string(), 100));
    assert_eq!(
        open(),
        Account {
            owner: "ada".to_string(),
            balance: 100
        }
    );
}

#[rstest]
fn test_fn_return_new_instances_are_distinct() {
    let open = fn_return_new!(Account, "ada".to_string(), 100);

    let mut first = open();
    let second = open();
    first.balance -= 40;

    assert_eq!(first.balance, 60);
    assert_eq!(second.balance, 100);
}

#[rstest]
fn test_fn_return_new_arguments_are_snapshot() {
    let mut owner = "ada".to_string();
    let open = fn_return_new!(Account, owner.clone(), 0);
    owner.push_str(" lovelace");

    assert_eq!(open().owner, "ada");
}

#[rstest]
fn test_fn_return_new_without_arguments() {
    let fresh = fn_return_new!(Vec<u8>);
    let mut first = fresh();
    first.push(1);

    assert!(fresh().is_empty());
}
