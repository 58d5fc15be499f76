//! Integration tests for the type-erased layer.
//!
//! Covers runtime resolution of references, error reporting and pipeline
//! semantics.

#![cfg(feature = "dynamic")]

use fnkit::dynamic::{
    DynFunction, Pipeline, Stage, TypeFactory, Value, compose, fn_return, fn_return_new, invoke,
};
use fnkit::invoke::{Constructible, InvokeError};
use rstest::rstest;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// =============================================================================
// Fixtures
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u32,
    lines: Vec<String>,
}

impl Constructible<(u32,)> for Order {
    fn construct((id,): (u32,)) -> Self {
        Self {
            id,
            lines: Vec::new(),
        }
    }
}

fn values_of(numbers: &[i32]) -> Vec<Value> {
    numbers.iter().copied().map(Value::new).collect()
}

// =============================================================================
// invoke
// =============================================================================

#[rstest]
fn test_invoke_resolves_function_reference() {
    let reference = Value::new(DynFunction::new(|first: i32, second: i32| first * second));
    let result = invoke(&reference, &values_of(&[6, 7])).unwrap();
    assert_eq!(result.extract::<i32>(), Some(42));
}

#[rstest]
fn test_invoke_resolves_constructor_reference() {
    let reference = Value::new(TypeFactory::of::<Order, (u32,)>());
    let result = invoke(&reference, &[Value::new(9_u32)]).unwrap();
    assert_eq!(
        result.extract::<Order>(),
        Some(Order {
            id: 9,
            lines: Vec::new()
        })
    );
}

#[rstest]
fn test_invoke_mixed_references_in_one_collection() {
    let references = vec![
        Value::new(DynFunction::new(|id: u32| id + 1)),
        Value::new(TypeFactory::of::<Order, (u32,)>()),
    ];

    let results: Vec<Value> = references
        .iter()
        .map(|reference| invoke(reference, &[Value::new(1_u32)]))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(results[0].extract::<u32>(), Some(2));
    assert_eq!(results[1].extract::<Order>().map(|order| order.id), Some(1));
}

#[rstest]
fn test_invoke_constructs_new_instance_each_time() {
    let reference = Value::new(TypeFactory::of::<Arc<u32>, (u32,)>());
    let first = invoke(&reference, &[Value::new(1_u32)]).unwrap();
    let second = invoke(&reference, &[Value::new(1_u32)]).unwrap();

    let first = first.extract::<Arc<u32>>().unwrap();
    let second = second.extract::<Arc<u32>>().unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

// =============================================================================
// Errors
// =============================================================================

#[rstest]
fn test_invoke_rejects_non_invocable_reference() {
    let error = invoke(&Value::new(String::from("text")), &[]).unwrap_err();
    assert!(matches!(error, InvokeError::NotInvocable { .. }));
    assert!(error.to_string().contains("neither callable nor constructible"));
}

#[rstest]
#[case(&[])]
#[case(&[1])]
#[case(&[1, 2, 3])]
fn test_invoke_reports_arity(#[case] numbers: &[i32]) {
    let reference = Value::new(DynFunction::new(|first: i32, second: i32| first - second).with_name("subtract"));
    let error = invoke(&reference, &values_of(numbers)).unwrap_err();
    assert_eq!(error, InvokeError::arity("subtract", 2, numbers.len()));
}

#[rstest]
fn test_invoke_reports_type_mismatch_position() {
    let reference = Value::new(TypeFactory::of::<Order, (u32,)>());
    let error = invoke(&reference, &[Value::new("seven")]).unwrap_err();

    let InvokeError::TypeMismatch { position, actual, .. } = error else {
        panic!("expected a type mismatch, got {error:?}");
    };
    assert_eq!(position, 0);
    assert_eq!(actual, "&str");
}

#[rstest]
fn test_user_function_result_is_returned_unchanged() {
    let parse = DynFunction::new(|text: String| text.parse::<u8>().map_err(|error| error.to_string()));
    let result = parse.call(&[Value::new("300".to_string())]).unwrap();
    assert!(result.extract::<Result<u8, String>>().unwrap().is_err());
}

// =============================================================================
// Pipelines
// =============================================================================

#[rstest]
fn test_pipeline_labels_show_nesting() {
    let pipeline = compose([
        Stage::call(|inner: String| format!("f({inner})")),
        Stage::call(|inner: String| format!("g({inner})")),
        Stage::call(|x: i32, y: i32, z: i32| format!("h({x}, {y}, {z})")),
    ]);

    let result = pipeline.call(&values_of(&[1, 2, 3])).unwrap();
    assert_eq!(result.extract::<String>().unwrap(), "f(g(h(1, 2, 3)))");
}

#[rstest]
fn test_pipeline_single_stage_equals_stage() {
    let stage = Stage::call(|value: i32| value * 5);
    let pipeline = compose([stage.clone()]);

    let direct = stage.invoke(&values_of(&[3])).unwrap();
    let composed = pipeline.call(&values_of(&[3])).unwrap();
    assert_eq!(direct.extract::<i32>(), composed.extract::<i32>());
}

#[rstest]
fn test_pipeline_mixes_construct_and_call_stages() {
    let pipeline = compose([
        Stage::call(|order: Order| format!("order #{}", order.id)),
        Stage::construct::<Order, (u32,)>(),
        Stage::call(|value: u32| value * 10),
    ]);

    let result = pipeline.call(&[Value::new(4_u32)]).unwrap();
    assert_eq!(result.extract::<String>().unwrap(), "order #40");
}

#[rstest]
fn test_pipeline_stops_at_first_error() {
    let outer_calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&outer_calls);
    let pipeline = compose([
        Stage::call(move |value: i32| {
            counted.fetch_add(1, Ordering::SeqCst);
            value
        }),
        Stage::call(|text: String| text.len()),
    ]);

    let error = pipeline.call(&values_of(&[1])).unwrap_err();

    assert!(matches!(error, InvokeError::TypeMismatch { .. }));
    assert_eq!(outer_calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn test_pipeline_intermediate_type_mismatch() {
    let pipeline = compose([
        Stage::call(|text: String| text),
        Stage::call(|value: i32| value + 1),
    ]);

    let error = pipeline.call(&values_of(&[1])).unwrap_err();
    assert!(matches!(
        error,
        InvokeError::TypeMismatch {
            position: 0,
            expected: "alloc::string::String",
            actual: "i32",
            ..
        }
    ));
}

#[rstest]
fn test_pipeline_runs_stages_right_to_left() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let record = |label: &'static str| {
        let order = Arc::clone(&order);
        Stage::call(move |value: i32| {
            order.lock().unwrap().push(label);
            value
        })
    };

    let pipeline = compose([record("outer"), record("middle"), record("inner")]);
    pipeline.call(&values_of(&[0])).unwrap();

    assert_eq!(*order.lock().unwrap(), vec!["inner", "middle", "outer"]);
}

#[rstest]
fn test_pipeline_nests_as_stage() {
    let inner: Pipeline = compose([
        Stage::call(|value: i32| value + 1),
        Stage::call(|first: i32, second: i32| first * second),
    ]);
    let outer = compose([Stage::call(|value: i32| value.to_string()), inner.into_stage()]);

    let result = outer.call(&values_of(&[3, 4])).unwrap();
    assert_eq!(result.extract::<String>().unwrap(), "13");
}

#[rstest]
fn test_pipeline_stage_list_is_snapshot() {
    let mut stages = vec![Stage::call(|value: i32| value + 1)];
    let pipeline = compose(stages.clone());
    stages.push(Stage::call(|value: i32| value * 100));

    assert_eq!(pipeline.len(), 1);
    let result = pipeline.call(&values_of(&[1])).unwrap();
    assert_eq!(result.extract::<i32>(), Some(2));
}

#[rstest]
fn test_pipeline_resolved_from_references() {
    let references = [
        Value::new(DynFunction::new(|value: u32| value * 2)),
        Value::new(TypeFactory::of::<Box<u32>, (u32,)>()),
    ];
    let stages = references
        .iter()
        .map(Stage::try_from)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    let pipeline = compose(vec![
        Stage::call(|boxed: Box<u32>| *boxed + 1),
        stages[1].clone(),
        stages[0].clone(),
    ]);

    let result = pipeline.call(&[Value::new(5_u32)]).unwrap();
    assert_eq!(result.extract::<u32>(), Some(11));
}

#[rstest]
fn test_empty_pipeline() {
    let pipeline = compose(Vec::new());
    assert!(pipeline.is_empty());

    let result = pipeline.call(&[Value::new("first"), Value::new("second")]).unwrap();
    assert_eq!(result.extract::<&str>(), Some("first"));
    assert_eq!(pipeline.call(&[]).unwrap_err(), InvokeError::EmptyArguments);
}

// =============================================================================
// Thunks
// =============================================================================

#[rstest]
fn test_dynamic_fn_return_reinvokes() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);
    let next = fn_return(DynFunction::new(move || counted.fetch_add(1, Ordering::SeqCst) + 1));

    assert_eq!(next().unwrap().extract::<usize>(), Some(1));
    assert_eq!(next().unwrap().extract::<usize>(), Some(2));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[rstest]
fn test_dynamic_fn_return_new_instances_are_independent() {
    let fresh = fn_return_new(TypeFactory::of::<Order, (u32,)>(), vec![Value::new(7_u32)]);

    let mut first = fresh().unwrap().into_inner::<Order>().unwrap();
    let second = fresh().unwrap().into_inner::<Order>().unwrap();
    first.lines.push("widget".to_string());

    assert_eq!(first.id, second.id);
    assert!(second.lines.is_empty());
}

#[rstest]
fn test_dynamic_fn_return_new_reports_bad_arguments_on_call() {
    let fresh = fn_return_new(TypeFactory::of::<Order, (u32,)>(), Vec::new());
    let error = fresh().unwrap_err();
    assert!(matches!(error, InvokeError::Arity { expected: 1, actual: 0, .. }));
}
