//! Right-to-left composition of dynamic stages.

use std::fmt;
use std::sync::Arc;

use super::{DynFunction, Stage, TypeFactory, Value};
use crate::invoke::{InvokeError, Result};

/// An immutable, right-to-left sequence of [`Stage`]s.
///
/// Calling a pipeline passes the full argument list to the last stage, then
/// feeds each result, as a single argument, to the stage on its left. The
/// stages are a snapshot taken when the pipeline was built; cloning a
/// pipeline shares that snapshot.
///
/// A pipeline without stages returns its first argument.
#[derive(Clone)]
pub struct Pipeline {
    stages: Arc<[Stage]>,
}

/// Composes `stages` right-to-left into a [`Pipeline`].
///
/// # Examples
///
/// ```
/// use fnkit::dynamic::{Stage, Value, compose};
///
/// let pipeline = compose([
///     Stage::call(|inner: String| format!("f({inner})")),
///     Stage::call(|inner: String| format!("g({inner})")),
///     Stage::call(|x: i32, y: i32, z: i32| format!("h({x}, {y}, {z})")),
/// ]);
///
/// let result = pipeline
///     .call(&[Value::new(1_i32), Value::new(2_i32), Value::new(3_i32)])
///     .unwrap();
/// assert_eq!(result.extract::<String>().unwrap(), "f(g(h(1, 2, 3)))");
/// ```
pub fn compose<I>(stages: I) -> Pipeline
where
    I: IntoIterator<Item = Stage>,
{
    let stages: Arc<[Stage]> = stages.into_iter().collect();
    trace_event!(target: "fnkit::dynamic", stages = stages.len(), "composed pipeline");
    Pipeline { stages }
}

impl Pipeline {
    /// Returns the stages, outermost first.
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Returns the number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Calls the pipeline with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a stage; later stages are not
    /// invoked. An empty pipeline called without arguments returns
    /// [`InvokeError::EmptyArguments`].
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        trace_event!(
            target: "fnkit::dynamic",
            stages = self.stages.len(),
            arguments = arguments.len(),
            "calling pipeline"
        );
        let mut remaining = self.stages.iter().rev();
        let Some(innermost) = remaining.next() else {
            return arguments.first().cloned().ok_or(InvokeError::EmptyArguments);
        };
        let seed = innermost.invoke(arguments)?;
        remaining.try_fold(seed, |accumulator, stage| {
            stage.invoke(std::slice::from_ref(&accumulator))
        })
    }

    /// Converts the pipeline into a variadic call stage, so pipelines nest.
    pub fn into_stage(self) -> Stage {
        Stage::Call(DynFunction::variadic("pipeline", move |arguments| {
            self.call(arguments)
        }))
    }
}

impl From<Pipeline> for Stage {
    fn from(pipeline: Pipeline) -> Self {
        pipeline.into_stage()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.stages.iter().map(Stage::name))
            .finish()
    }
}

/// Returns a zero-argument callable that calls `function` with no arguments
/// every time it is called.
///
/// # Examples
///
/// ```
/// use fnkit::dynamic::{DynFunction, fn_return};
///
/// let answer = fn_return(DynFunction::new(|| 42_u32));
/// assert_eq!(answer().unwrap().extract::<u32>(), Some(42));
/// ```
pub fn fn_return(function: DynFunction) -> impl Fn() -> Result<Value> {
    move || function.call(&[])
}

/// Returns a zero-argument callable that constructs a new instance from
/// `arguments` every time it is called.
///
/// `arguments` is captured once. Construction extracts fresh copies of every
/// argument, so instances never share state through them.
///
/// # Examples
///
/// ```
/// use fnkit::dynamic::{TypeFactory, Value, fn_return_new};
///
/// let fresh = fn_return_new(TypeFactory::of::<Vec<u8>, (usize,)>(), vec![Value::new(8_usize)]);
/// let first = fresh().unwrap().into_inner::<Vec<u8>>().unwrap();
/// assert!(first.capacity() >= 8);
/// ```
pub fn fn_return_new(factory: TypeFactory, arguments: Vec<Value>) -> impl Fn() -> Result<Value> {
    move || factory.construct(&arguments)
}
