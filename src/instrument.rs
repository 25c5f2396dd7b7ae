use crate::errors::*;
use crate::storeclient::StoreClient;
use crate::value::Value;
use serde::Serialize;
use std::fmt::Write as _;
use tracing::debug;

/// An instrumented operation: one value in, one value out, with a qualified
/// name under which its counters and history lists are grouped in the store.
/// Decorators wrap anything implementing this and implement it themselves,
/// so instrumentation composes explicitly:
///
/// `CallHistory::new(CountCalls::new(op))`
pub trait Operation<S: StoreClient> {
    /// Grouping key for the counter and history lists, e.g. "Cache.store"
    fn qualified_name(&self) -> &str;

    fn call(&mut self, store: &mut S, input: Value) -> Result<Value>;
}

/// Key of the inputs log for an operation name.
pub fn inputs_key(name: &str) -> String {
    format!("{}:inputs", name)
}

/// Key of the outputs log for an operation name.
pub fn outputs_key(name: &str) -> String {
    format!("{}:outputs", name)
}

/// Counts invocations of the wrapped operation under its qualified name.
/// The increment happens before the wrapped logic runs, so calls that fail
/// are counted too.
pub struct CountCalls<O> {
    inner: O,
}

impl<O> CountCalls<O> {
    pub fn new(inner: O) -> CountCalls<O> {
        CountCalls { inner }
    }
}

impl<S: StoreClient, O: Operation<S>> Operation<S> for CountCalls<O> {
    fn qualified_name(&self) -> &str {
        self.inner.qualified_name()
    }

    fn call(&mut self, store: &mut S, input: Value) -> Result<Value> {
        let count = store.incr(self.inner.qualified_name())?;
        debug!("{} call number {}", self.inner.qualified_name(), count);
        self.inner.call(store, input)
    }
}

/// Logs the stringified input and output of each call of the wrapped
/// operation to a pair of lists in the store.
pub struct CallHistory<O> {
    inner: O,
}

impl<O> CallHistory<O> {
    pub fn new(inner: O) -> CallHistory<O> {
        CallHistory { inner }
    }
}

impl<S: StoreClient, O: Operation<S>> Operation<S> for CallHistory<O> {
    fn qualified_name(&self) -> &str {
        self.inner.qualified_name()
    }

    fn call(&mut self, store: &mut S, input: Value) -> Result<Value> {
        let inputs = inputs_key(self.inner.qualified_name());
        let outputs = outputs_key(self.inner.qualified_name());

        store.rpush(&inputs, input.to_string().as_bytes())?;
        let output = self.inner.call(store, input)?;
        store.rpush(&outputs, output.to_string().as_bytes())?;
        Ok(output)
    }
}

/// One input/output pair from an operation's history.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub input: String,
    pub output: String,
}

/// How many times the named operation was called. 0 when it never was.
pub fn call_count<S: StoreClient>(store: &mut S, name: &str) -> Result<u64> {
    match store.get(name)? {
        Some(raw) => {
            let text = String::from_utf8(raw)?;
            Ok(text.parse::<u64>()?)
        }
        None => Ok(0),
    }
}

/// The named operation's history, inputs zipped with outputs in call order.
pub fn history<S: StoreClient>(store: &mut S, name: &str) -> Result<Vec<HistoryEntry>> {
    let inputs = store.list(&inputs_key(name))?;
    let outputs = store.list(&outputs_key(name))?;
    Ok(inputs
        .into_iter()
        .zip(outputs.into_iter())
        .map(|(input, output)| HistoryEntry {
            input: String::from_utf8_lossy(&input).into_owned(),
            output: String::from_utf8_lossy(&output).into_owned(),
        })
        .collect())
}

/// Formatted transcript of the named operation's calls:
///
/// ```text
/// Cache.store was called 2 times:
/// Cache.store(first) -> 0b7ba6b9-...
/// Cache.store(second) -> 7a0c5dc0-...
/// ```
pub fn replay<S: StoreClient>(store: &mut S, name: &str) -> Result<String> {
    let count = call_count(store, name)?;
    let mut transcript = format!("{} was called {} times:\n", name, count);
    for entry in history(store, name)? {
        // write! to a String cannot fail
        let _ = writeln!(transcript, "{}({}) -> {}", name, entry.input, entry.output);
    }
    Ok(transcript)
}
