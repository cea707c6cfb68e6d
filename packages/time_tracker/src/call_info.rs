//! Identifying data of a timed call.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;

/// An opaque argument value carried through to the record of a call.
///
/// The tracker never interprets argument values; sinks only format them with `Debug`.
pub type ArgValue = Arc<dyn Debug + Send + Sync>;

/// Describes one invocation of a timed unit of work: its name and the arguments it
/// was called with.
///
/// # Examples
///
/// ```
/// use time_tracker::CallInfo;
///
/// let call = CallInfo::new("resize").arg(640).arg(480).kwarg("filter", "lanczos");
///
/// assert_eq!(call.name(), "resize");
/// assert_eq!(call.args().len(), 2);
/// assert!(call.kwargs().contains_key("filter"));
/// ```
#[derive(Clone, Debug)]
pub struct CallInfo {
    name: String,
    args: Vec<ArgValue>,
    kwargs: BTreeMap<String, ArgValue>,
}

impl CallInfo {
    /// Creates call data with the given name and no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            kwargs: BTreeMap::new(),
        }
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Debug + Send + Sync + 'static) -> Self {
        self.args.push(Arc::new(value));
        self
    }

    /// Appends a positional argument that is already shared, without copying it.
    #[must_use]
    pub fn arg_value(mut self, value: ArgValue) -> Self {
        self.args.push(value);
        self
    }

    /// Sets a keyword argument, replacing any earlier value for the same key.
    #[must_use]
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Debug + Send + Sync + 'static) -> Self {
        self.kwargs.insert(key.into(), Arc::new(value));
        self
    }

    /// The name of the call.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Positional arguments, in call order.
    #[must_use]
    pub fn args(&self) -> &[ArgValue] {
        &self.args
    }

    /// Keyword arguments, ordered by key.
    #[must_use]
    pub fn kwargs(&self) -> &BTreeMap<String, ArgValue> {
        &self.kwargs
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(CallInfo: Send, Sync, Clone);

    #[test]
    fn positional_args_keep_call_order() {
        let call = CallInfo::new("f").arg(3).arg("x").arg(1.5);

        let rendered: Vec<String> = call.args().iter().map(|a| format!("{a:?}")).collect();
        assert_eq!(rendered, ["3", "\"x\"", "1.5"]);
    }

    #[test]
    fn arg_value_shares_without_copying() {
        let shared: ArgValue = Arc::new(vec![1, 2]);

        let call = CallInfo::new("f").arg(0).arg_value(Arc::clone(&shared));

        assert_eq!(format!("{:?}", call.args()), "[0, [1, 2]]");
        assert!(Arc::ptr_eq(&call.args()[1], &shared));
    }

    #[test]
    fn kwarg_replaces_same_key() {
        let call = CallInfo::new("f").kwarg("mode", 1).kwarg("mode", 2);

        assert_eq!(call.kwargs().len(), 1);
        assert_eq!(format!("{:?}", call.kwargs()), "{\"mode\": 2}");
    }

    #[test]
    fn new_has_no_arguments() {
        let call = CallInfo::new("idle");

        assert_eq!(call.name(), "idle");
        assert!(call.args().is_empty());
        assert!(call.kwargs().is_empty());
    }
}
