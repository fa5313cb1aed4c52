//! The wrapper type and metadata-copying helpers.

use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Descriptive attributes carried by a [`Wrapper`]: a name, a doc string,
/// and a free-form attribute map.
///
/// All parts are optional; helpers that copy metadata skip whatever is
/// missing rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    /// The wrapper's name.
    pub name: Option<String>,
    /// The wrapper's documentation string.
    pub doc: Option<String>,
    /// Custom attributes, merged (not replaced) when copied across
    /// wrappers.
    pub attributes: HashMap<String, String>,
}

impl Metadata {
    /// Creates metadata carrying only a name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolshed::wrap::Metadata;
    ///
    /// let metadata = Metadata::named("add");
    /// assert_eq!(metadata.name.as_deref(), Some("add"));
    /// ```
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Adds a documentation string.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Adds a custom attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// An assignable metadata field.
///
/// Names which descriptive attributes [`update_wrapper`] copies wholesale
/// from the wrapped object. The attribute map is not listed here because it
/// is always merged rather than assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The wrapper's name.
    Name,
    /// The wrapper's documentation string.
    Doc,
}

/// The default set of fields copied by [`update_wrapper`] and [`wraps`].
pub const WRAPPER_ASSIGNMENTS: &[Field] = &[Field::Name, Field::Doc];

/// A callable paired with its metadata and an optional back reference to
/// the wrapper it wraps.
///
/// The callable is type-erased so that a chain can mix arbitrary functions
/// and closures sharing one signature. Wrappers are handed out as
/// `Rc<Wrapper<Arguments, Output>>` so that chains can share their links;
/// the back reference is interior-mutable so chains are assembled after
/// construction (that is what makes a loop constructible, and why
/// [`unwrap`](super::unwrap) checks for one).
///
/// # Type Parameters
///
/// * `Arguments` - The callable's argument; multi-argument functions take a
///   tuple
/// * `Output` - The callable's result
///
/// # Examples
///
/// ```rust
/// use toolshed::wrap::{Metadata, Wrapper};
///
/// let double = Wrapper::with_metadata(|x: i32| x * 2, Metadata::named("double"));
/// assert_eq!(double.call(21), 42);
/// assert_eq!(double.metadata().name.as_deref(), Some("double"));
/// assert!(double.wrapped().is_none());
/// ```
pub struct Wrapper<Arguments, Output> {
    function: Box<dyn Fn(Arguments) -> Output>,
    metadata: RefCell<Metadata>,
    wrapped: RefCell<Option<Rc<Wrapper<Arguments, Output>>>>,
}

impl<Arguments, Output> Wrapper<Arguments, Output> {
    /// Creates an anonymous wrapper around a callable.
    pub fn new(function: impl Fn(Arguments) -> Output + 'static) -> Rc<Self> {
        Self::with_metadata(function, Metadata::default())
    }

    /// Creates a wrapper around a callable with the given metadata.
    pub fn with_metadata(
        function: impl Fn(Arguments) -> Output + 'static,
        metadata: Metadata,
    ) -> Rc<Self> {
        Rc::new(Self {
            function: Box::new(function),
            metadata: RefCell::new(metadata),
            wrapped: RefCell::new(None),
        })
    }

    /// Invokes the underlying callable.
    ///
    /// Multi-argument functions take their arguments as a tuple.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toolshed::wrap::Wrapper;
    ///
    /// let add = Wrapper::new(|(x, y): (i32, i32)| x + y);
    /// assert_eq!(add.call((40, 2)), 42);
    /// ```
    pub fn call(&self, arguments: Arguments) -> Output {
        (self.function)(arguments)
    }

    /// A reference to the underlying callable.
    pub fn function(&self) -> &dyn Fn(Arguments) -> Output {
        self.function.as_ref()
    }

    /// The wrapper's current metadata.
    pub fn metadata(&self) -> Ref<'_, Metadata> {
        self.metadata.borrow()
    }

    /// The wrapper this one wraps, if a back reference has been recorded.
    pub fn wrapped(&self) -> Option<Rc<Self>> {
        self.wrapped.borrow().clone()
    }

    /// Records a back reference to the wrapped object.
    ///
    /// Usually called through [`update_wrapper`]; exposed for assembling
    /// chains by hand.
    pub fn set_wrapped(&self, inner: Rc<Self>) {
        *self.wrapped.borrow_mut() = Some(inner);
    }

    /// Whether this wrapper carries a back reference.
    pub fn is_wrapper(&self) -> bool {
        self.wrapped.borrow().is_some()
    }
}

impl<Arguments, Output> fmt::Debug for Wrapper<Arguments, Output> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Wrapper")
            .field("metadata", &*self.metadata.borrow())
            .field("is_wrapper", &self.is_wrapper())
            .finish_non_exhaustive()
    }
}

/// Makes a wrapping object appear and act like the underlying wrapped
/// object.
///
/// Copies each field in `assigned` from `wrapped` to `wrapper` when the
/// wrapped object actually carries it (missing fields are skipped, never an
/// error), merges the wrapped object's attribute map into the wrapper's,
/// and finally records the back reference from wrapper to wrapped.
///
/// The back reference is stored last so that wrapping an already-wrapped
/// object never copies a stale reference over it.
///
/// # Examples
///
/// ```rust
/// use toolshed::wrap::{Metadata, WRAPPER_ASSIGNMENTS, Wrapper, update_wrapper};
///
/// let add = Wrapper::with_metadata(
///     |(x, y): (i32, i32)| x + y,
///     Metadata::named("add").with_doc("Adds two objects."),
/// );
/// let logged = Wrapper::new(|(x, y): (i32, i32)| x + y);
///
/// update_wrapper(&logged, &add, WRAPPER_ASSIGNMENTS);
/// assert_eq!(logged.metadata().name.as_deref(), Some("add"));
/// assert_eq!(logged.metadata().doc.as_deref(), Some("Adds two objects."));
/// ```
pub fn update_wrapper<Arguments, Output>(
    wrapper: &Rc<Wrapper<Arguments, Output>>,
    wrapped: &Rc<Wrapper<Arguments, Output>>,
    assigned: &[Field],
) {
    {
        let source = wrapped.metadata.borrow();
        let mut target = wrapper.metadata.borrow_mut();
        for field in assigned {
            match field {
                Field::Name => {
                    if let Some(name) = &source.name {
                        target.name = Some(name.clone());
                    }
                }
                Field::Doc => {
                    if let Some(doc) = &source.doc {
                        target.doc = Some(doc.clone());
                    }
                }
            }
        }
        for (key, value) in &source.attributes {
            target.attributes.insert(key.clone(), value.clone());
        }
    }
    wrapper.set_wrapped(Rc::clone(wrapped));
}

/// The constructor form of [`update_wrapper`].
///
/// Builds a new wrapper around `function`, copies the default
/// [`WRAPPER_ASSIGNMENTS`] fields from `wrapped`, and records the back
/// reference.
///
/// # Examples
///
/// ```rust
/// use toolshed::wrap::{Metadata, Wrapper, wraps};
///
/// let add = Wrapper::with_metadata(|(x, y): (i32, i32)| x + y, Metadata::named("add"));
/// let noisy = wraps(&add, |(x, y): (i32, i32)| x + y + 1);
///
/// assert_eq!(noisy.metadata().name.as_deref(), Some("add"));
/// assert!(noisy.is_wrapper());
/// ```
pub fn wraps<Arguments, Output>(
    wrapped: &Rc<Wrapper<Arguments, Output>>,
    function: impl Fn(Arguments) -> Output + 'static,
) -> Rc<Wrapper<Arguments, Output>> {
    let wrapper = Wrapper::new(function);
    update_wrapper(&wrapper, wrapped, WRAPPER_ASSIGNMENTS);
    wrapper
}
