//! Unwrap-chain traversal.

use std::rc::Rc;

use super::error::CycleError;
use super::wrapper::Wrapper;

/// Retrieves the object wrapped by `wrapper`, following the chain of back
/// references to reach the originally wrapped object.
///
/// # Errors
///
/// Returns [`CycleError`] if the same wrapper is encountered twice during
/// traversal; the error names the wrapper the traversal started from.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use toolshed::wrap::{Wrapper, unwrap, wraps};
///
/// let original = Wrapper::new(|x: i32| x);
/// let once = wraps(&original, |x: i32| x + 1);
/// let twice = wraps(&once, |x: i32| x + 2);
///
/// let found = unwrap(&twice).unwrap();
/// assert!(Rc::ptr_eq(&found, &original));
/// ```
pub fn unwrap<Arguments, Output>(
    wrapper: &Rc<Wrapper<Arguments, Output>>,
) -> Result<Rc<Wrapper<Arguments, Output>>, CycleError> {
    unwrap_until(wrapper, |_| false)
}

/// Like [`unwrap`], but stops early at the first wrapper the predicate
/// answers true for.
///
/// The predicate sees every wrapper that still has a back reference; a
/// chain's terminal object is returned without consulting it.
///
/// # Errors
///
/// Returns [`CycleError`] if the same wrapper is encountered twice during
/// traversal.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use toolshed::wrap::{Wrapper, unwrap_until, wraps};
///
/// let original = Wrapper::new(|x: i32| x);
/// let marked = wraps(&original, |x: i32| x + 1);
/// let outer = wraps(&marked, |x: i32| x + 2);
///
/// // Stop as soon as the traversal reaches the marked wrapper.
/// let found = unwrap_until(&outer, |current| Rc::ptr_eq(current, &marked));
/// assert!(Rc::ptr_eq(&found.unwrap(), &marked));
/// ```
pub fn unwrap_until<Arguments, Output, P>(
    wrapper: &Rc<Wrapper<Arguments, Output>>,
    stop: P,
) -> Result<Rc<Wrapper<Arguments, Output>>, CycleError>
where
    P: Fn(&Rc<Wrapper<Arguments, Output>>) -> bool,
{
    let mut current = Rc::clone(wrapper);
    // Wrappers are memoized by address, their only stable identity.
    let mut seen = vec![Rc::as_ptr(&current)];

    loop {
        let Some(next) = current.wrapped() else {
            return Ok(current);
        };
        if stop(&current) {
            return Ok(current);
        }
        let pointer = Rc::as_ptr(&next);
        if seen.contains(&pointer) {
            return Err(CycleError {
                wrapper_name: wrapper.metadata().name.clone(),
            });
        }
        seen.push(pointer);
        current = next;
    }
}
