//! State updates handed to views as setters.

use std::fmt;

/// A state update: either a replacement value or a function of the
/// previous value.
pub enum SetState<T> {
    Replace(T),
    Update(Box<dyn FnOnce(&T) -> T>),
}

impl<T> SetState<T> {
    /// Build an update computed from the previous value.
    pub fn update(f: impl FnOnce(&T) -> T + 'static) -> Self {
        SetState::Update(Box::new(f))
    }

    /// Compute the next value from `current`.
    pub fn apply(self, current: &T) -> T {
        match self {
            SetState::Replace(next) => next,
            SetState::Update(f) => f(current),
        }
    }

    /// Apply the update in place.
    pub fn apply_to(self, slot: &mut T) {
        let next = self.apply(slot);
        *slot = next;
    }
}

impl<T: fmt::Debug> fmt::Debug for SetState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetState::Replace(value) => f.debug_tuple("Replace").field(value).finish(),
            SetState::Update(_) => f.write_str("Update(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_ignores_current() {
        assert_eq!(SetState::Replace(5).apply(&1), 5);
    }

    #[test]
    fn test_update_sees_current() {
        let mut value = vec![1, 2];
        SetState::update(|prev: &Vec<i32>| {
            let mut next = prev.clone();
            next.push(3);
            next
        })
        .apply_to(&mut value);
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn test_debug_hides_closure() {
        assert_eq!(format!("{:?}", SetState::Replace(true)), "Replace(true)");
        assert_eq!(
            format!("{:?}", SetState::<bool>::update(|prev| !prev)),
            "Update(..)"
        );
    }
}
