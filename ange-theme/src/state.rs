use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// The interaction state a three-state theme is looked up by.
///
/// The discriminants are the array slots of [StateSet]: 0 normal, 1 hover,
/// 2 active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetState {
    /// Idle, not under the pointer.
    Normal = 0,
    /// Under the pointer.
    Hover = 1,
    /// Pressed or focused for input.
    Active = 2,
}

impl WidgetState {
    /// All states in slot order.
    pub const ALL: [WidgetState; 3] = [WidgetState::Normal, WidgetState::Hover, WidgetState::Active];

    /// Slot of this state inside a [StateSet].
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Exactly one value per [WidgetState].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSet<T>(pub [T; 3]);

impl<T> StateSet<T> {
    /// Create a set from its normal, hover and active values.
    pub const fn new(normal: T, hover: T, active: T) -> Self {
        Self([normal, hover, active])
    }

    /// Value for the normal state.
    pub const fn normal(&self) -> &T {
        &self.0[0]
    }

    /// Value for the hover state.
    pub const fn hover(&self) -> &T {
        &self.0[1]
    }

    /// Value for the active state.
    pub const fn active(&self) -> &T {
        &self.0[2]
    }

    /// Iterate over `(state, value)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (WidgetState, &T)> {
        WidgetState::ALL.into_iter().zip(self.0.iter())
    }
}

impl<T: Copy> StateSet<T> {
    /// Use the same value for every state.
    pub const fn splat(value: T) -> Self {
        Self([value; 3])
    }
}

impl<T> Index<WidgetState> for StateSet<T> {
    type Output = T;

    fn index(&self, state: WidgetState) -> &T {
        &self.0[state.index()]
    }
}

impl<T> IndexMut<WidgetState> for StateSet<T> {
    fn index_mut(&mut self, state: WidgetState) -> &mut T {
        &mut self.0[state.index()]
    }
}

impl<T> Index<usize> for StateSet<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for StateSet<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_slots() {
        let mut set = StateSet::new('n', 'h', 'a');
        assert_eq!(set[WidgetState::Hover], 'h');
        assert_eq!(set[2], 'a');

        set[WidgetState::Active] = 'x';
        assert_eq!(*set.active(), 'x');

        let states: Vec<_> = set.iter().map(|(state, _)| state).collect();
        assert_eq!(states, WidgetState::ALL);
    }
}
