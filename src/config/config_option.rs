use crate::{
    context::SessionState,
    types::err::{self},
};

/// An option, with bounds and the last state of a session at which the option may be revised.
#[derive(Clone)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub max_state: SessionState,
    pub value: T,
}

impl<T: Clone> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is within bounds and `state` is no later than the last state at which the option may be revised.
    pub fn set(&mut self, value: T, state: SessionState) -> Result<(), err::StateError> {
        if state.stage() > self.max_state.stage() {
            return Err(err::StateError::ConfigurationLocked(self.name));
        }
        if value < self.min || value > self.max {
            return Err(err::StateError::OutOfBounds(self.name));
        }
        self.value = value;
        Ok(())
    }
}
