// Form state for the lookup screen.
// Tracks the id input, validation flag and the last lookup result.

use crate::api::{Post, User};

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }
}

#[cfg(test)]
impl<T> LoadingState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// A post together with its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub post: Post,
    pub user: User,
}

impl Lookup {
    /// Attribution line shown under the post body.
    pub fn byline(&self) -> String {
        format!("Posted by: {} - {}", self.user.name, self.user.email)
    }
}

/// The id entry form.
#[derive(Debug, Default)]
pub struct FormState {
    /// Raw text typed by the user.
    pub input: String,
    /// Set when the last submission was not a number.
    pub invalid_input: bool,
    /// Result of the last lookup.
    pub result: LoadingState<Lookup>,
}

impl FormState {
    /// Append a typed character. Validation waits until submit.
    pub fn push_char(&mut self, c: char) {
        if !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Parse the input as an id, flagging the form when it is not a number.
    pub fn parse_id(&mut self) -> Option<i64> {
        match self.input.trim().parse::<i64>() {
            Ok(id) => {
                self.invalid_input = false;
                Some(id)
            }
            Err(_) => {
                self.invalid_input = true;
                None
            }
        }
    }
}
