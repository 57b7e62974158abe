//! Labels for states and events.
//!
//! Both are opaque strings. They serialize as bare strings and can be
//! looked up in maps by `&str` without allocating.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! label {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a label from anything string-like.
            pub fn new(label: impl Into<String>) -> Self {
                Self(label.into())
            }

            /// Borrow the label as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(label: &str) -> Self {
                Self(label.to_string())
            }
        }

        impl From<String> for $name {
            fn from(label: String) -> Self {
                Self(label)
            }
        }

        impl From<&$name> for $name {
            fn from(label: &$name) -> Self {
                label.clone()
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

label! {
    /// Name of a state the machine can occupy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use retrace::core::StateId;
    ///
    /// let state = StateId::from("idle");
    /// assert_eq!(state, "idle");
    /// assert_eq!(state.to_string(), "idle");
    /// ```
    StateId
}

label! {
    /// Name of an event that may trigger a transition.
    EventId
}
