//! Construction-time options for loop commands.
//!
//! Options follow a configure-flag pattern: each option value knows which
//! [`Flags`] field it sets, and the command applies whatever list it is
//! given. The loop stores the resulting flags but never consumes them;
//! collaborating processors read them through the owning command.

/// Field separator used by processors that split lines into fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSeparator(pub String);

impl From<&str> for FieldSeparator {
    fn from(sep: &str) -> Self {
        Self(sep.to_string())
    }
}

/// Parsed option state carried by a loop command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub field_separator: Option<FieldSeparator>,
}

/// Anything that can be applied to [`Flags`] at construction time.
pub trait Configure {
    fn configure(self, flags: &mut Flags);
}

impl Configure for FieldSeparator {
    fn configure(self, flags: &mut Flags) {
        flags.field_separator = Some(self);
    }
}
