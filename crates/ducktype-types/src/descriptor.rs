//! Method and parameter descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a parameter must be supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requiredness {
    /// Positional or keyword parameter without a default.
    Required,
    /// Defaulted parameter, or any parameter the caller may omit.
    Optional,
}

impl Requiredness {
    pub fn is_required(&self) -> bool {
        matches!(self, Self::Required)
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
        }
    }
}

impl From<bool> for Requiredness {
    fn from(required: bool) -> Self {
        if required {
            Self::Required
        } else {
            Self::Optional
        }
    }
}

impl fmt::Display for Requiredness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One parameter of a method signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParamDescriptor {
    /// Parameter name as declared.
    pub name: String,
    /// Required or optional.
    pub required: Requiredness,
}

impl ParamDescriptor {
    pub fn new(name: impl Into<String>, required: Requiredness) -> Self {
        Self {
            name: name.into(),
            required,
        }
    }

    /// A parameter the caller must supply.
    pub fn required(name: impl Into<String>) -> Self {
        Self::new(name, Requiredness::Required)
    }

    /// A parameter with a default value.
    pub fn optional(name: impl Into<String>) -> Self {
        Self::new(name, Requiredness::Optional)
    }
}

impl fmt::Display for ParamDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.required {
            Requiredness::Required => write!(f, "{}", self.name),
            Requiredness::Optional => write!(f, "{}?", self.name),
        }
    }
}

/// The checkable shape of a method: its name and ordered parameters.
///
/// Parameter order is significant. Two descriptors are compared position by
/// position, never by looking up a parameter of the same name elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodDescriptor {
    /// Method name.
    pub name: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub params: Vec<ParamDescriptor>,
}

impl MethodDescriptor {
    /// A method with no parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// A method with the given parameters.
    pub fn with_params(name: impl Into<String>, params: Vec<ParamDescriptor>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Append a required parameter.
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.params.push(ParamDescriptor::required(name));
        self
    }

    /// Append an optional parameter.
    pub fn optional(mut self, name: impl Into<String>) -> Self {
        self.params.push(ParamDescriptor::optional(name));
        self
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ")")
    }
}
