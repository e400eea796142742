//! Literal detection over untyped nlcst JSON
//!
//!     Trees coming from other nlcst tooling arrive as JSON, and so do positions: either the
//!     child object itself or a number. This entry point validates both the way a dynamically
//!     typed caller expects:
//!
//!         - parent: must be an object with a `children` array of node objects
//!         - position object with a `type` key: the first child equal to it
//!         - position number: an integer index; negative integers are never literal
//!         - anything else: [LiteralError::InvalidIndex]
//!
//!     JSON has no node identity, so a node position resolves by structural equality.

use super::classifier::classify;
use super::error::LiteralError;
use crate::nlcst::ast::Node;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Check whether the child of a JSON `parent` at a JSON `position` is used as a literal.
pub fn is_literal_value(parent: Option<&Value>, position: &Value) -> Result<bool, LiteralError> {
    let children = parent
        .and_then(|parent| parent.get("children"))
        .filter(|children| children.is_array())
        .ok_or(LiteralError::MissingOrInvalidParent)?;
    let siblings =
        Vec::<Node>::deserialize(children).map_err(|_| LiteralError::MissingOrInvalidParent)?;

    let index = match position {
        Value::Object(fields) if fields.contains_key("type") => children
            .as_array()
            .and_then(|raw| raw.iter().position(|child| child == position))
            .ok_or(LiteralError::UnresolvableNodeReference)?,
        other => match integer_index(other)? {
            Some(index) => index,
            None => {
                debug!(position = %other, "negative index, not a literal");
                return Ok(false);
            }
        },
    };

    Ok(classify(&siblings, index))
}

/// `Some(index)` for non-negative integers, `None` for negative ones.
fn integer_index(value: &Value) -> Result<Option<usize>, LiteralError> {
    let Value::Number(number) = value else {
        return Err(LiteralError::InvalidIndex);
    };

    if let Some(index) = number.as_u64() {
        return Ok(Some(usize::try_from(index).unwrap_or(usize::MAX)));
    }
    if number.as_i64().is_some() {
        return Ok(None);
    }

    match number.as_f64() {
        Some(float) if float.is_finite() && float.fract() == 0.0 => {
            if float < 0.0 {
                Ok(None)
            } else {
                Ok(Some(float as usize))
            }
        }
        _ => Err(LiteralError::InvalidIndex),
    }
}
