//! Decorator-call model.
//!
//! The host hands the engine each decorator applied to a field, reduced to
//! the parts the engine inspects: its name, whether it was written with call
//! parentheses, and a shallow view of its arguments. Two argument shapes
//! matter:
//!
//! - an options object carrying `each: true`, which switches validation to
//!   the array's element type (`@IsString({ each: true })`);
//! - a class reference extracted from a transform decorator's arrow argument
//!   (`@Type(() => Address)` becomes `ClassRef("Address")`).
//!
//! Every malformed shape reads as "option absent" — the engine never fails
//! on a decorator argument it does not understand.

/// One decorator applied to a field, in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct DecoratorCall {
    pub name: String,
    /// Whether the decorator was written with call parentheses
    /// (`@IsOptional()` vs `@IsOptional`).
    pub has_call: bool,
    pub args: Vec<DecoratorArg>,
}

/// A shallow view of one decorator argument.
#[derive(Clone, Debug, PartialEq)]
pub enum DecoratorArg {
    /// An object-literal argument, reduced to its literal-valued entries.
    Options(Vec<(String, ArgValue)>),
    /// A class name extracted from a `() => X` arrow argument.
    ClassRef(String),
    /// Anything else.
    Other,
}

/// A literal value inside an options object.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    Bool(bool),
    Num(f64),
    Str(String),
    Other,
}

impl DecoratorCall {
    /// A bare decorator: `@IsOptional`.
    pub fn bare(name: &str) -> DecoratorCall {
        DecoratorCall {
            name: name.to_string(),
            has_call: false,
            args: Vec::new(),
        }
    }

    /// A decorator called with no arguments: `@IsString()`.
    pub fn simple(name: &str) -> DecoratorCall {
        DecoratorCall {
            name: name.to_string(),
            has_call: true,
            args: Vec::new(),
        }
    }

    /// A decorator called with `{ each: true }` in its last argument slot.
    pub fn each(name: &str) -> DecoratorCall {
        DecoratorCall {
            name: name.to_string(),
            has_call: true,
            args: vec![DecoratorArg::Options(vec![(
                "each".to_string(),
                ArgValue::Bool(true),
            )])],
        }
    }

    /// A transform decorator referencing a class: `@Type(() => Address)`.
    pub fn class_ref(name: &str, class: &str) -> DecoratorCall {
        DecoratorCall {
            name: name.to_string(),
            has_call: true,
            args: vec![DecoratorArg::ClassRef(class.to_string())],
        }
    }

    /// Whether this call carries the each-element option.
    ///
    /// The option is honored in the first or second argument only, as an
    /// options object with key `each` and literal value `true`.
    pub fn validates_each(&self) -> bool {
        self.args.iter().take(2).any(|arg| match arg {
            DecoratorArg::Options(entries) => entries
                .iter()
                .any(|(key, value)| key == "each" && *value == ArgValue::Bool(true)),
            _ => false,
        })
    }

    /// The class name referenced by the first arrow argument, if any.
    pub fn referenced_class(&self) -> Option<&str> {
        self.args.iter().find_map(|arg| match arg {
            DecoratorArg::ClassRef(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_in_first_argument() {
        assert!(DecoratorCall::each("IsString").validates_each());
    }

    #[test]
    fn each_in_second_argument() {
        let call = DecoratorCall {
            name: "IsNumber".to_string(),
            has_call: true,
            args: vec![
                DecoratorArg::Other,
                DecoratorArg::Options(vec![("each".to_string(), ArgValue::Bool(true))]),
            ],
        };
        assert!(call.validates_each());
    }

    #[test]
    fn each_in_third_argument_is_ignored() {
        let call = DecoratorCall {
            name: "IsNumber".to_string(),
            has_call: true,
            args: vec![
                DecoratorArg::Other,
                DecoratorArg::Other,
                DecoratorArg::Options(vec![("each".to_string(), ArgValue::Bool(true))]),
            ],
        };
        assert!(!call.validates_each());
    }

    #[test]
    fn malformed_each_values_read_as_absent() {
        let call = DecoratorCall {
            name: "IsString".to_string(),
            has_call: true,
            args: vec![DecoratorArg::Options(vec![(
                "each".to_string(),
                ArgValue::Str("true".to_string()),
            )])],
        };
        assert!(!call.validates_each());
    }

    #[test]
    fn referenced_class_from_arrow_argument() {
        let call = DecoratorCall::class_ref("Type", "Address");
        assert_eq!(call.referenced_class(), Some("Address"));
        assert_eq!(DecoratorCall::simple("Type").referenced_class(), None);
    }
}
