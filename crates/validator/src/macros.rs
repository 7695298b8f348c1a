//! Macros shared by the built-in fields.

/// Implements the presence-policy builder methods for a field struct.
///
/// The struct must have an `options: FieldOptions` member.
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Copy, Default)]
/// pub struct CharField {
///     options: FieldOptions,
/// }
///
/// field_options!(CharField);
///
/// let login = CharField::new().required();
/// ```
macro_rules! field_options {
    ($name:ident) => {
        impl $name {
            /// Marks the field as required: the key must be present in the payload.
            #[must_use = "builder methods must be chained or built"]
            pub fn required(mut self) -> Self {
                self.options.required = true;
                self
            }

            /// Marks the field as not nullable: a present value must not be empty.
            #[must_use = "builder methods must be chained or built"]
            pub fn not_nullable(mut self) -> Self {
                self.options.nullable = false;
                self
            }

            /// Replaces the presence policy.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_options(mut self, options: $crate::foundation::FieldOptions) -> Self {
                self.options = options;
                self
            }
        }
    };
}

pub(crate) use field_options;
