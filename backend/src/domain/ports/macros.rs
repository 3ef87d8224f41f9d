//! Helper macro generating port error enums with ergonomic constructors.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            ::paste::paste! {
                $(
                    /// Variant constructor accepting `Into` conversions for
                    /// every field.
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                        Self::$variant { $($field: $field.into()),* }
                    }
                )*
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for the generated constructors.

    define_port_error! {
        pub enum ExamplePortError {
            /// Something broke.
            Broken { message: String } => "broken: {message}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::broken("hello");
        assert_eq!(err.to_string(), "broken: hello");
        assert!(matches!(err, ExamplePortError::Broken { .. }));
    }
}
