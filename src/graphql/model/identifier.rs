/// Declares a UUID backed identifier for one entity type.
///
/// The identifier is stored as a BSON binary UUID, formatted as a hyphenated lowercase String
/// and exposed as its own GraphQL scalar. Parsing a String which is not a UUID yields
/// `ValidationError::InvalidReference` naming the entity.
macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident, $entity:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            serde::Serialize,
            serde::Deserialize,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
        )]
        #[serde(transparent)]
        pub struct $name(bson::Uuid);

        impl $name {
            /// Generates a new random identifier.
            pub fn new() -> Self {
                Self(bson::Uuid::new())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<bson::Uuid> for $name {
            fn from(value: bson::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for bson::Bson {
            fn from(value: $name) -> Self {
                bson::Bson::from(value.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                bson::Uuid::parse_str(value).map(Self).map_err(|_| {
                    $crate::error::ValidationError::InvalidReference {
                        entity: $entity,
                        value: value.to_string(),
                    }
                })
            }
        }

        #[async_graphql::Scalar]
        impl async_graphql::ScalarType for $name {
            fn parse(value: async_graphql::Value) -> async_graphql::InputValueResult<Self> {
                match value {
                    async_graphql::Value::String(ref string) => Ok(string.parse()?),
                    _ => Err(async_graphql::InputValueError::expected_type(value)),
                }
            }

            fn to_value(&self) -> async_graphql::Value {
                async_graphql::Value::String(self.to_string())
            }
        }
    };
}

pub(crate) use identifier;

/// Parses an identifier argument, a malformed value is rejected as a validation error.
pub fn parse_identifier<T>(value: &str) -> async_graphql::Result<T>
where
    T: std::str::FromStr<Err = crate::error::ValidationError>,
{
    use async_graphql::ErrorExtensions;

    value
        .parse()
        .map_err(|error| crate::error::CartError::from(error).extend())
}
