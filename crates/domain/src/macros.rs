//! Label enums
//!
//! SAP resources and log formats travel as short lowercase labels: in log
//! fields, error messages and environment variables. [`impl_label_conversions!`]
//! ties each variant to its label once so both directions stay in sync.
//!
//! ```rust
//! use pmrelay_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Transport {
//!     Http,
//!     Https,
//! }
//!
//! impl_label_conversions!(Transport {
//!     Http => "http",
//!     Https => "https",
//! });
//!
//! assert_eq!(Transport::Https.as_str(), "https");
//! assert_eq!("HTTP".parse::<Transport>(), Ok(Transport::Http));
//! ```

/// Maps enum variants to fixed labels.
///
/// Generates an `as_str` accessor, `Display` writing the label, and a
/// `FromStr` that ignores ASCII case. Unknown input is rejected with
/// `"Invalid <Type>: <input>"` so config loading can surface it verbatim.
#[macro_export]
macro_rules! impl_label_conversions {
    ($ty:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            /// Label for this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($label) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($ty), s))
            }
        }
    };
}
