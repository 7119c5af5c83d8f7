//! Closed enums that render as a label plus a visual tone.
//!
//! Customer status, order status, payment status, notification kind and
//! stock level all resolve through [`Labeled`], so every badge in the UI
//! reads its text and color from one table per enum instead of a copy per
//! screen.

use std::fmt;

use thiserror::Error;

/// Visual class of a badge. The UI maps tones to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Success,
    Warning,
    Info,
    Accent,
    Danger,
    Muted,
}

/// Label and tone resolved from a [`Labeled`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub tone: Tone,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Raised when a raw value does not name any variant of a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// A closed enum with a fixed label/tone lookup.
pub trait Labeled: Copy + Sized + 'static {
    /// Human name of the enum, used in error messages.
    const KIND: &'static str;

    /// Every variant, in display order.
    const ALL: &'static [Self];

    /// Wire key (lowercase, as stored in fixtures).
    fn key(self) -> &'static str;

    fn label(self) -> &'static str;

    fn tone(self) -> Tone;

    fn badge(self) -> Badge {
        Badge {
            label: self.label(),
            tone: self.tone(),
        }
    }

    /// Parse a wire key. Unknown keys are an error, never a blank badge.
    fn parse_key(raw: &str) -> Result<Self, UnknownVariant> {
        let needle = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.key().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownVariant {
                kind: Self::KIND,
                value: raw.to_string(),
            })
    }
}

/// Implements `Labeled`, `Display` and string serde for a fieldless enum
/// from one `Variant => ("key", "Label", Tone)` table.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $($variant:ident => ($key:literal, $label:literal, $tone:ident)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $crate::domain::labeled::Labeled for $name {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            fn tone(self) -> $crate::domain::labeled::Tone {
                match self {
                    $(Self::$variant => $crate::domain::labeled::Tone::$tone),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::domain::labeled::Labeled::label(*self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::labeled::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as $crate::domain::labeled::Labeled>::parse_key(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::domain::labeled::Labeled::key(*self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                <Self as $crate::domain::labeled::Labeled>::parse_key(&raw)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use labeled_enum;

#[cfg(test)]
mod tests {
    use super::*;

    labeled_enum! {
        pub enum Light as "light" {
            Red => ("red", "Stop", Danger),
            Green => ("green", "Go", Success),
        }
    }

    #[test]
    fn test_badge_lookup() {
        assert_eq!(Light::Red.badge(), Badge { label: "Stop", tone: Tone::Danger });
        assert_eq!(Light::Green.to_string(), "Go");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("GREEN".parse::<Light>(), Ok(Light::Green));
        assert_eq!(" red ".parse::<Light>(), Ok(Light::Red));
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let err = "amber".parse::<Light>().unwrap_err();
        assert_eq!(err.kind, "light");
        assert_eq!(err.to_string(), "unknown light value: \"amber\"");
    }

    #[test]
    fn test_serde_uses_wire_key() {
        let json = serde_json::to_string(&Light::Green).unwrap();
        assert_eq!(json, "\"green\"");
        let back: Light = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(back, Light::Red);
        assert!(serde_json::from_str::<Light>("\"blue\"").is_err());
    }
}
