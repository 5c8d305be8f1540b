//! Compilation defines extracted from the invocation arguments.

use std::fmt;

use schemars::JsonSchema;
use serde::Serialize;
use tracing::warn;

/// The only invocation flag the resolver recognises.
pub const DEFINE_FLAG: &str = "--define";

/// Zero or one compilation define forwarded to the compiler.
///
/// The single element is `None` when `--define` was the last argument and no
/// value followed it. That slot serialises as `null` and renders as an empty
/// string in the bundling message.
///
/// # Example
///
/// ```
/// use splitter_config::Defines;
///
/// let defines = Defines::from_args(["node", "script", "--define", "PRODUCTION"]);
/// assert_eq!(defines.value(), Some("PRODUCTION"));
/// assert_eq!(defines.to_string(), "PRODUCTION");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct Defines(Vec<Option<String>>);

impl Defines {
    /// No defines.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Exactly one define with a value.
    pub fn single(value: impl Into<String>) -> Self {
        Self(vec![Some(value.into())])
    }

    /// A define slot whose value was missing from the arguments.
    pub fn missing_value() -> Self {
        Self(vec![None])
    }

    /// Scan `args` for the first `--define` and take the token after it.
    ///
    /// Later occurrences of the flag are ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();

        if !args.by_ref().any(|arg| arg.as_ref() == DEFINE_FLAG) {
            return Self::none();
        }

        match args.next() {
            Some(value) => Self::single(value.as_ref()),
            None => {
                warn!("{DEFINE_FLAG} was passed without a value");
                Self::missing_value()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The define value, if one was given.
    pub fn value(&self) -> Option<&str> {
        self.0.first().and_then(|slot| slot.as_deref())
    }

    /// `true` when `--define` was present but had no following token.
    pub fn is_missing_value(&self) -> bool {
        matches!(self.0.first(), Some(None))
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.0.iter().map(Option::as_deref)
    }
}

impl fmt::Display for Defines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, slot) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            f.write_str(slot.unwrap_or_default())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_flag_yields_no_defines() {
        let defines = Defines::from_args(["node", "script"]);
        assert!(defines.is_empty());
        assert_eq!(defines.value(), None);
        assert_eq!(defines.to_string(), "");
    }

    #[test]
    fn flag_with_value_yields_single_define() {
        let defines = Defines::from_args(["node", "script", "--define", "PRODUCTION"]);
        assert_eq!(defines, Defines::single("PRODUCTION"));
        assert_eq!(defines.len(), 1);
        assert_eq!(defines.to_string(), "PRODUCTION");
    }

    #[test]
    fn trailing_flag_yields_missing_value() {
        let defines = Defines::from_args(["node", "script", "--define"]);
        assert_eq!(defines.len(), 1);
        assert!(defines.is_missing_value());
        assert_eq!(defines.value(), None);
        assert_eq!(defines.to_string(), "");
    }

    #[test]
    fn first_occurrence_wins() {
        let defines = Defines::from_args(["--define", "DEBUG", "--define", "PRODUCTION"]);
        assert_eq!(defines.value(), Some("DEBUG"));
        assert_eq!(defines.len(), 1);
    }

    #[test]
    fn value_is_taken_verbatim() {
        let defines = Defines::from_args(["--define", "--verbose"]);
        assert_eq!(defines.value(), Some("--verbose"));

        let defines = Defines::from_args(["--define", ""]);
        assert_eq!(defines.value(), Some(""));
        assert!(!defines.is_missing_value());
    }

    #[test]
    fn flag_must_match_exactly() {
        assert!(Defines::from_args(["--define=PRODUCTION"]).is_empty());
        assert!(Defines::from_args(["--DEFINE", "PRODUCTION"]).is_empty());
        assert!(Defines::from_args(["-define", "PRODUCTION"]).is_empty());
    }

    #[test]
    fn accepts_owned_strings() {
        let args: Vec<String> = vec!["--define".into(), "STAGING".into()];
        assert_eq!(Defines::from_args(&args).value(), Some("STAGING"));
    }

    #[test]
    fn serializes_as_array() {
        assert_eq!(serde_json::to_value(Defines::none()).unwrap(), serde_json::json!([]));
        assert_eq!(
            serde_json::to_value(Defines::single("PRODUCTION")).unwrap(),
            serde_json::json!(["PRODUCTION"])
        );
        assert_eq!(
            serde_json::to_value(Defines::missing_value()).unwrap(),
            serde_json::json!([null])
        );
    }
}
