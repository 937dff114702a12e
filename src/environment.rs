use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the different deployment environments the dashboard can talk to.
#[derive(Clone, Default, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Local development environment.
    Local,
    /// Staging environment for pre-production testing.
    Staging,
    /// Production inventory API.
    #[default]
    Production,
}

impl Environment {
    /// Returns the inventory API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:3000".to_string(),
            Environment::Staging => {
                "https://staging.api.shelfwatch.example.com".to_string()
            }
            Environment::Production => {
                "https://psrd9jxg84.execute-api.us-east-1.amazonaws.com".to_string()
            }
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Staging => write!(f, "Staging"),
            Environment::Production => write!(f, "Production"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_environment_is_case_insensitive() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("Staging".parse::<Environment>(), Ok(Environment::Staging));
        assert_eq!(
            "PRODUCTION".parse::<Environment>(),
            Ok(Environment::Production)
        );
        assert!("nonsense".parse::<Environment>().is_err());
    }

    #[test]
    fn test_default_environment_is_production() {
        assert_eq!(Environment::default(), Environment::Production);
    }
}
