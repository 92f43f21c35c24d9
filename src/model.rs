use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    pub name: String,
    pub command: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentError {
    MissingSeparator,
    EmptyName,
}

impl fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignmentError::MissingSeparator => write!(f, "expected name=command"),
            AssignmentError::EmptyName => write!(f, "name must not be empty"),
        }
    }
}

impl std::error::Error for AssignmentError {}

impl Mapping {
    /// Parses one line of the config file. Blank lines, `#`/`;` comments,
    /// lines without `=` and lines with an empty name yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            return None;
        }
        Self::parse_assignment(line).ok()
    }

    /// Splits `name=command` on the first `=`, trimming both halves.
    pub fn parse_assignment(text: &str) -> Result<Self, AssignmentError> {
        let (name, command) = text
            .trim()
            .split_once('=')
            .ok_or(AssignmentError::MissingSeparator)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(AssignmentError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            command: command.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(name: &str, command: &str) -> Mapping {
        Mapping {
            name: name.to_string(),
            command: command.to_string(),
        }
    }

    #[test]
    fn parse_line_trims_name_and_command() {
        assert_eq!(
            Mapping::parse_line("  build =  cargo build --release  "),
            Some(mapping("build", "cargo build --release"))
        );
    }

    #[test]
    fn parse_line_splits_on_first_equals() {
        assert_eq!(
            Mapping::parse_line("env=FOO=bar printenv FOO"),
            Some(mapping("env", "FOO=bar printenv FOO"))
        );
    }

    #[test]
    fn parse_line_allows_empty_command() {
        assert_eq!(Mapping::parse_line("noop="), Some(mapping("noop", "")));
    }

    #[test]
    fn parse_line_skips_comments() {
        assert_eq!(Mapping::parse_line("# foo=bar"), None);
        assert_eq!(Mapping::parse_line("; foo=bar"), None);
        assert_eq!(Mapping::parse_line("   # indented=comment"), None);
    }

    #[test]
    fn parse_line_skips_malformed_lines() {
        assert_eq!(Mapping::parse_line(""), None);
        assert_eq!(Mapping::parse_line("   "), None);
        assert_eq!(Mapping::parse_line("justtext"), None);
        assert_eq!(Mapping::parse_line("  = novalue"), None);
    }

    #[test]
    fn parse_assignment_reports_reason() {
        assert_eq!(
            Mapping::parse_assignment("build"),
            Err(AssignmentError::MissingSeparator)
        );
        assert_eq!(
            Mapping::parse_assignment(" =echo hi"),
            Err(AssignmentError::EmptyName)
        );
    }

    #[test]
    fn parse_assignment_does_not_treat_hash_as_comment() {
        assert_eq!(
            Mapping::parse_assignment("#tag=echo hi"),
            Ok(mapping("#tag", "echo hi"))
        );
    }
}
