use std::fmt::{self, Display};

/// Where an INFO tag id was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagSource {
    HeaderDeclared,
    Registry,
}

///
/// An INFO tag id together with its origin.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InfoTagDeclaration {
    pub id: String,
    pub source: TagSource,
}

impl InfoTagDeclaration {
    pub fn header(id: impl Into<String>) -> Self {
        InfoTagDeclaration {
            id: id.into(),
            source: TagSource::HeaderDeclared,
        }
    }

    ///
    /// Extract the tag id from a `##INFO=<ID=...,...>` meta line.
    ///
    /// The id runs up to the first comma, or to the closing `>` for
    /// declarations that carry nothing but an id.
    ///
    pub fn id_from_meta_line(line: &str) -> Option<&str> {
        let rest = line.trim_end().strip_prefix("##INFO=<ID=")?;
        let end = rest.find([',', '>']).unwrap_or(rest.len());
        let id = &rest[..end];
        if id.is_empty() { None } else { Some(id) }
    }
}

impl Display for InfoTagDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("##INFO=<ID=DOCM_PMID,Number=.,Type=String,Description=\"x\">", Some("DOCM_PMID"))]
    #[case("##INFO=<ID=SOMATIC>", Some("SOMATIC"))]
    #[case("##INFO=<ID=,Number=1>", None)]
    #[case("##FORMAT=<ID=GT,Number=1>", None)]
    fn test_id_from_meta_line(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(InfoTagDeclaration::id_from_meta_line(line), expected);
    }
}
