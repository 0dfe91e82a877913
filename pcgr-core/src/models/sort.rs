use std::cmp::Ordering;

use super::variant::VCF_FIXED_COLUMNS;

///
/// The two ordering domains of a normalized VCF. Numeric contigs (autosomes)
/// are written first, then the symbolic sex and mitochondrial contigs.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SortDomain {
    Numeric,
    Symbolic,
}

impl SortDomain {
    /// Contigs whose name starts with `X`, `Y` or `M` (case-sensitive) are symbolic.
    pub fn of_contig(contig: &str) -> Self {
        match contig.as_bytes().first() {
            Some(b'X' | b'Y' | b'M') => SortDomain::Symbolic,
            _ => SortDomain::Numeric,
        }
    }

    pub fn comparator(&self) -> fn(&SortKey, &SortKey) -> Ordering {
        match self {
            SortDomain::Numeric => compare_numeric,
            SortDomain::Symbolic => compare_symbolic,
        }
    }
}

///
/// A data line truncated to the fixed VCF columns, with its sort fields pre-parsed.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub line: String,
    pub contig: String,
    pub contig_number: u64,
    pub position: u64,
    pub reference: String,
    pub first_alt: String,
}

impl SortKey {
    ///
    /// Build a key from a raw data line, dropping any sample columns.
    ///
    pub fn from_data_line(line: &str) -> Self {
        let truncated = truncate_columns(line, VCF_FIXED_COLUMNS);
        let mut fields = truncated.split('\t');

        let contig = fields.next().unwrap_or_default().to_string();
        let position = leading_number(fields.next().unwrap_or_default());
        let _id = fields.next();
        let reference = fields.next().unwrap_or_default().to_string();
        let first_alt = fields
            .next()
            .and_then(|alt| alt.split(',').next())
            .unwrap_or_default()
            .to_string();

        SortKey {
            contig_number: leading_number(&contig),
            line: truncated.to_string(),
            contig,
            position,
            reference,
            first_alt,
        }
    }

    pub fn domain(&self) -> SortDomain {
        SortDomain::of_contig(&self.contig)
    }
}

/// Contig as integer, position as integer, REF, first ALT, then the whole line.
pub fn compare_numeric(a: &SortKey, b: &SortKey) -> Ordering {
    a.contig_number
        .cmp(&b.contig_number)
        .then(a.position.cmp(&b.position))
        .then_with(|| a.reference.cmp(&b.reference))
        .then_with(|| a.first_alt.cmp(&b.first_alt))
        .then_with(|| a.line.cmp(&b.line))
}

/// Contig as string, position as integer, REF, first ALT, then the whole line.
pub fn compare_symbolic(a: &SortKey, b: &SortKey) -> Ordering {
    a.contig
        .cmp(&b.contig)
        .then(a.position.cmp(&b.position))
        .then_with(|| a.reference.cmp(&b.reference))
        .then_with(|| a.first_alt.cmp(&b.first_alt))
        .then_with(|| a.line.cmp(&b.line))
}

///
/// Keep the first `n` tab-separated columns of a line.
///
pub fn truncate_columns(line: &str, n: usize) -> &str {
    match line.match_indices('\t').nth(n.saturating_sub(1)) {
        Some((idx, _)) if n > 0 => &line[..idx],
        _ if n == 0 => "",
        _ => line,
    }
}

/// Numeric value of the leading digits of a field; no leading digits reads as zero.
fn leading_number(field: &str) -> u64 {
    let digits = field.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return 0;
    }
    field[..digits].parse::<u64>().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("X", SortDomain::Symbolic)]
    #[case("Y", SortDomain::Symbolic)]
    #[case("MT", SortDomain::Symbolic)]
    #[case("x", SortDomain::Numeric)]
    #[case("1", SortDomain::Numeric)]
    #[case("GL000192.1", SortDomain::Numeric)]
    fn test_domain_of_contig(#[case] contig: &str, #[case] expected: SortDomain) {
        assert_eq!(SortDomain::of_contig(contig), expected);
    }

    #[rstest]
    #[case("a\tb\tc", 2, "a\tb")]
    #[case("a\tb\tc", 3, "a\tb\tc")]
    #[case("a\tb\tc", 8, "a\tb\tc")]
    #[case("a\tb\tc", 0, "")]
    fn test_truncate_columns(#[case] line: &str, #[case] n: usize, #[case] expected: &str) {
        assert_eq!(truncate_columns(line, n), expected);
    }

    #[rstest]
    fn test_numeric_comparator_orders_contigs_as_integers() {
        let mut keys: Vec<SortKey> = [
            "10\t5\t.\tA\tT\t.\t.\t.",
            "2\t500\t.\tA\tT\t.\t.\t.",
            "2\t60\t.\tC\tG\t.\t.\t.",
            "2\t60\t.\tA\tG\t.\t.\t.",
        ]
        .iter()
        .map(|l| SortKey::from_data_line(l))
        .collect();

        keys.sort_by(SortDomain::Numeric.comparator());
        let order: Vec<(&str, u64, &str)> = keys
            .iter()
            .map(|k| (k.contig.as_str(), k.position, k.reference.as_str()))
            .collect();

        assert_eq!(
            order,
            vec![("2", 60, "A"), ("2", 60, "C"), ("2", 500, "A"), ("10", 5, "A")]
        );
    }

    #[rstest]
    fn test_symbolic_comparator_orders_contigs_as_strings() {
        let mut keys: Vec<SortKey> = [
            "Y\t10\t.\tA\tT\t.\t.\t.",
            "MT\t300\t.\tA\tT\t.\t.\t.",
            "X\t20\t.\tA\tT\t.\t.\t.",
            "X\t3\t.\tA\tT\t.\t.\t.",
        ]
        .iter()
        .map(|l| SortKey::from_data_line(l))
        .collect();

        keys.sort_by(SortDomain::Symbolic.comparator());
        let order: Vec<(&str, u64)> = keys
            .iter()
            .map(|k| (k.contig.as_str(), k.position))
            .collect();

        assert_eq!(order, vec![("MT", 300), ("X", 3), ("X", 20), ("Y", 10)]);
    }

    #[rstest]
    fn test_key_drops_sample_columns() {
        let key = SortKey::from_data_line("1\t100\trs1\tA\tT,G\t.\tPASS\tDP=3\tGT\t0/1");
        assert_eq!(key.line, "1\t100\trs1\tA\tT,G\t.\tPASS\tDP=3");
        assert_eq!(key.first_alt, "T");
        assert_eq!(key.domain(), SortDomain::Numeric);
    }
}
