use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use pcgr_core::models::{InfoTagDeclaration, VariantRecord};
use pcgr_core::utils::get_dynamic_reader;
use pcgr_core::{CheckError, CheckResult};

pub const COLUMN_HEADER_PREFIX: &str = "#CHROM";

///
/// Header section of a VCF file: the `##` meta lines and the `#CHROM` line.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VcfHeader {
    pub meta_lines: Vec<String>,
    pub column_line: Option<String>,
}

impl VcfHeader {
    ///
    /// INFO tag ids declared in the header, in declaration order.
    ///
    pub fn info_declarations(&self) -> Vec<InfoTagDeclaration> {
        self.meta_lines
            .iter()
            .filter_map(|line| InfoTagDeclaration::id_from_meta_line(line))
            .map(InfoTagDeclaration::header)
            .collect()
    }
}

///
/// Streaming VCF reader. The header is consumed on construction; records are
/// then pulled one line at a time.
///
pub struct VcfReader<R: BufRead> {
    reader: R,
    header: VcfHeader,
    line_number: usize,
    pending: Option<String>,
}

impl VcfReader<BufReader<Box<dyn Read>>> {
    ///
    /// Open a VCF file, gzipped or not, and read its header.
    ///
    pub fn from_path(path: &Path) -> CheckResult<Self> {
        let reader = get_dynamic_reader(path)?;
        VcfReader::new(reader)
    }
}

impl<R: BufRead> VcfReader<R> {
    pub fn new(reader: R) -> CheckResult<Self> {
        let mut vcf = VcfReader {
            reader,
            header: VcfHeader::default(),
            line_number: 0,
            pending: None,
        };
        vcf.read_header()?;
        Ok(vcf)
    }

    pub fn header(&self) -> &VcfHeader {
        &self.header
    }

    fn read_line(&mut self) -> CheckResult<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;
        let trimmed = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }

    fn read_header(&mut self) -> CheckResult<()> {
        while let Some(line) = self.read_line()? {
            if line.starts_with("##") {
                self.header.meta_lines.push(line);
            } else if line.starts_with(COLUMN_HEADER_PREFIX) {
                self.header.column_line = Some(line);
            } else if line.starts_with('#') || line.is_empty() {
                continue;
            } else {
                self.pending = Some(line);
                break;
            }
        }
        Ok(())
    }

    ///
    /// Next non-empty data line and its 1-based line number.
    ///
    pub fn next_data_line(&mut self) -> CheckResult<Option<(usize, String)>> {
        if let Some(line) = self.pending.take() {
            return Ok(Some((self.line_number, line)));
        }
        while let Some(line) = self.read_line()? {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            return Ok(Some((self.line_number, line)));
        }
        Ok(None)
    }

    pub fn records(self) -> Records<R> {
        Records { reader: self }
    }
}

/// Iterator over the parsed records of a [`VcfReader`].
pub struct Records<R: BufRead> {
    reader: VcfReader<R>,
}

impl<R: BufRead> Iterator for Records<R> {
    type Item = CheckResult<VariantRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.next_data_line() {
            Ok(Some((line_number, line))) => {
                Some(VariantRecord::from_vcf_line(&line, line_number))
            }
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

///
/// Read only the header of a VCF file.
///
pub fn read_vcf_header(path: &Path) -> CheckResult<VcfHeader> {
    let reader = VcfReader::from_path(path).map_err(|e| match e {
        CheckError::Io(io) => CheckError::Io(std::io::Error::new(
            io.kind(),
            format!("Unable to read VCF header of {}: {}", path.display(), io),
        )),
        other => other,
    })?;
    Ok(reader.header().clone())
}
