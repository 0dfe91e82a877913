pub const CHECK_INPUT_LOGGER: &str = "pcgr-check-input";

pub const DEFAULT_OUTPUT_DIR: &str = "/workdir/output";
pub const DEFAULT_VCF_VERSION: &str = "v4.2";

pub const DEFAULT_VCF_VALIDATOR: &str = "vcf_validator";
pub const DEFAULT_BGZIP: &str = "bgzip";
pub const DEFAULT_TABIX: &str = "tabix";

/// Annotation databases whose vcfanno INFO tags are reserved, in load order.
pub const DEFAULT_DATABASES: [&str; 12] = [
    "intogen_driver_mut",
    "dbsnp",
    "oneKG",
    "docm",
    "exac",
    "gnomad",
    "civic",
    "cbmdb",
    "dbnsfp",
    "clinvar",
    "icgc",
    "cosmic",
];

/// Tag description tables, relative to `<pcgr_dir>/data`.
pub const DESCRIPTION_TABLES: [&str; 2] = ["vep_infotags.tsv", "pcgr_infotags.tsv"];
pub const DATABASE_TAG_FILE_SUFFIX: &str = ".vcfanno.vcf_info_tags.txt";

/// Produced by the annotation step but listed in no table.
pub const EFFECT_PREDICTIONS_TAG: &str = "EFFECT_PREDICTIONS";
/// The one reserved tag a query VCF may carry.
pub const EXEMPT_TAG: &str = "STRAND";

pub const PREPROCESSING_DOCS: &str =
    "http://pcgr.readthedocs.io/en/latest/output.html#vcf-preprocessing";

pub const SEGMENT_COLUMNS: [&str; 4] = ["Chromosome", "Start", "End", "Segment_Mean"];
