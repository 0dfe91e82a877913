use clap::{Arg, ArgAction, Command};

pub const PCGR_DIR_ARG: &str = "pcgr_dir";
pub const INPUT_VCF_ARG: &str = "input_vcf";
pub const INPUT_CNA_ARG: &str = "input_cna_segments";
pub const OUTPUT_DIR_ARG: &str = "output-dir";
pub const CONFIG_ARG: &str = "config";
pub const VERBOSE_ARG: &str = "verbose";

pub fn create_check_input_cli(bin_name: &'static str, version: &'static str) -> Command {
    Command::new(bin_name)
        .bin_name(bin_name)
        .version(version)
        .about("Verify input data for PCGR")
        .arg(
            Arg::new(PCGR_DIR_ARG)
                .required(true)
                .help("PCGR base directory with accompanying data directory, e.g. /data"),
        )
        .arg(
            Arg::new(INPUT_VCF_ARG)
                .required(true)
                .help("VCF input file with somatic query variants (SNVs/InDels), or None"),
        )
        .arg(
            Arg::new(INPUT_CNA_ARG)
                .required(true)
                .help("Somatic copy number query segments (tab-separated values), or None"),
        )
        .arg(
            Arg::new(OUTPUT_DIR_ARG)
                .long(OUTPUT_DIR_ARG)
                .value_name("output_dir")
                .help("Directory for the sample-free VCF and validator report"),
        )
        .arg(
            Arg::new(CONFIG_ARG)
                .long(CONFIG_ARG)
                .value_name("config")
                .help("TOML file overriding the default run configuration"),
        )
        .arg(
            Arg::new(VERBOSE_ARG)
                .short('v')
                .long(VERBOSE_ARG)
                .action(ArgAction::SetTrue)
                .help("Log debug messages"),
        )
}
