fn main() {
    multiversx_sc_meta_lib::cli_main::<ltv_oracle::AbiProvider>();
}
