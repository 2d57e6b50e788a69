fn main() {
    multiversx_sc_meta_lib::cli_main::<price_oracle_mock::AbiProvider>();
}
