fn main() {
    multiversx_sc_meta_lib::cli_main::<consumer_mock::AbiProvider>();
}
