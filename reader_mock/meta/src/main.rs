fn main() {
    multiversx_sc_meta_lib::cli_main::<reader_mock::AbiProvider>();
}
