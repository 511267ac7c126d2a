/// Binary entrypoint for the `bsdgen` executable.
///
/// Keeps the binary thin — all business logic lives in the `bsdgen_lib` crate so
/// unit tests can import library functions directly.
fn main() {
    bsdgen_lib::run();
}
