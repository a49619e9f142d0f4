/// Binary entrypoint for the `genlaunch` executable.
///
/// Keeps the binary thin — all launcher logic lives in the `genlaunch_lib`
/// crate so unit tests can import library functions directly.
fn main() {
    genlaunch_lib::run();
}
