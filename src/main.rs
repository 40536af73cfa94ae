//! edshim - editor launch forwarding shim
//!
//! This is the binary entry point. All logic lives in the library.
//!
//! The host application invokes this binary the way it would invoke the
//! reference editor and only observes the exit code and stderr, so every
//! failure path ends in a readable diagnostic line and a distinct
//! nonzero exit code — never a panic.

fn main() {
    edshim_core::logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match editor_shim::run(&args) {
        Ok(_) => std::process::exit(0),
        Err(err) => {
            eprintln!("edshim: {}", err);
            if err.is_usage() {
                eprintln!("usage: edshim <path>");
                eprintln!("       edshim <projectDir> -g <path>[:<line>[:<column>]]");
            }
            std::process::exit(err.exit_code());
        }
    }
}
