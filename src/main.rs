use image_matrix_mgr::utils::log_utils::Logger;
use image_matrix_mgr::{args, output, run_app};

fn main() {
    // Parse command-line arguments
    let args = args::args_checks();
    let logger = Logger::new(args.verbose);

    // Run the discovery pipeline
    match run_app(&args, &logger) {
        Ok(outcome) => {
            if args.strict() && outcome.strict_failures() {
                output::print_failure_summary(&outcome);
                std::process::exit(2);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
