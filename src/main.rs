use log::{error, info};
use sales_report::{Config, generator};

fn main() {
    env_logger::init();
    let mut args = std::env::args().skip(1).peekable();
    let generate = args.next_if(|arg| arg == "generate").is_some();
    let config = args.next().map(Config::new).unwrap_or_default();

    let result = if generate {
        generator::generate_sample_data(&config, &mut rand::rng())
            .map(|()| "Test files generated successfully!".to_string())
    } else {
        sales_report::run(&config).map(|summary| {
            info!("Run finished: {:?}", summary);
            "Reports generated successfully!".to_string()
        })
    };

    match result {
        Ok(message) => println!("{}", message),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error processing files: {}", e);
            std::process::exit(1);
        }
    }
}
