use clap::Parser;

fn main() {
    let args = hexconv::arguments::Arguments::parse();
    observe::tracing::initialize(&observe::Config::new(&args.log_filter, args.log_json));
    tracing::debug!("running hexconv with validated arguments:\n{}", args);
    match hexconv::run(args.command) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            tracing::error!(?err, "conversion failed");
            std::process::exit(1);
        }
    }
}
