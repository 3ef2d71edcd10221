use invasion::LaunchOptions;

fn main() {
    env_logger::init();

    let options = match LaunchOptions::from_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}\nUsage: invasion [always|never|early|<level>]");
            std::process::exit(1);
        }
    };
    log::info!("Mirror policy: {:?}", options.mirror);

    if let Err(e) = invasion::run(options) {
        log::error!("Alien Invasion stopped: {e:#}");
        std::process::exit(1);
    }
}
