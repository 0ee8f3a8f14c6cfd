use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let res = procroot::app::run();
    if let Err(err) = res {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
