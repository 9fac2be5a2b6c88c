use kash::config::Config;
use kash::error::ShellError;
use kash::process::signal;
use kash::shell::Shell;

fn main() {
    let config = Config::from_env();
    kash::logging::init(&config);

    let code = match run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("kash: {}", e);
            1
        }
    };
    std::process::exit(code);
}

fn run(config: &Config) -> Result<i32, ShellError> {
    if config.interactive {
        signal::setup_signal_handlers()?;
    }

    let mut shell = Shell::new(config)?;
    shell.run()
}
