use argbind::{Config, Record};

#[derive(Debug, Default, Record)]
struct Parameters {
    name: String,
    count: u8,
    #[argbind(rename = "v")]
    verbose: bool,
    ratio: f32,
}

fn main() {
    match Parameters::from_env(&Config::default()) {
        Ok(parameters) => {
            if parameters.verbose {
                println!("{parameters:?}");
            }

            for _ in 0..parameters.count {
                println!("Hello {} ({}).", parameters.name, parameters.ratio);
            }
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}
