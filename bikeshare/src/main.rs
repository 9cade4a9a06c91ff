use bikeshare::app::BikeshareApp;
use bikeshare_core::model::BikeshareError;
use clap::Parser;

fn main() -> Result<(), BikeshareError> {
    env_logger::init();
    let args = BikeshareApp::parse();
    args.run()
}
