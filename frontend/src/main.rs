use sitelocale_frontend::helpers::prelude::*;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    Events::on_dom_ready(sitelocale_frontend::start);
}
