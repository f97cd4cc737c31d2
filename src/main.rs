mod client;
mod model;

use client::App;

fn main() {
    dioxus::launch(App);
}
