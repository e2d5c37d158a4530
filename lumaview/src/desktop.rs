#![windows_subsystem = "windows"]

#[tokio::main]
async fn main() {
    extern crate lumaview;

    lumaview::desktop_main().await;
}
