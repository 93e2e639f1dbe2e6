use log::info;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    info!("Starting Accounts frontend: initializing runtime config");

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async {
        accounts_frontend::config::init().await;
        info!("Runtime config initialized");
        accounts_frontend::router::mount_app();
    });
}
